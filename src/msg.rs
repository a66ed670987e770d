pub mod update;

#[derive(PartialEq, Eq, Debug)]
pub enum Message {
    /// Quit application
    Quit,
    /// Reload the config file and rebuild the list
    Refresh,
    /// Move one row up
    MoveUp,
    /// Move one row down
    MoveDown,
    /// Move cursor to the first row
    MoveToTop,
    /// Move cursor to the last row
    MoveToBottom,
    /// Select the row under the cursor: toggles headers, reports rows
    Select,
    /// Collapse every collapsible section
    CollapseAll,
    /// Expand every collapsible section
    ExpandAll,
    /// Bring the viewport to the cursor after the cursor moved
    ScrollToCursor,
}

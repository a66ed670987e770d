use std::fs;

use collapsible_table::config::{Config, ConfigError};
use collapsible_table::model::Model;
use collapsible_table::msg::Message;
use collapsible_table::msg::update::update;
use collapsible_table::table::SizeProvider;
use tempfile::NamedTempFile;

const TWO_SECTIONS: &str = r#"
theme = "catppuccin-mocha"
start_collapsed = true

[[sections]]
title = "Inbox"
[[sections.subsections]]
title = "Today"
rows = 2
[[sections.subsections]]
title = "Yesterday"
rows = 3

[[sections]]
title = "Archive"
[[sections.subsections]]
title = "2024"
rows = 4
"#;

#[test]
fn test_load_from_path() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), TWO_SECTIONS).unwrap();

    let config = Config::load_from_path(file.path()).unwrap();

    assert!(config.start_collapsed);
    let layout = config.layout();
    assert_eq!(layout.section_count(), 2);
    assert_eq!(layout.row_count(0, 1), 3);
}

#[test]
fn test_load_from_missing_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_path(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_malformed_file_fails() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "sections = 3").unwrap();

    let err = Config::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_model_starts_collapsed() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), TWO_SECTIONS).unwrap();
    let config = Config::load_from_path(file.path()).unwrap();

    let model = Model::new(&config, Some(file.path().to_path_buf())).unwrap();

    // Title, 2 headers, separator, title, 1 header
    assert_eq!(model.ui_model.lines.len(), 6);
    assert_eq!(model.ui_model.cursor_position, 1);
    assert_eq!(model.table.state().len(), 3);
}

#[test]
fn test_refresh_reloads_layout_and_prunes_state() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), TWO_SECTIONS).unwrap();
    let config = Config::load_from_path(file.path()).unwrap();
    let mut model = Model::new(&config, Some(file.path().to_path_buf())).unwrap();

    fs::write(
        file.path(),
        r#"
[[sections]]
[[sections.subsections]]
title = "Only"
rows = 2
"#,
    )
    .unwrap();
    update(&mut model, Message::Refresh);

    assert_eq!(model.message, None);
    assert_eq!(model.table.section_count(), 1);
    // (0, 0) stays collapsed, the other sections are gone
    assert_eq!(model.table.state().len(), 1);
    assert_eq!(model.ui_model.lines.len(), 1);
    assert_eq!(model.ui_model.cursor_position, 0);
}

#[test]
fn test_refresh_reports_broken_config() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), TWO_SECTIONS).unwrap();
    let config = Config::load_from_path(file.path()).unwrap();
    let mut model = Model::new(&config, Some(file.path().to_path_buf())).unwrap();
    let lines = model.ui_model.lines.clone();

    fs::write(file.path(), "not = [valid").unwrap();
    update(&mut model, Message::Refresh);

    assert!(model.message.is_some());
    assert_eq!(model.ui_model.lines, lines);
}

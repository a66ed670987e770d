//! Collapsible sections for list views.
//!
//! The [`table`] module is the library proper: it maps flat list rows to
//! collapsible sections and back, and reports the rows to insert or remove
//! when a section is toggled. The remaining modules make up a terminal
//! demo that drives it.

pub mod config;
pub mod demo;
pub mod errors;
pub mod keys;
pub mod model;
pub mod msg;
pub mod table;
pub mod view;

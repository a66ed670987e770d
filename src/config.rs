#[allow(clippy::module_inception)]
mod config;
mod theme;

pub use config::{Config, ConfigError};
pub use theme::Theme;

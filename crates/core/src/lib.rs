pub mod config;
pub mod content;
pub mod error;
pub mod theme;
pub mod types;

pub use config::parse_site_toml;
pub use content::load_projects;
pub use error::{Error, Result};
pub use theme::{ThemePreference, ThemeSelector, ThemeStorage};
pub use types::*;

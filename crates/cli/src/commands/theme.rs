use anyhow::{Context, Result};
use folio_core::ThemePreference;
use folio_core::theme::{FileStorage, RootAttributes, ThemeSelector};
use std::path::PathBuf;

use crate::SystemAppearance;

/// Default preferences file: ~/.folio/preferences.toml
fn default_storage_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Could not determine home directory")?;
    Ok(PathBuf::from(home).join(".folio").join("preferences.toml"))
}

fn system_prefers_dark(system: Option<SystemAppearance>) -> bool {
    match system {
        Some(SystemAppearance::Dark) => true,
        Some(SystemAppearance::Light) => false,
        None => matches!(dark_light::detect(), dark_light::Mode::Dark),
    }
}

/// Show the active theme, or select and persist a new one
pub fn run(
    theme: Option<ThemePreference>,
    system: Option<SystemAppearance>,
    storage: Option<PathBuf>,
) -> Result<()> {
    let storage_path = match storage {
        Some(path) => path,
        None => default_storage_path()?,
    };

    let prefers_dark = system_prefers_dark(system);
    let mut selector = ThemeSelector::initialize(FileStorage::new(&storage_path), prefers_dark);
    let mut root = RootAttributes::default();

    match theme {
        Some(theme) => {
            selector.select(theme, &mut root).with_context(|| {
                format!("Failed to save theme to {}", storage_path.display())
            })?;
            println!("✓ Theme set to {}", theme);
            println!("  Saved to: {}", storage_path.display());
        }
        None => {
            println!("Theme: {}", selector.current());
        }
    }

    let attributes = selector.current().attributes();
    println!("  class: {}", attributes.class.unwrap_or("(none)"));
    println!("  data-theme: {}", attributes.data_theme);

    Ok(())
}

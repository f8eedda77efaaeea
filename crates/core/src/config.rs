use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    #[serde(default)]
    stars: Option<RawStars>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    title: String,
    description: String,
    url: String,
    github_username: String,
    content_dir: Option<String>, // Convert to PathBuf
}

#[derive(Debug, Deserialize)]
struct RawStars {
    api_base: Option<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.site.github_username.trim().is_empty() {
        return Err(Error::ConfigParse(
            "site.github_username must not be empty".to_string(),
        ));
    }

    let content_dir = match raw.site.content_dir {
        Some(dir) => validate_path(&dir, "site.content_dir")?,
        None => PathBuf::from("content"),
    };

    let stars = match raw.stars.and_then(|s| s.api_base) {
        Some(api_base) => StarsConfig {
            api_base: api_base.trim_end_matches('/').to_string(),
        },
        None => StarsConfig::default(),
    };

    Ok(Site {
        metadata: SiteMetadata {
            title: raw.site.title,
            description: raw.site.description,
            url: raw.site.url,
            github_username: raw.site.github_username,
        },
        content_dir,
        stars,
    })
}

/// Check a site-relative directory from site.toml.
///
/// Only plain and `.` components are accepted, so the build can never be
/// pointed outside the site directory.
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!("{} is empty", field_name)));
    }

    let path = PathBuf::from(path_str);
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(Error::ConfigParse(format!(
                    "{} '{}' escapes the site directory",
                    field_name, path_str
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::ConfigParse(format!(
                    "{} '{}' must be relative to the site directory",
                    field_name, path_str
                )));
            }
        }
    }

    Ok(path)
}

pub mod build;
pub mod init;
pub mod projects;
pub mod stars;
pub mod theme;
pub mod validate;

use anyhow::{Context, Result};
use folio_core::{ProjectContent, ProjectRecord, Site, load_projects, parse_site_toml};
use std::path::Path;

/// Load site.toml and the project collection from a site directory
pub fn load_site(path: &Path) -> Result<(Site, Vec<ProjectContent>)> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'folio init {}' first",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'folio init {}' first",
            path.display(),
            path.display()
        );
    }

    let site = parse_site_toml(&site_toml_path).context("Failed to parse site.toml")?;
    let projects = load_projects(path.join(&site.content_dir))
        .context("Failed to load project content")?;

    Ok((site, projects))
}

pub fn project_records(contents: &[ProjectContent]) -> Vec<ProjectRecord> {
    contents.iter().map(|c| c.record.clone()).collect()
}

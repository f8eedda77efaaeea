use anyhow::{Context, Result};
use folio_core::EnrichedProjectRecord;
use folio_stars::{GitHubClient, enrich_and_sort};
use std::path::PathBuf;
use std::sync::Arc;

use super::{load_site, project_records};

/// Print projects with their star counts, most popular first
pub async fn run(path: PathBuf) -> Result<()> {
    let (site, contents) = load_site(&path)?;
    let client = GitHubClient::new(&site.stars.api_base).context("Failed to create HTTP client")?;

    let enriched = enrich_and_sort(
        Arc::new(client),
        &site.metadata.github_username,
        &project_records(&contents),
    )
    .await;

    if enriched.is_empty() {
        println!("No projects found in {}", path.join(&site.content_dir).join("projects").display());
        return Ok(());
    }

    for line in format_rows(&enriched) {
        println!("{}", line);
    }
    Ok(())
}

fn format_rows(enriched: &[EnrichedProjectRecord]) -> Vec<String> {
    let width = enriched
        .iter()
        .map(|e| e.project.title.chars().count())
        .max()
        .unwrap_or(0);

    enriched
        .iter()
        .map(|e| {
            let description = e.project.description.as_deref().unwrap_or("");
            format!(
                "{:>7} ★  {:<width$}  {}",
                e.star_count,
                e.project.title,
                description,
                width = width
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

use anyhow::{Context, Result};
use folio_generator::{GeneratedSite, generate_site};
use folio_stars::{GitHubClient, enrich_and_sort};
use folio_validator::validate_site;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{load_site, project_records};

/// Build the projects section into `output`
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let (site, contents) = load_site(&path)?;

    let report = validate_site(&site, &contents);
    for warning in &report.warnings {
        eprintln!("   ⚠ Warning: {}", warning);
    }
    if !report.is_ok() {
        anyhow::bail!("Validation failed:\n  {}", report.errors.join("\n  "));
    }

    println!("✓ Loaded: {}", site.metadata.title);
    println!("  Projects: {}", contents.len());
    println!();

    println!("⭐ Fetching star counts...");
    let client = GitHubClient::new(&site.stars.api_base).context("Failed to create HTTP client")?;
    let enriched = enrich_and_sort(
        Arc::new(client),
        &site.metadata.github_username,
        &project_records(&contents),
    )
    .await;
    println!("   ✓ Resolved {} projects", enriched.len());

    println!("📄 Rendering pages...");
    let generated = generate_site(&site, &contents, &enriched);
    let written = write_site(&output, &generated)?;
    println!("   ✓ Wrote {} files", written);

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Write generated pages and assets under `output`, returning the file count
fn write_site(output: &Path, generated: &GeneratedSite) -> Result<usize> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let mut written = 0;
    let files = generated
        .pages
        .iter()
        .map(|(path, html)| (path, html.as_bytes()))
        .chain(
            generated
                .assets
                .iter()
                .map(|(path, data)| (path, data.as_slice())),
        );

    for (relative, data) in files {
        let dst = output.join(relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&dst, data).with_context(|| format!("Failed to write {}", dst.display()))?;
        tracing::info!(path = %dst.display(), "wrote");
        written += 1;
    }

    Ok(written)
}

use folio_validator::validate_site;
use std::path::PathBuf;

use super::load_site;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let (site, projects) = load_site(&path)?;
    println!("✓ site.toml valid");
    println!("  Site: {} ({})", site.metadata.title, site.metadata.url);

    let report = validate_site(&site, &projects);
    for info in &report.info {
        println!("  {}", info);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        println!("✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("{} validation error(s)", report.errors.len());
    }

    println!("✓ content valid");
    Ok(())
}

use anyhow::{Context, Result};
use folio_stars::{GitHubClient, fetch_star_count};

pub async fn run(repo: String, api_base: String) -> Result<()> {
    let client = GitHubClient::new(&api_base).context("Failed to create HTTP client")?;
    let stars = fetch_star_count(&client, &repo).await;
    println!("{} ★ {}", repo, stars);
    Ok(())
}

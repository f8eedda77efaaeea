//! Repository star counts for the project list.
//!
//! [`fetch_star_count`] looks up one repository and never fails: any error
//! is logged and reported as 0. [`enrich_and_sort`] resolves a star count for
//! every project concurrently and orders the result by popularity.

pub mod enrich;
pub mod error;
pub mod github;

#[cfg(test)]
mod test_support;

use async_trait::async_trait;

pub use enrich::enrich_and_sort;
pub use error::FetchError;
pub use github::GitHubClient;

/// A remote service that knows how many stars a repository has
#[async_trait]
pub trait StarSource: Send + Sync {
    /// Look up `repo` (`owner/name`)
    async fn stargazers(&self, repo: &str) -> Result<u64, FetchError>;
}

/// Star count for `repo`, or 0 when it cannot be determined.
///
/// One request per call, no caching.
pub async fn fetch_star_count(source: &dyn StarSource, repo: &str) -> u64 {
    match source.stargazers(repo).await {
        Ok(stars) => stars,
        Err(err) => {
            tracing::warn!(repo, "Unable to fetch stars for {}: {}", repo, err);
            0
        }
    }
}

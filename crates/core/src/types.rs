use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub metadata: SiteMetadata,
    /// Directory holding the content collections, relative to the site root
    pub content_dir: PathBuf,
    pub stars: StarsConfig,
}

/// Site metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Owner used for star lookups and repository links
    pub github_username: String,
}

/// Star lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarsConfig {
    pub api_base: String,
}

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// A project as supplied by the content collection.
///
/// `title` doubles as the repository name when looking up stars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
}

impl ProjectRecord {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: None,
            stars: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stars(mut self, stars: u64) -> Self {
        self.stars = Some(stars);
        self
    }

    /// Repository identifier used for the star lookup
    pub fn repo_identifier(&self, owner: &str) -> String {
        format!("{}/{}", owner, self.title)
    }
}

/// A project paired with its resolved star count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProjectRecord {
    pub project: ProjectRecord,
    pub star_count: u64,
}

/// A project loaded from `content/projects/<slug>.md`
#[derive(Debug, Clone)]
pub struct ProjectContent {
    pub record: ProjectRecord,
    /// Repository name as written in the front matter
    pub repo: String,
    /// Markdown body after the front matter
    pub body: String,
    pub source: PathBuf,
}

/// Get a URL-safe slug from a title
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(char::is_whitespace, "-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

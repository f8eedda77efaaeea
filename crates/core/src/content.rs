//! Project content collection.
//!
//! Each project lives in `<content_dir>/projects/<slug>.md` and starts with
//! a TOML front matter block fenced by `+++` lines:
//!
//! ```text
//! +++
//! title = "jqp"
//! description = "A TUI playground for jq"
//! repo = "jqp"
//! +++
//!
//! Markdown body...
//! ```

use crate::error::{Error, Result};
use crate::types::{ProjectContent, ProjectRecord};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const FENCE: &str = "+++";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrontMatter {
    title: String,
    description: Option<String>,
    repo: String,
    stars: Option<u64>,
}

/// Load every project in `<content_dir>/projects`, ordered by slug.
///
/// A missing projects directory yields an empty collection.
pub fn load_projects<P: AsRef<Path>>(content_dir: P) -> Result<Vec<ProjectContent>> {
    let projects_dir = content_dir.as_ref().join("projects");
    if !projects_dir.exists() {
        tracing::debug!(dir = %projects_dir.display(), "no projects directory");
        return Ok(Vec::new());
    }

    let mut projects = Vec::new();
    for entry in WalkDir::new(&projects_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::InvalidData(e.to_string()))?;
        let path = entry.path();
        let is_markdown = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !entry.file_type().is_file() || !is_markdown {
            continue;
        }
        projects.push(load_project(path)?);
    }

    Ok(projects)
}

/// Load a single project file; the slug is the file stem
pub fn load_project(path: &Path) -> Result<ProjectContent> {
    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::InvalidData(format!("Invalid file name: {}", path.display())))?
        .to_string();

    let text = fs::read_to_string(path)?;
    parse_project_str(&slug, &text).map_err(|err| match err {
        Error::ContentParse { message, .. } => Error::ContentParse {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })
    .map(|mut content| {
        content.source = path.to_path_buf();
        content
    })
}

/// Parse a project document (front matter plus markdown body)
pub fn parse_project_str(slug: &str, text: &str) -> Result<ProjectContent> {
    let (front_matter, body) = split_front_matter(text).ok_or_else(|| Error::ContentParse {
        path: slug.to_string(),
        message: "missing `+++` front matter block".to_string(),
    })?;

    let raw: RawFrontMatter = toml::from_str(front_matter).map_err(|e| Error::ContentParse {
        path: slug.to_string(),
        message: e.to_string(),
    })?;

    Ok(ProjectContent {
        record: ProjectRecord {
            slug: slug.to_string(),
            title: raw.title,
            description: raw.description,
            stars: raw.stars,
        },
        repo: raw.repo,
        body: body.trim_start_matches(['\r', '\n']).to_string(),
        source: Default::default(),
    })
}

/// Split `+++`-fenced front matter from the body
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start_matches('\u{feff}');
    let rest = text.strip_prefix(FENCE)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let front_matter = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((front_matter, body));
        }
        offset += line.len();
    }
    None
}

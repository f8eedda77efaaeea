use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Escape a string for a TOML basic string
///
/// The template is written by hand so it can carry comments, which
/// `toml::to_string` would drop. Control characters without a short escape
/// are written as `\uXXXX`.
fn toml_escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Scaffold a site directory with `site.toml` and an example project
pub async fn run(
    path: PathBuf,
    github_username: Option<String>,
    title: Option<String>,
) -> Result<()> {
    println!("📁 Initializing site at: {}", path.display());

    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!("site.toml already exists in {}", path.display());
    }

    let github_username = github_username.unwrap_or_else(|| "your-github-username".to_string());
    let title = title.unwrap_or_else(|| default_title(&path));

    create_directory_structure(&path)?;
    fs::write(&site_toml_path, generate_site_toml(&title, &github_username))
        .context("Failed to write site.toml")?;
    println!("   ✓ Created site.toml");

    let example = path.join("content").join("projects").join("example.md");
    if !example.exists() {
        fs::write(&example, generate_example_project()).context("Failed to write example project")?;
        println!("   ✓ Created content/projects/example.md");
    }

    println!();
    println!("Next steps:");
    println!("   1. Edit site.toml");
    println!("   2. Add projects under content/projects/");
    println!("   3. Run 'folio build {} -o dist'", path.display());

    Ok(())
}

fn default_title(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "My Site".to_string())
}

fn create_directory_structure(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join("content").join("projects"))
        .context("Failed to create content/projects")?;
    Ok(())
}

fn generate_site_toml(title: &str, github_username: &str) -> String {
    format!(
        r#"[site]
title = "{title}"
description = "Blog and projects"
url = "https://example.com"
# Owner of the repositories listed under content/projects
github_username = "{username}"
# content_dir = "content"

# [stars]
# api_base = "https://api.github.com"
"#,
        title = toml_escape_string(title),
        username = toml_escape_string(github_username),
    )
}

fn generate_example_project() -> &'static str {
    r#"+++
# The title is also the repository name used to look up stars
title = "example"
description = "An example project"
repo = "example"
# stars = 42  # pin a count instead of asking GitHub
+++

## About

Describe the project here.
"#
}

// Static rendering of the project list, project pages and theme script

pub mod components;
pub mod markdown;

use folio_core::{EnrichedProjectRecord, ProjectContent, Site};
use std::collections::HashMap;

use components::{html_escape, render_page, render_project_grid, render_repo_link, theme_script};
use markdown::render_markdown;

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

/// Render the projects section from already-enriched records.
///
/// `enriched` decides page order and star counts; `contents` supplies the
/// markdown body for each slug. An enriched record without content still gets
/// a page, just without a body.
pub fn generate_site(
    site: &Site,
    contents: &[ProjectContent],
    enriched: &[EnrichedProjectRecord],
) -> GeneratedSite {
    let owner = &site.metadata.github_username;
    let bodies: HashMap<&str, &str> = contents
        .iter()
        .map(|c| (c.record.slug.as_str(), c.body.as_str()))
        .collect();

    let mut pages = Vec::with_capacity(enriched.len() + 1);

    let index = format!(
        "<section class=\"projects\">\n<h1>projects</h1>\n{}\n</section>",
        render_project_grid(owner, enriched)
    );
    pages.push((
        "projects/index.html".to_string(),
        render_page(&site.metadata, "Projects", &index),
    ));

    for record in enriched {
        let project = &record.project;
        let body = bodies
            .get(project.slug.as_str())
            .map(|md| render_markdown(md))
            .unwrap_or_default();
        let description = project
            .description
            .as_deref()
            .map(|d| format!("<p class=\"project-description\">{}</p>\n", html_escape(d)))
            .unwrap_or_default();

        let content = format!(
            "<article class=\"project\">\n<h1>{}</h1>\n{}{}\n<div class=\"project-body\">\n{}</div>\n</article>",
            html_escape(&project.title),
            description,
            render_repo_link(owner, &project.title, record.star_count),
            body
        );

        tracing::debug!(slug = %project.slug, "rendered project page");
        pages.push((
            format!("projects/{}/index.html", project.slug),
            render_page(&site.metadata, &project.title, &content),
        ));
    }

    GeneratedSite {
        pages,
        assets: vec![("theme.js".to_string(), theme_script().into_bytes())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ProjectRecord, SiteMetadata, StarsConfig};
    use std::path::PathBuf;

    fn site() -> Site {
        Site {
            metadata: SiteMetadata {
                title: "Noah Gorstein".to_string(),
                description: "Blog and projects".to_string(),
                url: "https://noahgorstein.com".to_string(),
                github_username: "noahgorstein".to_string(),
            },
            content_dir: PathBuf::from("content"),
            stars: StarsConfig::default(),
        }
    }

    fn content(slug: &str, body: &str) -> ProjectContent {
        ProjectContent {
            record: ProjectRecord::new(slug, slug),
            repo: slug.to_string(),
            body: body.to_string(),
            source: PathBuf::from(format!("content/projects/{}.md", slug)),
        }
    }

    fn enriched(slug: &str, star_count: u64) -> EnrichedProjectRecord {
        EnrichedProjectRecord {
            project: ProjectRecord::new(slug, slug).with_description("about"),
            star_count,
        }
    }

    #[test]
    fn test_generate_site_pages_and_assets() {
        let generated = generate_site(
            &site(),
            &[content("jqp", "## Features\n"), content("stree", "")],
            &[enriched("jqp", 2100), enriched("stree", 450)],
        );

        let paths: Vec<_> = generated.pages.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "projects/index.html",
                "projects/jqp/index.html",
                "projects/stree/index.html"
            ]
        );
        assert_eq!(generated.assets.len(), 1);
        assert_eq!(generated.assets[0].0, "theme.js");

        let jqp_page = &generated.pages[1].1;
        assert!(jqp_page.contains(r#"<h2 id="features">Features</h2>"#));
        assert!(jqp_page.contains(r#"<span class="repo-stars">2100"#));
        assert!(jqp_page.contains("<title>jqp | Noah Gorstein</title>"));
    }

    #[test]
    fn test_index_follows_enriched_order() {
        let generated = generate_site(
            &site(),
            &[],
            &[enriched("b", 9), enriched("a", 1)],
        );
        let index = &generated.pages[0].1;
        assert!(index.find(r#"data-slug="b""#).unwrap() < index.find(r#"data-slug="a""#).unwrap());
    }

    #[test]
    fn test_project_without_content_has_empty_body() {
        let generated = generate_site(&site(), &[], &[enriched("solo", 0)]);
        let page = &generated.pages[1].1;
        assert!(page.contains("<div class=\"project-body\">\n</div>"));
    }
}

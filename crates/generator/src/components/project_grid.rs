use folio_core::EnrichedProjectRecord;

use super::{html_escape, render_repo_link};

/// Project cards in the order given, each with its repository badge.
///
/// An empty slice renders an empty list.
pub fn render_project_grid(owner: &str, projects: &[EnrichedProjectRecord]) -> String {
    let cards: String = projects
        .iter()
        .map(|enriched| {
            let project = &enriched.project;
            let slug = html_escape(&project.slug);
            let title = html_escape(&project.title);
            let description = project
                .description
                .as_deref()
                .map(html_escape)
                .unwrap_or_default();

            format!(
                r#"
    <li class="project-card" data-slug="{}" data-stars="{}">
        <a class="project-link" href="/projects/{}/">
            <span class="project-title">{}</span>
            <p class="project-description">{}</p>
        </a>
        {}
    </li>"#,
                slug,
                enriched.star_count,
                slug,
                title,
                description,
                render_repo_link(owner, &project.title, enriched.star_count)
            )
        })
        .collect();

    format!(r#"<ul class="project-grid">{}</ul>"#, cards)
}

// Checks run over site.toml and the project collection before a build

use folio_core::{ProjectContent, Site};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_site(site: &Site, projects: &[ProjectContent]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !site.metadata.url.starts_with("http://") && !site.metadata.url.starts_with("https://") {
        report
            .warnings
            .push(format!("site.url '{}' is not an http(s) URL", site.metadata.url));
    }

    let mut slugs: HashMap<&str, usize> = HashMap::new();
    for project in projects {
        *slugs.entry(project.record.slug.as_str()).or_insert(0) += 1;
    }
    let mut duplicates: Vec<&str> = slugs
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(slug, _)| *slug)
        .collect();
    duplicates.sort_unstable();
    for slug in duplicates {
        report
            .errors
            .push(format!("Duplicate project slug '{}'", slug));
    }

    let mut known_stars = 0;
    for project in projects {
        let record = &project.record;
        let name = project.source.display();

        if record.title.trim().is_empty() {
            report.errors.push(format!("{}: title is empty", name));
        }

        let repo_name = project.repo.rsplit('/').next().unwrap_or_default();
        if project.repo.trim().is_empty()
            || project.repo.split('/').count() > 2
            || repo_name.is_empty()
        {
            report.errors.push(format!(
                "{}: repo '{}' must be 'name' or 'owner/name'",
                name, project.repo
            ));
        } else if repo_name != record.title {
            report.warnings.push(format!(
                "{}: repo '{}' differs from title '{}'; stars are looked up by title",
                name, project.repo, record.title
            ));
        }

        if record.description.is_none() {
            report
                .warnings
                .push(format!("{}: no description", name));
        }

        if record.stars.is_some() {
            known_stars += 1;
        }
    }

    report.info.push(format!("{} projects", projects.len()));
    report.info.push(format!(
        "{} with a pinned star count, {} looked up on GitHub",
        known_stars,
        projects.len() - known_stars
    ));

    report
}

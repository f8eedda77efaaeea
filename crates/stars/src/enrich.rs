use folio_core::{EnrichedProjectRecord, ProjectRecord};
use futures::future::join_all;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::{StarSource, fetch_star_count};

/// Resolve a star count for every project and sort by stars, descending.
///
/// Projects that already carry a count keep it and are never looked up. The
/// rest are fetched as `{owner}/{title}`, all at once on separate tasks, and
/// the call returns only after every lookup has settled. A lookup task that
/// panics resolves to 0 without disturbing the others. Ties keep no
/// particular order.
pub async fn enrich_and_sort(
    source: Arc<dyn StarSource>,
    owner: &str,
    projects: &[ProjectRecord],
) -> Vec<EnrichedProjectRecord> {
    let lookups: Vec<Option<JoinHandle<u64>>> = projects
        .iter()
        .map(|project| {
            if project.stars.is_some() {
                return None;
            }
            let source = Arc::clone(&source);
            let repo = project.repo_identifier(owner);
            Some(tokio::spawn(async move {
                fetch_star_count(source.as_ref(), &repo).await
            }))
        })
        .collect();

    tracing::debug!(
        total = projects.len(),
        fetching = lookups.iter().filter(|l| l.is_some()).count(),
        "enriching projects"
    );

    let settled = join_all(lookups.into_iter().map(|lookup| async move {
        match lookup {
            Some(handle) => Some(handle.await),
            None => None,
        }
    }))
    .await;

    let mut enriched: Vec<EnrichedProjectRecord> = projects
        .iter()
        .zip(settled)
        .map(|(project, outcome)| {
            let star_count = match (project.stars, outcome) {
                (Some(stars), _) => stars,
                (None, Some(Ok(stars))) => stars,
                (None, Some(Err(err))) => {
                    tracing::warn!(
                        "star lookup for {} did not complete: {}",
                        project.repo_identifier(owner),
                        err
                    );
                    0
                }
                (None, None) => 0,
            };
            EnrichedProjectRecord {
                project: project.clone(),
                star_count,
            }
        })
        .collect();

    enriched.sort_by(|a, b| b.star_count.cmp(&a.star_count));
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::github::GitHubClient;
    use crate::test_support::{RecordingSource, spawn_fake_github};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Barrier;
    use tracing_test::traced_test;

    fn titles(enriched: &[EnrichedProjectRecord]) -> Vec<&str> {
        enriched.iter().map(|e| e.project.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_known_count_skips_lookup() {
        let source = Arc::new(RecordingSource::new(&[]));
        let projects = vec![ProjectRecord::new("a", "a").with_stars(5)];

        let enriched = enrich_and_sort(source.clone(), "noahgorstein", &projects).await;

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].project.title, "a");
        assert_eq!(enriched[0].star_count, 5);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetched_and_known_are_sorted_together() {
        let source = Arc::new(RecordingSource::new(&[("noahgorstein/x", 3)]));
        let projects = vec![
            ProjectRecord::new("x", "x"),
            ProjectRecord::new("y", "y").with_stars(10),
        ];

        let enriched = enrich_and_sort(source.clone(), "noahgorstein", &projects).await;

        assert_eq!(titles(&enriched), vec!["y", "x"]);
        assert_eq!(enriched[0].star_count, 10);
        assert_eq!(enriched[1].star_count, 3);
        assert_eq!(source.calls(), vec!["noahgorstein/x"]);
    }

    #[tokio::test]
    async fn test_input_records_untouched() {
        let source = Arc::new(RecordingSource::new(&[("me/x", 7)]));
        let projects = vec![ProjectRecord::new("x", "x").with_description("desc")];

        let enriched = enrich_and_sort(source, "me", &projects).await;

        assert_eq!(projects[0].stars, None);
        assert_eq!(enriched[0].project, projects[0]);
        assert_eq!(enriched[0].star_count, 7);
    }

    #[tokio::test]
    async fn test_output_is_complete_and_non_increasing() {
        let source = Arc::new(RecordingSource::new(&[
            ("me/p0", 4),
            ("me/p2", 90),
            ("me/p3", 4),
            ("me/p5", 12),
        ]));
        let projects: Vec<ProjectRecord> = (0..7)
            .map(|i| {
                let name = format!("p{}", i);
                let project = ProjectRecord::new(name.clone(), name);
                if i == 4 { project.with_stars(50) } else { project }
            })
            .collect();

        let enriched = enrich_and_sort(source, "me", &projects).await;

        assert_eq!(enriched.len(), projects.len());
        let mut slugs: Vec<_> = enriched.iter().map(|e| e.project.slug.clone()).collect();
        slugs.sort();
        let mut expected: Vec<_> = projects.iter().map(|p| p.slug.clone()).collect();
        expected.sort();
        assert_eq!(slugs, expected);

        for pair in enriched.windows(2) {
            assert!(pair[0].star_count >= pair[1].star_count);
        }
        assert_eq!(enriched[0].star_count, 90);
        assert_eq!(enriched[1].star_count, 50);
        // p1 and p6 are unknown to the source
        assert_eq!(enriched.iter().filter(|e| e.star_count == 0).count(), 2);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let source = Arc::new(RecordingSource::new(&[]));
        assert!(enrich_and_sort(source, "me", &[]).await.is_empty());
    }

    /// Blocks every lookup until all of them have started
    struct BarrierSource {
        barrier: Barrier,
    }

    #[async_trait]
    impl StarSource for BarrierSource {
        async fn stargazers(&self, _repo: &str) -> Result<u64, FetchError> {
            self.barrier.wait().await;
            Ok(1)
        }
    }

    #[tokio::test]
    async fn test_lookups_run_concurrently() {
        let projects: Vec<ProjectRecord> = (0..5)
            .map(|i| ProjectRecord::new(format!("p{}", i), format!("p{}", i)))
            .collect();
        let source = Arc::new(BarrierSource {
            barrier: Barrier::new(projects.len()),
        });

        let enriched = tokio::time::timeout(
            Duration::from_secs(5),
            enrich_and_sort(source, "me", &projects),
        )
        .await
        .expect("lookups were not issued concurrently");

        assert!(enriched.iter().all(|e| e.star_count == 1));
    }

    struct PanickingSource;

    #[async_trait]
    impl StarSource for PanickingSource {
        async fn stargazers(&self, repo: &str) -> Result<u64, FetchError> {
            if repo.ends_with("/boom") {
                panic!("source exploded");
            }
            Ok(8)
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_panicking_lookup_does_not_abort_siblings() {
        let projects = vec![
            ProjectRecord::new("boom", "boom"),
            ProjectRecord::new("fine", "fine"),
            ProjectRecord::new("known", "known").with_stars(2),
        ];

        let enriched = enrich_and_sort(Arc::new(PanickingSource), "me", &projects).await;

        assert_eq!(titles(&enriched), vec!["fine", "known", "boom"]);
        assert_eq!(enriched[2].star_count, 0);
        assert!(logs_contain("star lookup for me/boom did not complete"));
    }

    #[tokio::test]
    async fn test_enrich_against_fake_github() {
        let server = spawn_fake_github().await;
        let client = Arc::new(GitHubClient::new(&server.base_url).unwrap());
        let projects = vec![
            ProjectRecord::new("stree", "stree"),
            ProjectRecord::new("gone", "missing"),
            ProjectRecord::new("jqp", "jqp"),
            ProjectRecord::new("pinned", "pinned").with_stars(1000),
        ];

        let enriched = enrich_and_sort(client, "noahgorstein", &projects).await;

        assert_eq!(titles(&enriched), vec!["jqp", "pinned", "stree", "missing"]);
        let counts: Vec<u64> = enriched.iter().map(|e| e.star_count).collect();
        assert_eq!(counts, vec![2100, 1000, 450, 0]);
        assert_eq!(server.hits.load(std::sync::atomic::Ordering::SeqCst), 3);
    }
}

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::StarSource;
use crate::error::FetchError;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated GitHub REST client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    api_base: String,
}

impl GitHubClient {
    /// Create a client against `api_base` (e.g. `https://api.github.com`)
    pub fn new(api_base: &str) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StarSource for GitHubClient {
    async fn stargazers(&self, repo: &str) -> Result<u64, FetchError> {
        let url = format!("{}/repos/{}", self.api_base, repo);
        tracing::debug!(%url, "fetching stars");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        parse_stargazers(&text)
    }
}

/// Extract `stargazers_count` from a repository response body
fn parse_stargazers(body: &str) -> Result<u64, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;

    value
        .get("stargazers_count")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            FetchError::MalformedBody("stargazers_count missing or not a count".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_base, spawn_fake_github};
    use std::sync::atomic::Ordering;

    #[test]
    fn test_parse_stargazers() {
        assert_eq!(parse_stargazers(r#"{"stargazers_count": 118}"#).unwrap(), 118);
        assert_eq!(parse_stargazers(r#"{"stargazers_count": 0, "name": "x"}"#).unwrap(), 0);
    }

    #[test]
    fn test_parse_stargazers_rejects_bad_shapes() {
        for body in [
            r#"{"name": "x"}"#,
            r#"{"stargazers_count": "12"}"#,
            r#"{"stargazers_count": -1}"#,
            r#"{"stargazers_count": 1.5}"#,
            r#"{"stargazers_count": null}"#,
            r#"[1, 2]"#,
            "not json",
        ] {
            assert!(
                matches!(parse_stargazers(body), Err(FetchError::MalformedBody(_))),
                "accepted {}",
                body
            );
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_in_api_base() {
        let server = spawn_fake_github().await;
        let client = GitHubClient::new(&format!("{}/", server.base_url)).unwrap();

        assert_eq!(client.stargazers("noahgorstein/stree").await.unwrap(), 450);
    }

    #[tokio::test]
    async fn test_stargazers_success() {
        let server = spawn_fake_github().await;
        let client = GitHubClient::new(&server.base_url).unwrap();

        assert_eq!(client.stargazers("noahgorstein/jqp").await.unwrap(), 2100);
        assert_eq!(server.hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stargazers_sends_user_agent() {
        let server = spawn_fake_github().await;
        let client = GitHubClient::new(&server.base_url).unwrap();

        // The fake server answers 403 when no User-Agent is sent, like GitHub
        assert!(client.stargazers("noahgorstein/jqp").await.is_ok());
    }

    #[tokio::test]
    async fn test_stargazers_status_error() {
        let server = spawn_fake_github().await;
        let client = GitHubClient::new(&server.base_url).unwrap();

        let err = client.stargazers("noahgorstein/missing").await.unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_stargazers_malformed_body() {
        let server = spawn_fake_github().await;
        let client = GitHubClient::new(&server.base_url).unwrap();

        let err = client.stargazers("noahgorstein/malformed").await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_stargazers_transport_error() {
        let client = GitHubClient::new(&closed_port_base().await).unwrap();

        let err = client.stargazers("noahgorstein/jqp").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}

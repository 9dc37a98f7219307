//! PluralKit API client.
//!
//! Wraps a shared reqwest client and turns every failure into the matching [`AppError`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::errors::{AppError, Upstream};
use crate::models::{Front, System};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the two lookups a page needs.
#[derive(Clone)]
pub struct PluralKitClient {
    http: Client,
    api_base: Url,
}

impl PluralKitClient {
    /// Build a client against `api_base`, e.g. `https://api.pluralkit.me/v1`.
    ///
    /// A trailing slash on the base is ignored.
    pub fn new(
        api_base: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let api_base = Url::parse(api_base)?;
        if api_base.cannot_be_a_base() {
            return Err(format!("API base {} cannot hold a path", api_base).into());
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, api_base })
    }

    /// GET /s/{id}
    pub async fn get_system(&self, id: &str) -> Result<System, AppError> {
        let url = self.endpoint(&["s", id], Upstream::System)?;
        self.get_json(url, Upstream::System).await
    }

    /// GET /s/{id}/fronters
    pub async fn get_fronters(&self, id: &str) -> Result<Front, AppError> {
        let url = self.endpoint(&["s", id, "fronters"], Upstream::Fronters)?;
        self.get_json(url, Upstream::Fronters).await
    }

    /// Append `segments` to the API base, percent-encoding each one as a single path segment.
    fn endpoint(&self, segments: &[&str], upstream: Upstream) -> Result<Url, AppError> {
        // Dot segments are resolved by URL parsing and cannot be sent as literal ids.
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(AppError::UpstreamRequestFailed {
                upstream,
                message: format!("{:?} is not a usable path segment", dot),
            });
        }

        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::UpstreamRequestFailed {
                upstream,
                message: format!("API base {} cannot hold a path", self.api_base),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        upstream: Upstream,
    ) -> Result<T, AppError> {
        tracing::debug!(url = %url, "Fetching from PluralKit");

        let response = self.http.get(url).send().await.map_err(|e| {
            AppError::UpstreamRequestFailed {
                upstream,
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamNonSuccessStatus { upstream, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::ResponseReadFailed {
                upstream,
                message: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| AppError::ResponseDecodeFailed {
            upstream,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base: &str) -> PluralKitClient {
        PluralKitClient::new(api_base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let url = client("https://api.pluralkit.me/v1")
            .endpoint(&["s", "abcde", "fronters"], Upstream::Fronters)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.pluralkit.me/v1/s/abcde/fronters");
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash_on_base() {
        let url = client("https://api.pluralkit.me/v1/")
            .endpoint(&["s", "abcde"], Upstream::System)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.pluralkit.me/v1/s/abcde");
    }

    #[test]
    fn test_endpoint_encodes_id_as_one_segment() {
        let url = client("https://api.pluralkit.me/v1")
            .endpoint(&["s", "../../admin?secret=1#x"], Upstream::System)
            .unwrap();

        assert_eq!(url.path(), "/v1/s/..%2F..%2Fadmin%3Fsecret=1%23x");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_endpoint_rejects_dot_segments() {
        for id in [".", ".."] {
            let err = client("https://api.pluralkit.me/v1")
                .endpoint(&["s", id], Upstream::System)
                .unwrap_err();
            assert!(matches!(err, AppError::UpstreamRequestFailed { .. }));
        }
    }

    #[test]
    fn test_new_rejects_unusable_base() {
        assert!(PluralKitClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(PluralKitClient::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
    }
}

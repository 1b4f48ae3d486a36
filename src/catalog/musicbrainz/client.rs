//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to
//! 1 req/sec. ISRC submission additionally requires account credentials and
//! a `client` query parameter identifying this application.

use std::time::Duration;

use super::dto;
use crate::catalog::{CatalogError, RateLimiter};

/// User agent string - MusicBrainz requires this
const USER_AGENT: &str = concat!(
    "isrc-sync/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/isrc-sync)"
);

/// `client` query parameter sent with submissions
const CLIENT_ID: &str = concat!("isrc-sync-", env!("CARGO_PKG_VERSION"));

/// MusicBrainz rate limit: 1 request per second
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(1000);

/// Credentials for ISRC submission
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
    limiter: RateLimiter,
}

impl MusicBrainzClient {
    /// Create a new client. Credentials are only needed for submission.
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self::with_base_url("https://musicbrainz.org/ws/2", credentials)
    }

    /// Create a client against a custom base URL (config override, tests)
    pub fn with_base_url(base_url: impl Into<String>, credentials: Option<Credentials>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
            credentials,
            limiter: RateLimiter::new(MIN_REQUEST_INTERVAL),
        }
    }

    /// Look up a release by MBID with everything the comparison needs:
    /// artist credits, recordings (with ISRCs) and media.
    pub async fn lookup_release(&self, mbid: &str) -> Result<dto::Release, CatalogError> {
        self.limiter.wait().await;

        // The + separators in `inc` must stay literal; URL-encoding them to
        // %2B makes the API drop the requested includes. Build the URL by
        // hand instead of using .query().
        let url = format!(
            "{}/release/{}?fmt=json&inc=artist-credits+recordings+isrcs+media",
            self.base_url, mbid
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(mbid.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(CatalogError::Api(error.error));
            }
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::Release>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Full-text release search with Lucene query syntax, paged.
    pub async fn search_releases(
        &self,
        query: &str,
        limit: u32,
        offset: u64,
    ) -> Result<dto::ReleaseSearchResponse, CatalogError> {
        self.limiter.wait().await;

        let url = format!(
            "{}/release?query={}&fmt=json&limit={}&offset={}",
            self.base_url,
            urlencoding::encode(query),
            limit,
            offset
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::ReleaseSearchResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Submit ISRCs keyed by recording MBID.
    ///
    /// Idempotent on the server side: ISRCs a recording already has are
    /// ignored, new ones are attached.
    pub async fn submit_isrcs(
        &self,
        submission: &[(String, Vec<String>)],
    ) -> Result<(), CatalogError> {
        let Some(ref creds) = self.credentials else {
            return Err(CatalogError::Auth(
                "MusicBrainz credentials required for submission".to_string(),
            ));
        };

        self.limiter.wait().await;

        let url = format!(
            "{}/recording?client={}&fmt=json",
            self.base_url,
            urlencoding::encode(CLIENT_ID)
        );
        let body = build_submission_xml(submission);

        tracing::debug!(
            recordings = submission.len(),
            "submitting ISRCs to MusicBrainz"
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&creds.username, Some(&creds.password))
            .header(reqwest::header::CONTENT_TYPE, "application/xml; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Auth("invalid credentials".to_string()));
        }

        if !status.is_success() {
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(CatalogError::Api(error.error));
            }
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        Ok(())
    }
}

/// Build the standard ISRC submission document.
///
/// Recordings without any ISRC are omitted - the API rejects empty lists.
fn build_submission_xml(submission: &[(String, Vec<String>)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#"><recording-list>"#,
    );
    for (recording_id, isrcs) in submission {
        if isrcs.is_empty() {
            continue;
        }
        xml.push_str(&format!(
            r#"<recording id="{}"><isrc-list count="{}">"#,
            recording_id,
            isrcs.len()
        ));
        for isrc in isrcs {
            xml.push_str(&format!(r#"<isrc id="{}"/>"#, isrc));
        }
        xml.push_str("</isrc-list></recording>");
    }
    xml.push_str("</recording-list></metadata>");
    xml
}

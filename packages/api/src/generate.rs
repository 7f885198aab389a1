//! # Generation API client
//!
//! The external service that actually renders a deck. Two near-identical
//! endpoints exist, selected by [`ExportKind`]: the markdown pipeline and the
//! JSON pipeline. Both take a topic string and an optional slide count and
//! answer with a download URL for the finished file.
//!
//! Failures (transport errors and non-2xx statuses) are returned verbatim;
//! there is no retry, backoff, or client-side timeout.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::GenerateError;

/// Which generation pipeline to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Markdown,
    Json,
}

impl ExportKind {
    fn endpoint(self) -> &'static str {
        match self {
            ExportKind::Markdown => "generate-presentation/markdown",
            ExportKind::Json => "generate-presentation/json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Markdown => "Markdown",
            ExportKind::Json => "JSON",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerateRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_slides: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub download_url: String,
}

#[derive(Clone, Debug)]
pub struct GenerateClient {
    base_url: String,
    http: reqwest::Client,
}

impl GenerateClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.generate_base.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn generate(
        &self,
        kind: ExportKind,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerateError> {
        let url = format!("{}/{}", self.base_url, kind.endpoint());
        tracing::debug!(topic = %request.topic, %url, "requesting presentation");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        handle_response(status, body)
    }

    pub async fn generate_markdown(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerateError> {
        self.generate(ExportKind::Markdown, request).await
    }

    pub async fn generate_json(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerateError> {
        self.generate(ExportKind::Json, request).await
    }
}

/// Turn a generation response into a result. Any non-2xx status is a
/// failure carrying the status and raw body.
fn handle_response(status: u16, body: String) -> Result<GenerateResponse, GenerateError> {
    if !(200..300).contains(&status) {
        return Err(GenerateError::Status { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}

/// Rewrite an `http:` URL to `https:`. The generation service hands back
/// plain-HTTP download links that embedded viewers refuse to load.
pub fn ensure_https(url: &str) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => url.to_string(),
    }
}

/// Wrap a deck download URL in the Microsoft Office Online embedded viewer.
/// Falls back to the raw URL if it cannot be parsed.
pub fn office_preview_url(url: &str) -> String {
    let https = ensure_https(url);
    match reqwest::Url::parse_with_params(
        "https://view.officeapps.live.com/op/embed.aspx",
        &[("src", https.as_str())],
    ) {
        Ok(preview) => preview.to_string(),
        Err(_) => https,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_missing_slide_count() {
        let request = GenerateRequest {
            topic: "cats".to_string(),
            num_slides: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"topic":"cats"}"#
        );

        let request = GenerateRequest {
            topic: "cats".to_string(),
            num_slides: Some(5),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"topic":"cats","num_slides":5}"#
        );
    }

    #[test]
    fn test_failed_generation_yields_status_error() {
        let err = handle_response(500, "upstream exploded".to_string()).unwrap_err();
        match err {
            GenerateError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("expected status error, got {other:?}"),
        }

        // A 2xx with a garbage body is a parse failure, not a status failure.
        assert!(matches!(
            handle_response(200, "not json".to_string()),
            Err(GenerateError::Parse(_))
        ));
    }

    #[test]
    fn test_successful_generation_parses_body() {
        let response = handle_response(
            200,
            r#"{"download_url":"http://files.example/deck.pptx"}"#.to_string(),
        )
        .unwrap();
        assert_eq!(response.download_url, "http://files.example/deck.pptx");
    }

    #[test]
    fn test_response_parses_download_url() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"download_url":"http://files.example/deck.pptx"}"#).unwrap();
        assert_eq!(response.download_url, "http://files.example/deck.pptx");
    }

    #[test]
    fn test_ensure_https() {
        assert_eq!(
            ensure_https("http://files.example/deck.pptx"),
            "https://files.example/deck.pptx"
        );
        assert_eq!(
            ensure_https("https://files.example/deck.pptx"),
            "https://files.example/deck.pptx"
        );
    }

    #[test]
    fn test_office_preview_url_encodes_source() {
        let preview = office_preview_url("http://files.example/deck.pptx?x=1&y=2");
        assert!(preview.starts_with("https://view.officeapps.live.com/op/embed.aspx?src="));
        assert!(preview.contains("https%3A%2F%2Ffiles.example%2Fdeck.pptx"));
        assert!(!preview["https://view.officeapps.live.com/op/embed.aspx?src=".len()..].contains("?x"));
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(
            ExportKind::Markdown.endpoint(),
            "generate-presentation/markdown"
        );
        assert_eq!(ExportKind::Json.endpoint(), "generate-presentation/json");
    }
}

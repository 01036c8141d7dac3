//! Client for the hosted generative model behind `/api/ai/insights`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use pf_config::AiConfig;

use crate::error::InsightError;
use crate::http::check_response;

/// Header carrying the provider API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// `generateContent` client for one configured model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from the `ai` config section.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::MissingApiKey`] if no key is configured, or
    /// [`InsightError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AiConfig) -> Result<Self, InsightError> {
        if !config.is_configured() {
            return Err(InsightError::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("payflow/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            urlencoding::encode(&config.model)
        );
        Ok(Self {
            http,
            url,
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::EmptyPrompt`] for a blank prompt,
    /// [`InsightError::Http`] / [`InsightError::Api`] for transport or
    /// status failures, [`InsightError::Parse`] for an unreadable body, and
    /// [`InsightError::Upstream`] when the answer carries no candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        if prompt.trim().is_empty() {
            return Err(InsightError::EmptyPrompt);
        }
        let body = GenerateRequest {
            contents: [Content {
                parts: [TextPart { text: prompt }],
            }],
        };
        tracing::debug!(model = %self.model, chars = prompt.len(), "calling model");
        let resp = self
            .http
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| InsightError::Parse(e.to_string()))?;
        candidate_text(data)
    }
}

/// Concatenated text of the first candidate's parts.
fn candidate_text(data: GenerateResponse) -> Result<String, InsightError> {
    let candidate = data
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| InsightError::Upstream("model returned no candidates".into()))?;
    Ok(candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default())
}

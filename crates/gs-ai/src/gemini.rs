//! Google Gemini REST client.

use std::time::Duration;

use async_trait::async_trait;
use gs_config::GeminiConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AiError;
use crate::http::check_response;
use crate::model::GenerativeModel;
use crate::schema::to_gemini_schema;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, concatenated across parts. Empty when the
    /// provider returned no candidate (e.g. a blocked prompt).
    fn into_text(self) -> String {
        let Some(candidate) = self.candidates.into_iter().next() else {
            tracing::warn!("Gemini returned no candidates");
            return String::new();
        };
        if let Some(reason) = &candidate.finish_reason {
            tracing::debug!(finish_reason = %reason, "Gemini candidate finished");
        }
        candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// HTTP client for Gemini's `generateContent` endpoint with structured
/// (JSON) output.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// An empty API key is accepted here; every [`generate`](GenerativeModel::generate)
    /// call then fails with [`AiError::MissingApiKey`].
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .user_agent("genscript/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AiError> {
        if self.api_key.is_empty() {
            return Err(AiError::MissingApiKey);
        }

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: RequestGenerationConfig {
                response_mime_type: "application/json",
                response_schema: to_gemini_schema(schema),
            },
        };

        tracing::debug!(model = %self.model, "calling Gemini generateContent");
        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let raw = resp.text().await?;
        let envelope: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| AiError::Parse(e.to_string()))?;
        Ok(envelope.into_text())
    }
}

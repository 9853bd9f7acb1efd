//! Google Gemini completion provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assist::ports::{CompletionError, CompletionProvider, CompletionResult};

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Finish reasons for which the candidate text is withheld.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Completion provider backed by the Gemini `generateContent` endpoint.
///
/// The model is fixed at construction; every call sends a single user turn.
#[derive(Debug, Clone)]
pub struct GeminiCompletionProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiCompletionProvider {
    /// Creates a provider for `model` authenticated with `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Overrides the API base URL (proxies, local test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiCompletionProvider {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        let request = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, prompt_chars = prompt.chars().count(), "sending completion request");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(CompletionError::transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map_or(body, |envelope| envelope.error.message);
            warn!(status = status.as_u16(), %message, "completion request rejected");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(CompletionError::decode)?;
        reply_text(envelope)
    }
}

fn reply_text(envelope: GenerateContentResponse) -> CompletionResult<String> {
    let Some(candidate) = envelope.candidates.into_iter().next() else {
        return match envelope.prompt_feedback.and_then(|feedback| feedback.block_reason) {
            Some(reason) => Err(CompletionError::Blocked(reason)),
            None => Ok(String::new()),
        };
    };

    if let Some(reason) = candidate
        .finish_reason
        .filter(|reason| BLOCKING_FINISH_REASONS.contains(&reason.as_str()))
    {
        return Err(CompletionError::Blocked(reason));
    }

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

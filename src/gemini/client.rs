//! Gemini `generateContent` client.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::{GenerateError, GenerateOptions, GenerateText, ResponseFormat};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, GenerateError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GenerateError::new("API key not configured: set GEMINI_API_KEY"))?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_API_BASE.to_string(),
            model: GEMINI_MODEL.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiPromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[async_trait::async_trait]
impl GenerateText for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
        options: &GenerateOptions,
    ) -> Result<String, GenerateError> {
        let mut generation_config = json!({});
        if options.response_format == ResponseFormat::Json {
            generation_config["responseMimeType"] = json!("application/json");
        }
        if let Some(temperature) = options.temperature {
            generation_config["temperature"] = json!(temperature);
        }

        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "systemInstruction": {"parts": [{"text": system_instruction}]},
            "generationConfig": generation_config,
        });

        let url =
            format!("{}/models/{}:generateContent?key={}", self.base_url, self.model, self.api_key);

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::new(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            // Keep the body text: upstream markers (API_KEY_INVALID,
            // RESOURCE_EXHAUSTED, ...) are what the caller classifies on.
            let text = resp.text().await.unwrap_or_default();
            return Err(GenerateError::new(format!("Gemini API error {status}: {text}")));
        }

        let parsed: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| GenerateError::new(format!("failed to decode API response: {e}")))?;

        if let Some(feedback) = &parsed.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(GenerateError::new(format!("prompt was blocked due to safety: {reason}")));
            }
        }

        let candidate = parsed
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .ok_or_else(|| GenerateError::new("API response contained no candidates"))?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(GenerateError::new("candidate was blocked due to safety"));
        }

        let text = candidate
            .content
            .map(|content| {
                content.parts.into_iter().filter_map(|p| p.text).collect::<Vec<_>>().join("")
            })
            .unwrap_or_default();

        Ok(text)
    }
}

//! The external text-generation capability.
//!
//! [`GenerateText`] is the seam between the advisor and the hosted model: one
//! async call taking a prompt, a system instruction, and generation options,
//! returning raw text. The advisor never sees HTTP; transport failures carry
//! their cause as a message and are classified at the advisor boundary.

pub mod client;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

pub use client::GeminiClient;

/// Transport-level failure from the generation backend. The message is the
/// only payload on purpose: taxonomy mapping is substring-based.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GenerateError {
    pub message: String,
}

impl GenerateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Text,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub response_format: ResponseFormat,
    pub temperature: Option<f32>,
}

impl GenerateOptions {
    /// Structured-output request: the model is asked for bare JSON.
    pub fn json() -> Self {
        Self { response_format: ResponseFormat::Json, temperature: None }
    }

    /// Plain-text request at the given temperature.
    pub fn text(temperature: f32) -> Self {
        Self { response_format: ResponseFormat::Text, temperature: Some(temperature) }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { response_format: ResponseFormat::Text, temperature: None }
    }
}

/// One-shot text generation against the hosted model.
#[async_trait]
pub trait GenerateText: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
        options: &GenerateOptions,
    ) -> Result<String, GenerateError>;
}

//! Analysis requests and model-number lookup.
//!
//! [`Advisor`] wraps an injected [`GenerateText`] backend. Inputs are
//! validated before any external call, transport failures are classified into
//! the [`AdvisorError`] taxonomy at this boundary, and analysis responses go
//! through the validator before a caller ever sees them.

use crate::error::{AdvisorError, classify_transport_failure};
use crate::gemini::{GenerateOptions, GenerateText, prompts};
use crate::models::{DeviceType, RepairAnalysis};
use crate::parsers::parse_analysis;

/// Lookup responses run hotter than analysis ones, so a low temperature keeps
/// the device name deterministic.
const IDENTIFY_TEMPERATURE: f32 = 0.2;

/// Heuristics for rejecting suspect device-identification responses.
///
/// The thresholds are ad hoc, so they stay configurable rather than baked in:
/// a reply at or over `max_name_len` characters, or one containing any of
/// `suspect_phrases` (case-insensitive), is treated as unreliable.
#[derive(Debug, Clone)]
pub struct LookupHeuristics {
    pub max_name_len: usize,
    pub suspect_phrases: Vec<String>,
}

impl Default for LookupHeuristics {
    fn default() -> Self {
        Self {
            max_name_len: 100,
            suspect_phrases: ["cannot", "unable", "sorry", "error", "nemohu", "chyba"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

pub struct Advisor<G: GenerateText> {
    generator: G,
    lookup: LookupHeuristics,
}

impl<G: GenerateText> Advisor<G> {
    pub fn new(generator: G) -> Self {
        Self { generator, lookup: LookupHeuristics::default() }
    }

    pub fn with_lookup_heuristics(mut self, lookup: LookupHeuristics) -> Self {
        self.lookup = lookup;
        self
    }

    /// Request a repair analysis for a described problem.
    ///
    /// An empty description fails with [`AdvisorError::InvalidInput`] before
    /// any external call. The raw response goes through the validator;
    /// transport failures are classified into the taxonomy.
    pub async fn analyze_problem(
        &self,
        description: &str,
        device_type: DeviceType,
        device_model: &str,
    ) -> Result<RepairAnalysis, AdvisorError> {
        if description.trim().is_empty() {
            return Err(AdvisorError::InvalidInput("please describe the problem with your device"));
        }

        let prompt = prompts::analysis_prompt(description, device_type, device_model);
        let system = prompts::analysis_system_instruction(device_type, device_model);

        let raw = self
            .generator
            .generate(&prompt, &system, &GenerateOptions::json())
            .await
            .map_err(|e| classify_transport_failure(&e.message))?;

        parse_analysis(&raw)
    }

    /// Resolve a model number (e.g. "SM-G998B") to a full device name.
    ///
    /// An empty model number fails with [`AdvisorError::InvalidInput`] before
    /// any external call. An empty reply means the model number was not
    /// recognized; an overlong or apologetic reply is rejected as unreliable
    /// instead of being propagated as a bad guess.
    pub async fn identify_device(&self, model_number: &str) -> Result<String, AdvisorError> {
        let model_number = model_number.trim();
        if model_number.is_empty() {
            return Err(AdvisorError::InvalidInput("please enter a model number"));
        }

        let prompt = prompts::identify_prompt(model_number);
        let system = prompts::identify_system_instruction();

        let raw = self
            .generator
            .generate(&prompt, &system, &GenerateOptions::text(IDENTIFY_TEMPERATURE))
            .await
            .map_err(|e| classify_transport_failure(&e.message))?;

        let name = raw.trim();
        if name.is_empty() {
            return Err(AdvisorError::NotRecognized);
        }

        let lower = name.to_lowercase();
        let suspect = name.chars().count() >= self.lookup.max_name_len
            || self.lookup.suspect_phrases.iter().any(|phrase| lower.contains(phrase.as_str()));
        if suspect {
            eprintln!("Warning: suspect device identification response: {name}");
            return Err(AdvisorError::UnreliableResponse);
        }

        Ok(name.to_string())
    }
}

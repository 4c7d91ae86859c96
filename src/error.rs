//! Failure taxonomy for the advisor boundary.
//!
//! Every failure a caller can see is one of these variants, each rendering a
//! single user-facing message. Raw transport errors never cross the boundary;
//! they are classified by matching known substrings in the underlying
//! message, the same markers the Gemini API puts in its error bodies.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    /// A required input was empty; caught before any external call.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// The generation model violated its structured-output contract.
    #[error("the AI response did not have the expected structure: {0}")]
    MalformedResponse(String),

    /// Model-number lookup: the model replied with an empty string.
    #[error("the model number was not recognized or is ambiguous")]
    NotRecognized,

    /// Model-number lookup: the reply looked like a hedge or an error blurb.
    #[error("the device could not be reliably identified from the model number")]
    UnreliableResponse,

    #[error("the API key is invalid or missing; check GEMINI_API_KEY")]
    Unauthorized,

    #[error("the API request quota was exceeded; try again later")]
    QuotaExceeded,

    #[error("the response was blocked for safety reasons; try rephrasing the problem")]
    SafetyBlocked,

    #[error("could not reach the AI service: {0}")]
    Unknown(String),
}

/// Map a transport-level failure message onto the taxonomy.
///
/// Matching is substring-based because the upstream SDK and HTTP errors carry
/// their cause only in free text (`API_KEY_INVALID`, `RESOURCE_EXHAUSTED`,
/// safety-block notices). Unmatched messages fall through to [`AdvisorError::Unknown`].
pub fn classify_transport_failure(message: &str) -> AdvisorError {
    let lower = message.to_lowercase();
    if lower.contains("api key") || lower.contains("api_key_invalid") || lower.contains("unauthorized") || lower.contains("permission_denied") {
        AdvisorError::Unauthorized
    } else if lower.contains("quota") || lower.contains("resource_exhausted") {
        AdvisorError::QuotaExceeded
    } else if lower.contains("safety") {
        AdvisorError::SafetyBlocked
    } else {
        AdvisorError::Unknown(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_api_key_failures() {
        assert_eq!(classify_transport_failure("API key not valid"), AdvisorError::Unauthorized);
        assert_eq!(classify_transport_failure("error 400: API_KEY_INVALID"), AdvisorError::Unauthorized);
        assert_eq!(classify_transport_failure("PERMISSION_DENIED: no access"), AdvisorError::Unauthorized);
    }

    #[test]
    fn test_classify_quota_failures() {
        assert_eq!(classify_transport_failure("Quota exceeded for requests"), AdvisorError::QuotaExceeded);
        assert_eq!(classify_transport_failure("429: RESOURCE_EXHAUSTED"), AdvisorError::QuotaExceeded);
    }

    #[test]
    fn test_classify_safety_block() {
        assert_eq!(
            classify_transport_failure("candidate was blocked due to safety"),
            AdvisorError::SafetyBlocked
        );
    }

    #[test]
    fn test_unmatched_message_falls_through_to_unknown() {
        let err = classify_transport_failure("connection reset by peer");
        assert_eq!(err, AdvisorError::Unknown("connection reset by peer".into()));
    }
}

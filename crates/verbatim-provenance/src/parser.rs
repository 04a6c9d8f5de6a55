//! Parse LLM output into a verification verdict

use verbatim_domain::{CollaboratorError, ExternalVerdict};

/// Parse a fact-checker response
///
/// Models often wrap JSON in markdown code fences or add a sentence around
/// it; only the outermost `{...}` object is read.
pub fn parse_verdict(response: &str) -> Result<ExternalVerdict, CollaboratorError> {
    let json_str = extract_json(response)?;

    serde_json::from_str(json_str)
        .map_err(|e| CollaboratorError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// Extract the JSON object from a response
fn extract_json(response: &str) -> Result<&str, CollaboratorError> {
    let trimmed = response.trim();

    let start = trimmed.find('{');
    let end = trimmed.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&trimmed[start..=end]),
        _ => Err(CollaboratorError::InvalidResponse(
            "No JSON object in response".to_string(),
        )),
    }
}

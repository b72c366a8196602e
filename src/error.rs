use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Transport(String),

    #[error("Failed to parse workout response as JSON: {reason}")]
    MalformedResponse { reason: String, cleaned: String },

    #[error("Missing workout for {key}")]
    MissingDay { key: String },

    #[error("Failed to persist workouts: {0}")]
    Persistence(String),
}

impl GenerationError {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Configuration(_) => "configuration",
            GenerationError::InvalidRequest(_) => "invalid_request",
            GenerationError::Transport(_) => "transport",
            GenerationError::MalformedResponse { .. } => "malformed_response",
            GenerationError::MissingDay { .. } => "missing_day",
            GenerationError::Persistence(_) => "persistence",
        }
    }

    /// Diagnostic text returned to the caller next to the message.
    pub fn details(&self) -> String {
        match self {
            GenerationError::MalformedResponse { cleaned, .. } => cleaned.clone(),
            GenerationError::MissingDay { key } => {
                format!("The generated plan has no entry for {}", key)
            }
            other => format!("{}: {}", other.kind(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_day_names_key() {
        let error = GenerationError::MissingDay {
            key: "day3".to_string(),
        };
        assert_eq!(error.to_string(), "Missing workout for day3");
        assert_eq!(error.kind(), "missing_day");
    }

    #[test]
    fn test_malformed_response_details_carry_cleaned_text() {
        let error = GenerationError::MalformedResponse {
            reason: "expected value at line 1 column 1".to_string(),
            cleaned: "not json".to_string(),
        };
        assert_eq!(error.details(), "not json");
        assert!(error.to_string().contains("expected value"));
    }

    #[test]
    fn test_configuration_details_include_kind() {
        let error = GenerationError::Configuration("Missing Gemini API key".to_string());
        assert_eq!(error.details(), "configuration: Missing Gemini API key");
    }
}

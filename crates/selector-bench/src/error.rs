use thiserror::Error;

/// Errors raised while generating a synthetic tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid shape {shape} for {count} nodes: {reason}")]
    InvalidShape {
        shape: String,
        count: usize,
        reason: String,
    },

    #[error("Marker index {index} is outside the {count} generated nodes")]
    MarkerOutOfRange { index: usize, count: usize },

    #[error("Invalid marker: {0}")]
    InvalidMarker(String),
}

/// Errors reported by the selector engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Failed to parse document: {0}")]
    Parse(String),

    #[error("Selector '{selector}' rejected: {message}")]
    Selector { selector: String, message: String },

    #[error("Engine panicked: {0}")]
    Panicked(String),
}

/// Phase of a case in which a failure happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Parsing the generated markup or resolving the scope
    Setup,
    Untimed,
    Timed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => f.write_str("setup"),
            Phase::Untimed => f.write_str("untimed"),
            Phase::Timed => f.write_str("timed"),
        }
    }
}

/// Errors that abort a single query case
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error(transparent)]
    InvalidShape(#[from] TreeError),

    #[error("Scope '{scope}' matched no nodes")]
    ScopeNotFound { scope: String },

    #[error("Case failed during {phase} execution: {cause}")]
    CaseFailed { phase: Phase, cause: EngineError },
}

impl CaseError {
    /// Short machine-friendly label used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            CaseError::InvalidShape(_) => "invalid_shape",
            CaseError::ScopeNotFound { .. } => "scope_not_found",
            CaseError::CaseFailed { .. } => "case_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_error_kind_labels() {
        let shape = CaseError::from(TreeError::InvalidShape {
            shape: "alternating".to_string(),
            count: 3,
            reason: "odd".to_string(),
        });
        assert_eq!(shape.kind(), "invalid_shape");

        let failed = CaseError::CaseFailed {
            phase: Phase::Timed,
            cause: EngineError::Panicked("boom".to_string()),
        };
        assert_eq!(failed.kind(), "case_failed");
        assert_eq!(
            failed.to_string(),
            "Case failed during timed execution: Engine panicked: boom"
        );
    }
}

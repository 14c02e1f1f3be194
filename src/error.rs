// ⚠️ Model errors
// Only the strict construction paths return these. The lenient paths
// substitute "unset" and keep going.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown multiplier code: {0}")]
    UnknownMultiplier(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ModelError::UnknownCategory("Electronics".to_string());
        assert_eq!(err.to_string(), "Unknown category: Electronics");

        let err = ModelError::UnknownMultiplier("x".to_string());
        assert_eq!(err.to_string(), "Unknown multiplier code: x");
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BloomError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl BloomError {
    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        BloomError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BloomError>;

#[cfg(test)]
mod tests {
    use crate::error::BloomError;

    #[test]
    fn test_display() {
        let err = BloomError::invalid_configuration("expected_elements must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: expected_elements must be positive"
        );
    }
}

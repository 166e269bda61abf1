//! Error types shared by the generators and spectral estimators

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

pub type Result<T> = std::result::Result<T, NoiseError>;

impl NoiseError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        NoiseError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject zero counts before anything is allocated
pub fn require_positive(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(NoiseError::invalid(name, "must be at least 1"));
    }
    Ok(value)
}

/// Convert a signed count (as typed on the command line) into a positive `usize`
pub fn checked_count(name: &'static str, value: i64) -> Result<usize> {
    if value < 1 {
        return Err(NoiseError::invalid(
            name,
            format!("must be at least 1 (got {})", value),
        ));
    }
    usize::try_from(value)
        .map_err(|_| NoiseError::invalid(name, format!("{} does not fit in memory", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_count_rejects_non_positive() {
        for value in [0, -5, i64::MIN] {
            let err = checked_count("samples", value).unwrap_err();
            assert!(matches!(err, NoiseError::InvalidArgument { name: "samples", .. }));
        }
        assert_eq!(checked_count("samples", 10), Ok(10));
    }

    #[test]
    fn test_error_message() {
        let err = require_positive("ncols", 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument `ncols`: must be at least 1");
    }
}

//! Error types for the vocalization renderer.

use thiserror::Error;

/// Result type for render operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering a vocalization.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid render parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The pitch contour could not place enough key points.
    #[error("degenerate pitch contour: {message}")]
    DegenerateContour {
        /// Error message.
        message: String,
    },

    /// Internal synthesis error (non-finite output sample).
    ///
    /// A guard against programming errors, not a recoverable condition: the
    /// caller must re-invoke with different parameters.
    #[error("synthesis error: {message}")]
    Synthesis {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a degenerate contour error.
    pub fn degenerate_contour(message: impl Into<String>) -> Self {
        Self::DegenerateContour {
            message: message.into(),
        }
    }

    /// Creates a synthesis error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = SynthError::invalid_param("duration", "must be positive");
        assert!(err.to_string().contains("duration"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_degenerate_contour_helper() {
        let err = SynthError::degenerate_contour("only 2 key points");
        assert!(err.to_string().contains("degenerate pitch contour"));
    }

    #[test]
    fn test_synthesis_helper() {
        let err = SynthError::synthesis("non-finite sample at index 7");
        assert!(err.to_string().contains("non-finite sample"));
    }
}

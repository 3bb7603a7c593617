//! Error types shared by the estimation engine, assumption loader and scenario loader

use thiserror::Error;

/// Errors raised while validating inputs or loading assumptions
#[derive(Error, Debug)]
pub enum EstimateError {
    /// An engine input was NaN or infinite
    #[error("invalid input `{field}`: {value} is not a finite number")]
    InvalidInput { field: &'static str, value: f64 },

    /// A benchmark constant is unusable (out of range, inverted bounds, ...)
    #[error("invalid assumption `{name}`: {reason}")]
    InvalidAssumption { name: String, reason: String },

    /// A CSV row is too short to hold a required column
    #[error("line {line}: missing `{column}` column")]
    MissingColumn { line: u64, column: &'static str },

    /// Scenario row asked for a model this crate does not implement
    #[error("unknown estimation model: {0}")]
    UnknownModel(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("could not parse number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl EstimateError {
    pub(crate) fn assumption(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAssumption {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinities, pass everything else through untouched
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting non-finite input {field}={value}");
        Err(EstimateError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x", -3.5).unwrap(), -3.5);
        assert_eq!(ensure_finite("x", 0.0).unwrap(), 0.0);

        let err = ensure_finite("monthly_new_members", f64::NAN).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { field: "monthly_new_members", .. }));
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_finite("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = EstimateError::assumption("churn_rate", "must be within [0, 1]");
        assert_eq!(err.to_string(), "invalid assumption `churn_rate`: must be within [0, 1]");

        let err = EstimateError::UnknownModel("ltv".into());
        assert_eq!(err.to_string(), "unknown estimation model: ltv");
    }
}

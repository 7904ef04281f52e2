use thiserror::Error;

/// Input validation failure surfaced by the evaluation core.
///
/// This is the only error kind the calculator produces: the engine performs
/// no I/O and every decision branch is total over well-formed input, so a
/// malformed case is rejected up front and no partial result is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expected {expected} motor records (one per nerve and side), got {actual}")]
    MotorPanelSize { expected: usize, actual: usize },

    #[error("expected {expected} sensory records (one per nerve and side), got {actual}")]
    SensoryPanelSize { expected: usize, actual: usize },

    #[error("duplicate record for {label}")]
    DuplicateNerve { label: String },

    #[error("{field} must be non-negative, got {value}")]
    NegativeMeasurement { field: String, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteMeasurement { field: String },
}

impl ValidationError {
    pub(crate) fn duplicate(label: impl Into<String>) -> Self {
        Self::DuplicateNerve {
            label: label.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reject NaN, infinities and negative values. JSON case files cannot encode
/// the former, but the core is callable as a library.
pub(crate) fn check_measurement(field: impl Into<String>, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteMeasurement {
            field: field.into(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeMeasurement {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

pub mod ancillary;
pub mod clinical;
pub mod error;
pub mod evaluation;
pub mod nerve;

pub use ancillary::{AncillaryProfile, FindingStatus};
pub use clinical::{
    ClinicalProfile, ProgressionPattern, ReflexStatus, SensoryInvolvement, Symmetry, WeaknessSite,
};
pub use error::{Result, ValidationError};
pub use evaluation::{Diagnosis, EvaluationResult, Subtype};
pub use nerve::{
    MotorNerve, MotorReading, MotorRecord, NervePanel, NerveRecord, SensoryNerve, SensoryReading,
    SensoryRecord, Side, MOTOR_RECORD_COUNT, SENSORY_RECORD_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_render_readable_messages() {
        let err = ValidationError::MotorPanelSize {
            expected: MOTOR_RECORD_COUNT,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "expected 10 motor records (one per nerve and side), got 3"
        );

        let err = ValidationError::NegativeMeasurement {
            field: "Sural Sensory (Left) SNAP amplitude".to_string(),
            value: -2.5,
        };
        assert_eq!(
            err.to_string(),
            "Sural Sensory (Left) SNAP amplitude must be non-negative, got -2.5"
        );
    }
}

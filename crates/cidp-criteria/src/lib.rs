//! Simplified EFNS/PNS 2021 CIDP criteria.
//!
//! Evaluation runs four fixed stages: clinical suspicion scoring,
//! electrodiagnostic classification of the nerve panel, CSF protein support,
//! and composition of the final diagnosis, subtype and recommendation texts.
//! Every stage is a pure function over its inputs, so evaluation is
//! deterministic and safe to run concurrently without coordination.

pub mod clinical;
pub mod csf;
pub mod decision;
pub mod electrodiagnostic;
pub mod recommendations;

pub use clinical::{
    clinical_points, score_clinical, CLINICAL_SUSPICION_THRESHOLD, MAX_CLINICAL_POINTS,
    MIN_SUSPICIOUS_DURATION_MONTHS,
};
pub use csf::{csf_supportive, CSF_PROTEIN_UPPER_LIMIT_MG_DL};
pub use decision::{compose_diagnosis, derive_subtype};
pub use electrodiagnostic::{
    classify_motor, classify_sensory, count_demyelinated, is_demyelinated, ncs_criteria_met,
    DEMYELINATED_NERVE_THRESHOLD,
};
pub use recommendations::{
    differential_diagnoses, management_plan, CIDP_MANAGEMENT_PLAN, DIFFERENTIAL_DIAGNOSES,
    NON_CIDP_MANAGEMENT_PLAN,
};

use tracing::debug;

use cidp_model::{
    AncillaryProfile, ClinicalProfile, EvaluationResult, MotorRecord, NervePanel, Result,
    SensoryRecord, Subtype,
};

/// Evaluate one case against the simplified criteria.
///
/// The clinical and ancillary profiles are re-validated here because they
/// can be built field-by-field; the panel carries its guarantees from
/// construction. No partial result is produced on failure.
pub fn evaluate(
    clinical: &ClinicalProfile,
    ancillary: &AncillaryProfile,
    panel: &NervePanel,
) -> Result<EvaluationResult> {
    clinical.validate()?;
    ancillary.validate()?;

    let points = clinical_points(clinical);
    let clinical_suspicion = points >= CLINICAL_SUSPICION_THRESHOLD;
    let demyelinated = count_demyelinated(panel);
    let ncs_met = demyelinated >= DEMYELINATED_NERVE_THRESHOLD;
    let csf_support = csf_supportive(ancillary.csf_protein_mg_dl);

    let diagnosis = compose_diagnosis(clinical_suspicion, ncs_met, csf_support);
    let subtype = if diagnosis.is_confirmed() {
        derive_subtype(clinical)
    } else {
        Subtype::NotApplicable
    };

    debug!(
        clinical_points = points,
        clinical_suspicion,
        demyelinated_nerves = demyelinated,
        ncs_met,
        csf_support,
        diagnosis = diagnosis.label(),
        "evaluated case"
    );

    Ok(EvaluationResult {
        diagnosis,
        subtype,
        differentials: differential_diagnoses(),
        management: management_plan(diagnosis),
    })
}

/// Evaluate from loose record lists, validating the panel shape first.
pub fn evaluate_panel(
    clinical: &ClinicalProfile,
    ancillary: &AncillaryProfile,
    motor: Vec<MotorRecord>,
    sensory: Vec<SensoryRecord>,
) -> Result<EvaluationResult> {
    let panel = NervePanel::new(motor, sensory)?;
    evaluate(clinical, ancillary, &panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidp_model::{
        FindingStatus, MotorNerve, MotorReading, ProgressionPattern, ReflexStatus,
        SensoryInvolvement, SensoryNerve, SensoryReading, Side, Symmetry, ValidationError,
        WeaknessSite,
    };

    fn clinical() -> ClinicalProfile {
        ClinicalProfile {
            duration_months: 3.0,
            symmetry: Symmetry::Symmetrical,
            weakness_distribution: vec![WeaknessSite::DistalUpperLimbs],
            sensory_involvement: SensoryInvolvement::MildToModerate,
            reflexes: ReflexStatus::Reduced,
            progression: ProgressionPattern::SlowlyProgressive,
            other_cause_explains: false,
            sensory_ataxia: false,
        }
    }

    fn ancillary() -> AncillaryProfile {
        AncillaryProfile {
            csf_protein_mg_dl: 80.0,
            nerve_imaging: FindingStatus::NotDone,
            nerve_biopsy: FindingStatus::NotDone,
        }
    }

    fn normal_panel() -> NervePanel {
        let motor = MotorNerve::ALL
            .iter()
            .flat_map(|&nerve| {
                Side::BOTH.iter().map(move |&side| MotorRecord {
                    nerve,
                    side,
                    reading: MotorReading {
                        distal_latency_ms: 4.0,
                        conduction_velocity_m_s: 50.0,
                        cmap_amplitude_mv: 5.0,
                        waveform_duration_ms: 8.0,
                        f_wave_latency_ms: 30.0,
                        conduction_block: false,
                    },
                })
            })
            .collect();
        let sensory = SensoryNerve::ALL
            .iter()
            .flat_map(|&nerve| {
                Side::BOTH.iter().map(move |&side| SensoryRecord {
                    nerve,
                    side,
                    reading: SensoryReading {
                        distal_latency_ms: 3.0,
                        conduction_velocity_m_s: 48.0,
                        snap_amplitude_uv: 12.0,
                        waveform_duration_ms: 6.0,
                    },
                })
            })
            .collect();
        NervePanel::new(motor, sensory).expect("complete panel")
    }

    #[test]
    fn invalid_clinical_profile_stops_evaluation() {
        let mut profile = clinical();
        profile.duration_months = f64::NAN;
        let err = evaluate(&profile, &ancillary(), &normal_panel()).unwrap_err();
        assert!(matches!(err, ValidationError::NonFiniteMeasurement { .. }));
    }

    #[test]
    fn evaluate_panel_rejects_wrong_record_count() {
        let panel = normal_panel();
        let mut motor = panel.motor().to_vec();
        motor.pop();
        let err =
            evaluate_panel(&clinical(), &ancillary(), motor, panel.sensory().to_vec()).unwrap_err();
        assert!(matches!(err, ValidationError::MotorPanelSize { .. }));
    }

    #[test]
    fn suspicion_without_ncs_evidence_is_possible_cidp() {
        let result = evaluate(&clinical(), &ancillary(), &normal_panel()).expect("evaluates");
        assert_eq!(result.diagnosis, cidp_model::Diagnosis::Possible);
        assert_eq!(result.subtype, Subtype::NotApplicable);
        assert_eq!(result.management, CIDP_MANAGEMENT_PLAN);
    }
}

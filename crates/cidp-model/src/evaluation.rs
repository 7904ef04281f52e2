//! Evaluation outcomes.
//!
//! The label strings here are the published wording of the module and are
//! compared verbatim by downstream reports, so they must not be reworded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic certainty category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    Definite,
    Probable,
    Possible,
    Unlikely,
}

impl Diagnosis {
    /// Full conclusion sentence as shown to clinicians.
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::Definite => "CIDP (Definite by EFNS/PNS 2021 criteria).",
            Diagnosis::Probable => "CIDP (Probable by EFNS/PNS 2021 criteria).",
            Diagnosis::Possible => {
                "Possible CIDP (Clinical suspicion but insufficient NCS evidence)."
            }
            Diagnosis::Unlikely => "CIDP unlikely based on EFNS/PNS criteria.",
        }
    }

    /// Whether the conclusion supports CIDP at any certainty level.
    ///
    /// Every category except `Unlikely` gets the CIDP management plan;
    /// `Unlikely` gets the alternative-workup text instead.
    pub fn indicates_cidp(&self) -> bool {
        !matches!(self, Diagnosis::Unlikely)
    }

    /// Whether CIDP is confirmed at definite or probable certainty.
    ///
    /// Only a confirmed diagnosis is assigned a subtype; `Possible` and
    /// `Unlikely` report `Not Applicable`.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Diagnosis::Definite | Diagnosis::Probable)
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CIDP subtype, derived from the clinical pattern once CIDP is indicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    Dads,
    TypicalSymmetrical,
    PureMotor,
    Typical,
    Madsam,
    Focal,
    Atypical,
    NotApplicable,
}

impl Subtype {
    pub fn label(&self) -> &'static str {
        match self {
            Subtype::Dads => "DADS (Distal Acquired Demyelinating Symmetric Neuropathy)",
            Subtype::TypicalSymmetrical => "Typical CIDP (Symmetrical Proximal and Distal)",
            Subtype::PureMotor => "Pure Motor CIDP",
            Subtype::Typical => "Typical CIDP",
            Subtype::Madsam => "MADSAM (Lewis-Sumner Syndrome, Multifocal Asymmetric)",
            Subtype::Focal => "Focal CIDP Variant",
            Subtype::Atypical => "Atypical CIDP Variant",
            Subtype::NotApplicable => "Not Applicable",
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete outcome of one evaluation.
///
/// The differential and management texts are fixed blocks selected by the
/// decision logic, so the result stays a plain value with no borrowed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub diagnosis: Diagnosis,
    pub subtype: Subtype,
    pub differentials: &'static str,
    pub management: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnosis_labels_are_verbatim() {
        assert_eq!(
            Diagnosis::Definite.label(),
            "CIDP (Definite by EFNS/PNS 2021 criteria)."
        );
        assert_eq!(
            Diagnosis::Possible.to_string(),
            "Possible CIDP (Clinical suspicion but insufficient NCS evidence)."
        );
        assert_eq!(
            Diagnosis::Unlikely.label(),
            "CIDP unlikely based on EFNS/PNS criteria."
        );
    }

    #[test]
    fn only_unlikely_rules_out_cidp() {
        assert!(Diagnosis::Definite.indicates_cidp());
        assert!(Diagnosis::Probable.indicates_cidp());
        assert!(Diagnosis::Possible.indicates_cidp());
        assert!(!Diagnosis::Unlikely.indicates_cidp());
    }

    #[test]
    fn confirmation_requires_electrodiagnostic_support() {
        assert!(Diagnosis::Definite.is_confirmed());
        assert!(Diagnosis::Probable.is_confirmed());
        assert!(!Diagnosis::Possible.is_confirmed());
        assert!(!Diagnosis::Unlikely.is_confirmed());
    }

    #[test]
    fn subtype_labels_are_verbatim() {
        assert_eq!(
            Subtype::Madsam.label(),
            "MADSAM (Lewis-Sumner Syndrome, Multifocal Asymmetric)"
        );
        assert_eq!(
            Subtype::Dads.label(),
            "DADS (Distal Acquired Demyelinating Symmetric Neuropathy)"
        );
        assert_eq!(Subtype::NotApplicable.label(), "Not Applicable");
    }

    #[test]
    fn outcome_enums_use_snake_case_tags() {
        assert_eq!(
            serde_json::to_value(Diagnosis::Probable).unwrap(),
            serde_json::json!("probable")
        );
        assert_eq!(
            serde_json::to_value(Subtype::TypicalSymmetrical).unwrap(),
            serde_json::json!("typical_symmetrical")
        );
        assert_eq!(
            serde_json::from_str::<Diagnosis>("\"unlikely\"").unwrap(),
            Diagnosis::Unlikely
        );
    }
}

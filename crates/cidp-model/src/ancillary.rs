//! Optional ancillary investigations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{check_measurement, Result};

/// Outcome of an optional investigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingStatus {
    #[default]
    NotDone,
    No,
    Yes,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::NotDone => "Not Done",
            FindingStatus::No => "No",
            FindingStatus::Yes => "Yes",
        }
    }
}

impl fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FindingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NOT DONE" => Ok(FindingStatus::NotDone),
            "NO" => Ok(FindingStatus::No),
            "YES" => Ok(FindingStatus::Yes),
            _ => Err(format!("Unknown finding status: {s}")),
        }
    }
}

/// Ancillary investigation results for one evaluation.
///
/// Only the CSF protein concentration feeds the decision logic. Imaging and
/// biopsy findings are recorded for the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AncillaryProfile {
    /// CSF protein concentration in mg/dL.
    pub csf_protein_mg_dl: f64,
    /// Ultrasound/MRI evidence of nerve enlargement.
    #[serde(default)]
    pub nerve_imaging: FindingStatus,
    /// Nerve biopsy consistent with demyelination.
    #[serde(default)]
    pub nerve_biopsy: FindingStatus,
}

impl AncillaryProfile {
    pub fn validate(&self) -> Result<()> {
        check_measurement("CSF protein", self.csf_protein_mg_dl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn imaging_and_biopsy_default_to_not_done() {
        let profile: AncillaryProfile =
            serde_json::from_str(r#"{"csf_protein_mg_dl": 80.0}"#).unwrap();
        assert_eq!(profile.nerve_imaging, FindingStatus::NotDone);
        assert_eq!(profile.nerve_biopsy, FindingStatus::NotDone);
    }

    #[test]
    fn validate_rejects_non_finite_protein() {
        let profile = AncillaryProfile {
            csf_protein_mg_dl: f64::INFINITY,
            nerve_imaging: FindingStatus::NotDone,
            nerve_biopsy: FindingStatus::NotDone,
        };
        assert!(matches!(
            profile.validate(),
            Err(ValidationError::NonFiniteMeasurement { .. })
        ));
    }

    #[test]
    fn finding_status_parses_intake_wording() {
        assert_eq!(
            "not done".parse::<FindingStatus>().unwrap(),
            FindingStatus::NotDone
        );
        assert_eq!("Yes".parse::<FindingStatus>().unwrap(), FindingStatus::Yes);
        assert!("maybe".parse::<FindingStatus>().is_err());
    }
}

//! Clinical history and examination findings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{check_measurement, Result};

/// Overall pattern of limb involvement.
///
/// Marked non-exhaustive so that downstream subtype derivation keeps a
/// fallback arm for patterns added in a later revision of the criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Symmetry {
    Symmetrical,
    Asymmetrical,
    Focal,
}

impl Symmetry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symmetry::Symmetrical => "Symmetrical",
            Symmetry::Asymmetrical => "Asymmetrical",
            Symmetry::Focal => "Focal",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Symmetry {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SYMMETRICAL" => Ok(Symmetry::Symmetrical),
            "ASYMMETRICAL" => Ok(Symmetry::Asymmetrical),
            "FOCAL" => Ok(Symmetry::Focal),
            _ => Err(format!("Unknown symmetry pattern: {s}")),
        }
    }
}

/// Region of reported weakness. Any subset may be present, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaknessSite {
    ProximalUpperLimbs,
    DistalUpperLimbs,
    ProximalLowerLimbs,
    DistalLowerLimbs,
}

impl WeaknessSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaknessSite::ProximalUpperLimbs => "Proximal Upper Limbs",
            WeaknessSite::DistalUpperLimbs => "Distal Upper Limbs",
            WeaknessSite::ProximalLowerLimbs => "Proximal Lower Limbs",
            WeaknessSite::DistalLowerLimbs => "Distal Lower Limbs",
        }
    }

    pub fn is_proximal(&self) -> bool {
        matches!(
            self,
            WeaknessSite::ProximalUpperLimbs | WeaknessSite::ProximalLowerLimbs
        )
    }

    pub fn is_distal(&self) -> bool {
        matches!(
            self,
            WeaknessSite::DistalUpperLimbs | WeaknessSite::DistalLowerLimbs
        )
    }
}

impl fmt::Display for WeaknessSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WeaknessSite {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PROXIMAL UPPER LIMBS" => Ok(WeaknessSite::ProximalUpperLimbs),
            "DISTAL UPPER LIMBS" => Ok(WeaknessSite::DistalUpperLimbs),
            "PROXIMAL LOWER LIMBS" => Ok(WeaknessSite::ProximalLowerLimbs),
            "DISTAL LOWER LIMBS" => Ok(WeaknessSite::DistalLowerLimbs),
            _ => Err(format!("Unknown weakness site: {s}")),
        }
    }
}

/// Sensory involvement pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensoryInvolvement {
    Prominent,
    MildToModerate,
    PureMotor,
}

impl SensoryInvolvement {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensoryInvolvement::Prominent => "Prominent Sensory",
            SensoryInvolvement::MildToModerate => "Mild to Moderate Sensory",
            SensoryInvolvement::PureMotor => "Pure Motor (No Sensory)",
        }
    }
}

impl fmt::Display for SensoryInvolvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SensoryInvolvement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PROMINENT SENSORY" | "PROMINENT" => Ok(SensoryInvolvement::Prominent),
            "MILD TO MODERATE SENSORY" | "MILD TO MODERATE" => {
                Ok(SensoryInvolvement::MildToModerate)
            }
            "PURE MOTOR (NO SENSORY)" | "PURE MOTOR" => Ok(SensoryInvolvement::PureMotor),
            _ => Err(format!("Unknown sensory involvement: {s}")),
        }
    }
}

/// Deep tendon reflexes in affected limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflexStatus {
    Normal,
    Reduced,
    Absent,
}

impl ReflexStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReflexStatus::Normal => "Normal",
            ReflexStatus::Reduced => "Reduced",
            ReflexStatus::Absent => "Absent",
        }
    }

    /// Reduced or absent reflexes, the pattern that scores a clinical point.
    pub fn is_diminished(&self) -> bool {
        matches!(self, ReflexStatus::Reduced | ReflexStatus::Absent)
    }
}

impl fmt::Display for ReflexStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReflexStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORMAL" => Ok(ReflexStatus::Normal),
            "REDUCED" => Ok(ReflexStatus::Reduced),
            "ABSENT" => Ok(ReflexStatus::Absent),
            _ => Err(format!("Unknown reflex status: {s}")),
        }
    }
}

/// Course of the weakness or sensory change over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionPattern {
    SlowlyProgressive,
    StepwiseProgressive,
    RecurrentRelapsing,
    NoSignificantProgression,
}

impl ProgressionPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressionPattern::SlowlyProgressive => "Slowly Progressive",
            ProgressionPattern::StepwiseProgressive => "Stepwise Progressive",
            ProgressionPattern::RecurrentRelapsing => "Recurrent/Relapsing",
            ProgressionPattern::NoSignificantProgression => "No Significant Progression",
        }
    }

    /// Any progressive or relapsing course scores a clinical point.
    pub fn is_progressive_or_relapsing(&self) -> bool {
        !matches!(self, ProgressionPattern::NoSignificantProgression)
    }
}

impl fmt::Display for ProgressionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProgressionPattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SLOWLY PROGRESSIVE" => Ok(ProgressionPattern::SlowlyProgressive),
            "STEPWISE PROGRESSIVE" => Ok(ProgressionPattern::StepwiseProgressive),
            "RECURRENT/RELAPSING" => Ok(ProgressionPattern::RecurrentRelapsing),
            "NO SIGNIFICANT PROGRESSION" => Ok(ProgressionPattern::NoSignificantProgression),
            _ => Err(format!("Unknown progression pattern: {s}")),
        }
    }
}

/// Clinical history and examination for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalProfile {
    /// Duration of symptoms in months.
    pub duration_months: f64,
    pub symmetry: Symmetry,
    /// Regions of weakness. May be empty when weakness is not a feature.
    #[serde(default)]
    pub weakness_distribution: Vec<WeaknessSite>,
    pub sensory_involvement: SensoryInvolvement,
    pub reflexes: ReflexStatus,
    pub progression: ProgressionPattern,
    /// Whether another cause fully explains the neuropathy.
    pub other_cause_explains: bool,
    /// Sensory ataxia (e.g. positive Romberg). Recorded but not scored.
    #[serde(default)]
    pub sensory_ataxia: bool,
}

impl ClinicalProfile {
    pub fn validate(&self) -> Result<()> {
        check_measurement("symptom duration", self.duration_months)
    }

    /// Any proximal limb region involved.
    pub fn proximal_weakness(&self) -> bool {
        self.weakness_distribution
            .iter()
            .any(WeaknessSite::is_proximal)
    }

    /// Any distal limb region involved.
    pub fn distal_weakness(&self) -> bool {
        self.weakness_distribution
            .iter()
            .any(WeaknessSite::is_distal)
    }
}

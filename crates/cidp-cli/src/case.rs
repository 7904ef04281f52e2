//! Case file loading.
//!
//! A case file is a single JSON document holding the clinical history, the
//! ancillary findings and the full 20-record nerve conduction panel. Panel
//! invariants are enforced during deserialization, so a loaded case is
//! already a valid evaluation input.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cidp_model::{
    AncillaryProfile, ClinicalProfile, FindingStatus, MotorNerve, MotorReading, MotorRecord,
    NervePanel, ProgressionPattern, ReflexStatus, SensoryInvolvement, SensoryNerve, SensoryReading,
    SensoryRecord, Side, Symmetry,
};

/// One complete evaluation case as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    /// Free-text identifier echoed into reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    pub clinical: ClinicalProfile,
    pub ancillary: AncillaryProfile,
    #[serde(flatten)]
    pub panel: NervePanel,
}

impl CaseFile {
    /// Read and validate a case file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read case file {}", path.display()))?;
        let case: CaseFile = serde_json::from_str(&text)
            .with_context(|| format!("parse case file {}", path.display()))?;
        Ok(case)
    }

    /// Starter case with every measurement at a within-normal-limits value,
    /// mirroring the intake form defaults.
    pub fn template() -> Self {
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
        // Both lists are complete by construction.
        let panel = NervePanel::new(motor, sensory).expect("template panel is complete");

        CaseFile {
            case_id: None,
            clinical: ClinicalProfile {
                duration_months: 3.0,
                symmetry: Symmetry::Symmetrical,
                weakness_distribution: Vec::new(),
                sensory_involvement: SensoryInvolvement::Prominent,
                reflexes: ReflexStatus::Normal,
                progression: ProgressionPattern::SlowlyProgressive,
                other_cause_explains: false,
                sensory_ataxia: false,
            },
            ancillary: AncillaryProfile {
                csf_protein_mg_dl: 80.0,
                nerve_imaging: FindingStatus::NotDone,
                nerve_biopsy: FindingStatus::NotDone,
            },
            panel,
        }
    }
}

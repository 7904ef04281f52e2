//! Nerve conduction study records.
//!
//! A complete study covers 5 motor and 5 sensory nerves, each measured on
//! both sides, for 20 records total. [`NervePanel::new`] enforces that shape
//! so downstream classification never sees a partial or duplicated panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{check_measurement, Result, ValidationError};

/// Motor records expected in a complete panel (5 nerves, both sides).
pub const MOTOR_RECORD_COUNT: usize = 10;

/// Sensory records expected in a complete panel (5 nerves, both sides).
pub const SENSORY_RECORD_COUNT: usize = 10;

/// Body side a nerve was measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L" | "LEFT" => Ok(Side::Left),
            "R" | "RIGHT" => Ok(Side::Right),
            _ => Err(format!("Unknown side: {s}")),
        }
    }
}

/// Motor nerves assessed in the standard study montage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorNerve {
    Median,
    Ulnar,
    Radial,
    Tibial,
    Peroneal,
}

impl MotorNerve {
    pub const ALL: [MotorNerve; 5] = [
        MotorNerve::Median,
        MotorNerve::Ulnar,
        MotorNerve::Radial,
        MotorNerve::Tibial,
        MotorNerve::Peroneal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MotorNerve::Median => "Median",
            MotorNerve::Ulnar => "Ulnar",
            MotorNerve::Radial => "Radial",
            MotorNerve::Tibial => "Tibial",
            MotorNerve::Peroneal => "Peroneal",
        }
    }
}

impl fmt::Display for MotorNerve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MotorNerve {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MEDIAN" => Ok(MotorNerve::Median),
            "ULNAR" => Ok(MotorNerve::Ulnar),
            "RADIAL" => Ok(MotorNerve::Radial),
            "TIBIAL" => Ok(MotorNerve::Tibial),
            "PERONEAL" => Ok(MotorNerve::Peroneal),
            _ => Err(format!("Unknown motor nerve: {s}")),
        }
    }
}

/// Sensory nerves assessed in the standard study montage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensoryNerve {
    Median,
    Ulnar,
    SuperficialRadial,
    Sural,
    SuperficialPeroneal,
}

impl SensoryNerve {
    pub const ALL: [SensoryNerve; 5] = [
        SensoryNerve::Median,
        SensoryNerve::Ulnar,
        SensoryNerve::SuperficialRadial,
        SensoryNerve::Sural,
        SensoryNerve::SuperficialPeroneal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensoryNerve::Median => "Median",
            SensoryNerve::Ulnar => "Ulnar",
            SensoryNerve::SuperficialRadial => "Superficial Radial",
            SensoryNerve::Sural => "Sural",
            SensoryNerve::SuperficialPeroneal => "Superficial Peroneal",
        }
    }
}

impl fmt::Display for SensoryNerve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SensoryNerve {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MEDIAN" => Ok(SensoryNerve::Median),
            "ULNAR" => Ok(SensoryNerve::Ulnar),
            "SUPERFICIAL RADIAL" => Ok(SensoryNerve::SuperficialRadial),
            "SURAL" => Ok(SensoryNerve::Sural),
            "SUPERFICIAL PERONEAL" => Ok(SensoryNerve::SuperficialPeroneal),
            _ => Err(format!("Unknown sensory nerve: {s}")),
        }
    }
}

/// Measurements from one motor nerve conduction study.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorReading {
    /// Distal motor latency in milliseconds.
    pub distal_latency_ms: f64,
    /// Conduction velocity in meters per second.
    pub conduction_velocity_m_s: f64,
    /// Compound muscle action potential amplitude in millivolts.
    pub cmap_amplitude_mv: f64,
    /// Distal CMAP waveform duration in milliseconds.
    pub waveform_duration_ms: f64,
    /// Minimum F-wave latency in milliseconds. A value of `0.0` records an
    /// absent F-wave response.
    pub f_wave_latency_ms: f64,
    /// Whether partial conduction block was observed.
    pub conduction_block: bool,
}

/// Measurements from one sensory nerve conduction study.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensoryReading {
    /// Distal sensory latency in milliseconds.
    pub distal_latency_ms: f64,
    /// Conduction velocity in meters per second.
    pub conduction_velocity_m_s: f64,
    /// Sensory nerve action potential amplitude in microvolts.
    pub snap_amplitude_uv: f64,
    /// Waveform duration in milliseconds.
    pub waveform_duration_ms: f64,
}

/// One motor nerve study: which nerve, which side, and the measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorRecord {
    pub nerve: MotorNerve,
    pub side: Side,
    #[serde(flatten)]
    pub reading: MotorReading,
}

impl MotorRecord {
    /// Display label, e.g. `Median Motor (Left)`.
    pub fn label(&self) -> String {
        format!("{} Motor ({})", self.nerve, self.side)
    }

    fn validate(&self) -> Result<()> {
        let label = self.label();
        check_measurement(
            format!("{label} distal latency"),
            self.reading.distal_latency_ms,
        )?;
        check_measurement(
            format!("{label} conduction velocity"),
            self.reading.conduction_velocity_m_s,
        )?;
        check_measurement(
            format!("{label} CMAP amplitude"),
            self.reading.cmap_amplitude_mv,
        )?;
        check_measurement(
            format!("{label} waveform duration"),
            self.reading.waveform_duration_ms,
        )?;
        check_measurement(
            format!("{label} F-wave latency"),
            self.reading.f_wave_latency_ms,
        )?;
        Ok(())
    }
}

/// One sensory nerve study: which nerve, which side, and the measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensoryRecord {
    pub nerve: SensoryNerve,
    pub side: Side,
    #[serde(flatten)]
    pub reading: SensoryReading,
}

impl SensoryRecord {
    /// Display label, e.g. `Sural Sensory (Right)`.
    pub fn label(&self) -> String {
        format!("{} Sensory ({})", self.nerve, self.side)
    }

    fn validate(&self) -> Result<()> {
        let label = self.label();
        check_measurement(
            format!("{label} distal latency"),
            self.reading.distal_latency_ms,
        )?;
        check_measurement(
            format!("{label} conduction velocity"),
            self.reading.conduction_velocity_m_s,
        )?;
        check_measurement(
            format!("{label} SNAP amplitude"),
            self.reading.snap_amplitude_uv,
        )?;
        check_measurement(
            format!("{label} waveform duration"),
            self.reading.waveform_duration_ms,
        )?;
        Ok(())
    }
}

/// Either kind of study record, for callers that iterate the whole panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NerveRecord {
    Motor(MotorRecord),
    Sensory(SensoryRecord),
}

impl NerveRecord {
    pub fn side(&self) -> Side {
        match self {
            NerveRecord::Motor(record) => record.side,
            NerveRecord::Sensory(record) => record.side,
        }
    }

    pub fn label(&self) -> String {
        match self {
            NerveRecord::Motor(record) => record.label(),
            NerveRecord::Sensory(record) => record.label(),
        }
    }
}

/// A validated, complete set of 20 nerve conduction records.
///
/// Construction via [`NervePanel::new`] is the only way to obtain a panel,
/// so holding one guarantees full bilateral coverage of all 10 nerves with
/// finite, non-negative measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPanel", into = "RawPanel")]
pub struct NervePanel {
    motor: Vec<MotorRecord>,
    sensory: Vec<SensoryRecord>,
}

impl NervePanel {
    /// Build a panel from motor and sensory records, in any order.
    ///
    /// Records are re-keyed into canonical order (nerve, then side). Fails if
    /// either list has the wrong length, repeats a nerve/side pair, or holds
    /// a negative or non-finite measurement.
    pub fn new(motor: Vec<MotorRecord>, sensory: Vec<SensoryRecord>) -> Result<Self> {
        if motor.len() != MOTOR_RECORD_COUNT {
            return Err(ValidationError::MotorPanelSize {
                expected: MOTOR_RECORD_COUNT,
                actual: motor.len(),
            });
        }
        if sensory.len() != SENSORY_RECORD_COUNT {
            return Err(ValidationError::SensoryPanelSize {
                expected: SENSORY_RECORD_COUNT,
                actual: sensory.len(),
            });
        }

        let mut motor = motor;
        motor.sort_by_key(|record| (record.nerve, record.side));
        for pair in motor.windows(2) {
            if pair[0].nerve == pair[1].nerve && pair[0].side == pair[1].side {
                return Err(ValidationError::duplicate(pair[1].label()));
            }
        }

        let mut sensory = sensory;
        sensory.sort_by_key(|record| (record.nerve, record.side));
        for pair in sensory.windows(2) {
            if pair[0].nerve == pair[1].nerve && pair[0].side == pair[1].side {
                return Err(ValidationError::duplicate(pair[1].label()));
            }
        }

        for record in &motor {
            record.validate()?;
        }
        for record in &sensory {
            record.validate()?;
        }

        Ok(Self { motor, sensory })
    }

    /// Motor records in canonical (nerve, side) order.
    pub fn motor(&self) -> &[MotorRecord] {
        &self.motor
    }

    /// Sensory records in canonical (nerve, side) order.
    pub fn sensory(&self) -> &[SensoryRecord] {
        &self.sensory
    }

    /// All 20 records, motor first, each group in canonical order.
    pub fn records(&self) -> Vec<NerveRecord> {
        self.motor
            .iter()
            .copied()
            .map(NerveRecord::Motor)
            .chain(self.sensory.iter().copied().map(NerveRecord::Sensory))
            .collect()
    }
}

/// Wire shape of a panel. Deserialization funnels through [`NervePanel::new`]
/// so a panel read from JSON is validated like one built in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPanel {
    motor_records: Vec<MotorRecord>,
    sensory_records: Vec<SensoryRecord>,
}

impl TryFrom<RawPanel> for NervePanel {
    type Error = ValidationError;

    fn try_from(raw: RawPanel) -> Result<Self> {
        NervePanel::new(raw.motor_records, raw.sensory_records)
    }
}

impl From<NervePanel> for RawPanel {
    fn from(panel: NervePanel) -> Self {
        RawPanel {
            motor_records: panel.motor,
            sensory_records: panel.sensory,
        }
    }
}

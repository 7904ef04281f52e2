//! Demyelination classification of nerve conduction records.
//!
//! Each record is classified independently against fixed generic cutoffs,
//! simplified from the published per-nerve electrodiagnostic criteria. The
//! constants and comparison directions below are part of the published rule
//! set and must not be tuned.

use cidp_model::{MotorReading, NervePanel, NerveRecord, SensoryReading};

/// Upper limit of normal distal motor latency in ms.
pub const MOTOR_DISTAL_LATENCY_LIMIT_MS: f64 = 4.2;

/// Normal motor conduction velocity reference in m/s.
pub const MOTOR_CONDUCTION_VELOCITY_REFERENCE_M_S: f64 = 50.0;

/// Normal distal CMAP duration reference in ms.
pub const MOTOR_WAVEFORM_DURATION_REFERENCE_MS: f64 = 9.0;

/// Upper limit of normal F-wave latency in ms.
pub const MOTOR_F_WAVE_LIMIT_MS: f64 = 32.0;

/// Upper limit of normal distal sensory latency in ms.
pub const SENSORY_DISTAL_LATENCY_LIMIT_MS: f64 = 3.5;

/// Normal sensory conduction velocity reference in m/s.
pub const SENSORY_CONDUCTION_VELOCITY_REFERENCE_M_S: f64 = 45.0;

/// Normal sensory waveform duration reference in ms.
pub const SENSORY_WAVEFORM_DURATION_REFERENCE_MS: f64 = 10.0;

/// Velocity below 90% of the reference counts as demyelinating slowing.
pub const CONDUCTION_VELOCITY_SLOWING_FACTOR: f64 = 0.9;

/// Duration above 130% of the reference counts as abnormal dispersion.
pub const WAVEFORM_PROLONGATION_FACTOR: f64 = 1.3;

/// Demyelinating nerves required for the electrodiagnostic criteria.
pub const DEMYELINATED_NERVE_THRESHOLD: usize = 2;

/// Whether a motor study shows any demyelinating feature.
///
/// An F-wave latency of exactly `0.0` records an absent response and counts
/// as abnormal; it is a sentinel, not a measured latency.
pub fn classify_motor(reading: MotorReading) -> bool {
    reading.distal_latency_ms > MOTOR_DISTAL_LATENCY_LIMIT_MS
        || reading.conduction_velocity_m_s
            < CONDUCTION_VELOCITY_SLOWING_FACTOR * MOTOR_CONDUCTION_VELOCITY_REFERENCE_M_S
        || reading.waveform_duration_ms
            > WAVEFORM_PROLONGATION_FACTOR * MOTOR_WAVEFORM_DURATION_REFERENCE_MS
        || reading.f_wave_latency_ms > MOTOR_F_WAVE_LIMIT_MS
        || reading.f_wave_latency_ms == 0.0
        || reading.conduction_block
}

/// Whether a sensory study shows any demyelinating feature.
pub fn classify_sensory(reading: SensoryReading) -> bool {
    reading.distal_latency_ms > SENSORY_DISTAL_LATENCY_LIMIT_MS
        || reading.conduction_velocity_m_s
            < CONDUCTION_VELOCITY_SLOWING_FACTOR * SENSORY_CONDUCTION_VELOCITY_REFERENCE_M_S
        || reading.waveform_duration_ms
            > WAVEFORM_PROLONGATION_FACTOR * SENSORY_WAVEFORM_DURATION_REFERENCE_MS
}

/// Classify one record of either modality.
pub fn is_demyelinated(record: &NerveRecord) -> bool {
    match record {
        NerveRecord::Motor(motor) => classify_motor(motor.reading),
        NerveRecord::Sensory(sensory) => classify_sensory(sensory.reading),
    }
}

/// Number of demyelinating records across the whole panel.
///
/// Records are classified independently, so the count does not depend on
/// record order or on any cross-nerve interaction.
pub fn count_demyelinated(panel: &NervePanel) -> usize {
    panel
        .records()
        .iter()
        .filter(|record| is_demyelinated(record))
        .count()
}

/// Whether the panel meets the electrodiagnostic criteria.
pub fn ncs_criteria_met(panel: &NervePanel) -> bool {
    count_demyelinated(panel) >= DEMYELINATED_NERVE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_motor() -> MotorReading {
        MotorReading {
            distal_latency_ms: 4.0,
            conduction_velocity_m_s: 50.0,
            cmap_amplitude_mv: 5.0,
            waveform_duration_ms: 8.0,
            f_wave_latency_ms: 30.0,
            conduction_block: false,
        }
    }

    fn normal_sensory() -> SensoryReading {
        SensoryReading {
            distal_latency_ms: 3.0,
            conduction_velocity_m_s: 48.0,
            snap_amplitude_uv: 12.0,
            waveform_duration_ms: 6.0,
        }
    }

    #[test]
    fn normal_readings_are_not_demyelinated() {
        assert!(!classify_motor(normal_motor()));
        assert!(!classify_sensory(normal_sensory()));
    }

    #[test]
    fn motor_latency_boundary_is_strict() {
        let mut reading = normal_motor();
        reading.distal_latency_ms = MOTOR_DISTAL_LATENCY_LIMIT_MS;
        assert!(!classify_motor(reading));
        reading.distal_latency_ms = 4.2001;
        assert!(classify_motor(reading));
    }

    #[test]
    fn motor_velocity_boundary_is_strict() {
        let mut reading = normal_motor();
        reading.conduction_velocity_m_s = 45.0;
        assert!(!classify_motor(reading));
        reading.conduction_velocity_m_s = 44.9;
        assert!(classify_motor(reading));
    }

    #[test]
    fn motor_duration_boundary_is_strict() {
        let mut reading = normal_motor();
        // The cutoff is computed as 1.3 * 9.0, so probe on either side of it
        // rather than at a decimal literal that may not equal the product.
        reading.waveform_duration_ms = 11.69;
        assert!(!classify_motor(reading));
        reading.waveform_duration_ms = 11.71;
        assert!(classify_motor(reading));
    }

    #[test]
    fn f_wave_flags_delay_and_absence() {
        let mut reading = normal_motor();
        reading.f_wave_latency_ms = MOTOR_F_WAVE_LIMIT_MS;
        assert!(!classify_motor(reading));
        reading.f_wave_latency_ms = 32.1;
        assert!(classify_motor(reading));
        reading.f_wave_latency_ms = 0.0;
        assert!(classify_motor(reading));
    }

    #[test]
    fn conduction_block_alone_is_demyelinating() {
        let mut reading = normal_motor();
        reading.conduction_block = true;
        assert!(classify_motor(reading));
    }

    #[test]
    fn amplitude_never_affects_classification() {
        let mut motor = normal_motor();
        motor.cmap_amplitude_mv = 0.0;
        assert!(!classify_motor(motor));

        let mut sensory = normal_sensory();
        sensory.snap_amplitude_uv = 0.0;
        assert!(!classify_sensory(sensory));
    }

    #[test]
    fn sensory_boundaries_are_strict() {
        let mut reading = normal_sensory();
        reading.distal_latency_ms = SENSORY_DISTAL_LATENCY_LIMIT_MS;
        assert!(!classify_sensory(reading));
        reading.distal_latency_ms = 3.6;
        assert!(classify_sensory(reading));

        let mut reading = normal_sensory();
        reading.conduction_velocity_m_s = 40.5;
        assert!(!classify_sensory(reading));
        reading.conduction_velocity_m_s = 40.4;
        assert!(classify_sensory(reading));

        let mut reading = normal_sensory();
        reading.waveform_duration_ms = 12.99;
        assert!(!classify_sensory(reading));
        reading.waveform_duration_ms = 13.01;
        assert!(classify_sensory(reading));
    }
}

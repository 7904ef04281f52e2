//! Clinical suspicion scoring.
//!
//! Four equally weighted criteria are taken from the history: symptom
//! duration, reflex loss, a progressive or relapsing course, and the absence
//! of an alternative explanation. Three of the four raise suspicion.

use cidp_model::ClinicalProfile;

/// Symptom duration, in months, at or above which a point is scored.
pub const MIN_SUSPICIOUS_DURATION_MONTHS: f64 = 2.0;

/// Points required before the history counts as clinical suspicion.
pub const CLINICAL_SUSPICION_THRESHOLD: u8 = 3;

/// Points available across the clinical criteria.
pub const MAX_CLINICAL_POINTS: u8 = 4;

/// Count how many of the four clinical criteria the profile meets.
pub fn clinical_points(profile: &ClinicalProfile) -> u8 {
    let mut points = 0;
    if profile.duration_months >= MIN_SUSPICIOUS_DURATION_MONTHS {
        points += 1;
    }
    if profile.reflexes.is_diminished() {
        points += 1;
    }
    if profile.progression.is_progressive_or_relapsing() {
        points += 1;
    }
    if !profile.other_cause_explains {
        points += 1;
    }
    points
}

/// Whether the history alone raises suspicion of CIDP.
pub fn score_clinical(profile: &ClinicalProfile) -> bool {
    clinical_points(profile) >= CLINICAL_SUSPICION_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidp_model::{
        ProgressionPattern, ReflexStatus, SensoryInvolvement, Symmetry, WeaknessSite,
    };

    fn suspicious_profile() -> ClinicalProfile {
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

    #[test]
    fn all_criteria_met_scores_maximum() {
        let profile = suspicious_profile();
        assert_eq!(clinical_points(&profile), MAX_CLINICAL_POINTS);
        assert!(score_clinical(&profile));
    }

    #[test]
    fn no_criteria_met_scores_zero() {
        let profile = ClinicalProfile {
            duration_months: 1.0,
            reflexes: ReflexStatus::Normal,
            progression: ProgressionPattern::NoSignificantProgression,
            other_cause_explains: true,
            ..suspicious_profile()
        };
        assert_eq!(clinical_points(&profile), 0);
        assert!(!score_clinical(&profile));
    }

    #[test]
    fn three_points_is_the_suspicion_boundary() {
        let mut profile = suspicious_profile();
        profile.reflexes = ReflexStatus::Normal;
        assert_eq!(clinical_points(&profile), 3);
        assert!(score_clinical(&profile));

        profile.other_cause_explains = true;
        assert_eq!(clinical_points(&profile), 2);
        assert!(!score_clinical(&profile));
    }

    #[test]
    fn duration_boundary_is_inclusive() {
        let mut profile = suspicious_profile();
        profile.duration_months = MIN_SUSPICIOUS_DURATION_MONTHS;
        assert_eq!(clinical_points(&profile), 4);

        profile.duration_months = 1.9;
        assert_eq!(clinical_points(&profile), 3);
    }

    #[test]
    fn each_criterion_contributes_one_point() {
        let base = ClinicalProfile {
            duration_months: 0.0,
            reflexes: ReflexStatus::Normal,
            progression: ProgressionPattern::NoSignificantProgression,
            other_cause_explains: true,
            ..suspicious_profile()
        };

        let mut duration_only = base.clone();
        duration_only.duration_months = 2.0;
        assert_eq!(clinical_points(&duration_only), 1);

        let mut reflexes_only = base.clone();
        reflexes_only.reflexes = ReflexStatus::Absent;
        assert_eq!(clinical_points(&reflexes_only), 1);

        let mut progression_only = base.clone();
        progression_only.progression = ProgressionPattern::RecurrentRelapsing;
        assert_eq!(clinical_points(&progression_only), 1);

        let mut no_other_cause = base;
        no_other_cause.other_cause_explains = false;
        assert_eq!(clinical_points(&no_other_cause), 1);
    }
}

//! Diagnosis composition and subtype derivation.

use cidp_model::{ClinicalProfile, Diagnosis, SensoryInvolvement, Subtype, Symmetry};

/// Combine the three stage flags into a diagnosis category.
pub fn compose_diagnosis(clinical_suspicion: bool, ncs_met: bool, csf_support: bool) -> Diagnosis {
    match (clinical_suspicion, ncs_met, csf_support) {
        (true, true, true) => Diagnosis::Definite,
        (true, true, false) => Diagnosis::Probable,
        (true, false, _) => Diagnosis::Possible,
        (false, _, _) => Diagnosis::Unlikely,
    }
}

/// Derive the CIDP subtype from the clinical pattern.
///
/// Callers apply this only to a confirmed diagnosis; the pattern itself is
/// total over every symmetry, weakness and sensory combination.
pub fn derive_subtype(profile: &ClinicalProfile) -> Subtype {
    let proximal = profile.proximal_weakness();
    let distal = profile.distal_weakness();
    let pure_motor = profile.sensory_involvement == SensoryInvolvement::PureMotor;

    match profile.symmetry {
        Symmetry::Symmetrical => {
            if distal && !proximal && !pure_motor {
                Subtype::Dads
            } else if (proximal || distal) && !pure_motor {
                Subtype::TypicalSymmetrical
            } else if pure_motor {
                Subtype::PureMotor
            } else {
                Subtype::Typical
            }
        }
        Symmetry::Asymmetrical => Subtype::Madsam,
        Symmetry::Focal => Subtype::Focal,
        // Symmetry is non-exhaustive; future patterns fall back to the
        // atypical variant rather than failing.
        _ => Subtype::Atypical,
    }
}

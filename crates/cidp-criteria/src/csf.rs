//! CSF protein support.

/// Upper limit of normal CSF protein in mg/dL.
pub const CSF_PROTEIN_UPPER_LIMIT_MG_DL: f64 = 45.0;

/// Whether the CSF protein concentration supports the diagnosis.
///
/// The concentration collapses to this one boolean; the decision logic never
/// sees the raw value again.
pub fn csf_supportive(protein_mg_dl: f64) -> bool {
    protein_mg_dl > CSF_PROTEIN_UPPER_LIMIT_MG_DL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_strictly_above_the_limit() {
        assert!(!csf_supportive(45.0));
        assert!(csf_supportive(45.1));
        assert!(!csf_supportive(20.0));
        assert!(csf_supportive(80.0));
    }
}

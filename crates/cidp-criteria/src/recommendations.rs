//! Fixed differential and management text blocks.
//!
//! These are published prose, selected whole by diagnosis category. Keeping
//! them as named constants keeps the decision logic independent of wording.

use cidp_model::Diagnosis;

/// Differential checklist offered with every evaluation.
pub const DIFFERENTIAL_DIAGNOSES: &str = "\
• Multifocal Motor Neuropathy
• Diabetic or Metabolic Polyneuropathy
• Hereditary Neuropathies (e.g. CMT)
• Paraproteinemic Neuropathy / POEMS Syndrome / IgM anti-MAG
• Vasculitic Neuropathy
• Other Inflammatory or Toxic Neuropathies";

/// Tiered treatment plan for any CIDP-indicating diagnosis.
pub const CIDP_MANAGEMENT_PLAN: &str = "\
1) First-Line Options:
   • IVIG (2 g/kg over 2–5 days, then maintenance doses)
   • High-Dose Corticosteroids (oral or IV)
   • Plasma Exchange (alternative in certain cases)

2) If Inadequate Response:
   • Repeat or increase frequency of IVIG
   • Combine IVIG with steroids
   • Alternate immunotherapies

3) Refractory CIDP:
   • Immunosuppressants (Azathioprine, Mycophenolate, Cyclophosphamide)
   • Rituximab or other biologics in selected cases

4) Supportive Care:
   • Physical/Occupational Therapy
   • Monitor for treatment side effects
   • Regular neurological follow-up";

/// Plan when the findings do not support CIDP.
pub const NON_CIDP_MANAGEMENT_PLAN: &str = "\
Not consistent with CIDP based on current data. Further diagnostic workup or
treatment should follow the most likely alternative diagnosis.";

/// The differential checklist is the same for every outcome.
pub fn differential_diagnoses() -> &'static str {
    DIFFERENTIAL_DIAGNOSES
}

/// Select the management plan for a diagnosis category.
pub fn management_plan(diagnosis: Diagnosis) -> &'static str {
    if diagnosis.indicates_cidp() {
        CIDP_MANAGEMENT_PLAN
    } else {
        NON_CIDP_MANAGEMENT_PLAN
    }
}

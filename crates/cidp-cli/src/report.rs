//! Report rendering for evaluation results.

use chrono::Utc;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use cidp_criteria::{
    clinical_points, count_demyelinated, csf_supportive, evaluate, is_demyelinated,
    CLINICAL_SUSPICION_THRESHOLD, CSF_PROTEIN_UPPER_LIMIT_MG_DL, DEMYELINATED_NERVE_THRESHOLD,
    MAX_CLINICAL_POINTS,
};
use cidp_model::{Diagnosis, Result, Subtype, MOTOR_RECORD_COUNT, SENSORY_RECORD_COUNT};

use crate::case::CaseFile;

const REPORT_SCHEMA: &str = "cidp-dx.evaluation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Evaluation outcome plus the per-stage findings a clinician reviews.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    pub clinical_points: u8,
    pub clinical_suspicion: bool,
    pub demyelinated_nerves: usize,
    pub ncs_criteria_met: bool,
    pub csf_protein_mg_dl: f64,
    pub csf_support: bool,
    pub diagnosis: Diagnosis,
    pub diagnosis_label: &'static str,
    pub subtype: Subtype,
    pub subtype_label: &'static str,
    pub differentials: &'static str,
    pub management: &'static str,
    pub nerve_findings: Vec<NerveFinding>,
}

/// Classification of one panel record.
#[derive(Debug, Clone, Serialize)]
pub struct NerveFinding {
    pub nerve: String,
    pub demyelinating: bool,
}

impl EvaluationReport {
    /// Evaluate a case and project the stage findings for display.
    pub fn from_case(case: &CaseFile) -> Result<Self> {
        let result = evaluate(&case.clinical, &case.ancillary, &case.panel)?;

        let points = clinical_points(&case.clinical);
        let demyelinated = count_demyelinated(&case.panel);
        let nerve_findings = case
            .panel
            .records()
            .iter()
            .map(|record| NerveFinding {
                nerve: record.label(),
                demyelinating: is_demyelinated(record),
            })
            .collect();

        Ok(EvaluationReport {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            case_id: case.case_id.clone(),
            clinical_points: points,
            clinical_suspicion: points >= CLINICAL_SUSPICION_THRESHOLD,
            demyelinated_nerves: demyelinated,
            ncs_criteria_met: demyelinated >= DEMYELINATED_NERVE_THRESHOLD,
            csf_protein_mg_dl: case.ancillary.csf_protein_mg_dl,
            csf_support: csf_supportive(case.ancillary.csf_protein_mg_dl),
            diagnosis: result.diagnosis,
            diagnosis_label: result.diagnosis.label(),
            subtype: result.subtype,
            subtype_label: result.subtype.label(),
            differentials: result.differentials,
            management: result.management,
            nerve_findings,
        })
    }
}

/// Render the report as JSON for machine consumption.
pub fn render_json(report: &EvaluationReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report as the text layout shown to clinicians.
pub fn render_text(report: &EvaluationReport) -> String {
    let mut out = String::new();
    if let Some(case_id) = &report.case_id {
        out.push_str(&format!("Case: {case_id}\n\n"));
    }
    out.push_str(&format!("Diagnosis Conclusion: {}\n", report.diagnosis_label));
    if report.diagnosis.indicates_cidp() {
        out.push_str(&format!("Likely CIDP Subtype: {}\n", report.subtype_label));
    }
    out.push('\n');
    out.push_str("Criteria:\n");
    out.push_str(&criteria_table(report).to_string());
    out.push_str("\n\n");
    out.push_str("Nerve Findings:\n");
    out.push_str(&findings_table(report).to_string());
    out.push_str("\n\n");
    out.push_str("Potential Differentials:\n");
    out.push_str(report.differentials);
    out.push_str("\n\n");
    out.push_str("Management Recommendations:\n");
    out.push_str(report.management);
    out.push('\n');
    out
}

fn criteria_table(report: &EvaluationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Finding"),
        header_cell("Met"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    table.add_row(vec![
        Cell::new("Clinical suspicion"),
        Cell::new(format!(
            "{}/{} points",
            report.clinical_points, MAX_CLINICAL_POINTS
        )),
        flag_cell(report.clinical_suspicion),
    ]);
    table.add_row(vec![
        Cell::new("Electrodiagnostic criteria"),
        Cell::new(format!(
            "{} of {} nerves demyelinating",
            report.demyelinated_nerves,
            MOTOR_RECORD_COUNT + SENSORY_RECORD_COUNT
        )),
        flag_cell(report.ncs_criteria_met),
    ]);
    table.add_row(vec![
        Cell::new("CSF protein support"),
        Cell::new(format!(
            "{} mg/dL (upper limit {CSF_PROTEIN_UPPER_LIMIT_MG_DL})",
            report.csf_protein_mg_dl
        )),
        flag_cell(report.csf_support),
    ]);
    table
}

fn findings_table(report: &EvaluationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Nerve"), header_cell("Classification")]);
    apply_table_style(&mut table);
    for finding in &report.nerve_findings {
        table.add_row(vec![
            Cell::new(&finding.nerve),
            classification_cell(finding.demyelinating),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(met: bool) -> Cell {
    if met {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("-").fg(Color::DarkGrey)
    }
}

fn classification_cell(demyelinating: bool) -> Cell {
    if demyelinating {
        Cell::new("Demyelinating")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("Normal").fg(Color::DarkGrey)
    }
}

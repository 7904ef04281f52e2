use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use cidp_cli::case::CaseFile;
use cidp_cli::report::{render_json, render_text, EvaluationReport};

use crate::cli::{EvaluateArgs, ReportFormatArg, TemplateArgs};

pub fn run_evaluate(args: &EvaluateArgs) -> Result<()> {
    let span = info_span!("evaluate", case_file = %args.case_file.display());
    let _guard = span.enter();

    let case = CaseFile::load(&args.case_file)?;
    let report = EvaluationReport::from_case(&case).context("evaluate case")?;
    debug!(
        clinical_points = report.clinical_points,
        demyelinated_nerves = report.demyelinated_nerves,
        csf_support = report.csf_support,
        diagnosis = report.diagnosis_label,
        "case evaluated"
    );

    let rendered = match args.format {
        ReportFormatArg::Text => render_text(&report),
        ReportFormatArg::Json => render_json(&report)?,
    };
    write_or_print(args.output.as_deref(), &rendered, "report")
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    let case = CaseFile::template();
    let json = serde_json::to_string_pretty(&case).context("serialize template")?;
    write_or_print(args.path.as_deref(), &json, "template")
}

fn write_or_print(path: Option<&Path>, content: &str, what: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut content = content.to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            fs::write(path, content).with_context(|| format!("write {} {}", what, path.display()))?;
            info!(path = %path.display(), "{what} written");
        }
        None => println!("{content}"),
    }
    Ok(())
}

use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::models::violation::{RawViolation, RawViolationsDoc};
use crate::normalize::{join_versions, manager_label};
use crate::report::{EXPORT_HEADERS, ReportTable};

/// Builds the delimited report from a violations export that was downloaded
/// from the platform beforehand, returning the number of data rows written.
///
/// Applies the same manager inference and version joining as the API path,
/// but emits the export's 8-column schema (no Description).
pub fn export_report(input: &Path, dest: &Path) -> Result<usize> {
    let doc = parse_violations_export(input)?;

    let mut table = ReportTable::new(&EXPORT_HEADERS);
    for violation in &doc.data {
        table.append(export_row(violation));
    }

    let count = table.len();
    table.finalize(dest)?;
    Ok(count)
}

pub fn parse_violations_export(path: &Path) -> Result<RawViolationsDoc> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|err| ReportError::MalformedExport {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

fn export_row(violation: &RawViolation) -> [String; 8] {
    [
        manager_label(&violation.comp_id).to_string(),
        violation.comp_name.clone(),
        violation.comp_version.clone(),
        violation.violation_type.clone(),
        violation.severity.clone(),
        violation.summary.clone(),
        join_versions(violation.infected_versions.as_ref()),
        join_versions(violation.fix_versions.as_ref()),
    ]
}

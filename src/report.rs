//! Report table assembly and CSV serialization.
//!
//! The whole table is accumulated in memory and written in one shot at the
//! end of the run; nothing is flushed incrementally, so a failed run leaves
//! no partial artifact behind.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Column set for reports built from the violations API.
pub const VIOLATION_HEADERS: [&str; 9] = [
    "Manager",
    "Package",
    "Version",
    "Type",
    "Summary",
    "Description",
    "Severity",
    "Infected Versions",
    "Fixed Versions",
];

/// Column set for reports built from a pre-fetched violations export.
/// Carries no Description column; the two entry points have always diverged
/// here and downstream consumers rely on each shape as-is.
pub const EXPORT_HEADERS: [&str; 8] = [
    "manager",
    "package",
    "version",
    "type",
    "severity",
    "summary",
    "infected versions",
    "fixed versions",
];

/// An ordered report: one fixed header row plus data rows in the order they
/// were appended.
#[derive(Debug)]
pub struct ReportTable {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(headers: &'static [&'static str]) -> Self {
        ReportTable {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends one data row. Row arity must match the header.
    pub fn append(&mut self, row: impl IntoIterator<Item = String>) {
        let row: Vec<String> = row.into_iter().collect();
        assert_eq!(
            row.len(),
            self.headers.len(),
            "report row arity does not match header"
        );
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Serializes the table to `dest`. Consumes the table: a report is
    /// finalized exactly once.
    pub fn finalize(self, dest: &Path) -> Result<()> {
        let file = File::create(dest)?;
        self.write_to(file)
    }

    fn write_to<W: Write>(self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::violation::{NormalizedRecord, ViolationDetail};
    use crate::normalize::normalize;

    fn render(table: ReportTable) -> String {
        let mut buffer = Vec::new();
        table.write_to(&mut buffer).expect("in-memory write");
        String::from_utf8(buffer).expect("csv output is utf-8")
    }

    #[test]
    fn empty_table_serializes_to_header_row_only() {
        let output = render(ReportTable::new(&VIOLATION_HEADERS));
        assert_eq!(
            output,
            "Manager,Package,Version,Type,Summary,Description,Severity,\
             Infected Versions,Fixed Versions\n"
        );
    }

    #[test]
    fn rows_are_written_in_append_order() {
        let mut table = ReportTable::new(&EXPORT_HEADERS);
        table.append((0..8).map(|i| format!("a{i}")));
        table.append((0..8).map(|i| format!("b{i}")));

        let output = render(table);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("a0,"));
        assert!(lines[2].starts_with("b0,"));
    }

    #[test]
    fn fields_with_commas_stay_in_one_cell() {
        let mut table = ReportTable::new(&EXPORT_HEADERS);
        let mut row: Vec<String> = (0..8).map(|_| String::new()).collect();
        row[5] = "affects login, signup and password reset".to_string();
        table.append(row);

        let output = render(table);
        assert!(output.contains("\"affects login, signup and password reset\""));
    }

    #[test]
    fn normalized_record_arity_matches_violation_header() {
        let record = NormalizedRecord {
            manager: String::new(),
            package: String::new(),
            version: String::new(),
            violation_type: String::new(),
            summary: String::new(),
            description: String::new(),
            severity: String::new(),
            infected_versions: String::new(),
            fixed_versions: String::new(),
        };
        assert_eq!(record.into_row().len(), VIOLATION_HEADERS.len());
    }

    #[test]
    #[should_panic(expected = "report row arity")]
    fn short_row_is_rejected() {
        let mut table = ReportTable::new(&VIOLATION_HEADERS);
        table.append(vec!["only-one-field".to_string()]);
    }

    #[test]
    fn normalized_details_round_into_nine_populated_cells() {
        let detail = ViolationDetail {
            infected_components: vec!["nuget://Org:PackageX:3.1.0".to_string()],
            violation_type: Some("security".to_string()),
            summary: Some("buffer overflow".to_string()),
            description: Some("long text".to_string()),
            severity: Some("High".to_string()),
            infected_versions: Some(vec!["3.1.0".to_string()]),
            fix_versions: Some(vec!["3.1.1".to_string()]),
        };

        let mut table = ReportTable::new(&VIOLATION_HEADERS);
        table.append(normalize(&detail).into_row());

        let output = render(table);
        let data_line = output.lines().nth(1).expect("one data row");
        assert_eq!(
            data_line,
            "Nuget,PackageX,3.1.0,security,buffer overflow,long text,High,3.1.0,3.1.1"
        );
    }
}

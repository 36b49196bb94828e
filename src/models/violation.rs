use serde::{Deserialize, Serialize};

/// Body for the credential exchange request.
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

/// Token returned by the credential exchange, sent on every later request.
#[derive(Debug, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// Body for one violations listing request.
///
/// `offset` carries the 1-based page index, not an item offset; the server
/// multiplies it by `limit` itself.
#[derive(Debug, Serialize)]
pub struct ViolationsRequest<'a> {
    pub filters: ViolationsFilter<'a>,
    pub pagination: PageRequest,
}

#[derive(Debug, Serialize)]
pub struct ViolationsFilter<'a> {
    pub watch_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

/// One page of the violations listing.
///
/// Both keys are required: a page without them cannot drive pagination and
/// fails the run.
#[derive(Debug, Deserialize)]
pub struct ViolationsPage {
    pub total_violations: u64,
    pub violations: Vec<ViolationSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ViolationSummary {
    pub violation_details_url: String,
}

/// Full payload for a single violation.
///
/// The platform does not emit these uniformly; everything except the infected
/// component list can be absent.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ViolationDetail {
    #[serde(default)]
    pub infected_components: Vec<String>,
    #[serde(rename = "type")]
    pub violation_type: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub infected_versions: Option<Vec<String>>,
    pub fix_versions: Option<Vec<String>>,
}

/// Flat report row for the API path. Every field is always populated, with
/// empty strings standing in for whatever the payload lacked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub manager: String,
    pub package: String,
    pub version: String,
    pub violation_type: String,
    pub summary: String,
    pub description: String,
    pub severity: String,
    pub infected_versions: String,
    pub fixed_versions: String,
}

impl NormalizedRecord {
    /// Field order matches `report::VIOLATION_HEADERS`.
    pub fn into_row(self) -> [String; 9] {
        [
            self.manager,
            self.package,
            self.version,
            self.violation_type,
            self.summary,
            self.description,
            self.severity,
            self.infected_versions,
            self.fixed_versions,
        ]
    }
}

/// A violations export document as downloaded from the platform beforehand,
/// fed in through `--from-json`.
#[derive(Debug, Deserialize)]
pub struct RawViolationsDoc {
    pub data: Vec<RawViolation>,
}

#[derive(Debug, Deserialize)]
pub struct RawViolation {
    pub comp_id: String,
    pub comp_name: String,
    pub comp_version: String,
    #[serde(rename = "type", default)]
    pub violation_type: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub summary: String,
    pub infected_versions: Option<Vec<String>>,
    pub fix_versions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_page_requires_total_and_violation_list() {
        let missing_list = r#"{"total_violations": 3}"#;
        assert!(serde_json::from_str::<ViolationsPage>(missing_list).is_err());

        let missing_total = r#"{"violations": []}"#;
        assert!(serde_json::from_str::<ViolationsPage>(missing_total).is_err());

        let page: ViolationsPage = serde_json::from_str(
            r#"{"total_violations": 1,
                "violations": [{"violation_details_url": "https://x/api/v1/violations/7"}]}"#,
        )
        .expect("well-formed page");
        assert_eq!(page.total_violations, 1);
        assert_eq!(page.violations[0].violation_details_url, "https://x/api/v1/violations/7");
    }

    #[test]
    fn sparse_detail_payload_deserializes_with_absent_fields() {
        let detail: ViolationDetail =
            serde_json::from_str(r#"{"severity": "Medium"}"#).expect("sparse detail");

        assert!(detail.infected_components.is_empty());
        assert_eq!(detail.severity.as_deref(), Some("Medium"));
        assert!(detail.violation_type.is_none());
        assert!(detail.summary.is_none());
        assert!(detail.description.is_none());
        assert!(detail.infected_versions.is_none());
        assert!(detail.fix_versions.is_none());
    }
}

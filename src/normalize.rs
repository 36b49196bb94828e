//! Flattening of violation payloads into report rows.
//!
//! The platform's detail payloads are not uniform: most fields can be absent
//! and the affected component is encoded as a single composite identifier
//! string. Everything here is total — a payload can be sparse or oddly
//! shaped, but normalization never fails.

use crate::models::violation::{NormalizedRecord, ViolationDetail};

/// Separator used when joining infected/fixed version lists into one cell.
pub const VERSION_SEPARATOR: &str = " || ";

/// Package managers recognized in composite component identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Nuget,
    Npm,
    Maven,
    Pypi,
    Go,
    Docker,
}

impl PackageManager {
    /// Maps a component-id scheme token to a manager.
    ///
    /// The mapping is deliberately an explicit table so that "unrecognized"
    /// is a defined outcome rather than a fall-through of substring checks.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "nuget" => Some(PackageManager::Nuget),
            "npm" => Some(PackageManager::Npm),
            "gav" => Some(PackageManager::Maven),
            "pypi" => Some(PackageManager::Pypi),
            "go" => Some(PackageManager::Go),
            "docker" => Some(PackageManager::Docker),
            _ => None,
        }
    }

    /// Name written into the report's Manager column.
    pub fn label(self) -> &'static str {
        match self {
            PackageManager::Nuget => "Nuget",
            PackageManager::Npm => "NPM",
            PackageManager::Maven => "Maven",
            PackageManager::Pypi => "PyPI",
            PackageManager::Go => "Go",
            PackageManager::Docker => "Docker",
        }
    }
}

/// Manager column value for a composite component id, `""` when the scheme
/// is missing or unrecognized.
pub fn manager_label(comp_id: &str) -> &'static str {
    let scheme = comp_id.split_once("://").map(|(s, _)| s).unwrap_or("");
    PackageManager::from_scheme(scheme)
        .map(PackageManager::label)
        .unwrap_or("")
}

/// Splits a composite identifier like `nuget://Org:PackageX:3.1.0` into
/// (manager, package, version).
///
/// After the scheme, segments are colon-delimited with the version last and
/// the package name just before it; any namespace segments in front are
/// dropped. Missing pieces come back as empty strings.
pub fn parse_component_id(comp_id: &str) -> (String, String, String) {
    let manager = manager_label(comp_id).to_string();
    let rest = comp_id
        .split_once("://")
        .map(|(_, r)| r)
        .unwrap_or(comp_id);

    let segments: Vec<&str> = rest.split(':').collect();
    let (package, version) = match segments.as_slice() {
        [] | [""] => (String::new(), String::new()),
        [only] => (only.to_string(), String::new()),
        [.., name, version] => (name.to_string(), version.to_string()),
    };

    (manager, package, version)
}

/// Joins a version list into one cell; an absent list joins to `""`.
pub fn join_versions(versions: Option<&Vec<String>>) -> String {
    match versions {
        Some(list) => list.join(VERSION_SEPARATOR),
        None => String::new(),
    }
}

/// Flattens one violation detail into a report row.
///
/// The first infected component carries the package coordinates; each
/// optional field independently defaults to an empty string.
pub fn normalize(detail: &ViolationDetail) -> NormalizedRecord {
    let comp_id = detail
        .infected_components
        .first()
        .map(String::as_str)
        .unwrap_or("");
    let (manager, package, version) = parse_component_id(comp_id);

    NormalizedRecord {
        manager,
        package,
        version,
        violation_type: detail.violation_type.clone().unwrap_or_default(),
        summary: detail.summary.clone().unwrap_or_default(),
        description: detail.description.clone().unwrap_or_default(),
        severity: detail.severity.clone().unwrap_or_default(),
        infected_versions: join_versions(detail.infected_versions.as_ref()),
        fixed_versions: join_versions(detail.fix_versions.as_ref()),
    }
}

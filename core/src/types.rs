//! Response shapes for the Paper API.
//!
//! # Design
//! Field names match the wire's snake_case keys exactly, so no rename
//! attributes are needed apart from the lowercase `Channel` tags. Every
//! field is required: a response missing one fails to decode instead of
//! silently producing a partially-populated record. `time` stays a plain
//! string so payloads round-trip verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Release maturity of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Default,
    Experimental,
}

/// One source change included in a build, in upstream commit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub commit: String,
    pub summary: String,
    pub message: String,
}

/// A downloadable artifact: file name plus sha256 hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub name: String,
    pub sha256: String,
}

/// Full description of one build within a version. `downloads` is keyed by
/// artifact role, e.g. `"application"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBuild {
    pub build: u32,
    pub time: String,
    pub channel: Channel,
    pub promoted: bool,
    pub changes: Vec<Change>,
    pub downloads: BTreeMap<String, Download>,
}

/// A build inside a version-family listing, tagged with the version it
/// belongs to since family builds span versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFamilyBuild {
    pub version: String,
    pub build: u32,
    pub time: String,
    pub channel: Channel,
    pub promoted: bool,
    pub changes: Vec<Change>,
    pub downloads: BTreeMap<String, Download>,
}

/// Response of `GET /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<String>,
}

/// Response of `GET /projects/{project}`. `versions` is ordered oldest to
/// newest by the API's contract; the last element is the most recent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project_id: String,
    pub project_name: String,
    pub version_groups: Vec<String>,
    pub versions: Vec<String>,
}

/// Response of `GET /projects/{project}/versions/{version}`. `builds` holds
/// ascending build numbers, last = most recent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub project_id: String,
    pub project_name: String,
    pub version: String,
    pub builds: Vec<u32>,
}

/// Response of `GET /projects/{project}/versions/{version}/builds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildsResponse {
    pub project_id: String,
    pub project_name: String,
    pub version: String,
    pub builds: Vec<VersionBuild>,
}

/// Response of `GET /projects/{project}/versions/{version}/builds/{build}`:
/// one build with its project and version context echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResponse {
    pub project_id: String,
    pub project_name: String,
    pub version: String,
    pub build: u32,
    pub time: String,
    pub channel: Channel,
    pub promoted: bool,
    pub changes: Vec<Change>,
    pub downloads: BTreeMap<String, Download>,
}

/// Response of `GET /projects/{project}/version_group/{family}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFamilyResponse {
    pub project_id: String,
    pub project_name: String,
    pub version_group: String,
    pub versions: Vec<String>,
}

/// Response of `GET /projects/{project}/version_group/{family}/builds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFamilyBuildsResponse {
    pub project_id: String,
    pub project_name: String,
    pub version_group: String,
    pub versions: Vec<String>,
    pub builds: Vec<VersionFamilyBuild>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_uses_lowercase_wire_tags() {
        assert_eq!(serde_json::to_string(&Channel::Default).unwrap(), "\"default\"");
        assert_eq!(
            serde_json::from_str::<Channel>("\"experimental\"").unwrap(),
            Channel::Experimental
        );
    }

    #[test]
    fn channel_rejects_unknown_tag() {
        assert!(serde_json::from_str::<Channel>("\"beta\"").is_err());
    }

    #[test]
    fn missing_field_fails_to_decode() {
        // No `promoted` key: decoding must fail rather than default it.
        let json = r#"{"build":1,"time":"2023-01-01T00:00:00.000Z","channel":"default","changes":[],"downloads":{}}"#;
        assert!(serde_json::from_str::<VersionBuild>(json).is_err());
    }
}

//! In-process mock of the build-distribution API.
//!
//! Serves the read-only project/version/build endpoints from a fixed
//! in-memory fixture. The fixture includes a project with no versions and a
//! version with no builds so client failure paths are reachable over real
//! HTTP. Unknown identifiers return 404.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Serialize)]
pub struct Change {
    pub commit: String,
    pub summary: String,
    pub message: String,
}

#[derive(Clone, Serialize)]
pub struct Download {
    pub name: String,
    pub sha256: String,
}

#[derive(Clone, Serialize)]
pub struct Build {
    pub build: u32,
    pub time: String,
    pub channel: String,
    pub promoted: bool,
    pub changes: Vec<Change>,
    pub downloads: BTreeMap<String, Download>,
}

#[derive(Clone)]
pub struct Version {
    pub version: String,
    pub group: String,
    pub builds: Vec<Build>,
}

#[derive(Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub version_groups: Vec<String>,
    pub versions: Vec<Version>,
}

/// The dataset every handler reads from. Immutable once constructed, so it
/// is shared without locking.
pub struct Fixture {
    pub projects: Vec<Project>,
}

impl Fixture {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Three projects covering the interesting cases: `paper` with two
    /// versions and builds, `waterfall` with a build-less version, and
    /// `bare` with no versions at all.
    pub fn seed() -> Self {
        let jar = |project: &str, version: &str, build: u32| {
            let name = format!("{project}-{version}-{build}.jar");
            let sha256 = format!(
                "{:064x}",
                u64::from(build).wrapping_mul(0x9e37_79b9_7f4a_7c15)
            );
            BTreeMap::from([("application".to_string(), Download { name, sha256 })])
        };

        let paper = Project {
            id: "paper".to_string(),
            name: "Paper".to_string(),
            version_groups: vec!["1.19".to_string(), "1.20".to_string()],
            versions: vec![
                Version {
                    version: "1.19".to_string(),
                    group: "1.19".to_string(),
                    builds: vec![Build {
                        build: 3,
                        time: "2022-07-22T10:01:30.000Z".to_string(),
                        channel: "experimental".to_string(),
                        promoted: false,
                        changes: vec![Change {
                            commit: "91b5a4e".to_string(),
                            summary: "Initial 1.19 bringup".to_string(),
                            message: "Initial 1.19 bringup\n\nPort patches to the new mappings."
                                .to_string(),
                        }],
                        downloads: jar("paper", "1.19", 3),
                    }],
                },
                Version {
                    version: "1.20".to_string(),
                    group: "1.20".to_string(),
                    builds: vec![
                        Build {
                            build: 10,
                            time: "2023-06-08T18:24:11.000Z".to_string(),
                            channel: "default".to_string(),
                            promoted: false,
                            changes: vec![Change {
                                commit: "4f0ac92".to_string(),
                                summary: "Fix entity tracking range".to_string(),
                                message: "Fix entity tracking range".to_string(),
                            }],
                            downloads: jar("paper", "1.20", 10),
                        },
                        Build {
                            build: 17,
                            time: "2023-06-12T07:13:04.000Z".to_string(),
                            channel: "default".to_string(),
                            promoted: true,
                            changes: vec![Change {
                                commit: "0a1b2c3".to_string(),
                                summary: "Fix chunk save regression".to_string(),
                                message: "Fix chunk save regression\n\nRestore pre-1.20 behavior."
                                    .to_string(),
                            }],
                            downloads: jar("paper", "1.20", 17),
                        },
                    ],
                },
            ],
        };

        let waterfall = Project {
            id: "waterfall".to_string(),
            name: "Waterfall".to_string(),
            version_groups: vec!["0.1".to_string()],
            versions: vec![Version {
                version: "0.1".to_string(),
                group: "0.1".to_string(),
                builds: Vec::new(),
            }],
        };

        let bare = Project {
            id: "bare".to_string(),
            name: "Bare".to_string(),
            version_groups: Vec::new(),
            versions: Vec::new(),
        };

        Self {
            projects: vec![paper, waterfall, bare],
        }
    }
}

type AppState = Arc<Fixture>;

pub fn app() -> Router {
    let state: AppState = Arc::new(Fixture::seed());
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{project}", get(get_project))
        .route("/projects/{project}/versions/{version}", get(get_version))
        .route(
            "/projects/{project}/versions/{version}/builds",
            get(get_builds),
        )
        .route(
            "/projects/{project}/versions/{version}/builds/{build}",
            get(get_build),
        )
        .route("/projects/{project}/version_group/{family}", get(get_family))
        .route(
            "/projects/{project}/version_group/{family}/builds",
            get(get_family_builds),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_projects(State(fixture): State<AppState>) -> Json<Value> {
    let ids: Vec<&str> = fixture.projects.iter().map(|p| p.id.as_str()).collect();
    Json(json!({ "projects": ids }))
}

async fn get_project(
    State(fixture): State<AppState>,
    Path(project): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let p = fixture.project(&project).ok_or(StatusCode::NOT_FOUND)?;
    let versions: Vec<&str> = p.versions.iter().map(|v| v.version.as_str()).collect();
    Ok(Json(json!({
        "project_id": p.id,
        "project_name": p.name,
        "version_groups": p.version_groups,
        "versions": versions,
    })))
}

async fn get_version(
    State(fixture): State<AppState>,
    Path((project, version)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let p = fixture.project(&project).ok_or(StatusCode::NOT_FOUND)?;
    let v = find_version(p, &version).ok_or(StatusCode::NOT_FOUND)?;
    let builds: Vec<u32> = v.builds.iter().map(|b| b.build).collect();
    Ok(Json(json!({
        "project_id": p.id,
        "project_name": p.name,
        "version": v.version,
        "builds": builds,
    })))
}

async fn get_builds(
    State(fixture): State<AppState>,
    Path((project, version)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let p = fixture.project(&project).ok_or(StatusCode::NOT_FOUND)?;
    let v = find_version(p, &version).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "project_id": p.id,
        "project_name": p.name,
        "version": v.version,
        "builds": v.builds,
    })))
}

async fn get_build(
    State(fixture): State<AppState>,
    Path((project, version, build)): Path<(String, String, u32)>,
) -> Result<Json<Value>, StatusCode> {
    let p = fixture.project(&project).ok_or(StatusCode::NOT_FOUND)?;
    let v = find_version(p, &version).ok_or(StatusCode::NOT_FOUND)?;
    let b = v
        .builds
        .iter()
        .find(|b| b.build == build)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "project_id": p.id,
        "project_name": p.name,
        "version": v.version,
        "build": b.build,
        "time": b.time,
        "channel": b.channel,
        "promoted": b.promoted,
        "changes": b.changes,
        "downloads": b.downloads,
    })))
}

async fn get_family(
    State(fixture): State<AppState>,
    Path((project, family)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let p = fixture.project(&project).ok_or(StatusCode::NOT_FOUND)?;
    if !p.version_groups.contains(&family) {
        return Err(StatusCode::NOT_FOUND);
    }
    let versions: Vec<&str> = family_versions(p, &family);
    Ok(Json(json!({
        "project_id": p.id,
        "project_name": p.name,
        "version_group": family,
        "versions": versions,
    })))
}

async fn get_family_builds(
    State(fixture): State<AppState>,
    Path((project, family)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let p = fixture.project(&project).ok_or(StatusCode::NOT_FOUND)?;
    if !p.version_groups.contains(&family) {
        return Err(StatusCode::NOT_FOUND);
    }
    let versions: Vec<&str> = family_versions(p, &family);
    let builds: Vec<Value> = p
        .versions
        .iter()
        .filter(|v| v.group == family)
        .flat_map(|v| {
            v.builds.iter().map(|b| {
                json!({
                    "version": v.version,
                    "build": b.build,
                    "time": b.time,
                    "channel": b.channel,
                    "promoted": b.promoted,
                    "changes": b.changes,
                    "downloads": b.downloads,
                })
            })
        })
        .collect();
    Ok(Json(json!({
        "project_id": p.id,
        "project_name": p.name,
        "version_group": family,
        "versions": versions,
        "builds": builds,
    })))
}

fn find_version<'a>(project: &'a Project, version: &str) -> Option<&'a Version> {
    project.versions.iter().find(|v| v.version == version)
}

fn family_versions<'a>(project: &'a Project, family: &str) -> Vec<&'a str> {
    project
        .versions
        .iter()
        .filter(|v| v.group == family)
        .map(|v| v.version.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_expected_projects() {
        let fixture = Fixture::seed();
        assert!(fixture.project("paper").is_some());
        assert!(fixture.project("waterfall").is_some());
        assert!(fixture.project("bare").is_some());
        assert!(fixture.project("velocity").is_none());
    }

    #[test]
    fn seed_build_numbers_are_ascending() {
        let fixture = Fixture::seed();
        let paper = fixture.project("paper").unwrap();
        for v in &paper.versions {
            let numbers: Vec<u32> = v.builds.iter().map(|b| b.build).collect();
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            assert_eq!(numbers, sorted, "builds of {} out of order", v.version);
        }
    }

    #[test]
    fn build_serializes_with_wire_keys() {
        let fixture = Fixture::seed();
        let build = &fixture.project("paper").unwrap().versions[1].builds[1];
        let value = serde_json::to_value(build).unwrap();
        assert_eq!(value["build"], 17);
        assert_eq!(value["channel"], "default");
        assert_eq!(value["promoted"], true);
        assert_eq!(
            value["downloads"]["application"]["name"],
            "paper-1.20-17.jar"
        );
    }
}

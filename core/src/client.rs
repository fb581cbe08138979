//! Query operations against the build-distribution API.
//!
//! # Design
//! `PaperClient` holds a fixed `base_url` and an injected transport, and
//! carries no mutable state between calls. Each query method issues exactly
//! one GET and decodes the body into its response shape. The two "latest"
//! helpers compose queries: they take the *last* element of the version or
//! build list, trusting the API's documented chronological ordering rather
//! than re-sorting locally.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::transport::{HttpResponse, Transport, UreqTransport};
use crate::types::{
    BuildResponse, BuildsResponse, ProjectResponse, ProjectsResponse, VersionFamilyBuildsResponse,
    VersionFamilyResponse, VersionResponse,
};

/// Stateless client for the build-distribution API.
///
/// Constructed once with a base URL; every operation takes `&self` and is
/// independently invokable, so callers may issue requests concurrently.
#[derive(Debug, Clone)]
pub struct PaperClient<T: Transport = UreqTransport> {
    base_url: String,
    transport: T,
}

impl PaperClient<UreqTransport> {
    /// Client using the default blocking ureq transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: Transport> PaperClient<T> {
    /// Client over a caller-supplied transport, for test substitution.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// `GET /projects` — every project the service distributes.
    pub fn projects(&self) -> Result<ProjectsResponse, ApiError> {
        self.get_json(&format!("{}/projects", self.base_url))
    }

    /// `GET /projects/{project}` — version groups and the ordered version
    /// list of one project.
    pub fn project(&self, project: &str) -> Result<ProjectResponse, ApiError> {
        self.get_json(&format!("{}/projects/{project}", self.base_url))
    }

    /// `GET /projects/{project}/versions/{version}` — ascending build
    /// numbers for one version.
    pub fn version(&self, project: &str, version: &str) -> Result<VersionResponse, ApiError> {
        self.get_json(&format!(
            "{}/projects/{project}/versions/{version}",
            self.base_url
        ))
    }

    /// `GET /projects/{project}/versions/{version}/builds` — full build
    /// records for one version.
    pub fn builds(&self, project: &str, version: &str) -> Result<BuildsResponse, ApiError> {
        self.get_json(&format!(
            "{}/projects/{project}/versions/{version}/builds",
            self.base_url
        ))
    }

    /// `GET /projects/{project}/versions/{version}/builds/{build}` — one
    /// build with its context.
    pub fn build(
        &self,
        project: &str,
        version: &str,
        build: u32,
    ) -> Result<BuildResponse, ApiError> {
        self.get_json(&format!(
            "{}/projects/{project}/versions/{version}/builds/{build}",
            self.base_url
        ))
    }

    /// `GET /projects/{project}/version_group/{family}` — versions belonging
    /// to one version group.
    pub fn version_family(
        &self,
        project: &str,
        family: &str,
    ) -> Result<VersionFamilyResponse, ApiError> {
        self.get_json(&format!(
            "{}/projects/{project}/version_group/{family}",
            self.base_url
        ))
    }

    /// `GET /projects/{project}/version_group/{family}/builds` — builds
    /// across every version in the group.
    pub fn version_family_builds(
        &self,
        project: &str,
        family: &str,
    ) -> Result<VersionFamilyBuildsResponse, ApiError> {
        self.get_json(&format!(
            "{}/projects/{project}/version_group/{family}/builds",
            self.base_url
        ))
    }

    /// Download URL for one artifact. Pure string construction — no request
    /// is issued and no existence check is performed, so the caller must
    /// have obtained valid identifiers first (e.g. via [`Self::build`]).
    pub fn download_url(&self, project: &str, version: &str, build: u32) -> String {
        format!(
            "{}/projects/{project}/versions/{version}/builds/{build}/downloads/{project}-{version}-{build}.jar",
            self.base_url
        )
    }

    /// Download URL of the newest build of the newest version.
    ///
    /// Two dependent round trips: fetch the project's versions and take the
    /// last, then fetch that version's builds and take the last. Fails with
    /// [`ApiError::EmptyVersionList`] or [`ApiError::EmptyBuildList`] when
    /// there is no element to take.
    pub fn latest_version_download_url(&self, project: &str) -> Result<String, ApiError> {
        let info = self.project(project)?;
        let version = info.versions.last().ok_or(ApiError::EmptyVersionList)?;
        let builds = self.builds(project, version)?;
        let latest = builds.builds.last().ok_or(ApiError::EmptyBuildList)?;
        Ok(self.download_url(project, version, latest.build))
    }

    /// Download URL of the newest build of a given version. One round trip;
    /// fails with [`ApiError::EmptyBuildList`] when the version has no
    /// builds.
    pub fn latest_build_download_url(
        &self,
        project: &str,
        version: &str,
    ) -> Result<String, ApiError> {
        let info = self.version(project, version)?;
        let latest = info.builds.last().copied().ok_or(ApiError::EmptyBuildList)?;
        Ok(self.download_url(project, version, latest))
    }

    fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        let response = self.transport.get(url)?;
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

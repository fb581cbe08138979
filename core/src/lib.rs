//! Typed client for the Paper build-distribution API.
//!
//! # Overview
//! Every method of [`PaperClient`] maps one-to-one to a remote endpoint:
//! list projects, fetch a project, list versions and builds, fetch one
//! build, and resolve "latest" download URLs. Each call performs a single
//! HTTP GET and decodes the JSON body into a declared response shape.
//!
//! # Design
//! - `PaperClient` is stateless — it holds only `base_url` and a transport.
//! - The transport is an injected [`Transport`] implementation, so tests can
//!   substitute a recording double; production code uses [`UreqTransport`].
//! - Response shapes mirror the wire exactly (snake_case keys, no defaults
//!   invented on decode) and are never mutated after construction.
//! - No retries, no caching, no timeouts beyond transport defaults — a
//!   failed request surfaces immediately as an [`ApiError`].

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::PaperClient;
pub use error::ApiError;
pub use transport::{HttpResponse, Transport, UreqTransport};
pub use types::{
    BuildResponse, BuildsResponse, Change, Channel, Download, ProjectResponse, ProjectsResponse,
    VersionBuild, VersionFamilyBuild, VersionFamilyBuildsResponse, VersionFamilyResponse,
    VersionResponse,
};

//! Verify decoding against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file holds the endpoint path and a realistic response
//! payload. Every vector is checked three ways: the client requests exactly
//! the expected path, key fields decode to the expected values, and the
//! decoded value re-serializes to a JSON value equal to the payload — so no
//! field is dropped, defaulted, or invented on the way through.

use std::cell::RefCell;
use std::rc::Rc;

use paper_core::{ApiError, Channel, HttpResponse, PaperClient, Transport};
use serde_json::Value;

const BASE_URL: &str = "https://api.example.org/v2";

/// Serves one canned body and records every requested URL into a cell the
/// test keeps a handle to.
struct VectorTransport {
    body: String,
    requested: Rc<RefCell<Vec<String>>>,
}

impl Transport for VectorTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.requested.borrow_mut().push(url.to_string());
        Ok(HttpResponse {
            status: 200,
            body: self.body.clone(),
        })
    }
}

/// Load a vector file into (expected path, response payload, client,
/// recorded-requests handle).
fn setup(raw: &str) -> (String, Value, PaperClient<VectorTransport>, Rc<RefCell<Vec<String>>>) {
    let v: Value = serde_json::from_str(raw).unwrap();
    let path = v["path"].as_str().unwrap().to_string();
    let response = v["response"].clone();
    let requested = Rc::new(RefCell::new(Vec::new()));
    let client = PaperClient::with_transport(
        BASE_URL,
        VectorTransport {
            body: response.to_string(),
            requested: Rc::clone(&requested),
        },
    );
    (path, response, client, requested)
}

fn assert_single_request(requested: &Rc<RefCell<Vec<String>>>, path: &str) {
    assert_eq!(*requested.borrow(), vec![format!("{BASE_URL}{path}")]);
}

#[test]
fn projects_vector() {
    let (path, response, client, requested) =
        setup(include_str!("../../test-vectors/projects.json"));
    let decoded = client.projects().unwrap();

    assert_single_request(&requested, &path);
    assert_eq!(decoded.projects.len(), 5);
    assert_eq!(decoded.projects[0], "paper");
    assert_eq!(serde_json::to_value(&decoded).unwrap(), response);
}

#[test]
fn project_vector() {
    let (path, response, client, requested) =
        setup(include_str!("../../test-vectors/project.json"));
    let decoded = client.project("paper").unwrap();

    assert_single_request(&requested, &path);
    assert_eq!(decoded.project_id, "paper");
    assert_eq!(decoded.project_name, "Paper");
    assert_eq!(decoded.version_groups, vec!["1.19", "1.20"]);
    assert_eq!(decoded.versions.last().unwrap(), "1.20.1");
    assert_eq!(serde_json::to_value(&decoded).unwrap(), response);
}

#[test]
fn version_vector() {
    let (path, response, client, requested) =
        setup(include_str!("../../test-vectors/version.json"));
    let decoded = client.version("paper", "1.20.1").unwrap();

    assert_single_request(&requested, &path);
    assert_eq!(decoded.version, "1.20.1");
    assert_eq!(decoded.builds, vec![1, 2, 5, 9, 14, 23]);
    assert_eq!(serde_json::to_value(&decoded).unwrap(), response);
}

#[test]
fn builds_vector() {
    let (path, response, client, requested) =
        setup(include_str!("../../test-vectors/builds.json"));
    let decoded = client.builds("paper", "1.20.1").unwrap();

    assert_single_request(&requested, &path);
    assert_eq!(decoded.builds.len(), 2);

    let first = &decoded.builds[0];
    assert_eq!(first.build, 14);
    assert_eq!(first.channel, Channel::Experimental);
    assert!(!first.promoted);

    let second = &decoded.builds[1];
    assert_eq!(second.build, 23);
    assert_eq!(second.channel, Channel::Default);
    assert!(second.promoted);
    assert_eq!(second.changes.len(), 2);
    assert_eq!(second.changes[0].summary, "Fix villager pathfinding crash");
    assert_eq!(second.downloads.len(), 2);
    assert_eq!(second.downloads["application"].name, "paper-1.20.1-23.jar");
    assert_eq!(
        second.downloads["mojang-mappings"].name,
        "paper-mappings-1.20.1-23.txt"
    );

    assert_eq!(serde_json::to_value(&decoded).unwrap(), response);
}

#[test]
fn build_vector() {
    let (path, response, client, requested) = setup(include_str!("../../test-vectors/build.json"));
    let decoded = client.build("paper", "1.20.1", 23).unwrap();

    assert_single_request(&requested, &path);
    assert_eq!(decoded.project_id, "paper");
    assert_eq!(decoded.version, "1.20.1");
    assert_eq!(decoded.build, 23);
    assert_eq!(decoded.time, "2023-07-09T08:02:17.456Z");
    assert_eq!(decoded.channel, Channel::Default);
    assert_eq!(serde_json::to_value(&decoded).unwrap(), response);
}

#[test]
fn version_family_vector() {
    let (path, response, client, requested) =
        setup(include_str!("../../test-vectors/version_family.json"));
    let decoded = client.version_family("paper", "1.20").unwrap();

    assert_single_request(&requested, &path);
    assert_eq!(decoded.version_group, "1.20");
    assert_eq!(decoded.versions, vec!["1.20", "1.20.1"]);
    assert_eq!(serde_json::to_value(&decoded).unwrap(), response);
}

#[test]
fn version_family_builds_vector() {
    let (path, response, client, requested) =
        setup(include_str!("../../test-vectors/version_family_builds.json"));
    let decoded = client.version_family_builds("paper", "1.20").unwrap();

    assert_single_request(&requested, &path);
    assert_eq!(decoded.builds.len(), 2);
    assert_eq!(decoded.builds[0].version, "1.20");
    assert_eq!(decoded.builds[0].build, 17);
    assert_eq!(decoded.builds[1].version, "1.20.1");
    assert_eq!(decoded.builds[1].build, 23);
    assert_eq!(serde_json::to_value(&decoded).unwrap(), response);
}

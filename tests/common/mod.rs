//! Shared fixtures for integration tests.

use mesh_route_compiler::{Route, RevisionTarget};

pub const BASE_DOMAIN: &str = "svc.example.com";
pub const ROUTE_FQDN: &str = "svc.default.svc.cluster.local";
pub const ACTIVATOR: &str = "activator-service.knative-serving.svc.cluster.local";

pub fn route() -> Route {
    Route::new("svc", "default").with_domain(BASE_DOMAIN)
}

/// Host of the service fronting `revision` in the default namespace.
pub fn revision_host(revision: &str) -> String {
    format!("{}-service.default.svc.cluster.local", revision)
}

/// Build targets from `(revision, percent, active)` triples.
#[allow(dead_code)]
pub fn targets(spec: &[(&str, u32, bool)]) -> Vec<RevisionTarget> {
    spec.iter()
        .map(|&(name, percent, active)| RevisionTarget {
            revision_name: name.to_string(),
            percent,
            active,
        })
        .collect()
}

//! Hostnames matched by each traffic target.

use crate::naming::Naming;
use crate::traffic::{Route, DEFAULT_TARGET};

/// Hostnames that should route to the target called `target_name`.
///
/// The default target answers on the route's domain and on its cluster-internal
/// service name, so callers inside and outside the mesh both reach it. Named
/// targets get a subdomain of the route's domain.
pub fn route_domains(
    target_name: &str,
    route: &Route,
    domain: &str,
    naming: &dyn Naming,
) -> Vec<String> {
    if target_name == DEFAULT_TARGET {
        return vec![domain.to_string(), naming.route_service_fqdn(route)];
    }
    vec![format!("{}.{}", target_name, domain)]
}

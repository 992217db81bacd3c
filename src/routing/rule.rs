//! Assembly of a single match-and-forward rule.

use crate::mesh::{HttpMatchRequest, HttpRoute};
use crate::naming::Naming;
use crate::routing::fallback::aggregate_inactive;
use crate::routing::weights::weighted_destinations;
use crate::traffic::RevisionTarget;

/// Build the rule for one traffic target.
///
/// Matches any of `domains` by exact authority. Active revisions are routed
/// directly; inactive ones are folded into a trailing activator destination.
pub fn make_http_route(
    domains: &[String],
    namespace: &str,
    targets: &[RevisionTarget],
    naming: &dyn Naming,
) -> HttpRoute {
    // Match requests are OR'ed together by the proxy.
    let matches = domains
        .iter()
        .map(|domain| HttpMatchRequest::authority_exact(domain.as_str()))
        .collect();

    let (active, inactive) = partition_targets(targets);
    let mut route = weighted_destinations(&active, namespace, naming);

    let append_headers = aggregate_inactive(&inactive, namespace, naming).map(|fallback| {
        route.push(fallback.destination);
        fallback.headers
    });

    HttpRoute {
        matches,
        route,
        append_headers,
    }
}

/// Stable split into (active, inactive).
fn partition_targets(targets: &[RevisionTarget]) -> (Vec<RevisionTarget>, Vec<RevisionTarget>) {
    targets.iter().cloned().partition(|t| t.active)
}

//! Activator fallback for inactive revisions.
//!
//! # Responsibilities
//! - Send the combined share of every cold revision to the activator
//! - Tell the activator, via appended headers, which revision to wake
//!
//! # Design Decisions
//! - One destination for all cold revisions. A weighted destination can only
//!   name a concrete host, and there is no per-destination header here, so N cold
//!   revisions share the activator address and only the largest one is named.
//!   While more than one is cold their relative split is lost.
//! - The largest revision is picked with a `>=` scan: on ties the last one wins.

use std::collections::BTreeMap;

use crate::mesh::DestinationWeight;
use crate::naming::Naming;
use crate::routing::{DEFAULT_ENVOY_TIMEOUT_MS, ENVOY_TIMEOUT_HEADER, PORT_NUMBER};
use crate::traffic::RevisionTarget;

/// The synthetic destination standing in for all inactive revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Activator destination carrying the combined inactive weight.
    pub destination: DestinationWeight,

    /// Headers appended to requests sent to the activator.
    pub headers: BTreeMap<String, String>,
}

/// Collapse inactive targets into one activator destination.
///
/// Returns `None` when there is nothing inactive.
pub fn aggregate_inactive(
    inactive: &[RevisionTarget],
    namespace: &str,
    naming: &dyn Naming,
) -> Option<Fallback> {
    let dominant = dominant_target(inactive)?;
    // Unvalidated input may carry out-of-range percents; never overflow.
    let total = inactive
        .iter()
        .fold(0u32, |acc, t| acc.saturating_add(t.percent));

    tracing::debug!(
        namespace,
        revision = %dominant.revision_name,
        inactive_count = inactive.len(),
        weight = total,
        "Routing inactive revisions through activator"
    );

    let mut headers = BTreeMap::new();
    headers.insert(
        naming.revision_header_name().to_string(),
        dominant.revision_name.clone(),
    );
    headers.insert(naming.namespace_header_name().to_string(), namespace.to_string());
    headers.insert(
        ENVOY_TIMEOUT_HEADER.to_string(),
        DEFAULT_ENVOY_TIMEOUT_MS.to_string(),
    );

    Some(Fallback {
        destination: DestinationWeight::new(naming.activator_fqdn(), PORT_NUMBER, total),
        headers,
    })
}

/// The inactive target with the largest percent; the last one on ties.
fn dominant_target(inactive: &[RevisionTarget]) -> Option<&RevisionTarget> {
    let mut best: Option<&RevisionTarget> = None;
    let mut max = 0;
    for target in inactive {
        if target.percent >= max {
            max = target.percent;
            best = Some(target);
        }
    }
    best
}

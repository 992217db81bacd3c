//! Weighted destinations for active revisions.

use crate::mesh::DestinationWeight;
use crate::naming::Naming;
use crate::routing::PORT_NUMBER;
use crate::traffic::RevisionTarget;

/// One destination per active target, in input order.
///
/// Zero-percent targets are skipped: they stay in the split for bookkeeping
/// (a revision being drained) but must not appear as a destination.
pub fn weighted_destinations(
    active: &[RevisionTarget],
    namespace: &str,
    naming: &dyn Naming,
) -> Vec<DestinationWeight> {
    active
        .iter()
        .filter(|t| t.percent != 0)
        .map(|t| {
            DestinationWeight::new(
                naming.revision_service_fqdn(&t.revision_name, namespace),
                PORT_NUMBER,
                t.percent,
            )
        })
        .collect()
}

//! VirtualService construction for a route.
//!
//! # Responsibilities
//! - Bind the rule set to the shared ingress gateway and the mesh gateway
//! - Emit one rule per traffic target, in sorted name order
//! - Wrap the spec with object metadata owned by the route
//!
//! # Design Decisions
//! - Names are sorted explicitly; map iteration order never reaches the output
//! - Pure: no caching, the same input always yields the same document
//! - A route without a resolved domain compiles with an empty domain segment

use std::collections::{BTreeMap, HashMap};

use crate::mesh::{ObjectMeta, VirtualService, VirtualServiceSpec};
use crate::naming::Naming;
use crate::routing::domains::route_domains;
use crate::routing::rule::make_http_route;
use crate::routing::MESH_GATEWAY;
use crate::traffic::{RevisionTarget, Route, TrafficConfig};

/// Label on generated documents naming the owning route.
pub const ROUTE_LABEL: &str = "route";

/// Compiles traffic splits into VirtualServices.
#[derive(Debug, Clone, Copy)]
pub struct VirtualServiceBuilder<'a> {
    naming: &'a dyn Naming,
}

impl<'a> VirtualServiceBuilder<'a> {
    pub fn new(naming: &'a dyn Naming) -> Self {
        Self { naming }
    }

    /// Build the complete VirtualService document for a route.
    pub fn make_virtual_service(&self, route: &Route, traffic: &TrafficConfig) -> VirtualService {
        let mut labels = BTreeMap::new();
        labels.insert(ROUTE_LABEL.to_string(), route.name.clone());

        let metadata = ObjectMeta {
            name: self.naming.virtual_service_name(route),
            namespace: route.namespace.clone(),
            labels,
            owner_references: vec![self.naming.route_owner_reference(route)],
        };

        VirtualService::new(metadata, self.build(route, &traffic.targets))
    }

    /// Build the routing spec: gateways, hosts and one rule per target name.
    pub fn build(
        &self,
        route: &Route,
        targets: &HashMap<String, Vec<RevisionTarget>>,
    ) -> VirtualServiceSpec {
        let domain = route.domain();
        let route_fqdn = self.naming.route_service_fqdn(route);

        let mut spec = VirtualServiceSpec {
            // The shared gateway serves callers outside the cluster, the mesh
            // gateway serves sidecars inside it.
            gateways: vec![self.naming.ingress_gateway_fqdn(), MESH_GATEWAY.to_string()],
            hosts: vec![format!("*.{}", domain), domain.to_string(), route_fqdn],
            http: Vec::with_capacity(targets.len()),
        };

        let mut names: Vec<&String> = targets.keys().collect();
        names.sort();

        for name in names {
            let domains = route_domains(name, route, domain, self.naming);
            spec.http.push(make_http_route(
                &domains,
                &route.namespace,
                &targets[name],
                self.naming,
            ));
        }

        tracing::debug!(
            route = %route.name,
            namespace = %route.namespace,
            rules = spec.http.len(),
            "Compiled routing spec"
        );

        spec
    }
}

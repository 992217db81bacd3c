//! Cluster naming conventions.
//!
//! # Responsibilities
//! - Derive cluster-internal service hostnames for revisions and routes
//! - Name the shared ingress gateway and the activator service
//! - Build owner references and object names for generated documents
//!
//! # Design Decisions
//! - A trait, so callers with other conventions can plug in their own
//! - Implementations must be pure and non-blocking; the compiler calls them inline

use crate::config::NamingConfig;
use crate::mesh::OwnerReference;
use crate::traffic::Route;

pub const ROUTE_API_VERSION: &str = "serving.knative.dev/v1alpha1";
pub const ROUTE_KIND: &str = "Route";

/// Naming collaborator consulted by the compiler.
pub trait Naming: Send + Sync + std::fmt::Debug {
    /// Cluster-internal hostname of the service fronting a revision.
    fn revision_service_fqdn(&self, revision: &str, namespace: &str) -> String;

    /// Cluster-internal hostname of the route's headless service.
    fn route_service_fqdn(&self, route: &Route) -> String;

    /// Fully qualified name of the shared ingress gateway.
    fn ingress_gateway_fqdn(&self) -> String;

    /// Hostname of the activator that resolves cold revisions.
    fn activator_fqdn(&self) -> String;

    /// Header naming the revision the activator should serve.
    fn revision_header_name(&self) -> &str;

    /// Header naming that revision's namespace.
    fn namespace_header_name(&self) -> &str;

    /// Object name of the VirtualService generated for a route.
    fn virtual_service_name(&self, route: &Route) -> String;

    /// Controller owner reference pointing back at the route.
    fn route_owner_reference(&self, route: &Route) -> OwnerReference {
        OwnerReference {
            api_version: ROUTE_API_VERSION.to_string(),
            kind: ROUTE_KIND.to_string(),
            name: route.name.clone(),
            uid: route.uid,
            controller: true,
            block_owner_deletion: true,
        }
    }
}

/// Default naming scheme: `<service>.<namespace>.<cluster domain>`.
#[derive(Debug, Clone, Default)]
pub struct ClusterNaming {
    config: NamingConfig,
}

impl ClusterNaming {
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    fn service_fqdn(&self, service: &str, namespace: &str) -> String {
        format!("{}.{}.{}", service, namespace, self.config.cluster_domain)
    }
}

impl Naming for ClusterNaming {
    fn revision_service_fqdn(&self, revision: &str, namespace: &str) -> String {
        let service = format!("{}{}", revision, self.config.revision_service_suffix);
        self.service_fqdn(&service, namespace)
    }

    fn route_service_fqdn(&self, route: &Route) -> String {
        self.service_fqdn(&route.name, &route.namespace)
    }

    fn ingress_gateway_fqdn(&self) -> String {
        self.service_fqdn(&self.config.gateway_service, &self.config.system_namespace)
    }

    fn activator_fqdn(&self) -> String {
        self.service_fqdn(&self.config.activator_service, &self.config.system_namespace)
    }

    fn revision_header_name(&self) -> &str {
        &self.config.revision_header
    }

    fn namespace_header_name(&self) -> &str {
        &self.config.namespace_header
    }

    fn virtual_service_name(&self, route: &Route) -> String {
        format!("{}{}", route.name, self.config.virtual_service_suffix)
    }
}

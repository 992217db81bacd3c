//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the compiler.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the route compiler.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MeshConfig {
    /// Cluster naming conventions used to derive hosts and identifiers.
    pub naming: NamingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Cluster naming conventions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingConfig {
    /// DNS suffix appended to `<service>.<namespace>`.
    pub cluster_domain: String,

    /// Namespace the serving system components run in.
    pub system_namespace: String,

    /// Name of the shared ingress gateway service.
    pub gateway_service: String,

    /// Name of the activator (cold-start resolver) service.
    pub activator_service: String,

    /// Suffix appended to a revision name to form its service name.
    pub revision_service_suffix: String,

    /// Suffix appended to a route name to form its VirtualService name.
    pub virtual_service_suffix: String,

    /// Header carrying the revision the activator should wake.
    pub revision_header: String,

    /// Header carrying that revision's namespace.
    pub namespace_header: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            cluster_domain: "svc.cluster.local".to_string(),
            system_namespace: "knative-serving".to_string(),
            gateway_service: "knative-shared-gateway".to_string(),
            activator_service: "activator-service".to_string(),
            revision_service_suffix: "-service".to_string(),
            virtual_service_suffix: "-istio".to_string(),
            revision_header: "knative-serving-revision".to_string(),
            namespace_header: "knative-serving-namespace".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

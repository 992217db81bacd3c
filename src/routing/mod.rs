//! Routing rule compilation.
//!
//! # Data Flow
//! ```text
//! Route + TrafficConfig
//!     → virtual_service.rs (sort target names, bind gateways/hosts)
//!     → for each name:
//!         domains.rs  (hostnames for the target)
//!         rule.rs     (match predicates + destinations)
//!             → weights.rs  (active revisions, zero weights dropped)
//!             → fallback.rs (inactive revisions → one activator destination)
//!     → VirtualServiceSpec (ordered rules)
//!
//! Lookup (diagnostics):
//!     authority → router.rs → matcher.rs → matched rule or no-match
//! ```
//!
//! # Design Decisions
//! - Single synchronous pass, no state kept between calls
//! - Deterministic: same input always compiles to the same rules
//! - The activator destination, when present, is always last

pub mod domains;
pub mod fallback;
pub mod matcher;
pub mod router;
pub mod rule;
pub mod virtual_service;
pub mod weights;

pub use matcher::Matcher;
pub use virtual_service::VirtualServiceBuilder;

/// Service port of revisions and the activator.
pub const PORT_NUMBER: u32 = 80;

/// Name of that port.
pub const PORT_NAME: &str = "http";

/// Envoy header bounding the upstream request time.
pub const ENVOY_TIMEOUT_HEADER: &str = "x-envoy-upstream-rq-timeout-ms";

/// Timeout sent with activator traffic; cold starts are slow.
pub const DEFAULT_ENVOY_TIMEOUT_MS: &str = "60000";

/// Gateway name selecting in-mesh sidecars.
pub const MESH_GATEWAY: &str = "mesh";

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! mesh config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MeshConfig (validated, immutable)
//!     → naming::ClusterNaming
//!
//! route document (TOML / JSON)
//!     → loader.rs (parse)
//!     → validation.rs (traffic split checks)
//!     → routing::VirtualServiceBuilder
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_route_document, ConfigError, RouteDocument};
pub use schema::{MeshConfig, NamingConfig, ObservabilityConfig};
pub use validation::{validate_config, validate_traffic, ValidationError};

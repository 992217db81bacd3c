//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / config / CLI produce:
//!     → tracing events (structured fields: route, namespace, weights)
//!     → logging.rs subscriber (EnvFilter + fmt, stderr)
//! ```
//!
//! # Design Decisions
//! - Compilation logs at debug level only; it runs once per reconcile
//! - Level configurable via config and environment

pub mod logging;

pub use logging::init_logging;

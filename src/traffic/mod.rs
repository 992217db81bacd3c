//! Traffic split inputs.
//!
//! # Data Flow
//! ```text
//! Route document (TOML / JSON)
//!     → Route (identity + resolved domain)
//!     → TrafficConfig (target name → RevisionTarget[])
//!     → routing::VirtualServiceBuilder
//! ```
//!
//! # Design Decisions
//! - Plain value types, constructed per compilation and never mutated
//! - Map key order is not meaningful; the compiler sorts names itself
//! - The empty target name is the default (unnamed) target

pub mod target;

pub use target::{RevisionTarget, Route, TrafficConfig, DEFAULT_TARGET};

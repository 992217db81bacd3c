//! Compiles route traffic splits into service-mesh VirtualServices.

pub mod config;
pub mod mesh;
pub mod naming;
pub mod observability;
pub mod routing;
pub mod traffic;

pub use config::schema::MeshConfig;
pub use naming::{ClusterNaming, Naming};
pub use routing::VirtualServiceBuilder;
pub use traffic::{RevisionTarget, Route, TrafficConfig};

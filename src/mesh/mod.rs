//! Service-mesh routing documents.
//!
//! Serializable shapes of the `networking.istio.io/v1alpha3` VirtualService
//! emitted by the compiler. Field names follow the mesh API (camelCase).

pub mod meta;
pub mod virtual_service;

pub use meta::{ObjectMeta, OwnerReference};
pub use virtual_service::{
    Destination, DestinationWeight, HttpMatchRequest, HttpRoute, PortSelector, StringMatch,
    VirtualService, VirtualServiceSpec,
};

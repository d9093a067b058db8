//! Location acquisition for mukpick: permission gating, device position,
//! reverse geocoding, and the never-failing resolver that ties them together.

pub mod error;
pub mod geocode;
pub mod permission;
pub mod position;
pub mod resolver;

pub use error::GeoError;
pub use geocode::{GeocodeClient, GeocodeResponse};
pub use permission::{
    transition_allowed, PermissionGate, PermissionState, StaticPermissionGate,
    UnsupportedPlatformGate,
};
pub use position::{FixedPositionProvider, Position, PositionProvider, UnavailablePositionProvider};
pub use resolver::{LocationResolver, LocationSource, ResolvedLocation};

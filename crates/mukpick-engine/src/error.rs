use mukpick_geo::{GeoError, PermissionState};
use thiserror::Error;

/// Errors surfaced by the recommendation workflow.
///
/// Location and search failures never appear here: they degrade to the
/// fallback location and to an empty candidate list respectively. What
/// remains is the permission flow, which the caller must resolve with the
/// user (retry prompt or a settings visit).
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The user has not granted the location permission. Carries the final
    /// state so the caller can distinguish a retryable denial from a blocked
    /// one that needs a settings visit.
    #[error("location permission not granted: {0}")]
    PermissionDenied(PermissionState),

    /// The platform has no location capability at all. Fatal to the
    /// location-dependent flow only.
    #[error(transparent)]
    Platform(#[from] GeoError),
}

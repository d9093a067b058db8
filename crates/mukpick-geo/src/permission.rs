//! Location permission gating.
//!
//! The gate mirrors platform permission semantics: `check` never prompts,
//! `request` may show a native dialog. On a desktop host there is no dialog
//! to drive, so [`StaticPermissionGate`] stands in with a fixed outcome; a
//! mobile shell would implement [`PermissionGate`] against its OS APIs.

use async_trait::async_trait;

use crate::error::GeoError;

/// Outcome of a location permission check or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    /// Not yet determined; the user has never been asked.
    Unknown,
    Granted,
    /// Denied, but the user can still be prompted again.
    Denied,
    /// Denied permanently; only the system settings screen can change it.
    Blocked,
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionState::Unknown => write!(f, "unknown"),
            PermissionState::Granted => write!(f, "granted"),
            PermissionState::Denied => write!(f, "denied"),
            PermissionState::Blocked => write!(f, "blocked"),
        }
    }
}

/// Checks and requests the location permission.
#[async_trait]
pub trait PermissionGate {
    /// Returns the current permission state without prompting the user.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Unavailable`] if the platform has no location
    /// capability for this OS.
    async fn check(&self) -> Result<PermissionState, GeoError>;

    /// Triggers the platform permission prompt and returns the decision.
    ///
    /// While blocked this typically returns [`PermissionState::Blocked`]
    /// immediately without prompting again; the caller should offer to open
    /// system settings.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Unavailable`] if the platform has no location
    /// capability for this OS.
    async fn request(&self) -> Result<PermissionState, GeoError>;
}

/// Whether `from -> to` is a legal permission transition within a session.
///
/// Unknown may become anything; denied may be retried into granted or harden
/// into blocked; blocked may change only after a settings visit (to granted
/// or denied); granted never changes until app restart.
#[must_use]
pub fn transition_allowed(from: PermissionState, to: PermissionState) -> bool {
    use PermissionState::{Blocked, Denied, Granted, Unknown};
    if from == to {
        return true;
    }
    match from {
        Unknown => true,
        Denied => matches!(to, Granted | Blocked),
        Blocked => matches!(to, Granted | Denied),
        Granted => false,
    }
}

/// A gate with a fixed outcome, used by the CLI and in tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermissionGate {
    state: PermissionState,
}

impl StaticPermissionGate {
    #[must_use]
    pub fn new(state: PermissionState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn granted() -> Self {
        Self::new(PermissionState::Granted)
    }
}

#[async_trait]
impl PermissionGate for StaticPermissionGate {
    async fn check(&self) -> Result<PermissionState, GeoError> {
        Ok(self.state)
    }

    async fn request(&self) -> Result<PermissionState, GeoError> {
        Ok(self.state)
    }
}

/// A gate for platforms with no location capability; both calls fail with
/// [`GeoError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatformGate;

#[async_trait]
impl PermissionGate for UnsupportedPlatformGate {
    async fn check(&self) -> Result<PermissionState, GeoError> {
        Err(GeoError::Unavailable(
            "no location permission capability on this platform".to_string(),
        ))
    }

    async fn request(&self) -> Result<PermissionState, GeoError> {
        Err(GeoError::Unavailable(
            "no location permission capability on this platform".to_string(),
        ))
    }
}

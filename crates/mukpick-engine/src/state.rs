//! The session's shared location slot.
//!
//! The original design keeps one process-wide location value written once by
//! the resolver and read by every later step. In-flight resolutions are not
//! cancelled when the user moves on, so writes go through a generation token:
//! a result is applied only if no newer resolution has started since the
//! token was issued. Stale results are dropped instead of clobbering newer
//! state.

use std::sync::{PoisonError, RwLock};

use mukpick_geo::ResolvedLocation;

/// Proof of when an update began; see [`LocationSlot::begin_update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateToken {
    generation: u64,
}

#[derive(Debug, Default)]
struct SlotState {
    generation: u64,
    current: Option<ResolvedLocation>,
}

/// Process-scoped holder for the session's resolved location.
#[derive(Debug, Default)]
pub struct LocationSlot {
    inner: RwLock<SlotState>,
}

impl LocationSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a resolution and returns the token that the
    /// eventual result must present. Starting a newer resolution invalidates
    /// every earlier token.
    pub fn begin_update(&self) -> UpdateToken {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        state.generation += 1;
        UpdateToken {
            generation: state.generation,
        }
    }

    /// Applies `location` only if `token` is still the newest one. Returns
    /// whether the write was applied.
    pub fn set_if_current(&self, token: UpdateToken, location: ResolvedLocation) -> bool {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if state.generation != token.generation {
            tracing::debug!(
                stale = token.generation,
                current = state.generation,
                "dropping superseded location update"
            );
            return false;
        }
        state.current = Some(location);
        true
    }

    /// The current session location, if one has been resolved.
    #[must_use]
    pub fn get(&self) -> Option<ResolvedLocation> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .clone()
    }
}

//! The location resolver: bounded position acquisition plus reverse geocoding,
//! with the fixed fallback substituted on any failure.
//!
//! `resolve` never fails. The UX requirement is that the user is never blocked
//! on a location problem, so every error path logs its cause and degrades to
//! [`mukpick_core::LocationInfo::fallback`]. Callers that care whether the
//! reading is real inspect [`ResolvedLocation::source`] rather than matching
//! on city names.

use std::time::Duration;

use mukpick_core::LocationInfo;

use crate::geocode::GeocodeClient;
use crate::position::PositionProvider;

/// How the session's location was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    /// Real device coordinates, successfully geocoded.
    Device,
    /// The fixed fallback; position or geocoding failed.
    Fallback,
}

/// A location reading tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub info: LocationInfo,
    pub source: LocationSource,
}

impl ResolvedLocation {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            info: LocationInfo::fallback(),
            source: LocationSource::Fallback,
        }
    }
}

/// Resolves the current location once per session.
///
/// Precondition (enforced by the orchestrating workflow, not here): the
/// permission gate reports granted before `resolve` is called.
pub struct LocationResolver<P> {
    provider: P,
    geocode: GeocodeClient,
    position_timeout: Duration,
    locality_language: String,
}

impl<P: PositionProvider> LocationResolver<P> {
    pub fn new(
        provider: P,
        geocode: GeocodeClient,
        position_timeout_secs: u64,
        locality_language: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            geocode,
            position_timeout: Duration::from_secs(position_timeout_secs),
            locality_language: locality_language.into(),
        }
    }

    /// Acquires the device position within the bounded wait and reverse-
    /// geocodes it. Always completes with a populated location; failures are
    /// logged and converted to the fallback.
    pub async fn resolve(&self) -> ResolvedLocation {
        let position =
            match tokio::time::timeout(self.position_timeout, self.provider.current_position())
                .await
            {
                Ok(Ok(position)) => position,
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "position acquisition failed; using fallback location");
                    return ResolvedLocation::fallback();
                }
                Err(_) => {
                    tracing::warn!(
                        timeout_secs = self.position_timeout.as_secs(),
                        "position acquisition timed out; using fallback location"
                    );
                    return ResolvedLocation::fallback();
                }
            };

        match self
            .geocode
            .reverse(position.latitude, position.longitude, &self.locality_language)
            .await
        {
            Ok(response) => {
                let info = LocationInfo {
                    latitude: response.latitude.unwrap_or(position.latitude),
                    longitude: response.longitude.unwrap_or(position.longitude),
                    country: response.country_name,
                    province: response.principal_subdivision,
                    city: response.city,
                    district: response.locality,
                };
                tracing::info!(location = %info, "location resolved from device");
                ResolvedLocation {
                    info,
                    source: LocationSource::Device,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "reverse geocoding failed; using fallback location");
                ResolvedLocation::fallback()
            }
        }
    }
}

//! Device position acquisition.
//!
//! The core workflow only needs latitude and longitude; accuracy is carried
//! through for logging. [`FixedPositionProvider`] stands in for the device
//! sensor on hosts without one (coordinates supplied by the caller), and
//! [`UnavailablePositionProvider`] models a device with location services off.

use async_trait::async_trait;

use crate::error::GeoError;

/// A raw coordinate reading from the position source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
}

impl Position {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }
}

/// Source of the current device position.
#[async_trait]
pub trait PositionProvider {
    /// Returns the current position.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Position`] when the sensor reports an error and
    /// [`GeoError::Unavailable`] when there is no position source at all.
    async fn current_position(&self) -> Result<Position, GeoError>;
}

/// Always returns the coordinates it was constructed with.
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionProvider {
    position: Position,
}

impl FixedPositionProvider {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Position::new(latitude, longitude),
        }
    }
}

#[async_trait]
impl PositionProvider for FixedPositionProvider {
    async fn current_position(&self) -> Result<Position, GeoError> {
        Ok(self.position)
    }
}

/// Always fails, like a device with location services switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePositionProvider;

#[async_trait]
impl PositionProvider for UnavailablePositionProvider {
    async fn current_position(&self) -> Result<Position, GeoError> {
        Err(GeoError::Unavailable(
            "no position source available".to_string(),
        ))
    }
}

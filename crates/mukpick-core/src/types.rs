use serde::{Deserialize, Serialize};

/// A resolved, human-readable location for the current session.
///
/// Produced once per session by the location resolver and read by every
/// subsequent step. All string fields are populated: when geocoding cannot be
/// completed the fixed [`LocationInfo::fallback`] value is substituted instead
/// of leaving anything empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub province: String,
    pub city: String,
    pub district: String,
}

impl LocationInfo {
    /// The fixed fallback location (Seoul, Jung-gu) substituted whenever real
    /// location or geocoding data cannot be obtained.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            latitude: 37.5665,
            longitude: 126.9780,
            country: "대한민국".to_string(),
            province: "서울특별시".to_string(),
            city: "서울".to_string(),
            district: "중구".to_string(),
        }
    }
}

impl std::fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.country, self.province, self.city, self.district
        )
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Geographic coordinate domain type.
//!
//! Pure domain type with no UI or network dependencies.

/// A latitude/longitude pair in decimal degrees.
///
/// Coordinates use the WGS84 coordinate system. Out-of-range input is
/// clamped at construction, so formatting and map projection downstream
/// never see an impossible position.
///
/// # Example
///
/// ```ignore
/// use geolocator::geo::Coordinates;
///
/// let eiffel_tower = Coordinates::new(48.8584, 2.2945);
/// assert_eq!(eiffel_tower.latitude_fixed(), "48.858400");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    longitude: f64,
}

impl Coordinates {
    /// Creates new coordinates.
    ///
    /// Values outside valid ranges will be clamped:
    /// - Latitude: -90.0 to 90.0
    /// - Longitude: -180.0 to 180.0
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Formats the latitude with six decimal places, e.g. `48.858400`.
    #[must_use]
    pub fn latitude_fixed(&self) -> String {
        format!("{:.6}", self.latitude)
    }

    /// Formats the longitude with six decimal places, e.g. `2.294500`.
    #[must_use]
    pub fn longitude_fixed(&self) -> String {
        format!("{:.6}", self.longitude)
    }

    /// Generates a URL to view these coordinates on a map.
    ///
    /// Returns a Google Maps URL for the location.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

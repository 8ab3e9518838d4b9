//! Light-intensity samples and observer positions.

use geo::Coord;

/// A catalogued light-intensity measurement for one place and year.
///
/// Coordinates are WGS84 decimal degrees. `intensity` is a unitless skyglow
/// proxy whose nominal domain is `0.0..=100.0`; scoring clamps it, so callers
/// may store raw readings.
///
/// # Examples
/// ```
/// use luminight_core::LightSample;
///
/// let sample = LightSample::new(7, "Cedar Flats", 38.5, -109.6, 2015, 21.0);
/// assert_eq!(sample.location().x, -109.6);
/// assert_eq!(sample.location().y, 38.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightSample {
    /// Unique identifier.
    pub id: u64,
    /// Human-readable label for the location.
    pub name: String,
    /// Latitude in degrees, `-90.0..=90.0`.
    pub latitude: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub longitude: f64,
    /// Calendar year the sample represents.
    pub year: i32,
    /// Skyglow brightness, nominally `0.0..=100.0`.
    pub intensity: f64,
}

impl LightSample {
    /// Construct a sample from its parts.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        year: i32,
        intensity: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            year,
            intensity,
        }
    }

    /// Return the sample location with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Whether the sample is visible when the timeline is set to `year`.
    #[must_use]
    pub const fn is_eligible(&self, year: i32) -> bool {
        self.year <= year
    }
}

/// The observer's last known position.
///
/// `accuracy_m` carries the reported horizontal accuracy in metres when the
/// position source supplies one. It is informational and never affects
/// resolution.
///
/// # Examples
/// ```
/// use luminight_core::Position;
///
/// let here = Position::new(51.48, -0.0).with_accuracy(12.0);
/// assert_eq!(here.accuracy_m, Some(12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Horizontal accuracy radius in metres, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy_m: Option<f64>,
}

impl Position {
    /// Create a position without accuracy information.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m: None,
        }
    }

    /// Attach an accuracy radius while returning `self` for chaining.
    #[must_use]
    pub const fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }

    /// Return the position as a coordinate with `x = longitude`.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

impl From<Coord<f64>> for Position {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

//! Great-circle distance on a spherical Earth.

use geo::Coord;

/// Mean Earth radius used for every distance in the engine, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two WGS84 coordinates in kilometres.
///
/// Coordinates use `x = longitude` and `y = latitude`, in degrees. The
/// intermediate haversine term is clamped into `0.0..=1.0` so rounding close
/// to antipodal pairs cannot feed a negative value into the square root.
/// Identical points yield exactly `0.0`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use luminight_core::haversine_km;
///
/// let greenwich = Coord { x: 0.0, y: 51.4769 };
/// assert_eq!(haversine_km(greenwich, greenwich), 0.0);
///
/// let one_degree = haversine_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 });
/// assert!((one_degree - 111.19).abs() < 0.01);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let d_lat = (to.y - from.y).to_radians();
    let d_lon = (to.x - from.x).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

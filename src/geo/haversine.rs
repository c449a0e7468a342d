use crate::geo::EARTH_RADIUS;
use geo::Point;

/// Great-circle distance in meters between two points given in degrees,
/// where `x` is the longitude and `y` the latitude.
///
/// Uses the `atan2` form of the haversine formula on a sphere of
/// [`EARTH_RADIUS`] meters.
///
/// ### Example
/// ```rust
/// use geo::Point;
/// use rendezvous::geo::haversine;
///
/// let amsterdam = Point::new(4.8952, 52.3702);
/// assert_eq!(haversine(amsterdam, amsterdam), 0.0);
/// ```
pub fn haversine(lhs: Point, rhs: Point) -> f64 {
    let lat_1 = lhs.y().to_radians();
    let lat_2 = rhs.y().to_radians();
    let delta_lat = lat_2 - lat_1;
    let delta_lon = rhs.x().to_radians() - lhs.x().to_radians();

    // Rounding can push `a` just past 1 for antipodal points.
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat_1.cos() * lat_2.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    EARTH_RADIUS * (2.0 * a.sqrt().atan2((1.0 - a).sqrt()))
}

use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Utc};
use geo::{Coord, Point, coord};
use serde::Deserialize;

use crate::geo::GeoError;
use crate::trajectory::time::deserialize_timestamp;

/// `Waypoint`
/// A single timestamped geographic sample of a tracked entity.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use geo::Point;
/// use rendezvous::trajectory::Waypoint;
///
/// let time = Utc.with_ymd_and_hms(2018, 3, 14, 9, 26, 53).unwrap();
/// let waypoint = Waypoint::new(52.3702, 4.8952, time);
/// assert_eq!(waypoint.point(), Point::new(4.8952, 52.3702));
/// ```
#[derive(Clone, Copy, PartialEq, Deserialize)]
pub struct Waypoint {
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
    #[serde(rename = "Time", deserialize_with = "deserialize_timestamp")]
    pub time: DateTime<Utc>,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64, time: DateTime<Utc>) -> Self {
        Waypoint { lat, lon, time }
    }

    /// Checks the coordinate lies within the geographic range,
    /// latitude in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn validate(&self) -> Result<(), GeoError> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::latitude(self.lat));
        }

        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(GeoError::longitude(self.lon));
        }

        Ok(())
    }

    /// The planar coordinate, longitude as `x` and latitude as `y`.
    pub fn coord(&self) -> Coord {
        coord! { x: self.lon, y: self.lat }
    }

    pub fn point(&self) -> Point {
        Point(self.coord())
    }
}

impl From<&Waypoint> for Point {
    fn from(waypoint: &Waypoint) -> Self {
        waypoint.point()
    }
}

impl Debug for Waypoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "POINT({} {}) @ {}",
            self.lon,
            self.lat,
            self.time.to_rfc3339()
        )
    }
}

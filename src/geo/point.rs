use std::fmt::{Display, Formatter};

use crate::geo::MEETING_POINT_DECIMALS;

/// Truncates (rounds toward zero) `value` to the given number of decimals.
///
/// ```rust
/// use rendezvous::geo::truncate;
/// assert_eq!(truncate(1.23459, 4), 1.2345);
/// assert_eq!(truncate(-1.23459, 4), -1.2345);
/// ```
pub fn truncate(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    // Adding zero folds a negative zero into a positive one.
    (value * factor).trunc() / factor + 0.0
}

/// The coordinate reported for a crossing, truncated to
/// [`MEETING_POINT_DECIMALS`] decimals.
///
/// Its [`Display`] renders `"{lat};{lon}"` with a fixed number of decimals
/// and a period as the decimal separator, independent of the host locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeetingPoint {
    pub lat: f64,
    pub lon: f64,
}

impl MeetingPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        MeetingPoint {
            lat: truncate(lat, MEETING_POINT_DECIMALS),
            lon: truncate(lon, MEETING_POINT_DECIMALS),
        }
    }
}

impl From<geo::Point> for MeetingPoint {
    fn from(point: geo::Point) -> Self {
        MeetingPoint::new(point.y(), point.x())
    }
}

impl Display for MeetingPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let precision = MEETING_POINT_DECIMALS as usize;
        write!(f, "{:.*};{:.*}", precision, self.lat, precision, self.lon)
    }
}

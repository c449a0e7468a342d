use geo::{Line, LineString};
use log::trace;
use wkt::ToWkt;

use crate::geo::GeoError;
use crate::trajectory::{TimeWindow, Waypoint};

/// `Segment`
///
/// The straight line travelled between two temporally-adjacent
/// waypoints of a single trajectory.
///
/// ```text
///  current + ---------------- + next
///          ^ line (x = lon, y = lat)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub current: &'a Waypoint,
    pub next: &'a Waypoint,

    pub line: Line,
}

impl<'a> Segment<'a> {
    /// Builds the segment geometry, failing when either waypoint
    /// lies outside the valid geographic range.
    pub fn new(current: &'a Waypoint, next: &'a Waypoint) -> Result<Self, GeoError> {
        current.validate()?;
        next.validate()?;

        let segment = Segment {
            current,
            next,
            line: Line::new(current.coord(), next.coord()),
        };

        trace!("Segment {}", segment.wkt_string());
        Ok(segment)
    }

    /// The interval between the timestamps of both ends, unnormalised.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.current.time, self.next.time)
    }

    /// The segment as a WKT `LINESTRING(lon lat, lon lat)`.
    pub fn wkt_string(&self) -> String {
        LineString::from(self.line).wkt_string()
    }
}

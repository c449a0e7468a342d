use crate::trajectory::Waypoint;

/// Two waypoints, one of each trajectory, considered to be at the same
/// location. Proximity matching also records the distance between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePair<'a> {
    pub first: &'a Waypoint,
    pub second: &'a Waypoint,

    /// Great-circle distance in meters, if computed.
    pub distance: Option<f64>,
}

impl<'a> CandidatePair<'a> {
    pub fn new(first: &'a Waypoint, second: &'a Waypoint) -> Self {
        CandidatePair {
            first,
            second,
            distance: None,
        }
    }

    pub fn with_distance(self, distance: f64) -> Self {
        CandidatePair {
            distance: Some(distance),
            ..self
        }
    }

    /// Absolute difference between both timestamps.
    pub fn time_apart(&self) -> chrono::TimeDelta {
        (self.first.time - self.second.time).abs()
    }
}

use itertools::iproduct;
use log::debug;
use measure_time::debug_time;

use crate::geo::haversine;
use crate::matcher::CandidatePair;
use crate::trajectory::Trajectory;

/// Default search radius, in meters.
pub const DEFAULT_MAX_DISTANCE: f64 = 10.0;

/// Ranks waypoint pairs of two trajectories by their great-circle
/// distance, keeping those within `max_distance` meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityMatcher {
    pub max_distance: f64,
}

impl Default for ProximityMatcher {
    fn default() -> Self {
        ProximityMatcher {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl ProximityMatcher {
    pub fn new(max_distance: f64) -> Self {
        ProximityMatcher { max_distance }
    }

    /// Returns the pairs within range, closest first.
    ///
    /// The sort is stable, so pairs at an equal distance keep their
    /// enumeration order (`first` outer, `second` inner).
    pub fn rank<'a>(
        &self,
        first: &'a Trajectory,
        second: &'a Trajectory,
    ) -> Vec<CandidatePair<'a>> {
        debug_time!("ProximityMatcher::rank");

        let mut pairs = iproduct!(first.waypoints(), second.waypoints())
            .map(|(a, b)| (a, b, haversine(a.point(), b.point())))
            .filter(|(_, _, distance)| *distance <= self.max_distance)
            .map(|(a, b, distance)| CandidatePair::new(a, b).with_distance(distance))
            .collect::<Vec<_>>();

        pairs.sort_by(|a, b| {
            a.distance
                .unwrap_or_default()
                .total_cmp(&b.distance.unwrap_or_default())
        });

        debug!("{} pairs within {}m", pairs.len(), self.max_distance);
        pairs
    }
}

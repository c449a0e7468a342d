use itertools::iproduct;
use log::debug;
use measure_time::debug_time;

use crate::matcher::CandidatePair;
use crate::trajectory::Trajectory;

/// Pairs waypoints of two trajectories whose coordinates agree on both
/// axes within a precision tolerance, in degrees.
///
/// ### Example
/// ```rust
/// use chrono::Utc;
/// use rendezvous::matcher::ExactMatcher;
/// use rendezvous::trajectory::{Trajectory, Waypoint};
///
/// let now = Utc::now();
/// let first = Trajectory::new([Waypoint::new(52.370200, 4.895200, now)]);
/// let second = Trajectory::new([Waypoint::new(52.370201, 4.895201, now)]);
///
/// assert_eq!(ExactMatcher::new(1e-5).matches(&first, &second).len(), 1);
/// assert!(ExactMatcher::new(1e-10).matches(&first, &second).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactMatcher {
    pub tolerance: f64,
}

impl ExactMatcher {
    pub fn new(tolerance: f64) -> Self {
        ExactMatcher { tolerance }
    }

    /// Every pair within tolerance, in enumeration order: waypoints of
    /// `first` in the outer loop, waypoints of `second` in the inner.
    pub fn matches<'a>(
        &self,
        first: &'a Trajectory,
        second: &'a Trajectory,
    ) -> Vec<CandidatePair<'a>> {
        debug_time!("ExactMatcher::matches");

        let pairs = iproduct!(first.waypoints(), second.waypoints())
            .filter(|(a, b)| {
                (a.lat - b.lat).abs() < self.tolerance && (a.lon - b.lon).abs() < self.tolerance
            })
            .map(|(a, b)| CandidatePair::new(a, b))
            .collect::<Vec<_>>();

        debug!(
            "{} of {} pairs within {} degrees",
            pairs.len(),
            first.len() * second.len(),
            self.tolerance
        );

        pairs
    }
}

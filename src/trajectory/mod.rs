//! Trajectories are ordered sequences of [`Waypoint`]s recorded for a
//! single tracked entity, and the [`Segment`]s travelled between them.

#[doc(hidden)]
pub mod ingest;
#[doc(hidden)]
pub mod segment;
#[doc(hidden)]
pub mod time;
#[doc(hidden)]
pub mod waypoint;

#[doc(inline)]
pub use ingest::IngestError;
#[doc(inline)]
pub use segment::Segment;
#[doc(inline)]
pub use time::{TimeWindow, parse_timestamp};
#[doc(inline)]
pub use waypoint::Waypoint;

use geo::LineString;

use crate::geo::GeoError;

/// `Trajectory`
///
/// The recorded path of one entity. Waypoints are kept in the order they
/// were given, which is assumed (not verified) to be chronological.
/// Can be created from a vector of waypoints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory(Vec<Waypoint>);

impl From<Vec<Waypoint>> for Trajectory {
    fn from(waypoints: Vec<Waypoint>) -> Self {
        Trajectory(waypoints)
    }
}

impl FromIterator<Waypoint> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Trajectory::new(iter)
    }
}

impl Trajectory {
    pub fn new(waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        Self(waypoints.into_iter().collect::<Vec<_>>())
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A trajectory needs at least two waypoints to form a segment.
    pub fn is_traversable(&self) -> bool {
        self.0.len() >= 2
    }

    /// The waypoints as a linestring, longitude as `x` and latitude as `y`.
    pub fn linestring(&self) -> LineString {
        self.0.iter().map(Waypoint::coord).collect::<LineString>()
    }

    /// Builds the segments between every pair of consecutive waypoints.
    ///
    /// The returned vector has a length one less than the number of
    /// waypoints, and is empty for zero or one waypoint as nothing
    /// was travelled. Fails on the first waypoint outside the valid
    /// geographic range.
    ///
    /// ### Example
    /// ```rust
    /// use chrono::Utc;
    /// use rendezvous::trajectory::{Trajectory, Waypoint};
    ///
    /// let now = Utc::now();
    /// let trajectory = Trajectory::new([
    ///     Waypoint::new(0.0, 0.0, now),
    ///     Waypoint::new(0.0, 1.0, now),
    ///     Waypoint::new(1.0, 1.0, now),
    /// ]);
    ///
    /// let segments = trajectory.segments().unwrap();
    /// assert_eq!(segments.len(), 2);
    /// ```
    pub fn segments(&self) -> Result<Vec<Segment<'_>>, GeoError> {
        let Some(first) = self.0.first() else {
            return Ok(Vec::new());
        };

        self.0
            .iter()
            .skip(1)
            .enumerate()
            .map(|(index, next)| {
                // `index` trails `next` by one; fall back to the origin
                // rather than reading out of range.
                let current = self.0.get(index).unwrap_or(first);
                Segment::new(current, next)
            })
            .collect()
    }
}

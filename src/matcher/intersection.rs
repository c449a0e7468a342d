use geo::Point;
use itertools::iproduct;
use log::{debug, trace};
use measure_time::debug_time;

use crate::geo::{MeetingPoint, intersect};
use crate::matcher::MatchError;
use crate::trajectory::{Segment, Trajectory};

/// A point where a segment of the first trajectory meets a segment of
/// the second, while both were being travelled at overlapping times.
#[derive(Debug, Clone, Copy)]
pub struct Crossing<'a> {
    pub first: Segment<'a>,
    pub second: Segment<'a>,

    /// The exact intersection, longitude as `x` and latitude as `y`.
    pub point: Point,
}

impl Crossing<'_> {
    /// The intersection truncated for reporting.
    pub fn meeting_point(&self) -> MeetingPoint {
        MeetingPoint::from(self.point)
    }
}

/// Finds where two trajectories crossed paths, by intersecting every
/// segment of one with every segment of the other and keeping the
/// intersections travelled within overlapping time windows.
///
/// ### Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rendezvous::matcher::IntersectionMatcher;
/// use rendezvous::trajectory::{Trajectory, Waypoint};
///
/// let at = |minute| Utc.with_ymd_and_hms(2018, 3, 14, 9, minute, 0).unwrap();
///
/// let first = Trajectory::new([
///     Waypoint::new(9.5, 19.5, at(0)),
///     Waypoint::new(10.5, 20.5, at(10)),
/// ]);
/// let second = Trajectory::new([
///     Waypoint::new(10.5, 19.5, at(5)),
///     Waypoint::new(9.5, 20.5, at(15)),
/// ]);
///
/// let crossing = IntersectionMatcher::default()
///     .find_crossing(&first, &second)
///     .unwrap();
///
/// assert_eq!(crossing.meeting_point().to_string(), "10.0000;20.0000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntersectionMatcher {
    /// Report trajectories too short to form a segment as
    /// [`MatchError::MalformedSequence`] rather than as
    /// [`MatchError::NoCrossingFound`].
    pub strict: bool,
}

impl IntersectionMatcher {
    pub fn new(strict: bool) -> Self {
        IntersectionMatcher { strict }
    }

    /// Every qualifying crossing, lazily, in enumeration order: segments
    /// of `first` in the outer loop, segments of `second` in the inner.
    ///
    /// Adjacent segments sharing an endpoint commonly yield the same, or a
    /// near-identical, crossing more than once.
    pub fn candidates<'a>(
        &self,
        first: &'a Trajectory,
        second: &'a Trajectory,
    ) -> Result<impl Iterator<Item = Crossing<'a>>, MatchError> {
        if self.strict {
            for trajectory in [first, second] {
                if !trajectory.is_traversable() {
                    return Err(MatchError::MalformedSequence(trajectory.len()));
                }
            }
        }

        let first_segments = first.segments()?;
        let second_segments = second.segments()?;

        debug!(
            "Intersecting {} x {} segments",
            first_segments.len(),
            second_segments.len()
        );

        let crossings = iproduct!(first_segments, second_segments).filter_map(|(a, b)| {
            let intersection = intersect(&a.line, &b.line)?;

            let Some(coord) = intersection.point() else {
                trace!("Skipping collinear overlap {:?}", intersection);
                return None;
            };

            if !a.window().overlaps(&b.window()) {
                trace!(
                    "Skipping crossing at {:?}, travelled at different times",
                    coord
                );
                return None;
            }

            Some(Crossing {
                first: a,
                second: b,
                point: Point(coord),
            })
        });

        Ok(crossings)
    }

    /// The first qualifying crossing in enumeration order.
    ///
    /// Fails with [`MatchError::NoCrossingFound`] when the trajectories
    /// never met, and with [`MatchError::Geo`] when a waypoint lies
    /// outside the valid geographic range.
    pub fn find_crossing<'a>(
        &self,
        first: &'a Trajectory,
        second: &'a Trajectory,
    ) -> Result<Crossing<'a>, MatchError> {
        debug_time!("IntersectionMatcher::find_crossing");

        self.candidates(first, second)?
            .next()
            .ok_or(MatchError::NoCrossingFound)
    }
}

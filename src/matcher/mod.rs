//! Strategies to detect where two trajectories crossed paths.
//!
//! Each matcher is an independent, read-only pass over the same two
//! [`Trajectory`](crate::trajectory::Trajectory)s:
//!
//! - [`ExactMatcher`] pairs waypoints at the same coordinates, within a tolerance.
//! - [`ProximityMatcher`] ranks waypoint pairs by great-circle distance.
//! - [`IntersectionMatcher`] intersects the travelled segments, filtering by time.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod exact;
#[doc(hidden)]
pub mod intersection;
#[doc(hidden)]
pub mod pair;
#[doc(hidden)]
pub mod proximity;

#[doc(inline)]
pub use error::MatchError;
#[doc(inline)]
pub use exact::ExactMatcher;
#[doc(inline)]
pub use intersection::{Crossing, IntersectionMatcher};
#[doc(inline)]
pub use pair::CandidatePair;
#[doc(inline)]
pub use proximity::{DEFAULT_MAX_DISTANCE, ProximityMatcher};

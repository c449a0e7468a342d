#![doc = include_str!("../README.md")]

pub mod config;
#[doc(hidden)]
pub mod error;
pub mod geo;
pub mod matcher;
pub mod trajectory;
pub mod util;

#[doc(inline)]
pub use config::{MatchConfig, Precision};
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use matcher::{
    CandidatePair, Crossing, ExactMatcher, IntersectionMatcher, MatchError, ProximityMatcher,
};
#[doc(inline)]
pub use trajectory::{Segment, Trajectory, Waypoint};

use thiserror::Error;

use crate::geo::GeoError;
use crate::impl_err;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("no crossing with overlapping time windows was found")]
    NoCrossingFound,

    #[error("a trajectory needs at least two waypoints to form a segment, given {0}")]
    MalformedSequence(usize),

    #[error("could not build trajectory geometry: {0}")]
    Geo(GeoError),
}

impl_err!(GeoError, MatchError, Geo);

//! Planar and spherical primitives shared by the matchers.
//!
//! Coordinates follow the GeoRust convention throughout: `x` is the
//! longitude and `y` is the latitude, both in degrees (WGS84, SRID 4326).

/// Mean earth radius used for great-circle distances, in meters.
pub const EARTH_RADIUS: f64 = 6376500.0;

/// Number of decimals kept when reporting a meeting point.
pub const MEETING_POINT_DECIMALS: i32 = 4;

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod haversine;
#[doc(hidden)]
pub mod intersect;
#[doc(hidden)]
pub mod point;
#[doc(hidden)]
#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use haversine::haversine;
#[doc(inline)]
pub use intersect::{SegmentIntersection, intersect};
#[doc(inline)]
pub use point::{MeetingPoint, truncate};

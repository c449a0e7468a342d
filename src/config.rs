//! Tunables of the matchers, with built-in defaults and overrides
//! read from the environment.
//!
//! An example environment is shown:
//! ```bash
//! RENDEZVOUS_HIGH_PRECISION=0.0000000001
//! RENDEZVOUS_MEDIUM_PRECISION=0.00001
//! RENDEZVOUS_MAX_DISTANCE=10
//! RENDEZVOUS_STRICT=false
//! ```

use std::env;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::matcher::{DEFAULT_MAX_DISTANCE, ExactMatcher, IntersectionMatcher, ProximityMatcher};

pub const HIGH_PRECISION_ENV: &str = "RENDEZVOUS_HIGH_PRECISION";
pub const MEDIUM_PRECISION_ENV: &str = "RENDEZVOUS_MEDIUM_PRECISION";
pub const MAX_DISTANCE_ENV: &str = "RENDEZVOUS_MAX_DISTANCE";
pub const STRICT_ENV: &str = "RENDEZVOUS_STRICT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    #[error("{0} is not valid unicode")]
    NotUnicode(String),
}

/// Tolerance presets of the [`ExactMatcher`].
///
/// ```rust
/// use rendezvous::config::Precision;
///
/// let precision: Precision = "medium".parse().unwrap();
/// assert_eq!(precision, Precision::Medium);
/// assert_eq!(precision.tolerance(), 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Precision {
    /// Effectively requires identical floating point values.
    High,
    /// Roughly a meter, depending on the latitude.
    Medium,
}

impl Precision {
    pub const fn tolerance(&self) -> f64 {
        match self {
            Precision::High => 1e-10,
            Precision::Medium => 1e-5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    pub high_precision: f64,
    pub medium_precision: f64,

    /// Search radius of the [`ProximityMatcher`], in meters.
    pub max_distance: f64,

    /// See [`IntersectionMatcher::strict`].
    pub strict: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            high_precision: Precision::High.tolerance(),
            medium_precision: Precision::Medium.tolerance(),
            max_distance: DEFAULT_MAX_DISTANCE,
            strict: false,
        }
    }
}

impl MatchConfig {
    /// Reads overrides from the process environment, falling back to
    /// [`MatchConfig::default`] for every unset variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Reads overrides through `lookup`, which behaves like [`env::var`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        let defaults = MatchConfig::default();

        Ok(MatchConfig {
            high_precision: parse(&lookup, HIGH_PRECISION_ENV)?.unwrap_or(defaults.high_precision),
            medium_precision: parse(&lookup, MEDIUM_PRECISION_ENV)?
                .unwrap_or(defaults.medium_precision),
            max_distance: parse(&lookup, MAX_DISTANCE_ENV)?.unwrap_or(defaults.max_distance),
            strict: parse(&lookup, STRICT_ENV)?.unwrap_or(defaults.strict),
        })
    }

    pub fn tolerance(&self, precision: Precision) -> f64 {
        match precision {
            Precision::High => self.high_precision,
            Precision::Medium => self.medium_precision,
        }
    }

    pub fn exact(&self, precision: Precision) -> ExactMatcher {
        ExactMatcher::new(self.tolerance(precision))
    }

    pub fn proximity(&self) -> ProximityMatcher {
        ProximityMatcher::new(self.max_distance)
    }

    pub fn intersection(&self) -> IntersectionMatcher {
        IntersectionMatcher::new(self.strict)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Result<String, env::VarError>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key.to_string())),
    }
}

use thiserror::Error;

use crate::config::ConfigError;
use crate::impl_err;
use crate::matcher::MatchError;
use crate::trajectory::IngestError;

/// Any failure surfaced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Match(MatchError),
    #[error(transparent)]
    Ingest(IngestError),
    #[error(transparent)]
    Config(ConfigError),
}

impl_err!(MatchError, Match);
impl_err!(IngestError, Ingest);
impl_err!(ConfigError, Config);

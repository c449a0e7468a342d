use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::de::value::SeqAccessDeserializer;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::trajectory::{Trajectory, Waypoint};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("could not read trajectory: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse trajectory: {0}")]
    Json(#[from] serde_json::Error),
}

/// The recorded document, either wrapped as `{"Waypoints": [...]}`
/// or given as a bare array of waypoints.
enum Document {
    Container(Vec<Waypoint>),
    Bare(Vec<Waypoint>),
}

const WAYPOINTS: &str = "Waypoints";

// Dispatches on the JSON shape, so errors inside the waypoints keep
// their field and position.
struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of waypoints, or an object with a \"Waypoints\" list")
    }

    fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Vec::<Waypoint>::deserialize(SeqAccessDeserializer::new(seq)).map(Document::Bare)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut waypoints = None;

        while let Some(key) = map.next_key::<String>()? {
            if key != WAYPOINTS {
                map.next_value::<IgnoredAny>()?;
                continue;
            }

            if waypoints.is_some() {
                return Err(de::Error::duplicate_field(WAYPOINTS));
            }

            waypoints = Some(map.next_value::<Vec<Waypoint>>()?);
        }

        waypoints
            .map(Document::Container)
            .ok_or_else(|| de::Error::missing_field(WAYPOINTS))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

impl From<Document> for Trajectory {
    fn from(document: Document) -> Self {
        match document {
            Document::Container(waypoints) | Document::Bare(waypoints) => {
                Trajectory::from(waypoints)
            }
        }
    }
}

impl Trajectory {
    /// Parses a trajectory from a JSON document.
    ///
    /// ```rust
    /// use rendezvous::trajectory::Trajectory;
    ///
    /// let document = r#"{ "Waypoints": [
    ///     { "Lat": 52.3702, "Lon": 4.8952, "Time": "2018-03-14T09:26:53" }
    /// ] }"#;
    ///
    /// let trajectory = Trajectory::from_reader(document.as_bytes()).unwrap();
    /// assert_eq!(trajectory.len(), 1);
    /// ```
    pub fn from_reader(reader: impl Read) -> Result<Self, IngestError> {
        let document: Document = serde_json::from_reader(reader)?;
        Ok(Trajectory::from(document))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let trajectory = Trajectory::from_reader(BufReader::new(file))?;
        debug!("Read {} waypoints from {}", trajectory.len(), path.display());

        Ok(trajectory)
    }
}

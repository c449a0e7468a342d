use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl GeoError {
    pub(crate) fn latitude(lat: f64) -> Self {
        GeoError::InvalidCoordinate(format!(
            "Latitude must be between -90 and 90. Given: {}",
            lat
        ))
    }

    pub(crate) fn longitude(lon: f64) -> Self {
        GeoError::InvalidCoordinate(format!(
            "Longitude must be between -180 and 180. Given: {}",
            lon
        ))
    }
}

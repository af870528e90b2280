//! GPS fix records
//!
//! One record per input line: `<identifier> <latitude> <longitude> <altitude>`,
//! whitespace separated, angles in decimal degrees and altitude in metres.

use std::str::FromStr;

use thiserror::Error;

/// Reason a line could not be parsed into a [`GpsRecord`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Line does not have exactly four fields
    #[error("expected 4 fields (identifier latitude longitude altitude), found {0}")]
    FieldCount(usize),

    /// A numeric field does not parse as a float
    #[error("{field} is not a number: {token:?}")]
    InvalidNumber { field: &'static str, token: String },
}

/// A single GPS fix as read from the input
#[derive(Debug, Clone, PartialEq)]
pub struct GpsRecord {
    /// Opaque token, typically the image or frame file name
    pub identifier: String,
    /// Latitude in degrees (EPSG:4326)
    pub latitude: f64,
    /// Longitude in degrees (EPSG:4326)
    pub longitude: f64,
    /// Altitude in metres
    pub altitude: f64,
}

impl GpsRecord {
    /// Parses one input line
    ///
    /// Leading and trailing whitespace is ignored. Anything other than exactly
    /// one identifier followed by three floats is rejected, blank lines included.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let tokens: Vec<&str> = line.trim().split_whitespace().collect();

        let [identifier, latitude, longitude, altitude] = tokens[..] else {
            return Err(RecordError::FieldCount(tokens.len()));
        };

        Ok(Self {
            identifier: identifier.to_string(),
            latitude: parse_number("latitude", latitude)?,
            longitude: parse_number("longitude", longitude)?,
            altitude: parse_number("altitude", altitude)?,
        })
    }
}

impl FromStr for GpsRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_number(field: &'static str, token: &str) -> Result<f64, RecordError> {
    token.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let record = GpsRecord::parse("img001.jpg 31.2304 121.4737 10.5").unwrap();
        assert_eq!(record.identifier, "img001.jpg");
        assert_eq!(record.latitude, 31.2304);
        assert_eq!(record.longitude, 121.4737);
        assert_eq!(record.altitude, 10.5);
    }

    #[test]
    fn test_parse_surrounding_and_mixed_whitespace() {
        let record: GpsRecord = "  frame_0042.png\t31.5   121.0 \t-3e1 \r\n".parse().unwrap();
        assert_eq!(record.identifier, "frame_0042.png");
        assert_eq!(record.latitude, 31.5);
        assert_eq!(record.longitude, 121.0);
        assert_eq!(record.altitude, -30.0);
    }

    #[test]
    fn test_missing_altitude() {
        let err = GpsRecord::parse("img001.jpg 31.2304 121.4737").unwrap_err();
        assert_eq!(err, RecordError::FieldCount(3));
    }

    #[test]
    fn test_extra_field() {
        let err = GpsRecord::parse("img001.jpg 31.2304 121.4737 10.5 7").unwrap_err();
        assert_eq!(err, RecordError::FieldCount(5));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(GpsRecord::parse("   ").unwrap_err(), RecordError::FieldCount(0));
    }

    #[test]
    fn test_non_numeric_latitude() {
        let err = GpsRecord::parse("img001.jpg abc 121.4737 10.5").unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidNumber {
                field: "latitude",
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_longitude() {
        let err = GpsRecord::parse("img001.jpg 31.2304 121,4737 10.5").unwrap_err();
        assert!(matches!(err, RecordError::InvalidNumber { field: "longitude", .. }));
        assert!(err.to_string().contains("\"121,4737\""));
    }
}

//! Photo records as delivered by the album backend.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capture time of a photo, either an ISO-8601 style string or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoTime {
    /// Epoch milliseconds
    EpochMillis(i64),
    /// Textual timestamp as typed into the upload form
    Text(String),
}

impl PhotoTime {
    /// Parse into a UTC timestamp.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (read as UTC), a bare date,
    /// or epoch milliseconds. Returns `None` for anything else.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::EpochMillis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            Self::Text(text) => parse_text_time(text.trim()),
        }
    }
}

fn parse_text_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }
    text.parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}

impl std::fmt::Display for PhotoTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochMillis(ms) => write!(f, "{ms}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A geotagged photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Opaque unique identifier
    pub id: String,
    /// Display title
    #[serde(default = "default_title")]
    pub title: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Capture time, used for timeline ordering
    pub time: PhotoTime,
    /// Free-form notes
    #[serde(default, deserialize_with = "empty_as_none")]
    pub notes: Option<String>,
    /// Reference to the image bytes (URL or path)
    #[serde(rename = "file")]
    pub file_ref: String,
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let notes = Option::<String>::deserialize(deserializer)?;
    Ok(notes.filter(|n| !n.trim().is_empty()))
}

impl Photo {
    /// Parsed capture time, if the stored value is understood
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.time.to_utc()
    }
}

/// Decode a backend photo list from JSON.
///
/// # Errors
///
/// Returns an error if the payload is not a JSON array of photo records.
pub fn parse_photo_list(json: &str) -> Result<Vec<Photo>> {
    let photos: Vec<Photo> = serde_json::from_str(json)?;
    debug!("Decoded {} photo records", photos.len());
    Ok(photos)
}

/// Load a backend photo dump and order it by ascending capture time.
///
/// Ordering is stable; photos whose time cannot be parsed keep their
/// relative order after all dated photos.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_photo_list<P: AsRef<Path>>(path: P) -> Result<Vec<Photo>> {
    let path = path.as_ref();
    info!("Loading photos from: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let mut photos = parse_photo_list(&content)?;
    for photo in &photos {
        // Still rendered, the mapping wraps out-of-range values
        if let Err(e) = validate_coordinates(photo.lat, photo.lon) {
            warn!("Photo {}: {}", photo.id, e);
        }
    }
    sort_by_time(&mut photos);
    Ok(photos)
}

/// Stable sort by capture time, undated photos last
pub fn sort_by_time(photos: &mut [Photo]) {
    photos.sort_by_key(|p| match p.timestamp() {
        Some(ts) => (0, Some(ts)),
        None => (1, None),
    });
}

/// Validate a photo's coordinates against the nominal geographic ranges.
///
/// # Errors
///
/// Returns `InvalidInput` if latitude or longitude is not finite or out of range.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(Error::InvalidInput(format!("Latitude {lat} outside [-90, 90]")));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(Error::InvalidInput(format!("Longitude {lon} outside [-180, 180]")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": "b", "title": "Harbour", "lat": -33.86, "lon": 151.21,
         "time": "2024-03-02T09:15", "notes": "", "file": "/uploads/b.jpg"},
        {"id": "a", "lat": 48.85, "lon": 2.35,
         "time": "2023-07-14", "notes": "Fireworks", "file": "/uploads/a.jpg"}
    ]"#;

    #[test]
    fn test_parse_photo_list() {
        let photos = parse_photo_list(SAMPLE).unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].notes, None);
        assert_eq!(photos[1].title, "Untitled");
        assert_eq!(photos[1].notes.as_deref(), Some("Fireworks"));
        assert_eq!(photos[1].file_ref, "/uploads/a.jpg");
    }

    #[test]
    fn test_sort_by_time() {
        let mut photos = parse_photo_list(SAMPLE).unwrap();
        sort_by_time(&mut photos);
        assert_eq!(photos[0].id, "a");
        assert_eq!(photos[1].id, "b");
    }

    #[test]
    fn test_time_formats() {
        let rfc = PhotoTime::Text("2024-03-02T09:15:00Z".to_string());
        let local = PhotoTime::Text("2024-03-02T09:15".to_string());
        let epoch = PhotoTime::EpochMillis(rfc.to_utc().unwrap().timestamp_millis());
        assert_eq!(rfc.to_utc(), local.to_utc());
        assert_eq!(rfc.to_utc(), epoch.to_utc());
        assert!(PhotoTime::Text("last summer".to_string()).to_utc().is_none());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(45.0, 90.0).is_ok());
        assert!(validate_coordinates(91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }
}

//! Shared API types for the sensor dashboard.
//!
//! This crate defines the data structures exchanged with the REST backend:
//! sensor and reading entities, authentication payloads, the paginated
//! collection envelope, and query-parameter builders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A sensor device registered with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Backend-assigned identifier
    pub id: i64,
    /// Human-readable sensor name
    pub name: String,
    /// Hardware model, e.g. "DHT22"
    pub model: String,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Payload for creating a sensor or replacing one in full.
///
/// The backend has no partial update; `PUT /sensors/{id}/` replaces every
/// field with the draft's contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorDraft {
    pub name: String,
    pub model: String,
    pub description: Option<String>,
}

impl SensorDraft {
    /// Draft pre-filled from an existing sensor, for the edit form.
    pub fn from_sensor(sensor: &Sensor) -> Self {
        Self {
            name: sensor.name.clone(),
            model: sensor.model.clone(),
            description: sensor.description.clone(),
        }
    }
}

/// A single time-series reading belonging to one sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Backend-assigned identifier
    pub id: i64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Moment the reading was taken
    pub timestamp: DateTime<Utc>,
}

/// Payload for appending a reading to a sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingDraft {
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: DateTime<Utc>,
}

/// Username and password submitted to `POST /auth/token/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Access/refresh token pair returned by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived credential attached to API requests
    pub access: String,
    /// Longer-lived credential exchanged for a new access token
    pub refresh: String,
}

/// Body of `POST /auth/refresh/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response of `POST /auth/refresh/`: a fresh access token only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Payload for `POST /auth/register/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Account data echoed back after registration, also served by `/auth/me/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// A collection response in either of the backend's two shapes.
///
/// List endpoints answer with a paginated envelope or a bare array depending
/// on the endpoint; callers see the same content through the accessors either
/// way. A bare array acts as page 1 holding everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Page<T> {
    Envelope {
        items: Vec<T>,
        page: u32,
        page_size: u32,
        total: u64,
    },
    Items(Vec<T>),
}

impl<T> Page<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Page::Envelope { items, .. } => items,
            Page::Items(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Page::Envelope { items, .. } => items,
            Page::Items(items) => items,
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            Page::Envelope { page, .. } => *page,
            Page::Items(_) => 1,
        }
    }

    pub fn page_size(&self) -> u32 {
        match self {
            Page::Envelope { page_size, .. } => *page_size,
            Page::Items(items) => items.len() as u32,
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            Page::Envelope { total, .. } => *total,
            Page::Items(items) => items.len() as u64,
        }
    }

    /// Number of pages needed for `total` items, never less than 1.
    pub fn total_pages(&self) -> u32 {
        let size = self.page_size() as u64;
        if size == 0 {
            return 1;
        }
        (self.total().div_ceil(size) as u32).max(1)
    }
}

/// Query parameters for `GET /sensors/`.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorQuery {
    /// Search term matched against sensor name and model
    pub q: String,
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

impl Default for SensorQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: 1,
            page_size: 10,
        }
    }
}

impl SensorQuery {
    /// Percent-encoded query string, leading `?` included. An empty search
    /// term is omitted entirely.
    pub fn query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.q.is_empty() {
            query.append_pair("q", &self.q);
        }
        query.append_pair("page", &self.page.to_string());
        query.append_pair("page_size", &self.page_size.to_string());
        format!("?{}", query.finish())
    }
}

/// Timestamp-range filter for `GET /sensors/{id}/readings/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingQuery {
    pub timestamp_from: Option<DateTime<Utc>>,
    pub timestamp_to: Option<DateTime<Utc>>,
}

impl ReadingQuery {
    /// Percent-encoded query string, or "" when no bound is set.
    pub fn query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(from) = self.timestamp_from {
            query.append_pair("timestamp_from", &from.to_rfc3339());
        }
        if let Some(to) = self.timestamp_to {
            query.append_pair("timestamp_to", &to.to_rfc3339());
        }
        let encoded = query.finish();
        if encoded.is_empty() {
            String::new()
        } else {
            format!("?{encoded}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_page_envelope_shape() {
        let json = r#"{"items": [{"id": 1, "name": "Office A", "model": "DHT22",
                        "description": null}], "page": 2, "page_size": 10, "total": 31}"#;
        let page: Page<Sensor> = serde_json::from_str(json).unwrap();

        assert_eq!(page.items().len(), 1);
        assert_eq!(page.page(), 2);
        assert_eq!(page.page_size(), 10);
        assert_eq!(page.total(), 31);
        assert_eq!(page.total_pages(), 4);
    }

    #[test]
    fn test_page_bare_array_shape() {
        let json = r#"[{"id": 1, "name": "Office A", "model": "DHT22", "description": "desk"},
                       {"id": 2, "name": "Office B", "model": "SHT31", "description": null}]"#;
        let page: Page<Sensor> = serde_json::from_str(json).unwrap();

        assert_eq!(page.items().len(), 2);
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 2);
        assert_eq!(page.total(), 2);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_page_shapes_expose_same_content() {
        let enveloped = r#"{"items": [{"id": 7, "name": "Lab", "model": "BME280",
                            "description": null}], "page": 1, "page_size": 1, "total": 1}"#;
        let bare = r#"[{"id": 7, "name": "Lab", "model": "BME280", "description": null}]"#;

        let a: Page<Sensor> = serde_json::from_str(enveloped).unwrap();
        let b: Page<Sensor> = serde_json::from_str(bare).unwrap();

        assert_eq!(a.items(), b.items());
        assert_eq!(a.page(), b.page());
        assert_eq!(a.total(), b.total());
    }

    #[test]
    fn test_page_empty_bare_array() {
        let page: Page<Reading> = serde_json::from_str("[]").unwrap();

        assert!(page.items().is_empty());
        assert_eq!(page.total(), 0);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_total_pages_exact_multiple() {
        let page: Page<Sensor> = Page::Envelope {
            items: Vec::new(),
            page: 1,
            page_size: 10,
            total: 30,
        };
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_reading_timestamp_roundtrip() {
        let json = r#"{"id": 5, "temperature": 22.5, "humidity": 55.2,
                       "timestamp": "2025-10-01T12:00:00Z"}"#;
        let reading: Reading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.temperature, 22.5);
        assert_eq!(
            reading.timestamp,
            Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_sensor_draft_from_sensor() {
        let sensor = Sensor {
            id: 3,
            name: "Roof".into(),
            model: "DHT22".into(),
            description: Some("north side".into()),
        };
        let draft = SensorDraft::from_sensor(&sensor);

        assert_eq!(draft.name, "Roof");
        assert_eq!(draft.description.as_deref(), Some("north side"));
    }

    #[test]
    fn test_sensor_query_default() {
        assert_eq!(
            SensorQuery::default().query_string(),
            "?page=1&page_size=10"
        );
    }

    #[test]
    fn test_sensor_query_encodes_search_term() {
        let query = SensorQuery {
            q: "office a&b".into(),
            page: 3,
            page_size: 25,
        };
        assert_eq!(
            query.query_string(),
            "?q=office+a%26b&page=3&page_size=25"
        );
    }

    #[test]
    fn test_reading_query_empty() {
        assert_eq!(ReadingQuery::default().query_string(), "");
    }

    #[test]
    fn test_reading_query_with_bounds() {
        let query = ReadingQuery {
            timestamp_from: Some(Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap()),
            timestamp_to: None,
        };
        assert_eq!(
            query.query_string(),
            "?timestamp_from=2025-10-01T00%3A00%3A00%2B00%3A00"
        );
    }
}

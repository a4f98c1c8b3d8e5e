//! Typed, read-only projections of the API's JSON responses.
//!
//! Every declared field is optional and deserializes to `None` when the API
//! omits it; unknown fields in the payload are dropped on deserialization.
//! The only mapping failure is a root-shape mismatch (an array where an
//! object was expected, or the reverse), surfaced as
//! [`Error::MalformedResponse`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// A member profile, as returned by `GET me`.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub id: Option<u64>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub home_city: Option<String>,
    pub profile_image_url: Option<String>,
}

impl Member {
    pub fn from_json(json: Value) -> Result<Self> {
        from_object(json, "member")
    }
}

/// A trip, as returned by the `trips` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Trip {
    pub id: Option<u64>,
    pub member_id: Option<u64>,
    pub name: Option<String>,
    pub destination: Option<String>,
    pub begin_datetime: Option<String>,
    pub end_datetime: Option<String>,
    pub status: Option<String>,
    pub privacy: Option<String>,
    pub purpose: Option<String>,
    /// Present only when the `segments` flag was requested. Segment objects
    /// vary by kind (air, lodging, car) and are kept as raw JSON.
    pub segments: Option<Vec<Value>>,
}

impl Trip {
    pub fn from_json(json: Value) -> Result<Self> {
        from_object(json, "trip")
    }

    pub fn from_json_array(json: Value) -> Result<Vec<Self>> {
        match json {
            Value::Array(items) => items.into_iter().map(Self::from_json).collect(),
            other => Err(shape_error("an array of trips", &other)),
        }
    }
}

/// An oEmbed document for a trip, as returned by `GET trips/oembed/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripOEmbed {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub version: Option<String>,
    pub title: Option<String>,
    pub html: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub provider_name: Option<String>,
    pub provider_url: Option<String>,
}

impl TripOEmbed {
    pub fn from_json(json: Value) -> Result<Self> {
        from_object(json, "oEmbed document")
    }
}

fn from_object<T: serde::de::DeserializeOwned>(json: Value, kind: &str) -> Result<T> {
    if !json.is_object() {
        return Err(shape_error(&format!("a {kind} object"), &json));
    }
    serde_json::from_value(json).map_err(|e| Error::MalformedResponse(e.to_string()))
}

fn shape_error(expected: &str, got: &Value) -> Error {
    let kind = match got {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    Error::MalformedResponse(format!("expected {expected}, got {kind}"))
}

//! Fixture values handed to each unrolled test case.
//!
//! A fixture is one parameter set for one test case. It wraps a JSON value so
//! that fixtures can be written inline with `serde_json::json!`, derived from
//! any `Serialize` struct, or loaded from a JSON file. Object fixtures expose
//! their fields in insertion order (the crate enables serde_json's
//! `preserve_order`), and that order drives placeholder substitution.
//! Non-object fixtures are allowed and simply have no fields.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{log_fixture_error, FixtureError};

/// One parameter set for a single test case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fixture {
    value: Value,
}

impl Fixture {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Build a fixture from any serializable value, typically a struct.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self, FixtureError> {
        serde_json::to_value(data)
            .map(Self::new)
            .map_err(|err| FixtureError::Serialize {
                reason: err.to_string(),
            })
    }

    /// Named fields in insertion order; empty for non-object fixtures.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.value
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(key, value)| (key.as_str(), value)))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.as_object().and_then(|map| map.get(key))
    }

    /// Deserialize a single field. Returns `None` when the field is absent or
    /// has an incompatible shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Deserialize the whole fixture into a typed struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.value.clone())
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for Fixture {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Map<String, Value>> for Fixture {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(Value::Object(map))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Fixture {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect::<Map<String, Value>>()
            .into()
    }
}

/// Canonical text for a fixture value as it appears in a description.
///
/// Strings are inserted without quotes; arrays and objects use compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Parse a JSON array of fixtures.
pub fn fixtures_from_json(data: &str) -> Result<Vec<Fixture>, FixtureError> {
    match serde_json::from_str::<Value>(data)? {
        Value::Array(items) => Ok(items.into_iter().map(Fixture::new).collect()),
        other => Err(FixtureError::NotAnArray {
            found: json_kind(&other).to_string(),
        }),
    }
}

/// Load a JSON array of fixtures from disk.
pub fn load_fixtures<P: AsRef<Path>>(path: P) -> Result<Vec<Fixture>, FixtureError> {
    let path = path.as_ref();
    let loaded = fs::read_to_string(path)
        .map_err(|err| FixtureError::Io {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
        .and_then(|contents| fixtures_from_json(&contents));

    match loaded {
        Ok(fixtures) => {
            tracing::debug!(path = %path.display(), count = fixtures.len(), "loaded fixtures");
            Ok(fixtures)
        }
        Err(err) => {
            log_fixture_error(&err, "load_fixtures");
            Err(err)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

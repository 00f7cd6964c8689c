//! JSON test vector loader shared by rule-set tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    /// Wire document under test, kept as raw JSON so vectors can carry
    /// schema-invalid shapes.
    pub doc: serde_json::Value,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

impl TestVector {
    /// Wire payload as the string the codec would receive.
    pub fn payload(&self) -> String {
        self.doc.to_string()
    }
}

//! JSON test vector loader shared by datagram tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub payloads: Vec<PayloadData>,
    /// Full counter table expected after every payload is handled.
    pub expect: BTreeMap<String, i64>,
    /// Failures across all payloads, in order.
    #[serde(default)]
    pub expect_errors: Vec<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
    #[serde(default)]
    pub line: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PayloadData {
    pub encoding: String,
    pub data: String,
}

impl PayloadData {
    pub fn decode(&self) -> Vec<u8> {
        match self.encoding.as_str() {
            "utf8" => self.data.as_bytes().to_vec(),
            "hex" => hex::decode(&self.data).expect("invalid hex in test vector"),
            other => panic!("unsupported encoding: {other}"),
        }
    }
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

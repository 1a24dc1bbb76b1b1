//! Fixture loading: JSON files describing a `calculate` call and its
//! expected outcome, run through `quorum-core` directly (no FFI boundary —
//! this harness exercises the decision engine, not the adapter).

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use quorum_core::Decision;

/// A single fixture: one `calculate`-shaped call and the decision(s) it
/// must produce, one per record position.
#[derive(Debug, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    #[serde(default)]
    pub vector_offset: usize,
    pub object_size: usize,
    #[serde(default)]
    pub source_offset: usize,
    pub source_size: usize,
    /// Per-source record bytes, hex-encoded.
    pub sources: Vec<String>,
    pub expect: Expectation,
}

/// What a fixture expects: either a decision (and, for the lowest-count
/// boundary of one record, the winning bytes) per record position, or a
/// cyclic-reference rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Decisions(Vec<ExpectedDecision>),
    CyclicReference,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedDecision {
    pub leader: u8,
    pub length: u8,
    pub repair: u8,
    pub forked: bool,
    /// Hex-encoded winning record bytes, or `null`/omitted when `forked`
    /// (no leader, so the target position is all zero bytes).
    #[serde(default)]
    pub target: Option<String>,
}

/// A fixture file failed to parse or decode into runnable bytes.
#[derive(Debug)]
pub enum FixtureError {
    Read(std::io::Error),
    Parse(serde_json::Error),
    Hex { field: String, value: String },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Read(err) => write!(f, "could not read fixture file: {err}"),
            FixtureError::Parse(err) => write!(f, "could not parse fixture JSON: {err}"),
            FixtureError::Hex { field, value } => {
                write!(f, "field {field} is not valid hex: {value:?}")
            }
        }
    }
}

impl std::error::Error for FixtureError {}

impl FixtureCase {
    /// Loads and parses a single fixture file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let text = fs::read_to_string(path).map_err(FixtureError::Read)?;
        serde_json::from_str(&text).map_err(FixtureError::Parse)
    }

    /// Loads every `*.json` file directly inside `dir`, sorted by file name
    /// for deterministic reporting order.
    pub fn load_dir(dir: &Path) -> Result<Vec<Self>, FixtureError> {
        let mut paths: Vec<_> = fs::read_dir(dir)
            .map_err(FixtureError::Read)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        paths.iter().map(|path| Self::load(path)).collect()
    }

    /// Decodes every source's hex string into raw bytes.
    pub fn decode_sources(&self) -> Result<Vec<Vec<u8>>, FixtureError> {
        self.sources
            .iter()
            .map(|hex| decode_hex(hex).ok_or_else(|| FixtureError::Hex {
                field: "sources[]".to_string(),
                value: hex.clone(),
            }))
            .collect()
    }
}

impl ExpectedDecision {
    /// The expected encoded decision.
    pub fn decision(&self) -> Decision {
        Decision {
            leader: self.leader,
            length: self.length,
            repair: self.repair,
            forked: self.forked,
        }
    }

    /// The expected target bytes, decoded from hex, or `None` for a forked
    /// (all-zero) position.
    pub fn target_bytes(&self) -> Result<Option<Vec<u8>>, FixtureError> {
        match &self.target {
            None => Ok(None),
            Some(hex) => decode_hex(hex)
                .map(Some)
                .ok_or_else(|| FixtureError::Hex {
                    field: "expect.target".to_string(),
                    value: hex.clone(),
                }),
        }
    }
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}

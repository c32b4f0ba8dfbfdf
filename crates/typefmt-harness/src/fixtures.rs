//! Fixture loading and management.
//!
//! A fixture set is a JSON document of template/argument/expected-output
//! triples. Expected failures are written as `error:<Code>` using
//! [`FormatError::code`](typefmt_core::FormatError::code).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typefmt_core::Arg;

use crate::error::HarnessError;

/// One typed argument as written in fixture JSON: `{"kind":"int","value":-123}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FixtureArg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Address(usize),
}

impl FixtureArg {
    /// Borrow as an engine argument.
    #[must_use]
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            Self::Int(v) => Arg::Int(*v),
            Self::Uint(v) => Arg::Uint(*v),
            Self::Float(v) => Arg::Float(*v),
            Self::Text(s) => Arg::Text(s),
            Self::Address(a) => Arg::Address(*a),
        }
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Address(_) => "address",
        }
    }
}

impl fmt::Display for FixtureArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "int:{v}"),
            Self::Uint(v) => write!(f, "uint:{v}"),
            Self::Float(v) => write!(f, "float:{v}"),
            Self::Text(s) => write!(f, "text:{s}"),
            Self::Address(a) => write!(f, "address:0x{a:x}"),
        }
    }
}

/// Parses the CLI form `kind:value`, e.g. `int:-5`, `text:hello`, `address:0xff`.
impl FromStr for FixtureArg {
    type Err = String;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (kind, value) = spec
            .split_once(':')
            .ok_or_else(|| format!("expected <kind>:<value>, got '{spec}'"))?;
        let bad = |e: &dyn fmt::Display| format!("bad {kind} value '{value}': {e}");
        match kind {
            "int" => value.parse().map(Self::Int).map_err(|e| bad(&e)),
            "uint" => parse_unsigned(value).map(Self::Uint).map_err(|e| bad(&e)),
            "float" => value.parse().map(Self::Float).map_err(|e| bad(&e)),
            "text" => Ok(Self::Text(value.to_string())),
            "address" => parse_unsigned(value)
                .and_then(|a| usize::try_from(a).map_err(|e| e.to_string()))
                .map(Self::Address)
                .map_err(|e| bad(&e)),
            other => Err(format!(
                "unknown argument kind '{other}', expected int|uint|float|text|address"
            )),
        }
    }
}

/// Decimal or `0x`-prefixed hex.
fn parse_unsigned(value: &str) -> Result<u64, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| e.to_string())
}

/// A single fixture test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Section of the format contract exercised by this case.
    pub section: String,
    pub template: String,
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Rendered text, or `error:<Code>`.
    pub expected_output: String,
    /// Trigger override for this case only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<char>,
}

impl FixtureCase {
    #[must_use]
    pub fn args(&self) -> Vec<Arg<'_>> {
        self.args.iter().map(FixtureArg::as_arg).collect()
    }

    #[must_use]
    pub fn expects_error(&self) -> bool {
        self.expected_output.starts_with("error:")
    }
}

/// A collection of fixture cases for one feature family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| HarnessError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Sorted `*.json` paths directly under `dir`.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let entries = std::fs::read_dir(dir).map_err(|source| HarnessError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(HarnessError::EmptyFixtureDir(dir.to_path_buf()));
    }
    Ok(paths)
}

/// Load every fixture set under `dir`. The first unreadable file aborts.
pub fn load_dir(dir: &Path) -> Result<Vec<FixtureSet>, HarnessError> {
    fixture_paths(dir)?
        .iter()
        .map(|path| FixtureSet::from_file(path))
        .collect()
}

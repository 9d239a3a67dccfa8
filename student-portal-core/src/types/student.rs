//! Student record types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned record identifier.
///
/// The backend owns the id, so both numeric and string ids are accepted
/// and echoed back verbatim in request paths.
///
/// Numbers that do not fit an `i64` (floats, ids above `i64::MAX`) land in
/// `OtherNumber` instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Number(i64),
    OtherNumber(serde_json::Number),
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::OtherNumber(n) => write_number(f, n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Integral floats print without a fraction (`1.0` -> `1`), as a JSON client would.
fn write_number(f: &mut fmt::Formatter<'_>, n: &serde_json::Number) -> fmt::Result {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    match n.as_f64() {
        #[allow(clippy::cast_possible_truncation)]
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() <= MAX_EXACT => {
            write!(f, "{}", v as i64)
        }
        _ => write!(f, "{n}"),
    }
}

impl From<i64> for StudentId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A student record as returned by the collection endpoint.
///
/// `id` and `created_at` are owned by the server and never modified locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Raw timestamp text; see [`crate::utils::datetime::display_date`]
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<String>,
}

impl Student {
    /// Case-insensitive substring match on the name.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
}

impl StudentPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Accepts a timestamp string, a Unix timestamp number, or null.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        String(String),
        I64(i64),
        F64(f64),
    }

    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::String(s)) => Some(s),
        Some(RawTimestamp::I64(n)) => Some(n.to_string()),
        #[allow(clippy::cast_possible_truncation)]
        Some(RawTimestamp::F64(n)) => Some((n as i64).to_string()),
        None => None,
    })
}

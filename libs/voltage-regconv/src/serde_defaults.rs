//! Serde default value functions and custom deserializers for point tables
//!
//! Point tables come from CSV as well as YAML/JSON. CSV cells are strings
//! and may be left empty, so numeric fields accept numbers, numeric strings,
//! and empty strings (which take the field's default).

use serde::de::value::StrDeserializer;
use serde::de::{self, Deserializer, IntoDeserializer};
use serde::Deserialize;

use crate::scale::NarrowingMode;

// ============================================================================
// Default Value Functions
// ============================================================================

/// Default scale factor: 1.0
///
/// Used for measurement point scaling (no transformation).
pub fn scale_one() -> f64 {
    1.0
}

/// Default bit position: 0
pub fn bit_zero() -> u8 {
    0
}

// ============================================================================
// Custom Deserializers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    String(String),
    Int(u64),
}

/// Deserialize scale with default 1.0 for empty strings
///
/// An explicit 0 is kept as is; only a blank cell means "no scaling".
pub fn deserialize_scale<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(f) => Ok(f),
        StringOrFloat::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(scale_one())
            } else {
                trimmed.parse::<f64>().map_err(de::Error::custom)
            }
        },
    }
}

/// Custom deserializer for u8 fields that treats empty strings as 0
///
/// Allows CSV files to have empty bit_pos values which default to 0.
pub fn deserialize_u8_default_zero<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Int(i) => u8::try_from(i).map_err(de::Error::custom),
        StringOrInt::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(bit_zero())
            } else {
                trimmed.parse::<u8>().map_err(de::Error::custom)
            }
        },
    }
}

/// Deserialize a narrowing mode by name, blank or missing meaning the default
pub fn deserialize_narrowing<'de, D>(deserializer: D) -> Result<NarrowingMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(NarrowingMode::default()),
        Some(name) => {
            let name: StrDeserializer<'_, D::Error> = name.into_deserializer();
            NarrowingMode::deserialize(name)
        },
    }
}

//! Conversion Error Types
//!
//! Flat error taxonomy with stable numeric codes. Every error is an input
//! contract violation detected before any output is produced; none of them
//! is transient.

use thiserror::Error;

use crate::data_type::DataType;

/// Result type for voltage-regconv operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Code reported for a successful conversion
pub const CODE_OK: i32 = 0;

/// Register conversion errors
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// Missing register buffer
    #[error("Null pointer error")]
    NullPointer,

    /// Unknown data type, or a data type outside the requested family
    #[error("Invalid data type")]
    InvalidDataType,

    /// Bit position outside 0-15
    #[error("Invalid bit position (must be 0-15): {bit_pos}")]
    InvalidBitPosition { bit_pos: u8 },

    /// Fewer registers than the data type consumes
    #[error("Insufficient registers for conversion: need {required}, got {actual}")]
    InsufficientRegisters { required: usize, actual: usize },

    /// Unclassified failure
    #[error("Unknown error")]
    Unknown,

    /// Scaled value does not fit the output type (checked narrowing only)
    #[error("Scaled value out of range for {data_type}")]
    Overflow { data_type: DataType },
}

impl ConversionError {
    /// Stable numeric code
    pub fn code(&self) -> i32 {
        match self {
            ConversionError::NullPointer => -1,
            ConversionError::InvalidDataType => -2,
            ConversionError::InvalidBitPosition { .. } => -3,
            ConversionError::InsufficientRegisters { .. } => -4,
            ConversionError::Unknown => -5,
            ConversionError::Overflow { .. } => -6,
        }
    }

    /// Static description of this error's code
    pub fn message(&self) -> &'static str {
        error_message(self.code())
    }

    pub fn insufficient(required: usize, actual: usize) -> Self {
        ConversionError::InsufficientRegisters { required, actual }
    }

    pub fn invalid_bit(bit_pos: u8) -> Self {
        ConversionError::InvalidBitPosition { bit_pos }
    }
}

/// Describe a numeric error code
///
/// Defined for every code this crate reports, including [`CODE_OK`].
/// Anything else yields "Unrecognized error code".
pub fn error_message(code: i32) -> &'static str {
    match code {
        CODE_OK => "Success",
        -1 => "Null pointer error",
        -2 => "Invalid data type",
        -3 => "Invalid bit position (must be 0-15)",
        -4 => "Insufficient registers for conversion",
        -5 => "Unknown error",
        -6 => "Scaled value out of range for output type",
        _ => "Unrecognized error code",
    }
}

/// Point table loading and decoding errors
#[derive(Debug, Error)]
pub enum PointTableError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// YAML parse errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid point definitions
    #[error("Validation error: {0}")]
    Validation(String),

    /// Point not found
    #[error("Point not found: {0}")]
    PointNotFound(u32),

    /// A point failed to convert
    #[error("Point {point_id} ({name}): {source}")]
    Conversion {
        point_id: u32,
        name: String,
        #[source]
        source: ConversionError,
    },
}

impl PointTableError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PointTableError::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ConversionError::NullPointer.code(), -1);
        assert_eq!(ConversionError::InvalidDataType.code(), -2);
        assert_eq!(ConversionError::invalid_bit(16).code(), -3);
        assert_eq!(ConversionError::insufficient(4, 3).code(), -4);
        assert_eq!(ConversionError::Unknown.code(), -5);
        assert_eq!(
            ConversionError::Overflow {
                data_type: DataType::Int8Signed
            }
            .code(),
            -6
        );
    }

    #[test]
    fn test_error_message_lookup() {
        assert_eq!(error_message(0), "Success");
        assert_eq!(error_message(-1), "Null pointer error");
        assert_eq!(error_message(-2), "Invalid data type");
        assert_eq!(error_message(-3), "Invalid bit position (must be 0-15)");
        assert_eq!(error_message(-4), "Insufficient registers for conversion");
        assert_eq!(error_message(-5), "Unknown error");
        assert_eq!(error_message(-99), "Unrecognized error code");
        assert_eq!(error_message(1), "Unrecognized error code");
    }

    #[test]
    fn test_display_carries_details() {
        let err = ConversionError::insufficient(4, 1);
        assert_eq!(
            err.to_string(),
            "Insufficient registers for conversion: need 4, got 1"
        );
        assert_eq!(err.message(), "Insufficient registers for conversion");
        assert_eq!(
            ConversionError::invalid_bit(16).to_string(),
            "Invalid bit position (must be 0-15): 16"
        );
    }
}

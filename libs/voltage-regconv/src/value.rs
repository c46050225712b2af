//! Typed conversion results

use serde::{Deserialize, Serialize};

use crate::data_type::ValueKind;

/// A decoded register value
///
/// The variant is fixed by the data type's kind and width: a conversion
/// for `Int32SignedCdab` always yields `I32`, `Float64*` always `F64`, etc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum RegisterValue {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl RegisterValue {
    /// Numeric kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::I8(_) | Self::I16(_) | Self::I32(_) | Self::I64(_) => ValueKind::SignedInt,
            Self::U8(_) | Self::U16(_) | Self::U32(_) | Self::U64(_) => ValueKind::UnsignedInt,
            Self::F32(_) | Self::F64(_) => ValueKind::Float,
        }
    }

    /// Width in bytes (1 for booleans)
    pub fn width(&self) -> usize {
        match self {
            Self::Bool(_) | Self::I8(_) | Self::U8(_) => 1,
            Self::I16(_) | Self::U16(_) => 2,
            Self::I32(_) | Self::U32(_) | Self::F32(_) => 4,
            Self::I64(_) | Self::U64(_) | Self::F64(_) => 8,
        }
    }

    /// Short type name, e.g. "u32"
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::U8(_) => "u8",
            Self::I16(_) => "i16",
            Self::U16(_) => "u16",
            Self::I32(_) => "i32",
            Self::U32(_) => "u32",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
        }
    }

    /// Value as f64 (booleans map to 0.0/1.0)
    ///
    /// 64-bit integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Bool(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            },
            Self::I8(v) => v as f64,
            Self::U8(v) => v as f64,
            Self::I16(v) => v as f64,
            Self::U16(v) => v as f64,
            Self::I32(v) => v as f64,
            Self::U32(v) => v as f64,
            Self::I64(v) => v as f64,
            Self::U64(v) => v as f64,
            Self::F32(v) => v as f64,
            Self::F64(v) => v,
        }
    }

    /// Boolean payload, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Big-endian bytes of the value (empty for booleans)
    pub fn to_be_bytes(&self) -> Vec<u8> {
        match *self {
            Self::Bool(_) => Vec::new(),
            Self::I8(v) => v.to_be_bytes().to_vec(),
            Self::U8(v) => v.to_be_bytes().to_vec(),
            Self::I16(v) => v.to_be_bytes().to_vec(),
            Self::U16(v) => v.to_be_bytes().to_vec(),
            Self::I32(v) => v.to_be_bytes().to_vec(),
            Self::U32(v) => v.to_be_bytes().to_vec(),
            Self::I64(v) => v.to_be_bytes().to_vec(),
            Self::U64(v) => v.to_be_bytes().to_vec(),
            Self::F32(v) => v.to_be_bytes().to_vec(),
            Self::F64(v) => v.to_be_bytes().to_vec(),
        }
    }
}

impl std::fmt::Display for RegisterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_width() {
        assert_eq!(RegisterValue::I16(-1).kind(), ValueKind::SignedInt);
        assert_eq!(RegisterValue::U64(1).kind(), ValueKind::UnsignedInt);
        assert_eq!(RegisterValue::F32(1.0).width(), 4);
        assert_eq!(RegisterValue::Bool(true).width(), 1);
        assert_eq!(RegisterValue::U32(7).type_name(), "u32");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(RegisterValue::Bool(true).as_f64(), 1.0);
        assert_eq!(RegisterValue::I8(-56).as_f64(), -56.0);
        assert_eq!(RegisterValue::F32(0.5).as_f64(), 0.5);
        assert_eq!(RegisterValue::U8(1).as_bool(), None);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&RegisterValue::I16(25)).unwrap();
        assert_eq!(json, r#"{"type":"i16","value":25}"#);
        let back: RegisterValue = serde_json::from_str(r#"{"type":"bool","value":true}"#).unwrap();
        assert_eq!(back, RegisterValue::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(RegisterValue::U64(1000).to_string(), "1000");
        assert_eq!(RegisterValue::Bool(false).to_string(), "false");
    }
}

//! Voltage Register Conversion Library
//!
//! Decodes raw 16-bit Modbus registers into typed, scaled engineering values
//! for VoltageEMS.
//!
//! # Architecture
//!
//! This library provides:
//! - **Data Types**: 43 register encodings (width, signedness, byte/word order)
//! - **Bytes Utilities**: Byte order permutations, bit operations, typed readers
//! - **Decode Engine**: Table-driven register to value decoding
//! - **Scaling**: Promote, multiply, truncate and narrow (wrapping by default)
//! - **Encoding**: Inverse layout for register writes
//! - **Point Tables**: CSV/YAML/JSON register maps decoded per polled block
//!
//! The conversion core is pure and stateless; only point table loading and
//! block decoding emit `tracing` events.

pub mod bytes;
pub mod convert;
pub mod data_type;
mod decode;
pub mod encode;
pub mod error;
pub mod points;
pub mod scale;
pub mod serde_defaults;
pub mod value;

// Re-export core types
pub use bytes::ByteOrder;
pub use data_type::{DataType, RegisterLayout, TypeDescriptor, ValueKind};
pub use error::{error_message, ConversionError, PointTableError, Result, CODE_OK};
pub use value::RegisterValue;

// Re-export entry points
pub use convert::{
    convert, convert_bit_bool, convert_float32, convert_float64, convert_int16_signed,
    convert_int16_unsigned, convert_int32, convert_int64, convert_int8_signed,
    convert_int8_unsigned, convert_with_mode, validate,
};
pub use encode::encode;
pub use points::{DecodedPoint, PointMapping, PointTable};
pub use scale::{scale, scale_checked, scale_saturating, scale_with_mode, NarrowingMode};

//! Validation and dispatch
//!
//! Public entry points. Each one validates its inputs, runs the decode
//! engine, then the scale-and-narrow step. Failures are reported before any
//! value is produced and are never logged here.
//!
//! [`convert`] takes the register count from the slice length, so an empty
//! slice is a count of zero. The per-width helpers mirror buffer-style
//! entry points without a count: for them an empty slice means there is no
//! buffer at all and yields [`ConversionError::NullPointer`].

use crate::bytes::MAX_BIT_INDEX;
use crate::data_type::{DataType, RegisterLayout, ValueKind};
use crate::decode::decode;
use crate::error::{ConversionError, Result};
use crate::scale::{scale_with_mode, NarrowingMode};
use crate::value::RegisterValue;

/// Convert registers to a scaled value of `data_type`
///
/// `bit_pos` selects the bit for [`DataType::Boolean`] and is ignored
/// otherwise. Narrowing wraps on overflow.
///
/// # Example
///
/// ```rust
/// use voltage_regconv::{convert, DataType, RegisterValue};
///
/// let value = convert(&[0x00FA], DataType::Int16SignedAb, 0, 0.1).unwrap();
/// assert_eq!(value, RegisterValue::I16(25));
/// ```
pub fn convert(
    registers: &[u16],
    data_type: DataType,
    bit_pos: u8,
    scaling_factor: f64,
) -> Result<RegisterValue> {
    convert_with_mode(
        registers,
        data_type,
        bit_pos,
        scaling_factor,
        NarrowingMode::Wrapping,
    )
}

/// Like [`convert`], with an explicit narrowing mode
pub fn convert_with_mode(
    registers: &[u16],
    data_type: DataType,
    bit_pos: u8,
    scaling_factor: f64,
    mode: NarrowingMode,
) -> Result<RegisterValue> {
    validate(registers, data_type, bit_pos)?;
    let raw = decode(registers, data_type, bit_pos);
    scale_with_mode(raw, scaling_factor, mode, data_type)
}

/// Check register count and bit position for `data_type`
pub fn validate(registers: &[u16], data_type: DataType, bit_pos: u8) -> Result<()> {
    let descriptor = data_type.descriptor();
    if registers.len() < descriptor.registers {
        return Err(ConversionError::insufficient(
            descriptor.registers,
            registers.len(),
        ));
    }
    if descriptor.layout == RegisterLayout::Bit && bit_pos > MAX_BIT_INDEX {
        return Err(ConversionError::invalid_bit(bit_pos));
    }
    Ok(())
}

// ============================================================================
// Per-width entry points
// ============================================================================

fn require_buffer(registers: &[u16]) -> Result<()> {
    if registers.is_empty() {
        return Err(ConversionError::NullPointer);
    }
    Ok(())
}

/// Reject data types outside a width family
fn require_family(data_type: DataType, width: usize, float: bool) -> Result<()> {
    let descriptor = data_type.descriptor();
    let kind_matches = match descriptor.kind {
        ValueKind::Float => float,
        ValueKind::SignedInt | ValueKind::UnsignedInt => !float,
        ValueKind::Bool => false,
    };
    if kind_matches && descriptor.width == width {
        Ok(())
    } else {
        Err(ConversionError::InvalidDataType)
    }
}

/// Read bit `bit_pos` (0 = LSB) of the first register
pub fn convert_bit_bool(registers: &[u16], bit_pos: u8) -> Result<bool> {
    require_buffer(registers)?;
    match convert(registers, DataType::Boolean, bit_pos, 1.0)? {
        RegisterValue::Bool(v) => Ok(v),
        _ => Err(ConversionError::Unknown),
    }
}

/// Signed 8-bit value from the low byte of the first register
pub fn convert_int8_signed(registers: &[u16], scaling_factor: f64) -> Result<i8> {
    require_buffer(registers)?;
    match convert(registers, DataType::Int8Signed, 0, scaling_factor)? {
        RegisterValue::I8(v) => Ok(v),
        _ => Err(ConversionError::Unknown),
    }
}

/// Unsigned 8-bit value from the low byte of the first register
pub fn convert_int8_unsigned(registers: &[u16], scaling_factor: f64) -> Result<u8> {
    require_buffer(registers)?;
    match convert(registers, DataType::Int8Unsigned, 0, scaling_factor)? {
        RegisterValue::U8(v) => Ok(v),
        _ => Err(ConversionError::Unknown),
    }
}

/// Signed 16-bit value; `swap_bytes` selects BA instead of AB
pub fn convert_int16_signed(
    registers: &[u16],
    swap_bytes: bool,
    scaling_factor: f64,
) -> Result<i16> {
    require_buffer(registers)?;
    match convert(registers, DataType::int16(true, swap_bytes), 0, scaling_factor)? {
        RegisterValue::I16(v) => Ok(v),
        _ => Err(ConversionError::Unknown),
    }
}

/// Unsigned 16-bit value; `swap_bytes` selects BA instead of AB
pub fn convert_int16_unsigned(
    registers: &[u16],
    swap_bytes: bool,
    scaling_factor: f64,
) -> Result<u16> {
    require_buffer(registers)?;
    match convert(registers, DataType::int16(false, swap_bytes), 0, scaling_factor)? {
        RegisterValue::U16(v) => Ok(v),
        _ => Err(ConversionError::Unknown),
    }
}

/// 32-bit integer (`I32` or `U32`) for any `Int32*` data type
pub fn convert_int32(
    registers: &[u16],
    data_type: DataType,
    scaling_factor: f64,
) -> Result<RegisterValue> {
    require_buffer(registers)?;
    require_family(data_type, 4, false)?;
    convert(registers, data_type, 0, scaling_factor)
}

/// 64-bit integer (`I64` or `U64`) for any `Int64*` data type
pub fn convert_int64(
    registers: &[u16],
    data_type: DataType,
    scaling_factor: f64,
) -> Result<RegisterValue> {
    require_buffer(registers)?;
    require_family(data_type, 8, false)?;
    convert(registers, data_type, 0, scaling_factor)
}

/// IEEE-754 binary32 for any `Float32*` data type
pub fn convert_float32(registers: &[u16], data_type: DataType, scaling_factor: f64) -> Result<f32> {
    require_buffer(registers)?;
    require_family(data_type, 4, true)?;
    match convert(registers, data_type, 0, scaling_factor)? {
        RegisterValue::F32(v) => Ok(v),
        _ => Err(ConversionError::Unknown),
    }
}

/// IEEE-754 binary64 for any `Float64*` data type
pub fn convert_float64(registers: &[u16], data_type: DataType, scaling_factor: f64) -> Result<f64> {
    require_buffer(registers)?;
    require_family(data_type, 8, true)?;
    match convert(registers, data_type, 0, scaling_factor)? {
        RegisterValue::F64(v) => Ok(v),
        _ => Err(ConversionError::Unknown),
    }
}

//! Register encoding
//!
//! Inverse of the decode engine: lays an unscaled value out in registers
//! the way a device using `data_type` would transmit it. Used to prepare
//! register writes.

use crate::bytes::{bytes_to_regs, with_bit_u16, MAX_BIT_INDEX};
use crate::data_type::{DataType, RegisterLayout};
use crate::error::{ConversionError, Result};
use crate::value::RegisterValue;

/// Encode `value` into `data_type.register_count()` registers
///
/// The value's variant must match the data type's kind and width exactly;
/// anything else is [`ConversionError::InvalidDataType`]. 8-bit values go
/// in the low byte with a zero high byte. A boolean sets or clears bit
/// `bit_pos` of an otherwise zero register.
pub fn encode(value: RegisterValue, data_type: DataType, bit_pos: u8) -> Result<Vec<u16>> {
    let descriptor = data_type.descriptor();
    if value.kind() != descriptor.kind || value.width() != descriptor.width {
        return Err(ConversionError::InvalidDataType);
    }

    match (descriptor.layout, value) {
        (RegisterLayout::Bit, RegisterValue::Bool(bit)) => {
            if bit_pos > MAX_BIT_INDEX {
                return Err(ConversionError::invalid_bit(bit_pos));
            }
            Ok(vec![with_bit_u16(0, bit_pos, bit)])
        },
        (RegisterLayout::LowByte, RegisterValue::I8(v)) => Ok(vec![v as u8 as u16]),
        (RegisterLayout::LowByte, RegisterValue::U8(v)) => Ok(vec![v as u16]),
        (RegisterLayout::Ordered(order), _) => {
            let canonical = value.to_be_bytes();
            let regs = match canonical.len() {
                2 => bytes_to_regs::<2>(&to_array(&canonical)?, order),
                4 => bytes_to_regs::<4>(&to_array(&canonical)?, order),
                8 => bytes_to_regs::<8>(&to_array(&canonical)?, order),
                _ => return Err(ConversionError::InvalidDataType),
            };
            Ok(regs)
        },
        _ => Err(ConversionError::InvalidDataType),
    }
}

fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| ConversionError::Unknown)
}

//! Decode engine
//!
//! Turns the leading registers of a buffer into an unscaled value:
//! registers → raw bytes → canonical big-endian bytes (byte order
//! permutation) → integer or IEEE-754 reinterpretation. Booleans and 8-bit
//! integers read the first register directly.
//!
//! No validation happens here; see [`crate::convert`] for the checked entry
//! points.

use crate::bytes::{self, extract_bit_u16, low_byte};
use crate::data_type::{DataType, RegisterLayout, ValueKind};
use crate::value::RegisterValue;

/// Decode the leading registers as `data_type`, without scaling
///
/// Registers beyond `data_type.register_count()` are ignored. `bit_pos` is
/// only read for [`DataType::Boolean`].
///
/// # Panics
/// If fewer than `data_type.register_count()` registers are supplied, or
/// `bit_pos > 15` for a boolean.
pub(crate) fn decode(registers: &[u16], data_type: DataType, bit_pos: u8) -> RegisterValue {
    let descriptor = data_type.descriptor();
    let regs = &registers[..descriptor.registers];

    match descriptor.layout {
        RegisterLayout::Bit => RegisterValue::Bool(extract_bit_u16(regs[0], bit_pos)),
        RegisterLayout::LowByte => {
            let byte = low_byte(regs[0]);
            match descriptor.kind {
                ValueKind::SignedInt => RegisterValue::I8(byte as i8),
                _ => RegisterValue::U8(byte),
            }
        },
        RegisterLayout::Ordered(order) => match (descriptor.kind, descriptor.width) {
            (ValueKind::SignedInt, 2) => RegisterValue::I16(bytes::regs_to_i16(regs, order)),
            (ValueKind::UnsignedInt, 2) => RegisterValue::U16(bytes::regs_to_u16(regs, order)),
            (ValueKind::SignedInt, 4) => RegisterValue::I32(bytes::regs_to_i32(regs, order)),
            (ValueKind::UnsignedInt, 4) => RegisterValue::U32(bytes::regs_to_u32(regs, order)),
            (ValueKind::Float, 4) => RegisterValue::F32(bytes::regs_to_f32(regs, order)),
            (ValueKind::SignedInt, 8) => RegisterValue::I64(bytes::regs_to_i64(regs, order)),
            (ValueKind::UnsignedInt, 8) => RegisterValue::U64(bytes::regs_to_u64(regs, order)),
            (ValueKind::Float, 8) => RegisterValue::F64(bytes::regs_to_f64(regs, order)),
            (kind, width) => unreachable!("no {:?} layout of width {} in the table", kind, width),
        },
    }
}

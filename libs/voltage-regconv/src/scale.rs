//! Scale-and-narrow step
//!
//! Integers are promoted to f64, multiplied by the factor, truncated toward
//! zero, and narrowed back into their own width. The default narrowing wraps
//! modulo 2^bits exactly like a fixed-width integer cast, so `100i8 * 2.0`
//! yields `-56`. Checked and saturating narrowing are opt-in.
//!
//! Floats are multiplied in f64 and rounded to their own width. Booleans are
//! never scaled.

use serde::{Deserialize, Serialize};

use crate::data_type::DataType;
use crate::error::{ConversionError, Result};
use crate::value::RegisterValue;

/// 2^127; every f64 at or above this magnitude is a multiple of 2^64
const WRAP_LIMIT: f64 = i128::MAX as f64;

/// How a scaled product is narrowed into the output type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrowingMode {
    /// Truncate toward zero, wrap modulo 2^bits (fixed-width cast semantics)
    #[default]
    Wrapping,
    /// Truncate toward zero, fail with `Overflow` when out of range
    Checked,
    /// Truncate toward zero, clamp to the output range (NaN becomes 0)
    Saturating,
}

/// Truncate toward zero and reduce modulo 2^64
///
/// Non-finite input yields 0. Narrowing the result with `as` to a smaller
/// integer type keeps the low bits, completing the wrap for that width.
#[inline]
pub fn truncate_wrapping(product: f64) -> u64 {
    if !product.is_finite() {
        return 0;
    }
    let truncated = product.trunc();
    if truncated.abs() >= WRAP_LIMIT {
        return 0;
    }
    (truncated as i128) as u64
}

macro_rules! narrow_checked {
    ($product:expr, $ty:ty, $data_type:expr) => {{
        let truncated = $product.trunc();
        // Upper bound is exclusive: MAX + 1 is exact in f64 for every width
        if truncated >= <$ty>::MIN as f64 && truncated < <$ty>::MAX as f64 + 1.0 {
            Ok(truncated as $ty)
        } else {
            Err(ConversionError::Overflow { data_type: $data_type })
        }
    }};
}

/// Scale `value` by `factor` with wrap-on-overflow narrowing
///
/// A factor of exactly 1.0 returns `value` unchanged.
pub fn scale(value: RegisterValue, factor: f64) -> RegisterValue {
    if factor == 1.0 {
        return value;
    }
    match value {
        RegisterValue::Bool(_) => value,
        RegisterValue::I8(v) => RegisterValue::I8(truncate_wrapping(v as f64 * factor) as i8),
        RegisterValue::U8(v) => RegisterValue::U8(truncate_wrapping(v as f64 * factor) as u8),
        RegisterValue::I16(v) => RegisterValue::I16(truncate_wrapping(v as f64 * factor) as i16),
        RegisterValue::U16(v) => RegisterValue::U16(truncate_wrapping(v as f64 * factor) as u16),
        RegisterValue::I32(v) => RegisterValue::I32(truncate_wrapping(v as f64 * factor) as i32),
        RegisterValue::U32(v) => RegisterValue::U32(truncate_wrapping(v as f64 * factor) as u32),
        RegisterValue::I64(v) => RegisterValue::I64(truncate_wrapping(v as f64 * factor) as i64),
        RegisterValue::U64(v) => RegisterValue::U64(truncate_wrapping(v as f64 * factor)),
        RegisterValue::F32(v) => RegisterValue::F32((v as f64 * factor) as f32),
        RegisterValue::F64(v) => RegisterValue::F64(v * factor),
    }
}

/// Scale `value` by `factor` with saturating narrowing
pub fn scale_saturating(value: RegisterValue, factor: f64) -> RegisterValue {
    if factor == 1.0 {
        return value;
    }
    // `as` from f64 truncates toward zero, saturates, and maps NaN to 0
    match value {
        RegisterValue::Bool(_) => value,
        RegisterValue::I8(v) => RegisterValue::I8((v as f64 * factor) as i8),
        RegisterValue::U8(v) => RegisterValue::U8((v as f64 * factor) as u8),
        RegisterValue::I16(v) => RegisterValue::I16((v as f64 * factor) as i16),
        RegisterValue::U16(v) => RegisterValue::U16((v as f64 * factor) as u16),
        RegisterValue::I32(v) => RegisterValue::I32((v as f64 * factor) as i32),
        RegisterValue::U32(v) => RegisterValue::U32((v as f64 * factor) as u32),
        RegisterValue::I64(v) => RegisterValue::I64((v as f64 * factor) as i64),
        RegisterValue::U64(v) => RegisterValue::U64((v as f64 * factor) as u64),
        RegisterValue::F32(v) => RegisterValue::F32((v as f64 * factor) as f32),
        RegisterValue::F64(v) => RegisterValue::F64(v * factor),
    }
}

/// Scale `value` by `factor`, failing when the result does not fit
///
/// Non-finite products of finite inputs are overflows for floats as well.
/// `data_type` only labels the error.
pub fn scale_checked(
    value: RegisterValue,
    factor: f64,
    data_type: DataType,
) -> Result<RegisterValue> {
    if factor == 1.0 {
        return Ok(value);
    }
    let overflow = ConversionError::Overflow { data_type };
    let scaled = match value {
        RegisterValue::Bool(_) => value,
        RegisterValue::I8(v) => {
            RegisterValue::I8(narrow_checked!(v as f64 * factor, i8, data_type)?)
        },
        RegisterValue::U8(v) => {
            RegisterValue::U8(narrow_checked!(v as f64 * factor, u8, data_type)?)
        },
        RegisterValue::I16(v) => {
            RegisterValue::I16(narrow_checked!(v as f64 * factor, i16, data_type)?)
        },
        RegisterValue::U16(v) => {
            RegisterValue::U16(narrow_checked!(v as f64 * factor, u16, data_type)?)
        },
        RegisterValue::I32(v) => {
            RegisterValue::I32(narrow_checked!(v as f64 * factor, i32, data_type)?)
        },
        RegisterValue::U32(v) => {
            RegisterValue::U32(narrow_checked!(v as f64 * factor, u32, data_type)?)
        },
        RegisterValue::I64(v) => {
            RegisterValue::I64(narrow_checked!(v as f64 * factor, i64, data_type)?)
        },
        RegisterValue::U64(v) => {
            RegisterValue::U64(narrow_checked!(v as f64 * factor, u64, data_type)?)
        },
        RegisterValue::F32(v) => {
            let product = v as f64 * factor;
            let narrowed = product as f32;
            if v.is_finite() && factor.is_finite() && !narrowed.is_finite() {
                return Err(overflow);
            }
            RegisterValue::F32(narrowed)
        },
        RegisterValue::F64(v) => {
            let product = v * factor;
            if v.is_finite() && factor.is_finite() && !product.is_finite() {
                return Err(overflow);
            }
            RegisterValue::F64(product)
        },
    };
    Ok(scaled)
}

/// Scale with the given narrowing mode
pub fn scale_with_mode(
    value: RegisterValue,
    factor: f64,
    mode: NarrowingMode,
    data_type: DataType,
) -> Result<RegisterValue> {
    match mode {
        NarrowingMode::Wrapping => Ok(scale(value, factor)),
        NarrowingMode::Saturating => Ok(scale_saturating(value, factor)),
        NarrowingMode::Checked => scale_checked(value, factor, data_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int8_wraps() {
        assert_eq!(scale(RegisterValue::I8(100), 2.0), RegisterValue::I8(-56));
        assert_eq!(scale(RegisterValue::U8(200), 2.0), RegisterValue::U8(144));
        assert_eq!(scale(RegisterValue::I8(-100), 2.0), RegisterValue::I8(56));
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(scale(RegisterValue::I16(250), 0.1), RegisterValue::I16(25));
        assert_eq!(scale(RegisterValue::I16(-37), 0.1), RegisterValue::I16(-3));
        assert_eq!(scale(RegisterValue::U32(19), 0.5), RegisterValue::U32(9));
    }

    #[test]
    fn test_negative_into_unsigned_wraps() {
        assert_eq!(scale(RegisterValue::U16(1), -1.0), RegisterValue::U16(u16::MAX));
        assert_eq!(scale(RegisterValue::U64(2), -1.0), RegisterValue::U64(u64::MAX - 1));
    }

    #[test]
    fn test_wide_wrap() {
        // 2^31 wraps to i32::MIN
        assert_eq!(
            scale(RegisterValue::I32(1 << 30), 2.0),
            RegisterValue::I32(i32::MIN)
        );
        // 2^64 is 0 modulo 2^64
        assert_eq!(scale(RegisterValue::U64(1 << 63), 2.0), RegisterValue::U64(0));
    }

    #[test]
    fn test_non_finite_narrows_to_zero() {
        assert_eq!(scale(RegisterValue::I32(5), f64::NAN), RegisterValue::I32(0));
        assert_eq!(scale(RegisterValue::I32(5), f64::INFINITY), RegisterValue::I32(0));
        assert_eq!(truncate_wrapping(1e300), 0);
        assert_eq!(truncate_wrapping(-1.0), u64::MAX);
    }

    #[test]
    fn test_unit_factor_is_identity() {
        assert_eq!(scale(RegisterValue::U64(u64::MAX), 1.0), RegisterValue::U64(u64::MAX));
        assert_eq!(
            scale(RegisterValue::I64(i64::MAX - 1), 1.0),
            RegisterValue::I64(i64::MAX - 1)
        );
    }

    #[test]
    fn test_floats_and_bools() {
        assert_eq!(scale(RegisterValue::F64(2.5), 2.0), RegisterValue::F64(5.0));
        assert_eq!(scale(RegisterValue::F32(1.5), -2.0), RegisterValue::F32(-3.0));
        assert_eq!(scale(RegisterValue::Bool(true), 0.0), RegisterValue::Bool(true));
    }

    #[test]
    fn test_checked_reports_overflow() {
        let dt = DataType::Int8Signed;
        assert_eq!(
            scale_checked(RegisterValue::I8(100), 2.0, dt),
            Err(ConversionError::Overflow { data_type: dt })
        );
        assert_eq!(
            scale_checked(RegisterValue::I8(100), 1.25, dt),
            Ok(RegisterValue::I8(125))
        );
        assert!(scale_checked(RegisterValue::U16(1), -1.0, DataType::Int16UnsignedAb).is_err());
        assert!(scale_checked(RegisterValue::I32(1), f64::NAN, DataType::Int32SignedAbcd).is_err());
        assert!(scale_checked(
            RegisterValue::U64(u64::MAX),
            1.5,
            DataType::Int64UnsignedAbcdefgh
        )
        .is_err());
        assert!(scale_checked(RegisterValue::F32(f32::MAX), 10.0, DataType::Float32Abcd).is_err());
    }

    #[test]
    fn test_checked_float64_overflow() {
        let dt = DataType::Float64Abcdefgh;
        assert_eq!(
            scale_checked(RegisterValue::F64(f64::MAX), 10.0, dt),
            Err(ConversionError::Overflow { data_type: dt })
        );
        assert_eq!(
            scale_checked(RegisterValue::F64(-f64::MAX), 2.0, dt),
            Err(ConversionError::Overflow { data_type: dt })
        );
        // Already non-finite values pass through
        assert_eq!(
            scale_checked(RegisterValue::F64(f64::INFINITY), 2.0, dt),
            Ok(RegisterValue::F64(f64::INFINITY))
        );
        assert_eq!(
            scale_checked(RegisterValue::F64(1.5e300), 2.0, dt),
            Ok(RegisterValue::F64(3.0e300))
        );
    }

    #[test]
    fn test_saturating_clamps() {
        assert_eq!(scale_saturating(RegisterValue::I8(100), 2.0), RegisterValue::I8(i8::MAX));
        assert_eq!(scale_saturating(RegisterValue::U8(5), -1.0), RegisterValue::U8(0));
        assert_eq!(scale_saturating(RegisterValue::I16(5), f64::NAN), RegisterValue::I16(0));
    }

    #[test]
    fn test_scale_with_mode() {
        let value = RegisterValue::I8(100);
        let dt = DataType::Int8Signed;
        assert_eq!(
            scale_with_mode(value, 2.0, NarrowingMode::Wrapping, dt),
            Ok(RegisterValue::I8(-56))
        );
        assert_eq!(
            scale_with_mode(value, 2.0, NarrowingMode::Saturating, dt),
            Ok(RegisterValue::I8(127))
        );
        assert!(scale_with_mode(value, 2.0, NarrowingMode::Checked, dt).is_err());
        assert_eq!(NarrowingMode::default(), NarrowingMode::Wrapping);
    }
}

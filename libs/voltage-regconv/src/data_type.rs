//! Data type identifiers and their descriptor table
//!
//! `DataType` is a closed set of 43 identifiers. Each one names a
//! (kind, width, byte order) triple and maps to exactly one
//! [`TypeDescriptor`] in a static table built at compile time.

use serde::{Deserialize, Serialize};

use crate::bytes::ByteOrder;
use crate::error::ConversionError;

/// Numeric interpretation of the canonical bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    SignedInt,
    UnsignedInt,
    Float,
}

/// Where a value sits inside its registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterLayout {
    /// One bit of the first register, selected by the caller
    Bit,
    /// Low byte of the first register
    LowByte,
    /// Whole registers, reordered by a byte order permutation
    Ordered(ByteOrder),
}

/// Static description of a data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    /// Registers consumed from the front of the input
    pub registers: usize,
    /// Width of the decoded value in bytes
    pub width: usize,
    pub kind: ValueKind,
    pub layout: RegisterLayout,
}

impl TypeDescriptor {
    /// Byte order for `Ordered` layouts
    pub fn byte_order(&self) -> Option<ByteOrder> {
        match self.layout {
            RegisterLayout::Ordered(order) => Some(order),
            _ => None,
        }
    }
}

macro_rules! data_types {
    ($(
        $variant:ident => $name:literal, $regs:literal, $width:literal, $kind:ident,
        $layout:ident $(($order:ident))?;
    )*) => {
        /// Register data type (kind, width and byte order)
        ///
        /// The discriminant is the stable numeric code accepted by
        /// `DataType::try_from(u8)`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum DataType {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        static DESCRIPTORS: [TypeDescriptor; DataType::COUNT] = [
            $(
                TypeDescriptor {
                    registers: $regs,
                    width: $width,
                    kind: ValueKind::$kind,
                    layout: RegisterLayout::$layout $((ByteOrder::$order))?,
                },
            )*
        ];

        impl DataType {
            /// Number of data types
            pub const COUNT: usize = [$(DataType::$variant,)*].len();

            /// Every data type, in code order
            pub const ALL: [DataType; DataType::COUNT] = [$(DataType::$variant,)*];

            /// Canonical snake_case name, e.g. "float32_cdab"
            pub fn name(&self) -> &'static str {
                match self {
                    $(DataType::$variant => $name,)*
                }
            }
        }
    };
}

data_types! {
    Boolean => "boolean", 1, 1, Bool, Bit;

    Int8Signed => "int8_signed", 1, 1, SignedInt, LowByte;
    Int8Unsigned => "int8_unsigned", 1, 1, UnsignedInt, LowByte;

    Int16SignedAb => "int16_signed_ab", 1, 2, SignedInt, Ordered(AB);
    Int16SignedBa => "int16_signed_ba", 1, 2, SignedInt, Ordered(BA);
    Int16UnsignedAb => "int16_unsigned_ab", 1, 2, UnsignedInt, Ordered(AB);
    Int16UnsignedBa => "int16_unsigned_ba", 1, 2, UnsignedInt, Ordered(BA);

    Int32SignedAbcd => "int32_signed_abcd", 2, 4, SignedInt, Ordered(ABCD);
    Int32SignedDcba => "int32_signed_dcba", 2, 4, SignedInt, Ordered(DCBA);
    Int32SignedBadc => "int32_signed_badc", 2, 4, SignedInt, Ordered(BADC);
    Int32SignedCdab => "int32_signed_cdab", 2, 4, SignedInt, Ordered(CDAB);
    Int32UnsignedAbcd => "int32_unsigned_abcd", 2, 4, UnsignedInt, Ordered(ABCD);
    Int32UnsignedDcba => "int32_unsigned_dcba", 2, 4, UnsignedInt, Ordered(DCBA);
    Int32UnsignedBadc => "int32_unsigned_badc", 2, 4, UnsignedInt, Ordered(BADC);
    Int32UnsignedCdab => "int32_unsigned_cdab", 2, 4, UnsignedInt, Ordered(CDAB);

    Int64SignedAbcdefgh => "int64_signed_abcdefgh", 4, 8, SignedInt, Ordered(ABCDEFGH);
    Int64SignedHgfedcba => "int64_signed_hgfedcba", 4, 8, SignedInt, Ordered(HGFEDCBA);
    Int64SignedBadcfehg => "int64_signed_badcfehg", 4, 8, SignedInt, Ordered(BADCFEHG);
    Int64SignedCdabghef => "int64_signed_cdabghef", 4, 8, SignedInt, Ordered(CDABGHEF);
    Int64SignedDcbahgfe => "int64_signed_dcbahgfe", 4, 8, SignedInt, Ordered(DCBAHGFE);
    Int64SignedGhefcdab => "int64_signed_ghefcdab", 4, 8, SignedInt, Ordered(GHEFCDAB);
    Int64SignedFehgbadc => "int64_signed_fehgbadc", 4, 8, SignedInt, Ordered(FEHGBADC);
    Int64SignedEfghabcd => "int64_signed_efghabcd", 4, 8, SignedInt, Ordered(EFGHABCD);
    Int64UnsignedAbcdefgh => "int64_unsigned_abcdefgh", 4, 8, UnsignedInt, Ordered(ABCDEFGH);
    Int64UnsignedHgfedcba => "int64_unsigned_hgfedcba", 4, 8, UnsignedInt, Ordered(HGFEDCBA);
    Int64UnsignedBadcfehg => "int64_unsigned_badcfehg", 4, 8, UnsignedInt, Ordered(BADCFEHG);
    Int64UnsignedCdabghef => "int64_unsigned_cdabghef", 4, 8, UnsignedInt, Ordered(CDABGHEF);
    Int64UnsignedDcbahgfe => "int64_unsigned_dcbahgfe", 4, 8, UnsignedInt, Ordered(DCBAHGFE);
    Int64UnsignedGhefcdab => "int64_unsigned_ghefcdab", 4, 8, UnsignedInt, Ordered(GHEFCDAB);
    Int64UnsignedFehgbadc => "int64_unsigned_fehgbadc", 4, 8, UnsignedInt, Ordered(FEHGBADC);
    Int64UnsignedEfghabcd => "int64_unsigned_efghabcd", 4, 8, UnsignedInt, Ordered(EFGHABCD);

    Float32Abcd => "float32_abcd", 2, 4, Float, Ordered(ABCD);
    Float32Cdab => "float32_cdab", 2, 4, Float, Ordered(CDAB);
    Float32Dcba => "float32_dcba", 2, 4, Float, Ordered(DCBA);
    Float32Badc => "float32_badc", 2, 4, Float, Ordered(BADC);

    Float64Abcdefgh => "float64_abcdefgh", 4, 8, Float, Ordered(ABCDEFGH);
    Float64Hgfedcba => "float64_hgfedcba", 4, 8, Float, Ordered(HGFEDCBA);
    Float64Badcfehg => "float64_badcfehg", 4, 8, Float, Ordered(BADCFEHG);
    Float64Cdabghef => "float64_cdabghef", 4, 8, Float, Ordered(CDABGHEF);
    Float64Dcbahgfe => "float64_dcbahgfe", 4, 8, Float, Ordered(DCBAHGFE);
    Float64Ghefcdab => "float64_ghefcdab", 4, 8, Float, Ordered(GHEFCDAB);
    Float64Fehgbadc => "float64_fehgbadc", 4, 8, Float, Ordered(FEHGBADC);
    Float64Efghabcd => "float64_efghabcd", 4, 8, Float, Ordered(EFGHABCD);
}

impl DataType {
    /// Descriptor for this data type
    #[inline]
    pub fn descriptor(&self) -> &'static TypeDescriptor {
        &DESCRIPTORS[*self as usize]
    }

    /// Stable numeric code
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Registers consumed by this data type
    #[inline]
    pub fn register_count(&self) -> usize {
        self.descriptor().registers
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.descriptor().kind
    }

    /// Find the data type with the given kind, width and layout
    pub fn find(kind: ValueKind, width: usize, layout: RegisterLayout) -> Option<Self> {
        Self::ALL.into_iter().find(|dt| {
            let d = dt.descriptor();
            d.kind == kind && d.width == width && d.layout == layout
        })
    }

    /// 16-bit integer type for a swap-bytes flag
    pub fn int16(signed: bool, swap_bytes: bool) -> Self {
        match (signed, swap_bytes) {
            (true, false) => DataType::Int16SignedAb,
            (true, true) => DataType::Int16SignedBa,
            (false, false) => DataType::Int16UnsignedAb,
            (false, true) => DataType::Int16UnsignedBa,
        }
    }

    /// Look up a data type by name
    ///
    /// Accepts the canonical name in any case, with `-` in place of `_`.
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|dt| dt.name() == normalized)
    }
}

impl TryFrom<u8> for DataType {
    type Error = ConversionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(ConversionError::InvalidDataType)
    }
}

impl From<DataType> for u8 {
    fn from(data_type: DataType) -> u8 {
        data_type.code()
    }
}

impl std::str::FromStr for DataType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::from_name(s).ok_or(ConversionError::InvalidDataType)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_exhaustive() {
        assert_eq!(DataType::ALL.len(), DataType::COUNT);
        for (i, dt) in DataType::ALL.iter().enumerate() {
            assert_eq!(dt.code() as usize, i, "{} out of code order", dt);
            assert_eq!(DataType::try_from(i as u8).unwrap(), *dt);
        }
    }

    #[test]
    fn test_no_descriptor_collisions() {
        let mut seen = HashSet::new();
        for dt in DataType::ALL {
            let d = dt.descriptor();
            assert!(
                seen.insert((d.kind, d.width, d.layout)),
                "{} collides with another data type",
                dt
            );
        }
    }

    #[test]
    fn test_descriptor_invariants() {
        for dt in DataType::ALL {
            let d = dt.descriptor();
            match d.layout {
                RegisterLayout::Bit => {
                    assert_eq!(d.kind, ValueKind::Bool);
                    assert_eq!(d.registers, 1);
                },
                RegisterLayout::LowByte => {
                    assert_eq!((d.registers, d.width), (1, 1), "{}", dt);
                },
                RegisterLayout::Ordered(order) => {
                    assert_eq!(d.width, d.registers * 2, "{}", dt);
                    assert_eq!(order.width(), d.width, "{}", dt);
                },
            }
            if d.kind == ValueKind::Float {
                assert!(matches!(d.width, 4 | 8), "{}", dt);
            }
        }
    }

    #[test]
    fn test_names_match_layout() {
        for dt in DataType::ALL {
            if let Some(order) = dt.descriptor().byte_order() {
                let suffix = order.name().to_ascii_lowercase();
                assert!(dt.name().ends_with(&suffix), "{} vs {}", dt, order);
            }
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(DataType::COUNT, 43);
        assert_eq!(DataType::try_from(42), Ok(DataType::Float64Efghabcd));
        assert_eq!(DataType::try_from(43), Err(ConversionError::InvalidDataType));
        assert_eq!(DataType::try_from(255), Err(ConversionError::InvalidDataType));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(DataType::from_name("float32_cdab"), Some(DataType::Float32Cdab));
        assert_eq!(DataType::from_name("INT16-SIGNED-BA"), Some(DataType::Int16SignedBa));
        assert_eq!(DataType::from_name("float"), None);
        assert_eq!(
            "uint7".parse::<DataType>(),
            Err(ConversionError::InvalidDataType)
        );
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&DataType::Int64UnsignedGhefcdab).unwrap();
        assert_eq!(json, "\"int64_unsigned_ghefcdab\"");
        let back: DataType = serde_json::from_str("\"float64_efghabcd\"").unwrap();
        assert_eq!(back, DataType::Float64Efghabcd);
    }

    #[test]
    fn test_find_and_int16() {
        assert_eq!(
            DataType::find(ValueKind::Float, 4, RegisterLayout::Ordered(ByteOrder::CDAB)),
            Some(DataType::Float32Cdab)
        );
        assert_eq!(
            DataType::find(ValueKind::Float, 2, RegisterLayout::Ordered(ByteOrder::AB)),
            None
        );
        assert_eq!(DataType::int16(true, true), DataType::Int16SignedBa);
        assert_eq!(DataType::int16(false, false), DataType::Int16UnsignedAb);
    }
}

//! Byte/word order table for register-encoded values
//!
//! Every supported ordering is a fixed permutation from the raw register
//! bytes (as transmitted) to canonical big-endian order. The permutations
//! live in static tables; nothing is computed per call.


/// Byte/word order of a 16/32/64-bit value spread across registers
///
/// # Naming Convention
/// Each source byte is labelled with a letter in transmission order:
/// - A, B = register 0 high/low byte
/// - C, D = register 1 high/low byte
/// - E, F = register 2 high/low byte
/// - G, H = register 3 high/low byte
///
/// The variant name lists those letters in the order they take in the
/// canonical big-endian value. For registers `[0x1234, 0x5678]`:
/// - `ABCD`: 0x12345678
/// - `DCBA`: 0x78563412
/// - `CDAB`: 0x56781234 (Modbus common)
/// - `BADC`: 0x34127856
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// 16-bit big-endian
    AB,
    /// 16-bit byte-swapped
    BA,

    /// 32-bit big-endian
    ABCD,
    /// 32-bit full byte reversal (little-endian)
    DCBA,
    /// 32-bit bytes swapped within each register
    BADC,
    /// 32-bit register order swapped
    CDAB,

    /// 64-bit big-endian
    ABCDEFGH,
    /// 64-bit full byte reversal (little-endian)
    HGFEDCBA,
    /// 64-bit bytes swapped within each register
    BADCFEHG,
    /// 64-bit registers swapped within each register pair
    CDABGHEF,
    /// 64-bit byte reversal within each register pair
    DCBAHGFE,
    /// 64-bit register order reversed
    GHEFCDAB,
    /// 64-bit register pairs swapped, bytes swapped within each register
    FEHGBADC,
    /// 64-bit register pairs swapped
    EFGHABCD,
}

const PERM_AB: [u8; 2] = [0, 1];
const PERM_BA: [u8; 2] = [1, 0];

const PERM_ABCD: [u8; 4] = [0, 1, 2, 3];
const PERM_DCBA: [u8; 4] = [3, 2, 1, 0];
const PERM_BADC: [u8; 4] = [1, 0, 3, 2];
const PERM_CDAB: [u8; 4] = [2, 3, 0, 1];

const PERM_ABCDEFGH: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const PERM_HGFEDCBA: [u8; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
const PERM_BADCFEHG: [u8; 8] = [1, 0, 3, 2, 5, 4, 7, 6];
const PERM_CDABGHEF: [u8; 8] = [2, 3, 0, 1, 6, 7, 4, 5];
const PERM_DCBAHGFE: [u8; 8] = [3, 2, 1, 0, 7, 6, 5, 4];
const PERM_GHEFCDAB: [u8; 8] = [6, 7, 4, 5, 2, 3, 0, 1];
const PERM_FEHGBADC: [u8; 8] = [5, 4, 7, 6, 1, 0, 3, 2];
const PERM_EFGHABCD: [u8; 8] = [4, 5, 6, 7, 0, 1, 2, 3];

impl ByteOrder {
    /// Every byte order, grouped by width
    pub const ALL: [ByteOrder; 14] = [
        Self::AB,
        Self::BA,
        Self::ABCD,
        Self::DCBA,
        Self::BADC,
        Self::CDAB,
        Self::ABCDEFGH,
        Self::HGFEDCBA,
        Self::BADCFEHG,
        Self::CDABGHEF,
        Self::DCBAHGFE,
        Self::GHEFCDAB,
        Self::FEHGBADC,
        Self::EFGHABCD,
    ];

    /// Parse a byte order name
    ///
    /// Case-insensitive; hyphens and underscores are ignored, so
    /// "CD-AB", "cdab" and "CD_AB" all yield `CDAB`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|order| order.name() == normalized)
    }

    /// Look up the order of a given width by name
    ///
    /// Returns `None` for unknown names and for names of another width.
    pub fn for_width(width: usize, name: &str) -> Option<Self> {
        Self::from_str(name).filter(|order| order.width() == width)
    }

    /// Letter name, e.g. "CDAB"
    pub fn name(&self) -> &'static str {
        match self {
            Self::AB => "AB",
            Self::BA => "BA",
            Self::ABCD => "ABCD",
            Self::DCBA => "DCBA",
            Self::BADC => "BADC",
            Self::CDAB => "CDAB",
            Self::ABCDEFGH => "ABCDEFGH",
            Self::HGFEDCBA => "HGFEDCBA",
            Self::BADCFEHG => "BADCFEHG",
            Self::CDABGHEF => "CDABGHEF",
            Self::DCBAHGFE => "DCBAHGFE",
            Self::GHEFCDAB => "GHEFCDAB",
            Self::FEHGBADC => "FEHGBADC",
            Self::EFGHABCD => "EFGHABCD",
        }
    }

    /// Permutation into canonical big-endian order
    ///
    /// `canonical[i] = raw[perm[i]]`, where raw holds each register's high
    /// byte followed by its low byte.
    pub fn permutation(&self) -> &'static [u8] {
        match self {
            Self::AB => &PERM_AB,
            Self::BA => &PERM_BA,
            Self::ABCD => &PERM_ABCD,
            Self::DCBA => &PERM_DCBA,
            Self::BADC => &PERM_BADC,
            Self::CDAB => &PERM_CDAB,
            Self::ABCDEFGH => &PERM_ABCDEFGH,
            Self::HGFEDCBA => &PERM_HGFEDCBA,
            Self::BADCFEHG => &PERM_BADCFEHG,
            Self::CDABGHEF => &PERM_CDABGHEF,
            Self::DCBAHGFE => &PERM_DCBAHGFE,
            Self::GHEFCDAB => &PERM_GHEFCDAB,
            Self::FEHGBADC => &PERM_FEHGBADC,
            Self::EFGHABCD => &PERM_EFGHABCD,
        }
    }

    /// Value width in bytes (2, 4 or 8)
    #[inline]
    pub fn width(&self) -> usize {
        self.permutation().len()
    }

    /// Registers consumed by a value in this order
    #[inline]
    pub fn register_count(&self) -> usize {
        self.width() / 2
    }

    /// Check whether bytes are swapped inside each register
    pub fn has_byte_swap(&self) -> bool {
        // The first canonical byte comes from a low byte
        self.permutation()[0] % 2 == 1
    }

    /// Check whether registers appear out of transmission order
    pub fn has_word_swap(&self) -> bool {
        self.permutation()
            .chunks(2)
            .enumerate()
            .any(|(i, pair)| pair[0] as usize / 2 != i)
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::ABCD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!(ByteOrder::from_str("ABCD"), Some(ByteOrder::ABCD));
        assert_eq!(ByteOrder::from_str("AB-CD"), Some(ByteOrder::ABCD));
        assert_eq!(ByteOrder::from_str("cd_ab"), Some(ByteOrder::CDAB));
        assert_eq!(ByteOrder::from_str("ba"), Some(ByteOrder::BA));
        assert_eq!(
            ByteOrder::from_str("ghef-cdab"),
            Some(ByteOrder::GHEFCDAB)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(ByteOrder::from_str("invalid"), None);
        assert_eq!(ByteOrder::from_str(""), None);
        assert_eq!(ByteOrder::from_str("ACBD"), None);
    }

    #[test]
    fn test_for_width() {
        assert_eq!(ByteOrder::for_width(4, "CDAB"), Some(ByteOrder::CDAB));
        assert_eq!(ByteOrder::for_width(8, "CDAB"), None);
        assert_eq!(ByteOrder::for_width(2, "BA"), Some(ByteOrder::BA));
    }

    #[test]
    fn test_permutation_matches_name() {
        for order in ByteOrder::ALL {
            let from_letters: Vec<u8> = order.name().bytes().map(|b| b - b'A').collect();
            assert_eq!(order.permutation(), from_letters.as_slice(), "{}", order);
        }
    }

    #[test]
    fn test_permutations_are_bijections() {
        for order in ByteOrder::ALL {
            let perm = order.permutation();
            let mut seen = vec![false; perm.len()];
            for &p in perm {
                assert!((p as usize) < perm.len(), "{} out of range", order);
                assert!(!seen[p as usize], "{} repeats index {}", order, p);
                seen[p as usize] = true;
            }
        }
    }

    #[test]
    fn test_properties() {
        assert_eq!(ByteOrder::BA.width(), 2);
        assert_eq!(ByteOrder::CDAB.register_count(), 2);
        assert_eq!(ByteOrder::EFGHABCD.register_count(), 4);

        assert!(ByteOrder::CDAB.has_word_swap());
        assert!(!ByteOrder::CDAB.has_byte_swap());
        assert!(ByteOrder::BADC.has_byte_swap());
        assert!(!ByteOrder::BADC.has_word_swap());
        assert!(ByteOrder::DCBA.has_byte_swap());
        assert!(ByteOrder::DCBA.has_word_swap());
        assert!(!ByteOrder::ABCDEFGH.has_word_swap());
    }

    #[test]
    fn test_default() {
        assert_eq!(ByteOrder::default(), ByteOrder::ABCD);
    }
}

//! Register ↔ numeric conversions driven by the byte order table
//!
//! Every multi-register conversion goes through the same two steps:
//! 1. Registers → raw bytes in transmission order (high byte, low byte)
//! 2. Raw bytes → canonical big-endian bytes via the order's permutation
//!
//! The typed helpers (`regs_to_u32`, `regs_to_f64`, ...) then read the
//! canonical bytes with `from_be_bytes`.
//!
//! # Panics
//! Callers must pass at least `N / 2` registers and an order of width `N`.
//! The validated entry points in [`crate::convert`] guarantee both.

use super::ByteOrder;

// ============================================================================
// Permutation Application
// ============================================================================

/// Flatten the leading `N / 2` registers into raw transmission-order bytes
#[inline]
pub fn regs_to_raw_bytes<const N: usize>(regs: &[u16]) -> [u8; N] {
    let mut raw = [0u8; N];
    for (chunk, reg) in raw.chunks_exact_mut(2).zip(regs) {
        chunk.copy_from_slice(&reg.to_be_bytes());
    }
    raw
}

/// Pack raw transmission-order bytes back into registers
pub fn raw_bytes_to_regs(raw: &[u8]) -> Vec<u16> {
    raw.chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

/// Reorder raw bytes into canonical order: `out[i] = raw[perm[i]]`
#[inline]
pub fn permute<const N: usize>(raw: &[u8; N], perm: &[u8]) -> [u8; N] {
    debug_assert_eq!(perm.len(), N, "permutation width mismatch");
    let mut out = [0u8; N];
    for (slot, &src) in out.iter_mut().zip(perm) {
        *slot = raw[src as usize];
    }
    out
}

/// Undo [`permute`]: `out[perm[i]] = canonical[i]`
#[inline]
pub fn unpermute<const N: usize>(canonical: &[u8; N], perm: &[u8]) -> [u8; N] {
    debug_assert_eq!(perm.len(), N, "permutation width mismatch");
    let mut out = [0u8; N];
    for (&byte, &dst) in canonical.iter().zip(perm) {
        out[dst as usize] = byte;
    }
    out
}

// ============================================================================
// Register to Bytes Conversions
// ============================================================================

/// Convert registers to `N` canonical big-endian bytes
#[inline]
pub fn regs_to_bytes<const N: usize>(regs: &[u16], order: ByteOrder) -> [u8; N] {
    debug_assert_eq!(order.width(), N, "{} is not a {}-byte order", order, N);
    permute(&regs_to_raw_bytes::<N>(regs), order.permutation())
}

/// Convert canonical big-endian bytes to registers laid out in `order`
pub fn bytes_to_regs<const N: usize>(canonical: &[u8; N], order: ByteOrder) -> Vec<u16> {
    debug_assert_eq!(order.width(), N, "{} is not a {}-byte order", order, N);
    raw_bytes_to_regs(&unpermute(canonical, order.permutation()))
}

// ============================================================================
// Register to Numeric Type Conversions
// ============================================================================

/// Convert 1 register to u16 (AB or BA)
pub fn regs_to_u16(regs: &[u16], order: ByteOrder) -> u16 {
    u16::from_be_bytes(regs_to_bytes(regs, order))
}

/// Convert 1 register to i16 (AB or BA)
pub fn regs_to_i16(regs: &[u16], order: ByteOrder) -> i16 {
    i16::from_be_bytes(regs_to_bytes(regs, order))
}

/// Convert 2 registers to u32
pub fn regs_to_u32(regs: &[u16], order: ByteOrder) -> u32 {
    u32::from_be_bytes(regs_to_bytes(regs, order))
}

/// Convert 2 registers to i32
pub fn regs_to_i32(regs: &[u16], order: ByteOrder) -> i32 {
    i32::from_be_bytes(regs_to_bytes(regs, order))
}

/// Convert 4 registers to u64
pub fn regs_to_u64(regs: &[u16], order: ByteOrder) -> u64 {
    u64::from_be_bytes(regs_to_bytes(regs, order))
}

/// Convert 4 registers to i64
pub fn regs_to_i64(regs: &[u16], order: ByteOrder) -> i64 {
    i64::from_be_bytes(regs_to_bytes(regs, order))
}

/// Convert 2 registers to f32
pub fn regs_to_f32(regs: &[u16], order: ByteOrder) -> f32 {
    f32::from_be_bytes(regs_to_bytes(regs, order))
}

/// Convert 4 registers to f64
pub fn regs_to_f64(regs: &[u16], order: ByteOrder) -> f64 {
    f64::from_be_bytes(regs_to_bytes(regs, order))
}

//! Binary data processing utilities
//!
//! Byte order table, permutation application, and bit extraction for
//! register-oriented industrial protocols (Modbus and friends).
//!
//! # Design Principles
//!
//! - **Data-driven**: one static permutation per byte order, one apply routine
//! - **Type-safe**: `ByteOrder` enum prevents string typos
//! - **Zero-copy**: fixed-size arrays, no allocation on the decode path

pub mod bit_ops;
pub mod byte_order;
pub mod conversions;

pub use bit_ops::*;
pub use byte_order::ByteOrder;
pub use conversions::*;

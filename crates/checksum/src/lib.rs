//! Table-driven CRC checksums for three fixed widths.
//!
//! This crate computes cyclic-redundancy-check codes over complete byte
//! sequences using precomputed 256-entry lookup tables. Three variants are
//! provided, each with the bit-ordering convention its catalog entry demands:
//!
//! | Type | Catalog identity | Polynomial | Output | Check (`"123456789"`) |
//! |------|------------------|------------|--------|-----------------------|
//! | [`Crc32`] | CRC-32/ISO-HDLC | 0x04C11DB7 | `u32` | 0xCBF43926 |
//! | [`Crc16`] | CRC-16/ARC | 0x8005 | `u16` | 0xBB3D |
//! | [`Crc7`] | CRC-7/MMC | 0x09 | `u8` | 0x75 |
//!
//! # Lookup Tables
//!
//! Each variant's table is built lazily on first use and cached for the life
//! of the process behind a one-time-initialization guard, so concurrent first
//! use can never observe a partially written table. Call
//! [`Checksum::ensure_ready`] to pay the build cost eagerly instead.
//!
//! # Example
//!
//! ```rust
//! use sumcheck::{Crc16, Crc32, Crc7};
//!
//! let data = b"123456789";
//! assert_eq!(Crc32::checksum(data), 0xCBF4_3926);
//! assert_eq!(Crc16::checksum(data), 0xBB3D);
//! assert_eq!(Crc7::checksum(data), 0x75);
//!
//! // Empty input is valid: the result is the initial register value carried
//! // through finalization.
//! assert_eq!(Crc32::checksum(&[]), 0);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use; the table cache then requires a target with atomics.
//!
//! ```toml
//! [dependencies]
//! sumcheck = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod cache;
mod common;
pub mod params;

mod crc16;
mod crc32;
mod crc7;

pub use crc16::Crc16;
pub use crc32::Crc32;
pub use crc7::Crc7;
// Re-export the trait for convenience
pub use sumcheck_traits::Checksum;

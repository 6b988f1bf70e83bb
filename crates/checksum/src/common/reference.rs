//! Bitwise reference implementation.
//!
//! The canonical "source of truth" for CRC computation in this crate. It
//! processes one bit at a time, directly mirroring the polynomial-division
//! definition, and is:
//!
//! - **Obviously correct**: no tables, no byte-wise shortcuts
//! - **Const-evaluable**: check values are verified at compile time below
//!
//! The table-driven fold in [`portable`](super::portable) must produce
//! identical results to this function for every descriptor and input.
//!
//! This is intentionally slow (~8 operations per bit). Use it as a test
//! oracle, never on the hot path.

// SAFETY: All indexing uses a bounded loop index (0..data.len()). Clippy
// cannot prove this in const fn contexts, but the bound is statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::CrcParams;

/// Bitwise CRC over `data`, returning the raw register state.
///
/// The caller applies [`CrcParams::finalize`] to obtain the reported value.
/// Both bit-ordering conventions are carried by one routine: reflected
/// variants test bit 0 and shift right; the non-reflected narrow variant
/// tests bit 7 and shifts left inside its byte-wide domain.
#[must_use]
pub const fn crc_bitwise(params: &CrcParams, data: &[u8]) -> u32 {
  let poly = params.folding_polynomial();
  let mut crc = params.initial;

  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      if params.reflected {
        crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      } else {
        crc = if crc & 0x80 != 0 {
          ((crc << 1) ^ poly) & 0xFF
        } else {
          (crc << 1) & 0xFF
        };
      }
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions verify the reference implementation against the
// catalog check values. If these fail, the build fails.

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

// CRC-32/ISO-HDLC check value: 0xCBF43926
const _: () = {
  let raw = crc_bitwise(&CrcParams::CRC32_ISO_HDLC, CHECK_INPUT);
  assert!(CrcParams::CRC32_ISO_HDLC.finalize(raw) == 0xCBF4_3926);
};

// CRC-16/ARC check value: 0xBB3D
const _: () = {
  let raw = crc_bitwise(&CrcParams::CRC16_ARC, CHECK_INPUT);
  assert!(CrcParams::CRC16_ARC.finalize(raw) == 0xBB3D);
};

// CRC-7/MMC check value: 0x75
const _: () = {
  let raw = crc_bitwise(&CrcParams::CRC7_MMC, CHECK_INPUT);
  assert!(CrcParams::CRC7_MMC.finalize(raw) == 0x75);
};

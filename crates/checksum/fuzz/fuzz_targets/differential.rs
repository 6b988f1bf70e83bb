//! Differential fuzzing of the table-driven fold.
//!
//! For every input, each variant's table-driven result must match an
//! in-target bit-serial computation, and the 7-bit result must keep its top
//! bit clear.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sumcheck::{Crc16, Crc32, Crc7};

fuzz_target!(|data: &[u8]| {
  let crc32 = Crc32::checksum(data);
  assert_eq!(crc32, crc32_bitwise(data), "crc32 diverged from bit-serial");

  let crc16 = Crc16::checksum(data);
  assert_eq!(crc16, crc16_bitwise(data), "crc16 diverged from bit-serial");

  let crc7 = Crc7::checksum(data);
  assert_eq!(crc7, crc7_bitwise(data), "crc7 diverged from bit-serial");
  assert_eq!(crc7 & 0x80, 0, "crc7 leaked past 7 bits");
});

fn crc32_bitwise(data: &[u8]) -> u32 {
  let mut crc = !0u32;
  for &b in data {
    crc ^= b as u32;
    for _ in 0..8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
    }
  }
  !crc
}

fn crc16_bitwise(data: &[u8]) -> u16 {
  let mut crc = 0u16;
  for &b in data {
    crc ^= b as u16;
    for _ in 0..8 {
      let mask = 0u16.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (0xA001 & mask);
    }
  }
  crc
}

fn crc7_bitwise(data: &[u8]) -> u8 {
  let mut crc = 0u8;
  for &b in data {
    for bit in (0..8).rev() {
      let feedback = ((crc >> 6) & 1) ^ ((b >> bit) & 1);
      crc = ((crc << 1) & 0x7F) ^ if feedback != 0 { 0x09 } else { 0 };
    }
  }
  crc
}

//! Basic usage: compute each variant over a string and print the hex value.
//!
//! Run with: `cargo run --example basic -p sumcheck`
//!
//! Hex formatting lives here, in the caller, on purpose: the core returns
//! plain unsigned integers.

use sumcheck::{Crc16, Crc32, Crc7};

fn main() {
  // Optional warm-up; the first checksum call would build the tables too.
  Crc32::ensure_ready();
  Crc16::ensure_ready();
  Crc7::ensure_ready();
  assert!(Crc32::is_ready() && Crc16::is_ready() && Crc7::is_ready());

  let data = b"123456789";

  let crc32 = Crc32::checksum(data);
  println!("CRC-32/ISO-HDLC: 0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  let crc16 = Crc16::checksum(data);
  println!("CRC-16/ARC:      0x{crc16:04X}");
  assert_eq!(crc16, 0xBB3D);

  let crc7 = Crc7::checksum(data);
  println!("CRC-7/MMC:       0x{crc7:02X}");
  assert_eq!(crc7, 0x75);

  // Order matters: permuting the input changes every variant's result.
  println!();
  println!("CRC-32 of \"ab\":  0x{:08X}", Crc32::checksum(b"ab"));
  println!("CRC-32 of \"ba\":  0x{:08X}", Crc32::checksum(b"ba"));
}

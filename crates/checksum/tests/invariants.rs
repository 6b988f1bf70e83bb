use sumcheck::{Crc16, Crc32, Crc7};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

// Oracles are written here independently of the crate's internals: branchless
// reflected folding, and a bit-serial MSB-first CRC-7 that never touches the
// byte-aligned working domain.

fn crc_reflected_bitwise_u32(poly_reflected: u32, init: u32, xor_out: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  for &b in data {
    crc ^= b as u32;
    for _ in 0..8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly_reflected & mask);
    }
  }
  crc ^ xor_out
}

fn crc7_bitwise(data: &[u8]) -> u8 {
  let mut crc = 0u8; // 7-bit register in the low bits
  for &b in data {
    for bit in (0..8).rev() {
      let incoming = (b >> bit) & 1;
      let feedback = ((crc >> 6) & 1) ^ incoming;
      crc = ((crc << 1) & 0x7F) ^ if feedback != 0 { 0x09 } else { 0 };
    }
  }
  crc
}

#[test]
fn crc32_matches_reference() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for &len in &lengths {
    for &seed in &seeds {
      let data = gen_bytes(len, seed ^ len as u64);
      let reference = crc_reflected_bitwise_u32(0xedb8_8320, !0, !0, &data);
      assert_eq!(Crc32::checksum(&data), reference, "crc32 mismatch at len={len}");
    }
  }
}

#[test]
fn crc16_matches_reference() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0x5d58_39a7_3d87_1ceb];

  for &len in &lengths {
    for &seed in &seeds {
      let data = gen_bytes(len, seed ^ len as u64);
      let reference = crc_reflected_bitwise_u32(0xA001, 0, 0, &data) as u16;
      assert_eq!(Crc16::checksum(&data), reference, "crc16 mismatch at len={len}");
    }
  }
}

#[test]
fn crc7_matches_reference() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024, 2048];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for &len in &lengths {
    for &seed in &seeds {
      let data = gen_bytes(len, seed ^ len as u64);
      let reference = crc7_bitwise(&data);
      assert_eq!(Crc7::checksum(&data), reference, "crc7 mismatch at len={len}");
    }
  }
}

#[test]
fn results_are_deterministic() {
  let data = gen_bytes(512, 0x9e37_79b9_7f4a_7c15);
  assert_eq!(Crc32::checksum(&data), Crc32::checksum(&data));
  assert_eq!(Crc16::checksum(&data), Crc16::checksum(&data));
  assert_eq!(Crc7::checksum(&data), Crc7::checksum(&data));
}

#[test]
fn permuted_input_changes_the_result() {
  // A permutation-sensitive pair distinguishes every variant from a plain
  // XOR or parity sum, which would score permutations identically.
  assert_ne!(Crc32::checksum(b"ab"), Crc32::checksum(b"ba"));
  assert_ne!(Crc16::checksum(b"ab"), Crc16::checksum(b"ba"));
  assert_ne!(Crc7::checksum(b"ab"), Crc7::checksum(b"ba"));
}

#[test]
fn empty_input_equals_finalized_initial() {
  assert_eq!(Crc32::checksum(&[]), 0xFFFF_FFFF ^ 0xFFFF_FFFF);
  assert_eq!(Crc16::checksum(&[]), 0x0000);
  assert_eq!(Crc7::checksum(&[]), 0x00);
}

#[test]
fn results_fit_declared_width() {
  for len in [0usize, 1, 5, 64, 257] {
    let data = gen_bytes(len, 0xa076_1d64_78bd_642f ^ len as u64);
    // u32 and u16 outputs fill their type exactly; the 7-bit output must
    // keep the top bit of its byte clear.
    assert_eq!(Crc7::checksum(&data) & 0x80, 0);
  }
}

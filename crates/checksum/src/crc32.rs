//! CRC-32/ISO-HDLC checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 32
//! - poly: 0x04C11DB7 (reflected: 0xEDB88320)
//! - init: 0xFFFFFFFF
//! - refin/refout: true
//! - xorout: 0xFFFFFFFF
//!
//! # Usage
//!
//! ```
//! use sumcheck::Crc32;
//!
//! let crc = Crc32::checksum(b"123456789");
//! assert_eq!(crc, 0xCBF4_3926);
//! ```

use sumcheck_traits::Checksum;

use crate::cache::TableCache;
use crate::common::portable;
use crate::params::CrcParams;

static TABLE: TableCache = TableCache::new(CrcParams::CRC32_ISO_HDLC);

/// CRC-32/ISO-HDLC checksum (Ethernet, gzip, zip, PNG).
pub struct Crc32;

impl Crc32 {
  /// Descriptor for this variant.
  pub const PARAMS: CrcParams = CrcParams::CRC32_ISO_HDLC;

  /// Compute the CRC-32 of `data` in one shot.
  ///
  /// Builds and caches the lookup table on first use.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u32 {
    let table = TABLE.get();
    let raw = portable::update(table.params(), table.entries(), table.params().initial, data);
    table.params().finalize(raw)
  }

  /// Build and cache the lookup table now instead of on first use.
  #[inline]
  pub fn ensure_ready() {
    let _ = TABLE.get();
  }

  /// Whether the lookup table is already built and cached.
  #[inline]
  #[must_use]
  pub fn is_ready() -> bool {
    TABLE.is_ready()
  }
}

impl Checksum for Crc32 {
  const WIDTH: u32 = 32;
  type Output = u32;

  #[inline]
  fn ensure_ready() {
    Crc32::ensure_ready();
  }

  #[inline]
  fn is_ready() -> bool {
    Crc32::is_ready()
  }

  #[inline]
  fn checksum(data: &[u8]) -> u32 {
    Crc32::checksum(data)
  }
}

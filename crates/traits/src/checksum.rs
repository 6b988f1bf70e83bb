//! Non-cryptographic checksum trait.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm over a complete byte sequence.
///
/// Implementors compute a fixed-width error-detection code in one shot. There
/// is deliberately no incremental/multi-block surface: a computation consumes
/// the whole input slice and returns the finished value.
///
/// # Usage
///
/// ```rust,ignore
/// use sumcheck::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"hello world");
/// println!("{crc:08X}");
/// ```
///
/// # Implementor Requirements
///
/// - `checksum()` must be deterministic: identical input slices yield
///   identical output, across calls and across threads.
/// - The returned value must fit in the low `WIDTH` bits of `Output`; no
///   wider bits may leak through.
/// - `ensure_ready()` must be idempotent and safe to call concurrently;
///   `checksum()` must produce correct results whether or not the caller
///   invoked `ensure_ready()` first.
pub trait Checksum {
  /// Width of the checksum in bits.
  ///
  /// - CRC-32: 32
  /// - CRC-16: 16
  /// - CRC-7: 7
  const WIDTH: u32;

  /// The checksum output type.
  ///
  /// The narrowest unsigned integer that holds `WIDTH` bits.
  type Output: Copy + Eq + Debug;

  /// Build and cache whatever precomputed state the algorithm folds through.
  ///
  /// Idempotent warm-up hook. Useful before latency-sensitive or highly
  /// concurrent use; otherwise the first `checksum()` call pays the cost.
  fn ensure_ready();

  /// Whether the precomputed state is already built and cached.
  #[must_use]
  fn is_ready() -> bool;

  /// Compute the checksum of `data` in one shot.
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output;
}

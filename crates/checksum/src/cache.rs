//! Lazy, process-wide caching of variant lookup tables.
//!
//! Each variant type owns one static [`TableCache`]. The table is built on
//! first use and reused for the remainder of the process; the build is
//! guarded by a one-time-initialization primitive, so concurrent first use
//! can neither observe a partially written table nor race two builds into the
//! same slot.
//!
//! # Caching Strategy
//!
//! - **std**: `std::sync::OnceLock`
//! - **no_std with atomics**: an UNINIT/BUILDING/READY atomic state machine
//!
//! Targets with neither are rejected at compile time; enable the `std`
//! feature there.

#[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
compile_error!("the lazy table cache requires the `std` feature or a target with atomics");

#[cfg(not(feature = "std"))]
use core::{
  cell::UnsafeCell,
  mem::MaybeUninit,
  sync::atomic::{AtomicU8, Ordering},
};

use crate::common::tables::build_table;
use crate::params::CrcParams;

/// A lookup table bound to the descriptor it was built from.
///
/// The fold engine only ever receives the two together, which makes a
/// descriptor/table mismatch unrepresentable rather than a caller
/// obligation. The wrapper is 64-byte aligned so the table starts on a cache
/// line boundary.
#[repr(align(64))]
pub struct VariantTable {
  entries: [u32; 256],
  params: CrcParams,
}

impl VariantTable {
  fn build(params: CrcParams) -> Self {
    Self {
      entries: build_table(&params),
      params,
    }
  }

  /// The descriptor this table was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The 256 table entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u32; 256] {
    &self.entries
  }
}

/// One-time lazy cache for a single variant's lookup table.
pub struct TableCache {
  params: CrcParams,

  #[cfg(feature = "std")]
  slot: std::sync::OnceLock<VariantTable>,

  #[cfg(not(feature = "std"))]
  state: AtomicU8,
  #[cfg(not(feature = "std"))]
  slot: UnsafeCell<MaybeUninit<VariantTable>>,
}

#[cfg(not(feature = "std"))]
impl TableCache {
  const UNINIT: u8 = 0;
  const BUILDING: u8 = 1;
  const READY: u8 = 2;
}

// SAFETY: The slot is written exactly once, by the thread that wins the
// UNINIT -> BUILDING exchange, and is published with Release ordering before
// any reader can observe READY with Acquire ordering. After that the slot is
// immutable.
#[cfg(not(feature = "std"))]
unsafe impl Send for TableCache {}
#[cfg(not(feature = "std"))]
unsafe impl Sync for TableCache {}

impl TableCache {
  /// Create an empty cache for `params`.
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    Self {
      params,

      #[cfg(feature = "std")]
      slot: std::sync::OnceLock::new(),

      #[cfg(not(feature = "std"))]
      state: AtomicU8::new(Self::UNINIT),
      #[cfg(not(feature = "std"))]
      slot: UnsafeCell::new(MaybeUninit::uninit()),
    }
  }

  /// The cached table, building it on first use.
  ///
  /// The build is run at most once per process; every caller afterwards gets
  /// the same slot back.
  #[inline]
  pub fn get(&self) -> &VariantTable {
    #[cfg(feature = "std")]
    {
      self.slot.get_or_init(|| VariantTable::build(self.params))
    }

    #[cfg(not(feature = "std"))]
    {
      if self.state.load(Ordering::Acquire) != Self::READY {
        if self
          .state
          .compare_exchange(Self::UNINIT, Self::BUILDING, Ordering::AcqRel, Ordering::Acquire)
          .is_ok()
        {
          let built = VariantTable::build(self.params);
          // SAFETY: Winning the exchange gives this thread exclusive access
          // to the slot until READY is stored.
          unsafe {
            (*self.slot.get()).write(built);
          }
          self.state.store(Self::READY, Ordering::Release);
        } else {
          while self.state.load(Ordering::Acquire) != Self::READY {
            core::hint::spin_loop();
          }
        }
      }

      // SAFETY: The slot is initialized whenever the state reads READY.
      unsafe { (*self.slot.get()).assume_init_ref() }
    }
  }

  /// Whether the table is already built and cached.
  #[inline]
  #[must_use]
  pub fn is_ready(&self) -> bool {
    #[cfg(feature = "std")]
    {
      self.slot.get().is_some()
    }

    #[cfg(not(feature = "std"))]
    {
      self.state.load(Ordering::Acquire) == Self::READY
    }
  }
}

//! Software status cache
//!
//! One tag per pin, written by the high-level configuration entry points
//! (pin mode, digital write, analog read/write). Low-level register paths
//! bypass it, so any tag may be stale. Readers must accept every byte
//! value, including ones torn by a concurrent writer.

use portable_atomic::{AtomicU8, Ordering};

/// Only the low nibble of a raw status byte carries the tag
const TAG_MASK: u8 = 0x0F;

/// Last high-level configuration applied to a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusTag {
    /// Never configured through the high-level API
    #[default]
    Unset,
    DigitalInputPullup,
    DigitalInput,
    DigitalOutput,
    Analog,
    Pwm,
    Timer,
    /// Low nibble outside the known set
    Unrecognized(u8),
}

impl StatusTag {
    /// Decode a raw status byte
    pub const fn from_raw(raw: u8) -> Self {
        match raw & TAG_MASK {
            0x00 => StatusTag::Unset,
            0x01 => StatusTag::DigitalInputPullup,
            0x02 => StatusTag::DigitalInput,
            0x03 => StatusTag::DigitalOutput,
            0x04 => StatusTag::Analog,
            0x05 => StatusTag::Pwm,
            0x06 => StatusTag::Timer,
            other => StatusTag::Unrecognized(other),
        }
    }

    /// Encode as a raw status byte
    pub const fn as_raw(self) -> u8 {
        match self {
            StatusTag::Unset => 0x00,
            StatusTag::DigitalInputPullup => 0x01,
            StatusTag::DigitalInput => 0x02,
            StatusTag::DigitalOutput => 0x03,
            StatusTag::Analog => 0x04,
            StatusTag::Pwm => 0x05,
            StatusTag::Timer => 0x06,
            StatusTag::Unrecognized(raw) => raw & TAG_MASK,
        }
    }
}

/// Read access to per-pin status tags
///
/// The resolver only ever reads. Indices are range-checked by the caller.
pub trait StatusSource {
    /// Current tag for pin `index`
    fn tag(&self, index: usize) -> StatusTag;
}

impl StatusSource for [StatusTag] {
    fn tag(&self, index: usize) -> StatusTag {
        self.get(index).copied().unwrap_or_default()
    }
}

impl<const N: usize> StatusSource for [StatusTag; N] {
    fn tag(&self, index: usize) -> StatusTag {
        self.as_slice().tag(index)
    }
}

impl<T: StatusSource + ?Sized> StatusSource for &T {
    fn tag(&self, index: usize) -> StatusTag {
        (**self).tag(index)
    }
}

/// Shared status tag array
///
/// Lives for the whole program, typically in a `static`. Loads and stores
/// are relaxed: a reader may see a value from before or after a concurrent
/// write, never a fault.
pub struct StatusCache<const N: usize> {
    tags: [AtomicU8; N],
}

impl<const N: usize> Default for StatusCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StatusCache<N> {
    /// Create a cache with every pin `Unset`
    pub const fn new() -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const UNSET: AtomicU8 = AtomicU8::new(0);
        Self { tags: [UNSET; N] }
    }

    /// Number of pins tracked
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the cache tracks no pins
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Record a configuration change
    ///
    /// Called by configuration entry points. Out-of-range indices are
    /// ignored.
    pub fn record(&self, index: usize, tag: StatusTag) {
        self.record_raw(index, tag.as_raw());
    }

    /// Store a raw status byte
    pub fn record_raw(&self, index: usize, raw: u8) {
        if let Some(slot) = self.tags.get(index) {
            slot.store(raw, Ordering::Relaxed);
        }
    }

    /// Read the raw status byte
    pub fn raw(&self, index: usize) -> u8 {
        self.tags
            .get(index)
            .map(|slot| slot.load(Ordering::Relaxed))
            .unwrap_or(0)
    }
}

impl<const N: usize> StatusSource for StatusCache<N> {
    fn tag(&self, index: usize) -> StatusTag {
        StatusTag::from_raw(self.raw(index))
    }
}

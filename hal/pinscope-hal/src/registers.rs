//! Register read abstractions
//!
//! Provides the side-effect-free reads the resolver needs. Every call
//! reflects hardware state at call time; nothing is cached.

/// Parallel I/O controller a pin belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortId {
    A,
    B,
    C,
    D,
}

impl PortId {
    /// Zero-based controller number (A = 0)
    pub const fn index(self) -> usize {
        match self {
            PortId::A => 0,
            PortId::B => 1,
            PortId::C => 2,
            PortId::D => 3,
        }
    }
}

/// Hardware PWM channel number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmChannel(pub u8);

impl PwmChannel {
    /// Channel number as an index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read-only access to pin-related hardware registers
///
/// Implementations must not cache: repeated calls may observe different
/// values if firmware reconfigures a pin in between. Reads take `&self`
/// because they have no side effects.
pub trait RegisterReader {
    /// Check if the output driver for `mask` on `port` is enabled
    fn output_enabled(&self, port: PortId, mask: u32) -> bool;

    /// Read the live electrical level of the pin
    fn pin_level(&self, port: PortId, mask: u32) -> bool;

    /// Read the raw duty-cycle register of a PWM channel
    ///
    /// The magnitude is reported as-is and never interpreted.
    fn pwm_duty(&self, channel: PwmChannel) -> u32;
}

impl<T: RegisterReader + ?Sized> RegisterReader for &T {
    fn output_enabled(&self, port: PortId, mask: u32) -> bool {
        (**self).output_enabled(port, mask)
    }

    fn pin_level(&self, port: PortId, mask: u32) -> bool {
        (**self).pin_level(port, mask)
    }

    fn pwm_duty(&self, channel: PwmChannel) -> u32 {
        (**self).pwm_duty(channel)
    }
}

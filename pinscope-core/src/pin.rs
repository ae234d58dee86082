//! Pin capability records and resolution result types

use pinscope_hal::{PortId, PwmChannel};

/// Static capabilities of one physical pin
///
/// One record per pin index, built once from board metadata and never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinCapability {
    /// Controller the pin belongs to
    pub port: PortId,
    /// Bit mask of the pin within its port registers
    pub mask: u32,
    /// Pin has a digital name (false for analog-only labels)
    pub is_digital: bool,
    /// Pin is wired to an ADC channel
    pub analog_capable: bool,
    /// PWM channel, present only for PWM-enabled pins
    pub pwm_channel: Option<PwmChannel>,
    /// Display name
    pub name: &'static str,
}

impl PinCapability {
    /// Digital pin on `port` bit `bit`
    pub const fn digital(port: PortId, bit: u8, name: &'static str) -> Self {
        Self {
            port,
            mask: 1 << bit,
            is_digital: true,
            analog_capable: false,
            pwm_channel: None,
            name,
        }
    }

    /// Analog input pin on `port` bit `bit`
    pub const fn analog(port: PortId, bit: u8, name: &'static str) -> Self {
        Self {
            port,
            mask: 1 << bit,
            is_digital: false,
            analog_capable: true,
            pwm_channel: None,
            name,
        }
    }

    /// Digital pin driven by PWM `channel`
    pub const fn pwm(port: PortId, bit: u8, channel: u8, name: &'static str) -> Self {
        Self {
            port,
            mask: 1 << bit,
            is_digital: true,
            analog_capable: false,
            pwm_channel: Some(PwmChannel(channel)),
            name,
        }
    }

    /// Check if the pin can be driven by a PWM channel
    pub const fn is_pwm_capable(&self) -> bool {
        self.pwm_channel.is_some()
    }
}

/// Electrical mode of a pin as seen by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Output driver disabled
    Input,
    /// Output driver enabled (GPIO or PWM)
    Output,
}

impl PinMode {
    /// Check if the pin is being driven
    pub const fn is_output(self) -> bool {
        matches!(self, PinMode::Output)
    }
}

/// A pin index that passed the range check
///
/// Only [`PinResolver::validate`](crate::PinResolver::validate) creates
/// these, so every register or cache access is preceded by a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidPin(u16);

impl ValidPin {
    pub(crate) const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Pin index
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Pin index for table lookups
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Errors from pin queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin index outside `[0, NUMBER_PINS_TOTAL)`
    InvalidPin(i32),
}

impl core::fmt::Display for PinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PinError::InvalidPin(pin) => write!(f, "invalid pin {}", pin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_constructors() {
        let led = PinCapability::digital(PortId::B, 27, "L");
        assert_eq!(led.mask, 1 << 27);
        assert!(led.is_digital);
        assert!(!led.is_pwm_capable());

        let a0 = PinCapability::analog(PortId::A, 16, "A0");
        assert!(!a0.is_digital);
        assert!(a0.analog_capable);

        let pwm = PinCapability::pwm(PortId::C, 24, 7, "D6");
        assert!(pwm.is_pwm_capable());
        assert_eq!(pwm.pwm_channel, Some(PwmChannel(7)));
    }

    #[test]
    fn test_pin_error_display() {
        assert_eq!(PinError::InvalidPin(-1).to_string(), "invalid pin -1");
    }
}

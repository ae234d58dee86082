//! Pin capability registry
//!
//! Maps pin indices to their immutable capability records and exposes the
//! board's analog block.

use crate::config::{BoardLayout, ConfigError};
use crate::pin::PinCapability;

/// Source of per-pin capability records
///
/// `lookup` is only defined for indices below `pin_count`; callers
/// range-check first. Content is trusted and never validated here.
pub trait PinRegistry {
    /// Count of valid pin indices (`NUMBER_PINS_TOTAL`)
    fn pin_count(&self) -> usize;

    /// Capability record for pin `index`
    fn lookup(&self, index: usize) -> &PinCapability;

    /// Number of analog input channels
    fn num_analog_inputs(&self) -> u8;

    /// Pin index wired to analog `channel`
    fn analog_input_to_pin(&self, channel: u8) -> Option<u16>;
}

/// Registry backed by a static pin table
#[derive(Debug, Clone, Copy)]
pub struct BoardPins {
    pins: &'static [PinCapability],
    layout: BoardLayout,
}

impl BoardPins {
    /// Pair a pin table with its layout
    pub const fn new(pins: &'static [PinCapability], layout: BoardLayout) -> Self {
        Self { pins, layout }
    }

    /// Board layout
    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// All records in index order
    pub const fn pins(&self) -> &'static [PinCapability] {
        self.pins
    }

    /// Check that the table matches the layout
    ///
    /// Run once at startup or from tests; lookups never re-check.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        if self.pins.len() != self.layout.pins_total as usize {
            return Err(ConfigError::TableLengthMismatch);
        }
        if let Some(last) = self.layout.analog_channel_last() {
            for index in self.layout.analog_channel_0..=last {
                if !self.pins[index as usize].analog_capable {
                    return Err(ConfigError::AnalogFlagMismatch(index));
                }
            }
        }
        Ok(())
    }

    /// Indices of every pin sharing `index`'s port bit, excluding `index`
    pub fn aliases(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let target = self.pins.get(index).map(|pin| (pin.port, pin.mask));
        self.pins
            .iter()
            .enumerate()
            .filter(move |(i, pin)| *i != index && Some((pin.port, pin.mask)) == target)
            .map(|(i, _)| i)
    }
}

impl PinRegistry for BoardPins {
    fn pin_count(&self) -> usize {
        self.layout.pins_total as usize
    }

    fn lookup(&self, index: usize) -> &PinCapability {
        &self.pins[index]
    }

    fn num_analog_inputs(&self) -> u8 {
        self.layout.num_analog_inputs
    }

    fn analog_input_to_pin(&self, channel: u8) -> Option<u16> {
        if channel < self.layout.num_analog_inputs {
            Some(self.layout.analog_channel_0 + channel as u16)
        } else {
            None
        }
    }
}

impl<T: PinRegistry + ?Sized> PinRegistry for &T {
    fn pin_count(&self) -> usize {
        (**self).pin_count()
    }

    fn lookup(&self, index: usize) -> &PinCapability {
        (**self).lookup(index)
    }

    fn num_analog_inputs(&self) -> u8 {
        (**self).num_analog_inputs()
    }

    fn analog_input_to_pin(&self, channel: u8) -> Option<u16> {
        (**self).analog_input_to_pin(channel)
    }
}

//! Board layout configuration
//!
//! Static description of a board's pin index space. Board modules publish
//! one of these as a constant; the registry checks its pin table against it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default width names are padded to in reports
pub const DEFAULT_MAX_NAME_LENGTH: u8 = 14;

/// Default indent for additional names of an already-reported pin
pub const DEFAULT_MULTI_NAME_PAD: u8 = 14;

/// Shape of a board's pin index space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardLayout {
    /// Count of valid pin indices (`NUMBER_PINS_TOTAL`)
    pub pins_total: u16,
    /// Pin index of analog channel 0
    pub analog_channel_0: u16,
    /// Number of analog input channels
    pub num_analog_inputs: u8,
    /// Column width for pin names
    pub max_name_length: u8,
    /// Indent for alias lines (`MULTI_NAME_PAD`)
    pub multi_name_pad: u8,
}

impl BoardLayout {
    /// Create a layout with default report widths
    pub const fn new(pins_total: u16, analog_channel_0: u16, num_analog_inputs: u8) -> Self {
        Self {
            pins_total,
            analog_channel_0,
            num_analog_inputs,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            multi_name_pad: DEFAULT_MULTI_NAME_PAD,
        }
    }

    /// Override the report name column width
    pub const fn with_max_name_length(mut self, width: u8) -> Self {
        self.max_name_length = width;
        self
    }

    /// Pin index of the last analog channel, if the board has any
    pub const fn analog_channel_last(&self) -> Option<u16> {
        if self.num_analog_inputs == 0 {
            None
        } else {
            Some(self.analog_channel_0 + self.num_analog_inputs as u16 - 1)
        }
    }

    /// Check that the layout is internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pins_total == 0 {
            return Err(ConfigError::NoPins);
        }
        if let Some(last) = self.analog_channel_last() {
            if last >= self.pins_total {
                return Err(ConfigError::AnalogRangeOutOfBounds);
            }
        }
        Ok(())
    }
}

/// Board configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Layout declares zero pins
    NoPins,
    /// Analog block extends past the last pin index
    AnalogRangeOutOfBounds,
    /// Pin table length differs from `pins_total`
    TableLengthMismatch,
    /// A pin in the analog block is not marked analog-capable
    AnalogFlagMismatch(u16),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoPins => f.write_str("board has no pins"),
            ConfigError::AnalogRangeOutOfBounds => {
                f.write_str("analog block extends past the last pin")
            }
            ConfigError::TableLengthMismatch => {
                f.write_str("pin table length does not match layout")
            }
            ConfigError::AnalogFlagMismatch(pin) => {
                write!(f, "pin {} is in the analog block but not analog-capable", pin)
            }
        }
    }
}

//! Board-agnostic pin state resolution for the debug console
//!
//! This crate answers "what is this pin doing right now?" by reconciling
//! the hardware's electrical view with the software configuration cache:
//!
//! - Pin capability records and board tables
//! - Software status cache (shared with the configuration code)
//! - Pin state resolver (validity, analog mapping, PWM, mode precedence)
//! - Report formatting for console output
//!
//! Everything here is read-only introspection; nothing reconfigures a pin.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod boards;
pub mod config;
pub mod pin;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod status;

pub use config::{BoardLayout, ConfigError};
pub use pin::{PinCapability, PinError, PinMode, ValidPin};
pub use registry::{BoardPins, PinRegistry};
pub use resolver::{PinResolver, ResolvedPinState};
pub use status::{StatusCache, StatusSource, StatusTag};

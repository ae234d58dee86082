//! SAM3X8E-specific HAL for pin introspection
//!
//! This crate provides the memory-mapped implementation of the shared
//! `pinscope-hal` register traits for the Arduino Due:
//!
//! - PIO output status (`PIO_OSR`) for output-enable reads
//! - PIO pin data status (`PIO_PDSR`) for live levels
//! - PWM channel duty cycle (`PWM_CDTY`)

#![no_std]

pub mod registers;

pub use pinscope_hal::{PortId, PwmChannel, RegisterReader};
pub use registers::Sam3xRegisters;

//! Pinscope Hardware Abstraction Layer
//!
//! This crate defines the read-only register interface that the pin
//! state resolver consumes. Chip-specific crates implement it over
//! memory-mapped I/O; tests implement it with scripted values.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pinscope-core (resolver, reports)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinscope-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ pinscope-hal- │
//!             │     sam3x     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`registers::RegisterReader`] - Output-enable, level and PWM duty reads

#![no_std]
#![deny(unsafe_code)]

pub mod registers;

pub use registers::{PortId, PwmChannel, RegisterReader};

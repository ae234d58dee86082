//! Memory-mapped register reads
//!
//! Addresses follow the SAM3X8E datasheet. All accesses are volatile
//! 32-bit reads; nothing here ever writes to hardware.

use core::ptr::read_volatile;

use pinscope_hal::{PortId, PwmChannel, RegisterReader};

/// PIO controller base addresses
pub mod base {
    pub const PIOA: usize = 0x400E_0E00;
    pub const PIOB: usize = 0x400E_1000;
    pub const PIOC: usize = 0x400E_1200;
    pub const PIOD: usize = 0x400E_1400;
    pub const PWM: usize = 0x4009_4000;
}

/// Register offsets
pub mod regs {
    /// Output Status Register
    pub const PIO_OSR: usize = 0x18;
    /// Pin Data Status Register
    pub const PIO_PDSR: usize = 0x3C;
    /// First PWM channel block
    pub const PWM_CH_NUM: usize = 0x200;
    /// Size of one PWM channel block
    pub const PWM_CH_STRIDE: usize = 0x20;
    /// Channel Duty Cycle Register, within a channel block
    pub const PWM_CDTY: usize = 0x04;
}

/// Number of PWM channels on the SAM3X8E
pub const PWM_CHANNELS: u8 = 8;

/// Base address of the PIO controller for `port`
pub const fn pio_base(port: PortId) -> usize {
    match port {
        PortId::A => base::PIOA,
        PortId::B => base::PIOB,
        PortId::C => base::PIOC,
        PortId::D => base::PIOD,
    }
}

/// Address of `PIO_OSR` for `port`
pub const fn osr_address(port: PortId) -> usize {
    pio_base(port) + regs::PIO_OSR
}

/// Address of `PIO_PDSR` for `port`
pub const fn pdsr_address(port: PortId) -> usize {
    pio_base(port) + regs::PIO_PDSR
}

/// Address of `PWM_CDTY` for `channel`, or `None` past the last channel
pub const fn cdty_address(channel: PwmChannel) -> Option<usize> {
    if channel.0 >= PWM_CHANNELS {
        return None;
    }
    Some(base::PWM + regs::PWM_CH_NUM + channel.index() * regs::PWM_CH_STRIDE + regs::PWM_CDTY)
}

/// Register reader for the live SAM3X8E peripherals
///
/// Zero-sized; every read goes straight to the peripheral. No ownership
/// of the peripherals is taken since nothing is written.
#[derive(Debug)]
pub struct Sam3xRegisters {
    _private: (),
}

impl Sam3xRegisters {
    /// Create a reader for the on-chip peripherals
    ///
    /// # Safety
    ///
    /// Must only be called on a SAM3X8E, where the PIO and PWM register
    /// blocks are mapped at the addresses in [`base`]. On any other
    /// target every read is undefined behavior.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }

    fn read(address: usize) -> u32 {
        // SAFETY: `new` guarantees the peripheral map; all addresses
        // come from the constants above and are 4-byte aligned.
        unsafe { read_volatile(address as *const u32) }
    }
}

impl RegisterReader for Sam3xRegisters {
    fn output_enabled(&self, port: PortId, mask: u32) -> bool {
        Self::read(osr_address(port)) & mask != 0
    }

    fn pin_level(&self, port: PortId, mask: u32) -> bool {
        Self::read(pdsr_address(port)) & mask != 0
    }

    fn pwm_duty(&self, channel: PwmChannel) -> u32 {
        match cdty_address(channel) {
            Some(address) => Self::read(address),
            None => 0,
        }
    }
}

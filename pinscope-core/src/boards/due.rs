//! Arduino Due (SAM3X8E)
//!
//! Pins 0-78 follow the Due variant numbering. Pin 78 is unconnected on
//! the board but kept so every variant index resolves. Only pins 6-9 have
//! PWM enabled; analog inputs A0-A11 occupy indices 54-65.

use pinscope_hal::PortId;

use crate::config::BoardLayout;
use crate::pin::PinCapability;
use crate::registry::BoardPins;

/// Count of valid pin indices
pub const NUMBER_PINS_TOTAL: usize = 79;

/// Number of ADC inputs (A0-A11)
pub const NUM_ANALOG_INPUTS: u8 = 12;

/// Pin index of A0
pub const ANALOG_CHANNEL_0: u16 = 54;

/// Due index space
pub const LAYOUT: BoardLayout =
    BoardLayout::new(NUMBER_PINS_TOTAL as u16, ANALOG_CHANNEL_0, NUM_ANALOG_INPUTS);

/// Indent for additional names of a pin in reports
pub const MULTI_NAME_PAD: u8 = LAYOUT.multi_name_pad;

/// Capability table, indexed by pin number
pub static PINS: [PinCapability; NUMBER_PINS_TOTAL] = [
    PinCapability::digital(PortId::A, 8, "RX0"),
    PinCapability::digital(PortId::A, 9, "TX0"),
    PinCapability::digital(PortId::B, 25, "D2"),
    PinCapability::digital(PortId::C, 28, "D3"),
    PinCapability::digital(PortId::C, 26, "D4"),
    PinCapability::digital(PortId::C, 25, "D5"),
    PinCapability::pwm(PortId::C, 24, 7, "D6"),
    PinCapability::pwm(PortId::C, 23, 6, "D7"),
    PinCapability::pwm(PortId::C, 22, 5, "D8"),
    PinCapability::pwm(PortId::C, 21, 4, "D9"),
    PinCapability::digital(PortId::C, 29, "D10"),
    PinCapability::digital(PortId::D, 7, "D11"),
    PinCapability::digital(PortId::D, 8, "D12"),
    PinCapability::digital(PortId::B, 27, "L"),
    PinCapability::digital(PortId::D, 4, "TX3"),
    PinCapability::digital(PortId::D, 5, "RX3"),
    PinCapability::digital(PortId::A, 13, "TX2"),
    PinCapability::digital(PortId::A, 12, "RX2"),
    PinCapability::digital(PortId::A, 11, "TX1"),
    PinCapability::digital(PortId::A, 10, "RX1"),
    PinCapability::digital(PortId::B, 12, "SDA"),
    PinCapability::digital(PortId::B, 13, "SCL"),
    PinCapability::digital(PortId::B, 26, "D22"),
    PinCapability::digital(PortId::A, 14, "D23"),
    PinCapability::digital(PortId::A, 15, "D24"),
    PinCapability::digital(PortId::D, 0, "D25"),
    PinCapability::digital(PortId::D, 1, "D26"),
    PinCapability::digital(PortId::D, 2, "D27"),
    PinCapability::digital(PortId::D, 3, "D28"),
    PinCapability::digital(PortId::D, 6, "D29"),
    PinCapability::digital(PortId::D, 9, "D30"),
    PinCapability::digital(PortId::A, 7, "D31"),
    PinCapability::digital(PortId::D, 10, "D32"),
    PinCapability::digital(PortId::C, 1, "D33"),
    PinCapability::digital(PortId::C, 2, "D34"),
    PinCapability::digital(PortId::C, 3, "D35"),
    PinCapability::digital(PortId::C, 4, "D36"),
    PinCapability::digital(PortId::C, 5, "D37"),
    PinCapability::digital(PortId::C, 6, "D38"),
    PinCapability::digital(PortId::C, 7, "D39"),
    PinCapability::digital(PortId::C, 8, "D40"),
    PinCapability::digital(PortId::C, 9, "D41"),
    PinCapability::digital(PortId::A, 19, "D42"),
    PinCapability::digital(PortId::A, 20, "D43"),
    PinCapability::digital(PortId::C, 19, "D44"),
    PinCapability::digital(PortId::C, 18, "D45"),
    PinCapability::digital(PortId::C, 17, "D46"),
    PinCapability::digital(PortId::C, 16, "D47"),
    PinCapability::digital(PortId::C, 15, "D48"),
    PinCapability::digital(PortId::C, 14, "D49"),
    PinCapability::digital(PortId::C, 13, "D50"),
    PinCapability::digital(PortId::C, 12, "D51"),
    PinCapability::digital(PortId::B, 21, "D52"),
    PinCapability::digital(PortId::B, 14, "D53"),
    PinCapability::analog(PortId::A, 16, "A0"),
    PinCapability::analog(PortId::A, 24, "A1"),
    PinCapability::analog(PortId::A, 23, "A2"),
    PinCapability::analog(PortId::A, 22, "A3"),
    PinCapability::analog(PortId::A, 6, "A4"),
    PinCapability::analog(PortId::A, 4, "A5"),
    PinCapability::analog(PortId::A, 3, "A6"),
    PinCapability::analog(PortId::A, 2, "A7"),
    PinCapability::analog(PortId::B, 17, "A8"),
    PinCapability::analog(PortId::B, 18, "A9"),
    PinCapability::analog(PortId::B, 19, "A10"),
    PinCapability::analog(PortId::B, 20, "A11"),
    PinCapability::digital(PortId::B, 15, "DAC0"),
    PinCapability::digital(PortId::B, 16, "DAC1"),
    PinCapability::digital(PortId::A, 1, "CANRX"),
    PinCapability::digital(PortId::A, 0, "CANTX"),
    PinCapability::digital(PortId::A, 17, "SDA1"),
    PinCapability::digital(PortId::A, 18, "SCL1"),
    PinCapability::digital(PortId::C, 30, "RX_LED"),
    PinCapability::digital(PortId::A, 21, "TX_LED"),
    PinCapability::digital(PortId::A, 25, "MISO"),
    PinCapability::digital(PortId::A, 26, "MOSI"),
    PinCapability::digital(PortId::A, 27, "SCLK"),
    PinCapability::digital(PortId::A, 28, "NPCS0"),
    PinCapability::digital(PortId::B, 23, "NPCS3"),
];

/// Registry over [`PINS`]
pub static BOARD: BoardPins = BoardPins::new(&PINS, LAYOUT);

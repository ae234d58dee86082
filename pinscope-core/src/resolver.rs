//! Pin state resolver
//!
//! Combines the capability registry, the software status cache and live
//! register reads into one classification per pin. Neither source is
//! trusted alone: the cache misses pins driven through low-level register
//! writes, and the registers cannot tell PWM from plain output.
//!
//! Mode precedence, first match wins:
//!
//! 1. Tag `Unset` and output driver enabled → `Output`
//! 2. Tag `DigitalOutput` → `Output`, whatever the register says
//! 3. PWM active (tag `Pwm` on a PWM-capable pin) → `Output`
//! 4. Anything else → `Input`
//!
//! Other tags (`DigitalInput`, `Analog`, `Timer`, ...) never consult the
//! output register.

use pinscope_hal::{PortId, RegisterReader};

use crate::pin::{PinCapability, PinError, PinMode, ValidPin};
use crate::registry::PinRegistry;
use crate::status::{StatusSource, StatusTag};

/// Everything the console reports about one pin
///
/// Computed fresh per query and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedPinState {
    /// Pin index
    pub pin: ValidPin,
    /// Display name from the capability table
    pub name: &'static str,
    /// Pin has a digital name
    pub is_digital: bool,
    /// Controller the pin belongs to
    pub port: PortId,
    /// Resolved electrical mode
    pub mode: PinMode,
    /// Live input level
    pub level: bool,
    /// Status tag seen during resolution
    pub tag: StatusTag,
    /// PWM channel is driving the pin
    pub pwm_active: bool,
    /// Raw duty register, only when `pwm_active`
    pub pwm_duty: Option<u32>,
    /// Zero-based analog channel, only for pins in the analog block
    pub analog_index: Option<u8>,
}

/// Resolver over a board, a status source and a register reader
///
/// Holds no state of its own; each query re-reads its inputs. The type
/// parameters accept owned values or references.
pub struct PinResolver<B, S, H> {
    board: B,
    status: S,
    registers: H,
}

impl<B, S, H> PinResolver<B, S, H>
where
    B: PinRegistry,
    S: StatusSource,
    H: RegisterReader,
{
    /// Create a resolver
    pub fn new(board: B, status: S, registers: H) -> Self {
        Self {
            board,
            status,
            registers,
        }
    }

    /// Count of valid pin indices (`NUMBER_PINS_TOTAL`)
    pub fn pins_total(&self) -> usize {
        self.board.pin_count()
    }

    /// Check if `pin` is within `[0, NUMBER_PINS_TOTAL)`
    pub fn is_valid_pin(&self, pin: i32) -> bool {
        usize::try_from(pin).is_ok_and(|index| index < self.board.pin_count())
    }

    /// Range-check `pin`
    ///
    /// This is the only way to obtain a [`ValidPin`], so it runs before any
    /// register or cache access.
    pub fn validate(&self, pin: i32) -> Result<ValidPin, PinError> {
        if !self.is_valid_pin(pin) {
            #[cfg(feature = "defmt")]
            defmt::warn!("pin {} outside 0..{}", pin, self.board.pin_count());
            return Err(PinError::InvalidPin(pin));
        }
        // pin_count fits u16 on every supported board
        let index = u16::try_from(pin).map_err(|_| PinError::InvalidPin(pin))?;
        Ok(ValidPin::new(index))
    }

    /// Inclusive pin index range of the analog block
    fn analog_range(&self) -> Option<(i32, i32)> {
        let count = self.board.num_analog_inputs();
        let first = self.board.analog_input_to_pin(0)?;
        let last = self.board.analog_input_to_pin(count.checked_sub(1)?)?;
        Some((i32::from(first), i32::from(last)))
    }

    /// Check if `pin` lies in the contiguous analog block
    pub fn is_analog_pin(&self, pin: i32) -> bool {
        match self.analog_range() {
            Some((first, last)) => (first..=last).contains(&pin),
            None => false,
        }
    }

    /// Zero-based analog channel of `pin`
    ///
    /// Only meaningful when [`is_analog_pin`](Self::is_analog_pin) holds;
    /// any other pin yields an out-of-range number. Use
    /// [`analog_index`](Self::analog_index) for a checked variant.
    pub fn digital_pin_to_analog_index(&self, pin: i32) -> i32 {
        match self.board.analog_input_to_pin(0) {
            Some(first) => pin - i32::from(first),
            None => -1,
        }
    }

    /// Analog channel of `pin`, or `None` outside the analog block
    pub fn analog_index(&self, pin: ValidPin) -> Option<u8> {
        let pin = i32::from(pin.index());
        if !self.is_analog_pin(pin) {
            return None;
        }
        u8::try_from(self.digital_pin_to_analog_index(pin)).ok()
    }

    fn record(&self, pin: ValidPin) -> &PinCapability {
        self.board.lookup(pin.as_usize())
    }

    /// Current status tag of `pin`
    pub fn status_tag(&self, pin: ValidPin) -> StatusTag {
        self.status.tag(pin.as_usize())
    }

    /// Check if a PWM channel is driving `pin`
    ///
    /// Requires both the `Pwm` tag and a PWM-capable record; either alone
    /// says nothing about the current configuration.
    pub fn pwm_status(&self, pin: ValidPin) -> bool {
        pwm_active(self.status_tag(pin), self.record(pin))
    }

    /// Raw PWM duty register of `pin`, only when PWM is active
    pub fn pwm_duty(&self, pin: ValidPin) -> Option<u32> {
        self.duty_for(self.status_tag(pin), self.record(pin))
    }

    fn duty_for(&self, tag: StatusTag, record: &PinCapability) -> Option<u32> {
        if !pwm_active(tag, record) {
            return None;
        }
        record
            .pwm_channel
            .map(|channel| self.registers.pwm_duty(channel))
    }

    /// Resolve `pin` to `Input` or `Output`
    pub fn valid_pin_mode(&self, pin: ValidPin) -> PinMode {
        self.mode_for(self.status_tag(pin), self.record(pin))
    }

    fn mode_for(&self, tag: StatusTag, record: &PinCapability) -> PinMode {
        let driven = match tag {
            StatusTag::Unset => self.registers.output_enabled(record.port, record.mask),
            StatusTag::DigitalOutput => true,
            _ => false,
        };
        if driven || pwm_active(tag, record) {
            PinMode::Output
        } else {
            PinMode::Input
        }
    }

    /// Live electrical level of `pin`
    pub fn read_level(&self, pin: ValidPin) -> bool {
        let record = self.record(pin);
        self.registers.pin_level(record.port, record.mask)
    }

    /// Validate `pin` and resolve everything the console reports
    ///
    /// The status tag is read once, so every field agrees on it even if a
    /// configuration call lands mid-query. Register values carry no such
    /// guarantee.
    pub fn resolve(&self, pin: i32) -> Result<ResolvedPinState, PinError> {
        let pin = self.validate(pin)?;
        let record = self.record(pin);
        let tag = self.status_tag(pin);
        let pwm_active = pwm_active(tag, record);

        let state = ResolvedPinState {
            pin,
            name: record.name,
            is_digital: record.is_digital,
            port: record.port,
            mode: self.mode_for(tag, record),
            level: self.registers.pin_level(record.port, record.mask),
            tag,
            pwm_active,
            pwm_duty: self.duty_for(tag, record),
            analog_index: self.analog_index(pin),
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("resolved {}", state);

        Ok(state)
    }
}

fn pwm_active(tag: StatusTag, record: &PinCapability) -> bool {
    tag == StatusTag::Pwm && record.is_pwm_capable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::due;
    use crate::status::StatusCache;
    use core::cell::Cell;
    use pinscope_hal::PwmChannel;
    use proptest::prelude::*;

    const A0: i32 = 54;
    const A11: i32 = 65;

    /// Scripted register values with an access counter
    #[derive(Default)]
    struct MockRegisters {
        osr: [Cell<u32>; 4],
        pdsr: [Cell<u32>; 4],
        duty: [Cell<u32>; 8],
        reads: Cell<usize>,
    }

    impl MockRegisters {
        fn new() -> Self {
            Self::default()
        }

        fn set_output_enabled(&self, pin: usize, enabled: bool) {
            let record = &due::PINS[pin];
            let slot = &self.osr[record.port.index()];
            if enabled {
                slot.set(slot.get() | record.mask);
            } else {
                slot.set(slot.get() & !record.mask);
            }
        }

        fn set_level(&self, pin: usize, high: bool) {
            let record = &due::PINS[pin];
            let slot = &self.pdsr[record.port.index()];
            if high {
                slot.set(slot.get() | record.mask);
            } else {
                slot.set(slot.get() & !record.mask);
            }
        }
    }

    impl RegisterReader for MockRegisters {
        fn output_enabled(&self, port: PortId, mask: u32) -> bool {
            self.reads.set(self.reads.get() + 1);
            self.osr[port.index()].get() & mask != 0
        }

        fn pin_level(&self, port: PortId, mask: u32) -> bool {
            self.reads.set(self.reads.get() + 1);
            self.pdsr[port.index()].get() & mask != 0
        }

        fn pwm_duty(&self, channel: PwmChannel) -> u32 {
            self.reads.set(self.reads.get() + 1);
            self.duty[channel.index()].get()
        }
    }

    fn tags_with(pin: usize, tag: StatusTag) -> [StatusTag; due::NUMBER_PINS_TOTAL] {
        let mut tags = [StatusTag::Unset; due::NUMBER_PINS_TOTAL];
        tags[pin] = tag;
        tags
    }

    fn pin(index: i32) -> ValidPin {
        ValidPin::new(index as u16)
    }

    #[test]
    fn test_valid_pin_bounds() {
        let regs = MockRegisters::new();
        let cache: StatusCache<{ due::NUMBER_PINS_TOTAL }> = StatusCache::new();
        let resolver = PinResolver::new(&due::BOARD, &cache, &regs);

        assert!(resolver.is_valid_pin(0));
        assert!(resolver.is_valid_pin(78));
        assert!(!resolver.is_valid_pin(79));
        assert!(!resolver.is_valid_pin(-1));
        assert!(!resolver.is_valid_pin(i32::MIN));
        assert_eq!(resolver.pins_total(), due::NUMBER_PINS_TOTAL);
    }

    #[test]
    fn test_invalid_pin_rejected_before_access() {
        let regs = MockRegisters::new();
        let cache: StatusCache<{ due::NUMBER_PINS_TOTAL }> = StatusCache::new();
        let resolver = PinResolver::new(&due::BOARD, &cache, &regs);

        assert_eq!(resolver.resolve(79), Err(PinError::InvalidPin(79)));
        assert_eq!(resolver.resolve(-5), Err(PinError::InvalidPin(-5)));
        assert_eq!(regs.reads.get(), 0);
    }

    #[test]
    fn test_analog_mapping() {
        let regs = MockRegisters::new();
        let tags = [StatusTag::Unset; due::NUMBER_PINS_TOTAL];
        let resolver = PinResolver::new(&due::BOARD, &tags, &regs);

        assert!(resolver.is_analog_pin(A0));
        assert!(resolver.is_analog_pin(A11));
        assert!(!resolver.is_analog_pin(A0 - 1));
        assert!(!resolver.is_analog_pin(A11 + 1));
        assert_eq!(resolver.digital_pin_to_analog_index(A0), 0);
        assert_eq!(
            resolver.digital_pin_to_analog_index(A11),
            i32::from(due::NUM_ANALOG_INPUTS) - 1
        );
        assert_eq!(resolver.analog_index(pin(60)), Some(6));
        assert_eq!(resolver.analog_index(pin(13)), None);
    }

    #[test]
    fn test_unset_follows_hardware() {
        let regs = MockRegisters::new();
        let tags = [StatusTag::Unset; due::NUMBER_PINS_TOTAL];
        let resolver = PinResolver::new(&due::BOARD, &tags, &regs);

        regs.set_output_enabled(13, true);
        assert_eq!(resolver.valid_pin_mode(pin(13)), PinMode::Output);

        regs.set_output_enabled(13, false);
        assert_eq!(resolver.valid_pin_mode(pin(13)), PinMode::Input);
    }

    #[test]
    fn test_digital_output_tag_overrides_hardware() {
        let regs = MockRegisters::new();
        let tags = tags_with(13, StatusTag::DigitalOutput);
        let resolver = PinResolver::new(&due::BOARD, &tags, &regs);

        assert_eq!(resolver.valid_pin_mode(pin(13)), PinMode::Output);
        assert_eq!(regs.reads.get(), 0);
    }

    #[test]
    fn test_other_tags_ignore_hardware() {
        let regs = MockRegisters::new();
        regs.set_output_enabled(A0 as usize, true);

        for tag in [
            StatusTag::DigitalInput,
            StatusTag::DigitalInputPullup,
            StatusTag::Analog,
            StatusTag::Timer,
            StatusTag::Unrecognized(0x0C),
        ] {
            let tags = tags_with(A0 as usize, tag);
            let resolver = PinResolver::new(&due::BOARD, &tags, &regs);
            assert_eq!(resolver.valid_pin_mode(pin(A0)), PinMode::Input);
        }
    }

    #[test]
    fn test_pwm_status_needs_tag_and_capability() {
        let regs = MockRegisters::new();

        let tags = tags_with(6, StatusTag::Pwm);
        let resolver = PinResolver::new(&due::BOARD, &tags, &regs);
        assert!(resolver.pwm_status(pin(6)));

        // Pin 13 has no PWM channel on the Due
        let tags = tags_with(13, StatusTag::Pwm);
        let resolver = PinResolver::new(&due::BOARD, &tags, &regs);
        assert!(!resolver.pwm_status(pin(13)));
        assert_eq!(resolver.valid_pin_mode(pin(13)), PinMode::Input);
        assert_eq!(resolver.pwm_duty(pin(13)), None);

        let tags = tags_with(6, StatusTag::DigitalInput);
        let resolver = PinResolver::new(&due::BOARD, &tags, &regs);
        assert!(!resolver.pwm_status(pin(6)));
    }

    #[test]
    fn test_pwm_duty_reads_channel() {
        let regs = MockRegisters::new();
        regs.duty[7].set(640);
        let tags = tags_with(6, StatusTag::Pwm);
        let resolver = PinResolver::new(&due::BOARD, &tags, &regs);

        assert_eq!(resolver.pwm_duty(pin(6)), Some(640));
    }

    #[test]
    fn test_scenario_pwm_pin() {
        let regs = MockRegisters::new();
        let cache: StatusCache<{ due::NUMBER_PINS_TOTAL }> = StatusCache::new();
        cache.record(6, StatusTag::Pwm);
        regs.duty[7].set(128);
        let resolver = PinResolver::new(&due::BOARD, &cache, &regs);

        assert!(resolver.pwm_status(pin(6)));
        assert_eq!(resolver.valid_pin_mode(pin(6)), PinMode::Output);
        assert!(!resolver.is_analog_pin(6));

        let state = resolver.resolve(6).unwrap();
        assert_eq!(state.name, "D6");
        assert_eq!(state.mode, PinMode::Output);
        assert!(state.pwm_active);
        assert_eq!(state.pwm_duty, Some(128));
        assert_eq!(state.analog_index, None);
    }

    #[test]
    fn test_scenario_a0() {
        let regs = MockRegisters::new();
        regs.set_level(A0 as usize, true);
        let cache: StatusCache<{ due::NUMBER_PINS_TOTAL }> = StatusCache::new();
        let resolver = PinResolver::new(&due::BOARD, &cache, &regs);

        assert!(resolver.is_analog_pin(A0));
        assert_eq!(resolver.digital_pin_to_analog_index(A0), 0);
        assert_eq!(resolver.valid_pin_mode(pin(A0)), PinMode::Input);

        let state = resolver.resolve(A0).unwrap();
        assert_eq!(state.name, "A0");
        assert_eq!(state.analog_index, Some(0));
        assert_eq!(state.mode, PinMode::Input);
        assert_eq!(state.tag, StatusTag::Unset);
        assert!(state.level);
        assert!(!state.pwm_active);
    }

    #[test]
    fn test_resolution_tracks_cache_changes() {
        let regs = MockRegisters::new();
        let cache: StatusCache<{ due::NUMBER_PINS_TOTAL }> = StatusCache::new();
        let resolver = PinResolver::new(&due::BOARD, &cache, &regs);

        assert_eq!(resolver.valid_pin_mode(pin(20)), PinMode::Input);
        cache.record(20, StatusTag::DigitalOutput);
        assert_eq!(resolver.valid_pin_mode(pin(20)), PinMode::Output);
        cache.record_raw(20, 0xFF);
        assert_eq!(resolver.valid_pin_mode(pin(20)), PinMode::Input);
    }

    fn resolve_with(pin: i32, raw: u8, output_enabled: bool) -> ResolvedPinState {
        let regs = MockRegisters::new();
        regs.set_output_enabled(pin as usize, output_enabled);
        let cache: StatusCache<{ due::NUMBER_PINS_TOTAL }> = StatusCache::new();
        cache.record_raw(pin as usize, raw);
        let resolver = PinResolver::new(&due::BOARD, &cache, &regs);

        let first = resolver.resolve(pin).unwrap();
        let second = resolver.resolve(pin).unwrap();
        assert_eq!(first, second);
        first
    }

    proptest! {
        #[test]
        fn prop_valid_pin_matches_range(p in any::<i32>()) {
            let regs = MockRegisters::new();
            let tags = [StatusTag::Unset; due::NUMBER_PINS_TOTAL];
            let resolver = PinResolver::new(&due::BOARD, &tags, &regs);
            let expected = (0..due::NUMBER_PINS_TOTAL as i32).contains(&p);
            prop_assert_eq!(resolver.is_valid_pin(p), expected);
            prop_assert_eq!(resolver.resolve(p).is_ok(), expected);
        }

        #[test]
        fn prop_analog_pin_matches_block(p in -100i32..200) {
            let regs = MockRegisters::new();
            let tags = [StatusTag::Unset; due::NUMBER_PINS_TOTAL];
            let resolver = PinResolver::new(&due::BOARD, &tags, &regs);
            prop_assert_eq!(resolver.is_analog_pin(p), (A0..=A11).contains(&p));
        }

        #[test]
        fn prop_pwm_requires_capability(p in 0i32..79, raw in any::<u8>()) {
            let state = resolve_with(p, raw, false);
            let capable = due::PINS[p as usize].is_pwm_capable();
            let tagged = StatusTag::from_raw(raw) == StatusTag::Pwm;
            prop_assert_eq!(state.pwm_active, capable && tagged);
        }

        #[test]
        fn prop_mode_precedence(p in 0i32..79, raw in any::<u8>(), oe in any::<bool>()) {
            let state = resolve_with(p, raw, oe);
            let tag = StatusTag::from_raw(raw);
            let expected = (tag == StatusTag::Unset && oe)
                || tag == StatusTag::DigitalOutput
                || state.pwm_active;
            prop_assert_eq!(state.mode.is_output(), expected);
        }
    }
}

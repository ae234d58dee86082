//! Console report formatting
//!
//! Stateless writers that render a [`ResolvedPinState`] for the debug
//! console. They only consume resolved values and never touch registers
//! or the status cache.
//!
//! Line layout:
//!
//! ```text
//! PIN: 54   A0             (A 0)  Input  = 1
//! PIN: 06   D6            Output = 0    PWM = 128
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::config::BoardLayout;
use crate::pin::{PinMode, ValidPin};
use crate::registry::BoardPins;
use crate::resolver::ResolvedPinState;

/// Capacity of a rendered report line
pub const REPORT_LINE_LEN: usize = 96;

/// One rendered report line
pub type ReportLine = String<REPORT_LINE_LEN>;

/// Write the pin number, zero-padded to two digits
pub fn write_pin_number<W: Write>(w: &mut W, pin: ValidPin) -> fmt::Result {
    write!(w, "{:02}", pin.index())
}

/// Write `name` left-justified in a `width` column
pub fn write_pin_name<W: Write>(w: &mut W, name: &str, width: u8) -> fmt::Result {
    write!(w, "{:<width$}", name, width = usize::from(width))
}

/// Write the analog channel as ` (A n)  `
pub fn write_pin_analog<W: Write>(w: &mut W, analog_index: u8) -> fmt::Result {
    write!(w, " (A{:2})  ", analog_index)
}

/// Write the PWM duty, or nothing when PWM is inactive
pub fn write_pin_pwm<W: Write>(w: &mut W, state: &ResolvedPinState) -> fmt::Result {
    match state.pwm_duty {
        Some(duty) if state.pwm_active => write!(w, "PWM = {}", duty),
        _ => Ok(()),
    }
}

/// Port hook
///
/// The SAM3X port bit carries nothing beyond the pin number, so this
/// writes nothing. Kept so every board renders through the same calls.
pub fn write_pin_port<W: Write>(_w: &mut W, _state: &ResolvedPinState) -> fmt::Result {
    Ok(())
}

/// Write the mode and live level
pub fn write_pin_mode<W: Write>(w: &mut W, state: &ResolvedPinState) -> fmt::Result {
    let label = match state.mode {
        PinMode::Input => "Input  = ",
        PinMode::Output => "Output = ",
    };
    w.write_str(label)?;
    w.write_char(if state.level { '1' } else { '0' })
}

/// Write `pad` spaces
pub fn write_multi_name_pad<W: Write>(w: &mut W, pad: u8) -> fmt::Result {
    for _ in 0..pad {
        w.write_char(' ')?;
    }
    Ok(())
}

/// Write an additional name of an already reported pin
pub fn write_alias_line<W: Write>(w: &mut W, name: &str, layout: &BoardLayout) -> fmt::Result {
    write_multi_name_pad(w, layout.multi_name_pad)?;
    w.write_str(name)
}

/// Write the full one-line report for a pin
pub fn write_pin_report<W: Write>(
    w: &mut W,
    state: &ResolvedPinState,
    layout: &BoardLayout,
) -> fmt::Result {
    w.write_str("PIN: ")?;
    write_pin_number(w, state.pin)?;
    w.write_str("   ")?;
    write_pin_port(w, state)?;
    write_pin_name(w, state.name, layout.max_name_length)?;
    if let Some(index) = state.analog_index {
        write_pin_analog(w, index)?;
    }
    write_pin_mode(w, state)?;
    if state.pwm_active {
        w.write_str("    ")?;
        write_pin_pwm(w, state)?;
    }
    Ok(())
}

/// Write the pin report followed by one line per alias on the same port bit
pub fn write_pin_with_aliases<W: Write>(
    w: &mut W,
    state: &ResolvedPinState,
    board: &BoardPins,
) -> fmt::Result {
    write_pin_report(w, state, board.layout())?;
    for index in board.aliases(state.pin.as_usize()) {
        w.write_char('\n')?;
        write_alias_line(w, board.pins()[index].name, board.layout())?;
    }
    Ok(())
}

/// Render the one-line report into a fixed-capacity buffer
///
/// Fails with `fmt::Error` if the line exceeds [`REPORT_LINE_LEN`].
pub fn render_pin_report(
    state: &ResolvedPinState,
    layout: &BoardLayout,
) -> Result<ReportLine, fmt::Error> {
    let mut line = ReportLine::new();
    write_pin_report(&mut line, state, layout)?;
    Ok(line)
}

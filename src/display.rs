//! The visible half of the controller: a themed surface plus a toggle
//! indicator showing which mode is active.

use log::{error, trace};
use std::io::Write;

/// Escape sequence that hands foreground/background control back to the
/// terminal. Emit this on the way out.
pub const RESET: &str = "\x1b]110\x07\x1b]111\x07";

const DARK_FG: &str = "#c0caf5";
const DARK_BG: &str = "#1a1b26";
const LIGHT_FG: &str = "#24292f";
const LIGHT_BG: &str = "#ffffff";

/// The surface the controller drives. Implementations own the actual
/// rendering; the controller just says which mode to show. Both calls must
/// be idempotent and must not fail upward.
pub trait ThemeDisplay {
    /// Show the surface in dark or light mode
    fn set_dark(&mut self, dark: bool);

    /// Move the toggle indicator without treating it as user input
    fn set_toggle(&mut self, checked: bool);
}

/// Surface backed by the controlling terminal. Colors are set with OSC 10/11
/// sequences and the toggle is rendered as a status line. Writes are diffed
/// against the last-applied state, so re-applying the same theme sends
/// nothing.
pub struct TerminalDisplay<W: Write> {
    out: W,
    dark: Option<bool>,
    checked: Option<bool>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            dark: None,
            checked: None,
        }
    }

    /// Write a fragment, swallowing failures. A terminal we can't write to
    /// is a terminal that keeps its old colors.
    fn write(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            error!("Error writing to terminal: {err}");
        }
    }
}

impl<W: Write> ThemeDisplay for TerminalDisplay<W> {
    fn set_dark(&mut self, dark: bool) {
        if self.dark == Some(dark) {
            return;
        }
        self.dark = Some(dark);
        trace!("Setting terminal colors, dark={dark}");
        let (fg, bg) = if dark {
            (DARK_FG, DARK_BG)
        } else {
            (LIGHT_FG, LIGHT_BG)
        };
        self.write(&format!("\x1b]10;{fg}\x07\x1b]11;{bg}\x07"));
    }

    fn set_toggle(&mut self, checked: bool) {
        if self.checked == Some(checked) {
            return;
        }
        self.checked = Some(checked);
        let mark = if checked { "x" } else { " " };
        self.write(&format!("[{mark}] dark mode\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_writes_colors_and_indicator() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.set_dark(true);
        display.set_toggle(true);

        let written = String::from_utf8(display.out.clone()).unwrap();
        assert!(written.contains("\x1b]11;#1a1b26\x07"));
        assert!(written.contains("[x] dark mode"));
    }

    #[test]
    fn test_reapply_is_a_no_op() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.set_dark(false);
        display.set_toggle(false);
        let after_first = display.out.clone();

        display.set_dark(false);
        display.set_toggle(false);
        assert_eq!(display.out, after_first);
    }

    #[test]
    fn test_switch_rewrites() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.set_dark(true);
        let after_dark = display.out.len();
        display.set_dark(false);
        assert!(display.out.len() > after_dark);
    }
}

#![forbid(unsafe_code)]

//! ACS vs UTF-8 line-drawing selection.
//!
//! The decision is a pure function of the terminal snapshot:
//!
//! 1. No terminal: nothing to draw on, answer [`RenderMode::Utf8`].
//! 2. `U8` defined and exactly `0`: the user forced ACS for this terminal,
//!    even when the session speaks UTF-8.
//! 3. UTF-8 negotiated: draw with Unicode glyphs.
//! 4. Anything else: ACS.

use crate::terminal::{Capability, TerminalHandle};

/// How line-drawing codes are rendered on a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Emit the terminal's own ACS strings.
    Acs,
    /// Emit UTF-8 glyphs from the translation table.
    Utf8,
}

impl RenderMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acs => "acs",
            Self::Utf8 => "utf8",
        }
    }
}

/// Which rule of the selection produced the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reason {
    NoTerminal,
    U8ForcedAcs,
    Utf8Session,
    DefaultAcs,
}

impl Reason {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    const fn as_str(self) -> &'static str {
        match self {
            Self::NoTerminal => "no_terminal",
            Self::U8ForcedAcs => "u8_forced_acs",
            Self::Utf8Session => "utf8_session",
            Self::DefaultAcs => "default_acs",
        }
    }
}

fn select<T: TerminalHandle + ?Sized>(terminal: Option<&T>) -> (RenderMode, Reason) {
    let Some(terminal) = terminal else {
        return (RenderMode::Utf8, Reason::NoTerminal);
    };

    if terminal.has_capability(Capability::U8) && terminal.capability_number(Capability::U8) == 0
    {
        return (RenderMode::Acs, Reason::U8ForcedAcs);
    }

    if terminal.is_utf8_session() {
        (RenderMode::Utf8, Reason::Utf8Session)
    } else {
        (RenderMode::Acs, Reason::DefaultAcs)
    }
}

/// Rendering mode for `terminal`.
#[must_use]
pub fn render_mode<T: TerminalHandle + ?Sized>(terminal: Option<&T>) -> RenderMode {
    let (mode, _reason) = select(terminal);
    crate::trace!(
        mode = mode.as_str(),
        reason = _reason.as_str(),
        "line-drawing mode selected"
    );
    mode
}

/// Should this terminal use ACS instead of UTF-8 line drawing?
#[must_use]
pub fn needs_acs<T: TerminalHandle + ?Sized>(terminal: Option<&T>) -> bool {
    render_mode(terminal) == RenderMode::Acs
}

#![forbid(unsafe_code)]

//! Glyph resolution: the bytes to emit for one line-drawing code.

use crate::acs_table;
use crate::render_mode::{RenderMode, render_mode};
use crate::terminal::TerminalHandle;

/// Bytes to output for ACS `code` on `terminal`, or `None` if the code has
/// no representation there.
///
/// In ACS mode this is the terminal's own ACS string (the caller is expected
/// to be in the terminal's ACS mode when writing it). Otherwise it is the
/// UTF-8 glyph from the translation table. The ACS branch never consults the
/// translation table, so a terminal with an empty ACS table resolves every
/// code to `None`.
#[must_use]
pub fn resolve_glyph<T: TerminalHandle + ?Sized>(terminal: &T, code: u8) -> Option<&[u8]> {
    let mode = render_mode(Some(terminal));
    let glyph = match mode {
        RenderMode::Acs => {
            let acs = terminal.acs_string(code);
            (!acs.is_empty()).then_some(acs)
        }
        RenderMode::Utf8 => acs_table::lookup(code).map(str::as_bytes),
    };

    if glyph.is_none() {
        crate::trace!(code, mode = mode.as_str(), "no line-drawing mapping");
    }
    glyph
}

/// [`resolve_glyph`], falling back to a 7-bit approximation (`+`, `-`, `|`,
/// `*`) for box-drawing codes that resolve to nothing.
#[must_use]
pub fn resolve_glyph_or_ascii<T: TerminalHandle + ?Sized>(terminal: &T, code: u8) -> Option<&[u8]> {
    resolve_glyph(terminal, code).or_else(|| acs_table::ascii_fallback_bytes(code))
}

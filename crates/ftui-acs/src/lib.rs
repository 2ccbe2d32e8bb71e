#![forbid(unsafe_code)]

//! ACS: line-drawing glyph selection for terminal output.
//!
//! # Role in FrankenTUI
//! Box borders, arrows and the handful of other symbols that terminals have
//! historically drawn through the alternate character set (ACS) can be
//! emitted two ways: as the terminal's own ACS strings, or as native UTF-8
//! glyphs. `ftui-acs` decides which applies to a terminal and returns the
//! bytes to write for a given ACS code.
//!
//! # Primary responsibilities
//! - **Mode selection**: [`needs_acs`] / [`render_mode`] from the `U8`
//!   capability and the session's UTF-8 flag.
//! - **Glyph resolution**: [`resolve_glyph`] returns the terminal's ACS
//!   string or the UTF-8 glyph, or `None` when the code has no mapping.
//! - **Terminal boundary**: [`TerminalHandle`] and the in-memory
//!   [`TermSnapshot`].
//! - **Overrides**: [`TerminalOverrides`] lets users force `U8` or replace a
//!   terminal's ACS table per terminal name.
//!
//! # Example
//! ```
//! use ftui_acs::{TermSnapshot, needs_acs, resolve_glyph};
//!
//! let term = TermSnapshot::new("xterm-256color").with_utf8(true);
//! assert!(!needs_acs(Some(&term)));
//! assert_eq!(resolve_glyph(&term, b'+'), Some("\u{2192}".as_bytes()));
//! assert_eq!(resolve_glyph(&term, b'q'), None);
//! ```

pub mod acs_table;
pub mod error;
pub mod glyph;
pub mod logging;
pub mod render_mode;
pub mod terminal;
pub mod terminal_override;

pub use error::{OverrideError, Result};
pub use glyph::{resolve_glyph, resolve_glyph_or_ascii};
pub use render_mode::{RenderMode, needs_acs, render_mode};
pub use terminal::{AcsMap, Capability, TermSnapshot, TerminalHandle};
pub use terminal_override::{OverrideAction, OverrideEntry, TerminalOverrides};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};

//! End-to-end line-drawing resolution against terminal snapshots.

use ftui_acs::acs_table;
use ftui_acs::{
    AcsMap, Capability, RenderMode, TermSnapshot, TerminalHandle, TerminalOverrides, needs_acs,
    render_mode, resolve_glyph,
};

/// Typical xterm `acsc` value.
const XTERM_ACSC: &[u8] = b"``aaffggiijjkkllmmnnooppqqrrssttuuvvwwxxyyzz{{||}}~~";

fn xterm(utf8: bool) -> TermSnapshot {
    TermSnapshot::new("xterm-256color")
        .with_acs(AcsMap::from_acsc(XTERM_ACSC))
        .with_utf8(utf8)
}

/// Handle implemented outside the crate, as a host with its own terminfo
/// layer would.
struct HostTerm {
    u8_cap: Option<i32>,
    utf8: bool,
    corner: Vec<u8>,
}

impl TerminalHandle for HostTerm {
    fn has_capability(&self, cap: Capability) -> bool {
        cap == Capability::U8 && self.u8_cap.is_some()
    }

    fn capability_number(&self, _cap: Capability) -> i32 {
        self.u8_cap.unwrap_or(-1)
    }

    fn acs_string(&self, code: u8) -> &[u8] {
        if code == b'l' { self.corner.as_slice() } else { &[] }
    }

    fn is_utf8_session(&self) -> bool {
        self.utf8
    }
}

#[test]
fn absent_terminal_never_needs_acs() {
    assert!(!needs_acs::<TermSnapshot>(None));
    assert!(!needs_acs::<HostTerm>(None));
}

#[test]
fn unicode_terminal_resolves_table_glyphs() {
    let term = xterm(true);
    assert!(!needs_acs(Some(&term)));
    assert_eq!(resolve_glyph(&term, b'+'), Some(&b"\xe2\x86\x92"[..]));
    assert_eq!(resolve_glyph(&term, b'q'), None);
}

#[test]
fn every_table_entry_resolves_in_unicode_mode() {
    let term = xterm(true);
    for entry in acs_table::entries() {
        assert_eq!(resolve_glyph(&term, entry.key), Some(entry.glyph.as_bytes()));
    }
}

#[test]
fn bytes_outside_table_have_no_unicode_mapping() {
    let term = xterm(true);
    for code in 0..=u8::MAX {
        if acs_table::lookup(code).is_none() {
            assert_eq!(resolve_glyph(&term, code), None, "code {code:#04x}");
        }
    }
}

#[test]
fn acs_terminal_returns_its_own_strings() {
    let term = xterm(false);
    assert_eq!(render_mode(Some(&term)), RenderMode::Acs);
    assert_eq!(resolve_glyph(&term, b'l'), Some(&b"l"[..]));
    // '+' is in the UTF-8 table but not in this acsc string.
    assert_eq!(resolve_glyph(&term, b'+'), None);
}

#[test]
fn acs_terminal_without_acsc_maps_nothing() {
    let term = TermSnapshot::new("dumb");
    for entry in acs_table::entries() {
        assert_eq!(resolve_glyph(&term, entry.key), None);
    }
}

#[test]
fn u8_zero_forces_acs_on_host_handle() {
    let term = HostTerm {
        u8_cap: Some(0),
        utf8: true,
        corner: b"\x0el\x0f".to_vec(),
    };
    assert!(needs_acs(Some(&term)));
    assert_eq!(resolve_glyph(&term, b'l'), Some(&b"\x0el\x0f"[..]));
    assert_eq!(resolve_glyph(&term, b'k'), None);
}

#[test]
fn host_handle_unicode_mode() {
    let term = HostTerm {
        u8_cap: Some(1),
        utf8: true,
        corner: b"l".to_vec(),
    };
    assert_eq!(resolve_glyph(&term, b'l'), None);
    assert_eq!(resolve_glyph(&term, b'`'), Some("\u{25c6}".as_bytes()));
}

#[test]
fn override_forces_acs_for_matching_terminal() {
    let overrides = TerminalOverrides::parse("xterm*:U8=0").unwrap();
    let mut term = xterm(true);
    assert!(!needs_acs(Some(&term)));

    overrides.apply(&mut term);
    assert!(needs_acs(Some(&term)));
    assert_eq!(resolve_glyph(&term, b'q'), Some(&b"q"[..]));
}

#[test]
fn override_removing_u8_restores_unicode() {
    let mut term = xterm(true).with_capability(Capability::U8, 0);
    TerminalOverrides::parse("xterm*:U8@").unwrap().apply(&mut term);
    assert_eq!(render_mode(Some(&term)), RenderMode::Utf8);
}

#[test]
fn repeated_calls_are_identical() {
    let unicode = xterm(true);
    let acs = xterm(false);
    for code in 0..=u8::MAX {
        assert_eq!(resolve_glyph(&unicode, code), resolve_glyph(&unicode, code));
        assert_eq!(resolve_glyph(&acs, code), resolve_glyph(&acs, code));
    }
}

#[test]
fn resolution_is_shareable_across_threads() {
    let term = xterm(true);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(resolve_glyph(&term, b'}'), Some("\u{a3}".as_bytes()));
            });
        }
    });
}

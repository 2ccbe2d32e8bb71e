//! Property-based invariant tests for line-drawing resolution.
//!
//! 1. Table keys are strictly increasing
//! 2. Unicode-mode resolution agrees with a linear scan of the table
//! 3. ACS-mode resolution returns exactly the terminal's slot, or None
//! 4. Mode selection follows the U8 / UTF-8 precedence
//! 5. Resolution is deterministic
//! 6. The override parser never panics

use ftui_acs::acs_table;
use ftui_acs::{
    AcsMap, Capability, RenderMode, TermSnapshot, TerminalHandle, TerminalOverrides,
    render_mode, resolve_glyph,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn acsc_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

fn terminal_strategy() -> impl Strategy<Value = TermSnapshot> {
    (prop::option::of(-2i32..3), any::<bool>(), acsc_strategy()).prop_map(|(u8_cap, utf8, acsc)| {
        let mut term = TermSnapshot::new("prop")
            .with_acs(AcsMap::from_acsc(&acsc))
            .with_utf8(utf8);
        if let Some(value) = u8_cap {
            term.set_capability(Capability::U8, value);
        }
        term
    })
}

#[test]
fn table_keys_strictly_increasing() {
    let entries = acs_table::entries();
    assert!(entries.windows(2).all(|pair| pair[0].key < pair[1].key));
    assert!(entries.iter().all(|entry| !entry.glyph.is_empty()));
}

proptest! {
    #[test]
    fn unicode_lookup_matches_linear_scan(code in any::<u8>()) {
        let expected = acs_table::entries()
            .iter()
            .find(|entry| entry.key == code)
            .map(|entry| entry.glyph);
        prop_assert_eq!(acs_table::lookup(code), expected);

        let term = TermSnapshot::new("xterm").with_utf8(true);
        prop_assert_eq!(resolve_glyph(&term, code), expected.map(str::as_bytes));
    }

    #[test]
    fn acs_mode_returns_terminal_slot(acsc in acsc_strategy(), code in any::<u8>()) {
        let term = TermSnapshot::new("vt100").with_acs(AcsMap::from_acsc(&acsc));
        let slot = term.acs_string(code);
        let expected = if slot.is_empty() { None } else { Some(slot) };
        prop_assert_eq!(resolve_glyph(&term, code), expected);
    }

    #[test]
    fn mode_follows_precedence(term in terminal_strategy()) {
        let forced = term.has_capability(Capability::U8)
            && term.capability_number(Capability::U8) == 0;
        let expected = if forced || !term.is_utf8_session() {
            RenderMode::Acs
        } else {
            RenderMode::Utf8
        };
        prop_assert_eq!(render_mode(Some(&term)), expected);
    }

    #[test]
    fn resolution_is_deterministic(term in terminal_strategy(), code in any::<u8>()) {
        let first = resolve_glyph(&term, code).map(<[u8]>::to_vec);
        let second = resolve_glyph(&term, code).map(<[u8]>::to_vec);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn override_parser_never_panics(input in ".{0,64}") {
        let _ = TerminalOverrides::parse(&input);
        let lenient = TerminalOverrides::parse_lenient(&input);
        let mut term = TermSnapshot::new("xterm");
        let _ = lenient.apply(&mut term);
    }

    #[test]
    fn strict_parse_success_implies_lenient_agreement(input in "[a-z*?]{1,8}:U8=[0-9]{1,3}") {
        let strict = TerminalOverrides::parse(&input).unwrap();
        prop_assert_eq!(strict, TerminalOverrides::parse_lenient(&input));
    }
}

#![no_main]

use arbitrary::Arbitrary;
use ftui_acs::{AcsMap, Capability, TermSnapshot, needs_acs, resolve_glyph};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    u8_cap: Option<i32>,
    utf8: bool,
    acsc: Vec<u8>,
    codes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    if input.acsc.len() > 512 || input.codes.len() > 512 {
        return;
    }

    let mut term = TermSnapshot::new("fuzz")
        .with_acs(AcsMap::from_acsc(&input.acsc))
        .with_utf8(input.utf8);
    if let Some(value) = input.u8_cap {
        term.set_capability(Capability::U8, value);
    }

    let acs = needs_acs(Some(&term));
    for &code in &input.codes {
        let first = resolve_glyph(&term, code);
        assert_eq!(first, resolve_glyph(&term, code), "resolution must be pure");
        if !acs && let Some(glyph) = first {
            assert!(std::str::from_utf8(glyph).is_ok(), "unicode glyphs are UTF-8");
        }
    }
});

#![no_main]

use ftui_acs::{TermSnapshot, TerminalOverrides, resolve_glyph};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 1024 {
        return;
    }

    // Lenient parsing must keep a subset of what strict parsing accepts.
    let lenient = TerminalOverrides::parse_lenient(text);
    if let Ok(strict) = TerminalOverrides::parse(text) {
        assert_eq!(strict, lenient, "strict success must match lenient parse");
    }

    // Applying any parsed overrides must leave a usable terminal.
    let mut term = TermSnapshot::new("xterm-256color").with_utf8(true);
    lenient.apply(&mut term);
    for code in 0..=u8::MAX {
        if let Some(glyph) = resolve_glyph(&term, code) {
            assert!(!glyph.is_empty(), "resolved glyphs are never empty");
        }
    }
});

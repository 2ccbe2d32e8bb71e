#![forbid(unsafe_code)]

//! Static ACS-to-UTF-8 translation table.
//!
//! Maps the single-byte codes of the alternate character set convention
//! (`` ` ``, `a`, `f`, ...) to the Unicode glyph a UTF-8 terminal should
//! print instead. The table is sorted by key so lookups are a binary search
//! with no allocation.
//!
//! Codes whose only legacy rendering is a 7-bit stand-in (corners, tees and
//! lines drawn as `+`, `-`, `|`) are deliberately absent here; they live in
//! [`ascii_fallback`] so callers can choose to degrade to them.
//! For the classic multiplexer UTF-8 output, where `q` prints `-` and
//! corners print `+`, use [`resolve_glyph_or_ascii`](crate::resolve_glyph_or_ascii).

/// One row of the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcsEntry {
    /// ACS code (the byte an application would send in ACS mode).
    pub key: u8,
    /// UTF-8 glyph printed for `key` on a Unicode terminal.
    pub glyph: &'static str,
}

impl AcsEntry {
    const fn new(key: u8, glyph: &'static str) -> Self {
        Self { key, glyph }
    }
}

/// Translation table, sorted by `key` in strictly increasing order.
static ACS_TABLE: [AcsEntry; 20] = [
    AcsEntry::new(b'+', "\u{2192}"), // right arrow
    AcsEntry::new(b',', "\u{2190}"), // left arrow
    AcsEntry::new(b'-', "\u{2191}"), // up arrow
    AcsEntry::new(b'.', "\u{2193}"), // down arrow
    AcsEntry::new(b'0', "\u{25ae}"), // solid block
    AcsEntry::new(b'`', "\u{25c6}"), // diamond
    AcsEntry::new(b'a', "\u{2592}"), // checkerboard
    AcsEntry::new(b'f', "\u{00b0}"), // degree
    AcsEntry::new(b'g', "\u{00b1}"), // plus/minus
    AcsEntry::new(b'h', "\u{2592}"), // board of squares
    AcsEntry::new(b'i', "\u{2603}"), // lantern
    AcsEntry::new(b'o', "\u{23ba}"), // scan line 1
    AcsEntry::new(b'p', "\u{23bb}"), // scan line 3
    AcsEntry::new(b'r', "\u{23bc}"), // scan line 7
    AcsEntry::new(b's', "\u{23bd}"), // scan line 9
    AcsEntry::new(b'y', "\u{2264}"), // less-than-or-equal
    AcsEntry::new(b'z', "\u{2265}"), // greater-than-or-equal
    AcsEntry::new(b'{', "\u{03c0}"), // pi
    AcsEntry::new(b'|', "\u{2260}"), // not-equal
    AcsEntry::new(b'}', "\u{00a3}"), // pound sterling
];

/// 7-bit stand-ins for codes with no entry in the UTF-8 table.
static ASCII_FALLBACK: [(u8, u8); 12] = [
    (b'j', b'+'),
    (b'k', b'+'),
    (b'l', b'+'),
    (b'm', b'+'),
    (b'n', b'+'),
    (b'q', b'-'),
    (b't', b'+'),
    (b'u', b'+'),
    (b'v', b'+'),
    (b'w', b'+'),
    (b'x', b'|'),
    (b'~', b'*'),
];

/// All translation table rows, in key order.
#[must_use]
pub fn entries() -> &'static [AcsEntry] {
    &ACS_TABLE
}

/// Look up the UTF-8 glyph for an ACS code.
///
/// Keys compare as `u8`, so ordering is unsigned for every byte value.
#[must_use]
pub fn lookup(code: u8) -> Option<&'static str> {
    ACS_TABLE
        .binary_search_by_key(&code, |entry| entry.key)
        .ok()
        .map(|idx| ACS_TABLE[idx].glyph)
}

/// ASCII approximation for line-drawing codes the UTF-8 table omits.
#[must_use]
pub fn ascii_fallback(code: u8) -> Option<u8> {
    ASCII_FALLBACK
        .binary_search_by_key(&code, |&(key, _)| key)
        .ok()
        .map(|idx| ASCII_FALLBACK[idx].1)
}

/// Same as [`ascii_fallback`], borrowed as a one-byte static slice.
pub(crate) fn ascii_fallback_bytes(code: u8) -> Option<&'static [u8]> {
    ASCII_FALLBACK
        .binary_search_by_key(&code, |&(key, _)| key)
        .ok()
        .map(|idx| std::slice::from_ref(&ASCII_FALLBACK[idx].1))
}

#![forbid(unsafe_code)]

//! Terminal handle boundary and an in-memory terminal description.
//!
//! Glyph resolution only needs four answers from a terminal: whether a
//! capability is defined, its numeric value, the terminal's own ACS string
//! for a code, and whether the session negotiated UTF-8. [`TerminalHandle`]
//! is that boundary. Hosts that already own a terminfo layer implement it
//! directly; everyone else can use [`TermSnapshot`].

use ahash::AHashMap;

/// Number of slots in an ACS table (one per byte value).
pub const ACS_SLOTS: usize = 256;

/// Terminal capabilities consulted by the ACS layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Whether the terminal can mix UTF-8 output with ACS line drawing.
    /// Defined as `0` forces ACS rendering.
    U8,
    /// ACS pair string (`acs_chars`): code/value pairs for the ACS table.
    Acsc,
}

impl Capability {
    /// Terminfo-style name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "U8",
            Self::Acsc => "acsc",
        }
    }

    /// Parse a terminfo-style name. Names are case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "U8" => Some(Self::U8),
            "acsc" => Some(Self::Acsc),
            _ => None,
        }
    }
}

/// Read-only view of a terminal connection.
///
/// Implementations must answer from a stable snapshot for the duration of a
/// call; nothing in this crate mutates through the handle.
pub trait TerminalHandle {
    /// Whether `cap` is defined for this terminal.
    fn has_capability(&self, cap: Capability) -> bool;

    /// Numeric value of `cap`. Only meaningful when
    /// [`has_capability`](Self::has_capability) returns `true`.
    fn capability_number(&self, cap: Capability) -> i32;

    /// The terminal's own ACS string for `code`. Empty means not set.
    fn acs_string(&self, code: u8) -> &[u8];

    /// Whether UTF-8 output was negotiated for this session.
    fn is_utf8_session(&self) -> bool;
}

impl<T: TerminalHandle + ?Sized> TerminalHandle for &T {
    fn has_capability(&self, cap: Capability) -> bool {
        (**self).has_capability(cap)
    }

    fn capability_number(&self, cap: Capability) -> i32 {
        (**self).capability_number(cap)
    }

    fn acs_string(&self, code: u8) -> &[u8] {
        (**self).acs_string(code)
    }

    fn is_utf8_session(&self) -> bool {
        (**self).is_utf8_session()
    }
}

/// Per-code ACS strings for one terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcsMap {
    slots: Box<[Vec<u8>]>,
}

impl Default for AcsMap {
    fn default() -> Self {
        Self {
            slots: vec![Vec::new(); ACS_SLOTS].into_boxed_slice(),
        }
    }
}

impl AcsMap {
    /// Empty table: every code unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an `acsc` pair string such as ``"``aaffggjjkkllmmnnqqxx"``.
    ///
    /// Each pair maps its first byte to its second. A trailing unpaired byte
    /// is ignored; later pairs overwrite earlier ones.
    #[must_use]
    pub fn from_acsc(pairs: &[u8]) -> Self {
        let mut map = Self::new();
        for pair in pairs.chunks_exact(2) {
            map.set(pair[0], &pair[1..]);
        }
        map
    }

    /// Replace the string for `code`. An empty value unsets the slot.
    pub fn set(&mut self, code: u8, value: &[u8]) {
        let slot = &mut self.slots[usize::from(code)];
        slot.clear();
        slot.extend_from_slice(value);
    }

    /// Unset `code`.
    pub fn clear(&mut self, code: u8) {
        self.slots[usize::from(code)].clear();
    }

    /// String for `code`, empty when unset.
    #[must_use]
    pub fn get(&self, code: u8) -> &[u8] {
        &self.slots[usize::from(code)]
    }

    /// Number of codes with a non-empty string.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }
}

/// In-memory terminal description implementing [`TerminalHandle`].
#[derive(Debug, Clone, Default)]
pub struct TermSnapshot {
    name: String,
    numbers: AHashMap<Capability, i32>,
    acs: AcsMap,
    utf8: bool,
}

impl TermSnapshot {
    /// Terminal named `name` with no capabilities, an empty ACS table and no
    /// UTF-8 session.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Terminal name (the `TERM` value it was created for).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn with_capability(mut self, cap: Capability, value: i32) -> Self {
        self.set_capability(cap, value);
        self
    }

    #[must_use]
    pub fn with_acs(mut self, acs: AcsMap) -> Self {
        self.acs = acs;
        self
    }

    #[must_use]
    pub fn with_utf8(mut self, utf8: bool) -> Self {
        self.utf8 = utf8;
        self
    }

    pub fn set_capability(&mut self, cap: Capability, value: i32) {
        self.numbers.insert(cap, value);
    }

    pub fn remove_capability(&mut self, cap: Capability) {
        self.numbers.remove(&cap);
    }

    pub fn set_utf8(&mut self, utf8: bool) {
        self.utf8 = utf8;
    }

    #[must_use]
    pub fn acs(&self) -> &AcsMap {
        &self.acs
    }

    pub fn acs_mut(&mut self) -> &mut AcsMap {
        &mut self.acs
    }
}

impl TerminalHandle for TermSnapshot {
    fn has_capability(&self, cap: Capability) -> bool {
        match cap {
            Capability::Acsc => !self.acs.is_empty(),
            Capability::U8 => self.numbers.contains_key(&cap),
        }
    }

    fn capability_number(&self, cap: Capability) -> i32 {
        self.numbers.get(&cap).copied().unwrap_or(0)
    }

    fn acs_string(&self, code: u8) -> &[u8] {
        self.acs.get(code)
    }

    fn is_utf8_session(&self) -> bool {
        self.utf8
    }
}

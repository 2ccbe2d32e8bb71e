#![forbid(unsafe_code)]

//! User overrides for terminal line-drawing capabilities.
//!
//! Overrides use the familiar multiplexer `terminal-overrides` syntax:
//!
//! ```text
//! pattern:cap[=value][:cap...][,pattern:...]
//! ```
//!
//! `pattern` is a glob over the terminal name (`*` and `?`). Supported
//! capabilities are `U8` (numeric; bare `U8` means `1`) and `acsc` (pair
//! string replacing the terminal's ACS table). A trailing `@` removes a
//! capability. `\:` and `\,` escape the separators. Whitespace around a
//! pattern is ignored, so `xterm*:U8=0, linux:U8=0` works as written.
//!
//! The common use is forcing ACS line drawing on a terminal whose UTF-8
//! glyphs render badly:
//!
//! ```text
//! FTUI_TERMINAL_OVERRIDES='linux*:U8=0'
//! ```

use crate::error::{OverrideError, Result};
use crate::terminal::{AcsMap, Capability, TermSnapshot};

/// Environment variable holding terminal overrides.
pub const ENV_TERMINAL_OVERRIDES: &str = "FTUI_TERMINAL_OVERRIDES";

/// One capability change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideAction {
    /// Define `U8` with a numeric value.
    SetU8(i32),
    /// Replace the ACS table from an `acsc` pair string.
    SetAcsc(Vec<u8>),
    /// Remove a capability (`cap@`).
    Remove(Capability),
}

/// Actions applied to every terminal whose name matches `pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub pattern: String,
    pub actions: Vec<OverrideAction>,
}

impl OverrideEntry {
    #[must_use]
    pub fn matches(&self, term_name: &str) -> bool {
        glob_match(self.pattern.as_bytes(), term_name.as_bytes())
    }
}

/// Ordered list of override entries. Later entries win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalOverrides {
    entries: Vec<OverrideEntry>,
}

impl TerminalOverrides {
    /// Parse an override string, rejecting the whole string on the first bad
    /// entry. Empty entries (e.g. a trailing comma) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an [`OverrideError`] describing the first invalid entry.
    pub fn parse(input: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for raw in split_escaped(input, ',', false) {
            if let Some(entry) = parse_entry(&raw)? {
                entries.push(entry);
            }
        }
        Ok(Self { entries })
    }

    /// Parse an override string, dropping bad entries instead of failing.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let mut entries = Vec::new();
        for raw in split_escaped(input, ',', false) {
            match parse_entry(&raw) {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {}
                Err(_err) => {
                    crate::warn!(entry = %raw, error = %_err, "ignoring terminal override");
                }
            }
        }
        Self { entries }
    }

    /// Read overrides from [`ENV_TERMINAL_OVERRIDES`].
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read overrides using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        get_env(ENV_TERMINAL_OVERRIDES)
            .map(|value| Self::parse_lenient(&value))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn entries(&self) -> &[OverrideEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry matching the terminal's name, in order. Returns the
    /// number of entries applied.
    pub fn apply(&self, term: &mut TermSnapshot) -> usize {
        let mut applied = 0;
        for entry in &self.entries {
            if !entry.matches(term.name()) {
                continue;
            }
            for action in &entry.actions {
                apply_action(term, action);
            }
            applied += 1;
        }
        if applied > 0 {
            crate::debug!(
                term = term.name(),
                entries = applied,
                "terminal overrides applied"
            );
        }
        applied
    }
}

fn apply_action(term: &mut TermSnapshot, action: &OverrideAction) {
    match action {
        OverrideAction::SetU8(value) => term.set_capability(Capability::U8, *value),
        OverrideAction::SetAcsc(pairs) => *term.acs_mut() = AcsMap::from_acsc(pairs),
        OverrideAction::Remove(Capability::U8) => term.remove_capability(Capability::U8),
        OverrideAction::Remove(Capability::Acsc) => *term.acs_mut() = AcsMap::new(),
    }
}

fn parse_entry(raw: &str) -> Result<Option<OverrideEntry>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let mut fields = split_escaped(raw, ':', true).into_iter();
    let pattern = fields.next().unwrap_or_default().trim().to_string();
    if pattern.is_empty() {
        return Err(OverrideError::EmptyPattern {
            entry: raw.to_string(),
        });
    }

    let mut actions = Vec::new();
    for field in fields.filter(|field| !field.is_empty()) {
        actions.push(parse_action(&field)?);
    }
    Ok(Some(OverrideEntry { pattern, actions }))
}

fn parse_action(field: &str) -> Result<OverrideAction> {
    let (name, value) = match field.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (field, None),
    };

    if let Some(name) = name.strip_suffix('@')
        && value.is_none()
    {
        return Ok(OverrideAction::Remove(capability(name)?));
    }

    match capability(name)? {
        Capability::U8 => match value {
            None => Ok(OverrideAction::SetU8(1)),
            Some(value) => value
                .trim()
                .parse()
                .map(OverrideAction::SetU8)
                .map_err(|_| OverrideError::InvalidNumber {
                    capability: Capability::U8.name(),
                    value: value.to_string(),
                }),
        },
        Capability::Acsc => match value {
            Some(pairs) => Ok(OverrideAction::SetAcsc(pairs.as_bytes().to_vec())),
            None => Err(OverrideError::MissingValue {
                capability: Capability::Acsc.name(),
            }),
        },
    }
}

fn capability(name: &str) -> Result<Capability> {
    Capability::from_name(name).ok_or_else(|| OverrideError::UnknownCapability {
        name: name.to_string(),
    })
}

/// Characters that may follow a backslash escape.
const ESCAPABLE: [char; 3] = ['\\', ',', ':'];

/// Split on `sep`, skipping escaped separators. With `unescape` the escape
/// backslashes are dropped; without it they are kept for a later pass.
/// Backslashes before any other character are literal.
fn split_escaped(input: &str, sep: char, unescape: bool) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next) if ESCAPABLE.contains(&next) => {
                    if !unescape {
                        current.push('\\');
                    }
                    current.push(next);
                    chars.next();
                }
                _ => current.push('\\'),
            },
            c if c == sep => parts.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    parts.push(current);
    parts
}

/// Glob match over bytes: `*` matches any run, `?` exactly one byte.
///
/// Iterative with a single backtrack point (the last `*`), so the cost is
/// bounded by `pattern.len() * name.len()`.
fn glob_match(pattern: &[u8], name: &[u8]) -> bool {
    let (mut p, mut n) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some(b'*') => {
                star = Some((p, n));
                p += 1;
            }
            Some(&c) if c == b'?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match star {
                Some((star_p, star_n)) => {
                    p = star_p + 1;
                    n = star_n + 1;
                    star = Some((star_p, star_n + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == b'*')
}

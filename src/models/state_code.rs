use crate::constants::US_STATE_CODES;
use crate::utils::title_case;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static STATE_NAME_TO_CODE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| US_STATE_CODES.iter().copied().collect());

/// A two-letter U.S. state postal code drawn from the fixed 50-entry table.
///
/// Only `StateCode::from_name` constructs these, so a value always belongs to
/// the canonical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode(&'static str);

impl StateCode {
    /// Resolves a full state name, in any letter case, to its code.
    ///
    /// Abbreviations, misspellings and non-U.S. regions return `None`.
    pub fn from_name(name: &str) -> Option<StateCode> {
        let titled = title_case(name.trim());

        STATE_NAME_TO_CODE.get(titled.as_str()).copied().map(StateCode)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// All canonical codes in table order.
    pub fn all() -> impl Iterator<Item = StateCode> {
        US_STATE_CODES.iter().map(|(_, code)| StateCode(*code))
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Outcome of canonicalizing a free-text state value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateResolution {
    Resolved(StateCode),
    /// Missing, a sentinel, or anything not in the canonical table.
    Unresolved,
}

impl StateResolution {
    pub fn code(&self) -> Option<StateCode> {
        match self {
            StateResolution::Resolved(code) => Some(*code),
            StateResolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, StateResolution::Resolved(_))
    }
}

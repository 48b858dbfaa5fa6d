///! Type-safe wrappers shared across the crate.
///!
///! This module provides newtype wrappers that enforce compile-time distinction
///! between language identifiers and step cursor positions, plus the mode enum
///! selecting which of the two tracks (PDA or CFG) is active.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A language example identifier (1-indexed).
///
/// Identifiers are stable across sessions and are the key under which
/// progress is persisted.
///
/// # Invariants
///
/// - Language IDs must be >= 1 (0 is reserved as "no language")
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(u32);

impl LanguageId {
    /// Creates a new language identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Language IDs must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Language IDs must be >= 1");
        LanguageId(id)
    }

    /// Returns the raw identifier as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

impl From<LanguageId> for u32 {
    fn from(id: LanguageId) -> Self {
        id.0
    }
}

/// A cursor position within a step script (0-indexed).
///
/// The cursor ranges over `[0, steps.len()]`; the one-past-the-end position
/// means the track is complete.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepIndex(usize);

impl StepIndex {
    /// Creates a new cursor position.
    pub fn new(index: usize) -> Self {
        StepIndex(index)
    }

    /// Returns the raw index as a `usize`.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the next position (index + 1).
    pub fn next(self) -> Self {
        StepIndex(self.0 + 1)
    }

    /// Returns the previous position (index - 1), or None if at the start.
    pub fn prev(self) -> Option<Self> {
        if self.0 > 0 {
            Some(StepIndex(self.0 - 1))
        } else {
            None
        }
    }

    /// Checks if this is the initial position (index 0).
    pub fn is_first(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<StepIndex> for usize {
    fn from(index: StepIndex) -> Self {
        index.0
    }
}

impl From<usize> for StepIndex {
    fn from(index: usize) -> Self {
        StepIndex(index)
    }
}

/// The active track of a session: the PDA simulation or the CFG derivation.
///
/// Serialized as the lowercase strings `"pda"` / `"cfg"`, matching the
/// persisted progress format.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Pda,
    Cfg,
}

impl Mode {
    /// Returns the opposite mode.
    pub fn other(self) -> Self {
        match self {
            Mode::Pda => Mode::Cfg,
            Mode::Cfg => Mode::Pda,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Pda => write!(f, "PDA"),
            Mode::Cfg => write!(f, "CFG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_creation() {
        let l1 = LanguageId::new(1);
        let l2 = LanguageId::new(2);
        assert_eq!(l1.id(), 1);
        assert_eq!(l2.id(), 2);
        assert!(l1 < l2);
    }

    #[test]
    #[should_panic(expected = "Language IDs must be >= 1")]
    fn test_language_id_zero_panics() {
        LanguageId::new(0);
    }

    #[test]
    fn test_step_index_navigation() {
        let s0 = StepIndex::new(0);
        let s1 = s0.next();

        assert_eq!(s1.prev(), Some(s0));
        assert_eq!(s0.prev(), None);
        assert!(s0.is_first());
        assert!(!s1.is_first());
    }

    #[test]
    fn test_mode_other() {
        assert_eq!(Mode::Pda.other(), Mode::Cfg);
        assert_eq!(Mode::Cfg.other(), Mode::Pda);
        assert_eq!(Mode::Pda.other().other(), Mode::Pda);
    }

    #[test]
    fn test_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Pda).unwrap(), "\"pda\"");
        assert_eq!(serde_json::from_str::<Mode>("\"cfg\"").unwrap(), Mode::Cfg);
    }
}

//! Progress persistence.
//!
//! A session can be exported to a small JSON blob (language id, active mode,
//! per-track cursor and completed indices, timestamp) and restored later.
//! Import validates the blob against the referenced language before touching
//! the session: a malformed or inconsistent blob leaves the session exactly
//! as it was.

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data;
use crate::session::Session;
use crate::types::{LanguageId, Mode, StepIndex};

/// Errors raised when restoring saved progress.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("malformed progress data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown language id {0}")]
    UnknownLanguage(u32),
    #[error("cursor {cursor} is out of range for the {mode} track of {len} steps")]
    CursorOutOfRange { mode: Mode, cursor: usize, len: usize },
    #[error("completed step {index} is out of range for the {mode} track of {len} steps")]
    CompletedOutOfRange { mode: Mode, index: usize, len: usize },
}

/// Persisted cursor state of one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTrack {
    pub completed: Vec<usize>,
    pub current: usize,
}

/// The persisted session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub language_id: LanguageId,
    pub mode: Mode,
    pub pda: SavedTrack,
    pub cfg: SavedTrack,
    /// Seconds since the Unix epoch at export time.
    pub timestamp: u64,
}

impl SavedProgress {
    /// Serializes to the persisted JSON format.
    pub fn to_json(&self) -> Result<String, ProgressError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the persisted JSON format.
    pub fn from_json(json: &str) -> Result<Self, ProgressError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn validate_track(mode: Mode, track: &SavedTrack, len: usize) -> Result<(), ProgressError> {
    if track.current > len {
        return Err(ProgressError::CursorOutOfRange { mode, cursor: track.current, len });
    }
    if let Some(&index) = track.completed.iter().find(|&&i| i >= len) {
        return Err(ProgressError::CompletedOutOfRange { mode, index, len });
    }
    Ok(())
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl Session {
    /// Exports the current progress as a persistable record.
    pub fn export_progress(&self) -> SavedProgress {
        let pda = self.track(Mode::Pda);
        let cfg = self.track(Mode::Cfg);
        SavedProgress {
            language_id: self.language().id,
            mode: self.mode(),
            pda: SavedTrack {
                completed: pda.completed.clone(),
                current: pda.current.index(),
            },
            cfg: SavedTrack {
                completed: cfg.completed.clone(),
                current: cfg.current.index(),
            },
            timestamp: now_unix(),
        }
    }

    /// Restores saved progress into this session.
    ///
    /// The referenced language must exist and both cursors must lie within
    /// `[0, steps.len()]`; otherwise an error is returned and the session is
    /// left untouched.
    pub fn import_progress(&mut self, saved: &SavedProgress) -> Result<(), ProgressError> {
        let language =
            data::find(saved.language_id).ok_or(ProgressError::UnknownLanguage(saved.language_id.id()))?;

        validate_track(Mode::Pda, &saved.pda, language.track_len(Mode::Pda))?;
        validate_track(Mode::Cfg, &saved.cfg, language.track_len(Mode::Cfg))?;

        debug!("progress: restoring {} in {} mode", saved.language_id, saved.mode);
        self.set_language(language);
        self.set_mode(saved.mode);
        {
            let track = self.track_mut(Mode::Pda);
            track.completed = saved.pda.completed.clone();
            track.current = StepIndex::new(saved.pda.current);
        }
        {
            let track = self.track_mut(Mode::Cfg);
            track.completed = saved.cfg.completed.clone();
            track.current = StepIndex::new(saved.cfg.current);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Scripted;
    use crate::types::LanguageId;

    use test_log::test;

    fn session_with_progress() -> Session {
        let mut s = Session::new(data::find(LanguageId::new(1)).unwrap());
        for _ in 0..3 {
            let correct = s.current_step().unwrap().correct_answer().unwrap();
            s.answer(correct);
        }
        s.switch_mode();
        s
    }

    #[test]
    fn test_export_reflects_state() {
        let s = session_with_progress();
        let saved = s.export_progress();
        assert_eq!(saved.language_id, LanguageId::new(1));
        assert_eq!(saved.mode, Mode::Cfg);
        assert_eq!(saved.pda.current, 3);
        assert_eq!(saved.pda.completed, vec![0, 1, 2]);
        assert_eq!(saved.cfg.current, 0);
    }

    #[test]
    fn test_json_round_trip() {
        let saved = session_with_progress().export_progress();
        let json = saved.to_json().unwrap();
        let parsed = SavedProgress::from_json(&json).unwrap();
        assert_eq!(parsed, saved);
    }

    #[test]
    fn test_import_restores_state() {
        let saved = session_with_progress().export_progress();

        let mut fresh = Session::new(data::find(LanguageId::new(2)).unwrap());
        fresh.import_progress(&saved).unwrap();

        assert_eq!(fresh.language().id, LanguageId::new(1));
        assert_eq!(fresh.mode(), Mode::Cfg);
        assert_eq!(fresh.track(Mode::Pda).current.index(), 3);
        assert_eq!(fresh.track(Mode::Pda).completed, vec![0, 1, 2]);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = SavedProgress::from_json("{not json");
        assert!(matches!(result, Err(ProgressError::Json(_))));
    }

    #[test]
    fn test_unknown_language_is_rejected_without_mutation() {
        let mut saved = session_with_progress().export_progress();
        saved.language_id = LanguageId::new(42);

        let mut s = Session::new(data::find(LanguageId::new(2)).unwrap());
        let before_id = s.language().id;
        let result = s.import_progress(&saved);
        assert!(matches!(result, Err(ProgressError::UnknownLanguage(42))));
        assert_eq!(s.language().id, before_id);
    }

    #[test]
    fn test_out_of_range_cursor_is_rejected_without_mutation() {
        let mut saved = session_with_progress().export_progress();
        saved.cfg.current = 999;

        let mut s = session_with_progress();
        let result = s.import_progress(&saved);
        assert!(matches!(result, Err(ProgressError::CursorOutOfRange { mode: Mode::Cfg, .. })));
        assert_eq!(s.track(Mode::Pda).current.index(), 3);
    }

    #[test]
    fn test_out_of_range_completed_is_rejected() {
        let mut saved = session_with_progress().export_progress();
        saved.pda.completed.push(999);

        let mut s = session_with_progress();
        let result = s.import_progress(&saved);
        assert!(matches!(result, Err(ProgressError::CompletedOutOfRange { mode: Mode::Pda, index: 999, .. })));
    }

    #[test]
    fn test_persisted_field_names() {
        let json = session_with_progress().export_progress().to_json().unwrap();
        for field in ["language_id", "mode", "pda", "cfg", "completed", "current", "timestamp"] {
            assert!(json.contains(field), "missing field `{}` in {}", field, json);
        }
        assert!(json.contains("\"cfg\""));
    }
}

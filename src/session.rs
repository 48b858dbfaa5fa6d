//! The interaction engine.
//!
//! A [`Session`] walks a user through the two scripted tracks of one
//! [`Language`]: the PDA simulation and the CFG derivation. All it ever does
//! is advance or retreat a cursor through the authored step lists and compare
//! submitted choice indices against each step's stored answer; there is no
//! transition execution or production application happening here.
//!
//! Cursor semantics:
//! - Each track's cursor ranges over `[0, steps.len()]`; the one-past-the-end
//!   position means the track is complete.
//! - A correct answer advances the cursor by one and records the completed
//!   index. An incorrect answer changes nothing.
//! - Stepping back un-completes the step the cursor returns to.

use log::debug;

use crate::language::Language;
use crate::step::{Feedback, Scripted};
use crate::types::{Mode, StepIndex};

/// Cursor and completion record for one track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackProgress {
    /// Indices of completed steps, in completion order.
    pub completed: Vec<usize>,
    /// The current cursor position.
    pub current: StepIndex,
}

impl TrackProgress {
    fn new() -> Self {
        TrackProgress {
            completed: Vec::new(),
            current: StepIndex::new(0),
        }
    }
}

/// Snapshot of the PDA configuration at the current step, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PdaView {
    /// Current state id.
    pub state: String,
    /// Remaining input.
    pub input: String,
    /// Stack contents, top of the stack first.
    pub stack: Vec<char>,
    pub description: String,
}

/// Snapshot of the CFG derivation at the current step, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfgView {
    pub current: String,
    pub target: String,
    pub description: String,
}

/// Per-track completion numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackStats {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Overall progress report for the selected language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub language: String,
    pub test_string: String,
    pub total_steps: usize,
    pub completed_steps: usize,
    pub progress: u32,
    pub pda: TrackStats,
    pub cfg: TrackStats,
    pub is_complete: bool,
}

/// One interactive walkthrough over a single language example.
#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    mode: Mode,
    pda: TrackProgress,
    cfg: TrackProgress,
}

impl Session {
    /// Starts a fresh session on the given language, in PDA mode.
    pub fn new(language: Language) -> Self {
        debug!("session: starting on {} ({})", language.id, language.name);
        Session {
            language,
            mode: Mode::Pda,
            pda: TrackProgress::new(),
            cfg: TrackProgress::new(),
        }
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Switches to the other track and returns the new mode.
    pub fn switch_mode(&mut self) -> Mode {
        self.mode = self.mode.other();
        debug!("session: switched to {} mode", self.mode);
        self.mode
    }

    /// Replaces the language and resets all progress.
    pub fn set_language(&mut self, language: Language) {
        debug!("session: switching language to {} ({})", language.id, language.name);
        self.language = language;
        self.reset();
    }

    /// Resets both cursors and completion lists; mode returns to PDA.
    pub fn reset(&mut self) {
        debug!("session: reset");
        self.pda = TrackProgress::new();
        self.cfg = TrackProgress::new();
        self.mode = Mode::Pda;
    }

    /// The progress record of the given track.
    pub fn track(&self, mode: Mode) -> &TrackProgress {
        match mode {
            Mode::Pda => &self.pda,
            Mode::Cfg => &self.cfg,
        }
    }

    pub(crate) fn track_mut(&mut self, mode: Mode) -> &mut TrackProgress {
        match mode {
            Mode::Pda => &mut self.pda,
            Mode::Cfg => &mut self.cfg,
        }
    }

    /// The step at the active cursor, or `None` once the track is complete.
    pub fn current_step(&self) -> Option<&dyn Scripted> {
        let cursor = self.track(self.mode).current;
        self.language.scripted(self.mode, cursor.index())
    }

    /// The current step's choice list; empty when the track is complete.
    pub fn choices(&self) -> &[String] {
        self.current_step().map(|s| s.choices()).unwrap_or(&[])
    }

    /// The current step's hint.
    pub fn hint(&self) -> Option<&str> {
        self.current_step().map(|s| s.hint())
    }

    /// Answers the current step with the given choice index.
    ///
    /// Returns `None` when the track is already complete. On a correct
    /// answer the cursor advances and the step index is recorded as
    /// completed; on an incorrect answer the session is unchanged.
    pub fn answer(&mut self, choice: usize) -> Option<Feedback> {
        let mode = self.mode;
        let cursor = self.track(mode).current;
        let feedback = {
            let step = self.language.scripted(mode, cursor.index())?;
            Feedback::for_answer(step, choice)
        };
        debug!(
            "session: answer {} at {} {} -> {}",
            choice,
            mode,
            cursor,
            if feedback.correct { "correct" } else { "incorrect" }
        );
        if feedback.correct {
            let track = self.track_mut(mode);
            track.completed.push(cursor.index());
            track.current = cursor.next();
        }
        Some(feedback)
    }

    /// Moves the active cursor back one step, un-completing the step it
    /// returns to. A no-op at the start of a track.
    pub fn step_back(&mut self) {
        let mode = self.mode;
        let track = self.track_mut(mode);
        if let Some(prev) = track.current.prev() {
            track.current = prev;
            track.completed.retain(|&i| i != prev.index());
            debug!("session: stepped back to {} {}", mode, prev);
        }
    }

    /// If the active track is exhausted and the other one is not, switches
    /// to the other track and returns the new mode.
    pub fn auto_switch(&mut self) -> Option<Mode> {
        if self.current_step().is_some() {
            return None;
        }
        let other = self.mode.other();
        let cursor = self.track(other).current;
        if self.language.scripted(other, cursor.index()).is_some() {
            self.mode = other;
            debug!("session: auto-switched to {} mode", other);
            Some(other)
        } else {
            None
        }
    }

    /// Whether the given track's cursor has passed its last step.
    pub fn is_track_complete(&self, mode: Mode) -> bool {
        self.track(mode).current.index() >= self.language.track_len(mode)
    }

    /// Whether both tracks are complete.
    pub fn is_complete(&self) -> bool {
        self.is_track_complete(Mode::Pda) && self.is_track_complete(Mode::Cfg)
    }

    /// Completed steps over total steps across both tracks, as a rounded
    /// percentage.
    pub fn progress_percent(&self) -> u32 {
        let total = self.language.track_len(Mode::Pda) + self.language.track_len(Mode::Cfg);
        let completed = self.pda.completed.len() + self.cfg.completed.len();
        if total == 0 {
            return 0;
        }
        ((completed as f64 / total as f64) * 100.0).round() as u32
    }

    /// The completed steps of a track, for step-list rendering.
    pub fn completed_steps(&self, mode: Mode) -> Vec<&dyn Scripted> {
        self.track(mode)
            .completed
            .iter()
            .filter_map(|&i| self.language.scripted(mode, i))
            .collect()
    }

    /// The PDA configuration at the current step. `None` unless the session
    /// is in PDA mode with steps remaining.
    pub fn pda_view(&self) -> Option<PdaView> {
        if self.mode != Mode::Pda {
            return None;
        }
        let cursor = self.track(Mode::Pda).current;
        let step = self.language.pda_steps.get(cursor.index())?;
        Some(PdaView {
            state: step.state.clone(),
            input: step.remaining_input.clone(),
            stack: step.stack_top_first(),
            description: step.description.clone(),
        })
    }

    /// The derivation snapshot at the current step. `None` unless the
    /// session is in CFG mode with steps remaining.
    pub fn cfg_view(&self) -> Option<CfgView> {
        if self.mode != Mode::Cfg {
            return None;
        }
        let cursor = self.track(Mode::Cfg).current;
        let step = self.language.cfg_steps.get(cursor.index())?;
        Some(CfgView {
            current: step.current.clone(),
            target: step.target.clone(),
            description: step.description.clone(),
        })
    }

    /// Completion numbers for one track.
    pub fn stats(&self, mode: Mode) -> TrackStats {
        let total = self.language.track_len(mode);
        let completed = self.track(mode).completed.len();
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        TrackStats { completed, total, percentage }
    }

    /// Builds the overall progress report.
    pub fn summary(&self) -> Summary {
        let pda = self.stats(Mode::Pda);
        let cfg = self.stats(Mode::Cfg);
        Summary {
            language: self.language.name.clone(),
            test_string: self.language.test_string.clone(),
            total_steps: pda.total + cfg.total,
            completed_steps: pda.completed + cfg.completed,
            progress: self.progress_percent(),
            pda,
            cfg,
            is_complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::types::LanguageId;

    use test_log::test;

    fn session() -> Session {
        Session::new(data::find(LanguageId::new(1)).unwrap())
    }

    /// Answers the current step correctly, panicking if there is none.
    fn answer_correctly(session: &mut Session) {
        let correct = session.current_step().unwrap().correct_answer().unwrap();
        let feedback = session.answer(correct).unwrap();
        assert!(feedback.correct);
    }

    #[test]
    fn test_correct_answer_advances_and_records() {
        let mut s = session();
        assert_eq!(s.track(Mode::Pda).current.index(), 0);

        let feedback = s.answer(0).unwrap();
        assert!(feedback.correct);
        assert_eq!(s.track(Mode::Pda).current.index(), 1);
        assert_eq!(s.track(Mode::Pda).completed, vec![0]);
    }

    #[test]
    fn test_incorrect_answer_changes_nothing() {
        let mut s = session();

        let feedback = s.answer(3).unwrap();
        assert!(!feedback.correct);
        assert!(feedback.message.starts_with("Incorrect."));
        assert_eq!(s.track(Mode::Pda).current.index(), 0);
        assert!(s.track(Mode::Pda).completed.is_empty());
    }

    #[test]
    fn test_track_completion() {
        let mut s = session();
        let total = s.language().pda_steps.len();
        for _ in 0..total {
            answer_correctly(&mut s);
        }

        assert!(s.is_track_complete(Mode::Pda));
        assert!(s.current_step().is_none());
        assert!(s.choices().is_empty());
        assert!(s.answer(0).is_none());
        assert!(!s.is_complete());
    }

    #[test]
    fn test_auto_switch_after_exhausting_track() {
        let mut s = session();
        assert_eq!(s.auto_switch(), None); // steps remain, no switch

        let total = s.language().pda_steps.len();
        for _ in 0..total {
            answer_correctly(&mut s);
        }
        assert_eq!(s.auto_switch(), Some(Mode::Cfg));
        assert_eq!(s.mode(), Mode::Cfg);
        assert!(s.current_step().is_some());
    }

    #[test]
    fn test_full_completion() {
        let mut s = session();
        while let Some(step) = s.current_step() {
            match step.correct_answer() {
                Some(correct) => {
                    s.answer(correct);
                }
                // Terminal step: nothing left to answer.
                None => break,
            }
            s.auto_switch();
        }
        // The a^n b^n example's CFG track ends in a terminal step, so the
        // session never reaches full completion through answers alone.
        assert!(s.is_track_complete(Mode::Pda));
        assert!(!s.is_complete());
    }

    #[test]
    fn test_step_back_uncompletes() {
        let mut s = session();
        answer_correctly(&mut s);
        answer_correctly(&mut s);
        assert_eq!(s.track(Mode::Pda).completed, vec![0, 1]);

        s.step_back();
        assert_eq!(s.track(Mode::Pda).current.index(), 1);
        assert_eq!(s.track(Mode::Pda).completed, vec![0]);
    }

    #[test]
    fn test_step_back_at_start_is_noop() {
        let mut s = session();
        s.step_back();
        assert_eq!(s.track(Mode::Pda).current.index(), 0);
        assert!(s.track(Mode::Pda).completed.is_empty());
    }

    #[test]
    fn test_set_language_resets_everything() {
        let mut s = session();
        answer_correctly(&mut s);
        s.switch_mode();

        s.set_language(data::find(LanguageId::new(2)).unwrap());
        assert_eq!(s.mode(), Mode::Pda);
        assert_eq!(s.track(Mode::Pda).current.index(), 0);
        assert_eq!(s.track(Mode::Cfg).current.index(), 0);
        assert!(s.track(Mode::Pda).completed.is_empty());
        assert_eq!(s.language().id, LanguageId::new(2));
    }

    #[test]
    fn test_progress_percent() {
        let mut s = session();
        assert_eq!(s.progress_percent(), 0);

        // Language 1 has 7 PDA + 5 CFG steps; 1/12 rounds to 8%.
        answer_correctly(&mut s);
        assert_eq!(s.progress_percent(), 8);
    }

    #[test]
    fn test_views_follow_mode() {
        let mut s = session();
        let pda = s.pda_view().unwrap();
        assert_eq!(pda.state, "q0");
        assert_eq!(pda.input, "aaabbb");
        assert_eq!(pda.stack, vec!['Z']);
        assert!(s.cfg_view().is_none());

        s.switch_mode();
        let cfg = s.cfg_view().unwrap();
        assert_eq!(cfg.current, "S");
        assert_eq!(cfg.target, "aaabbb");
        assert!(s.pda_view().is_none());
    }

    #[test]
    fn test_stack_view_is_top_first() {
        let mut s = session();
        for _ in 0..3 {
            answer_correctly(&mut s);
        }
        // After three a's the authored stack is Z A A A (bottom first).
        let view = s.pda_view().unwrap();
        assert_eq!(view.stack, vec!['A', 'A', 'A', 'Z']);
    }

    #[test]
    fn test_completed_steps_listing() {
        let mut s = session();
        answer_correctly(&mut s);
        answer_correctly(&mut s);

        let done = s.completed_steps(Mode::Pda);
        assert_eq!(done.len(), 2);
        assert_eq!(done[0].number(), 1);
        assert_eq!(done[1].number(), 2);
        assert!(s.completed_steps(Mode::Cfg).is_empty());
    }

    #[test]
    fn test_summary() {
        let mut s = session();
        answer_correctly(&mut s);
        let summary = s.summary();
        assert_eq!(summary.total_steps, 12);
        assert_eq!(summary.completed_steps, 1);
        assert_eq!(summary.pda.completed, 1);
        assert_eq!(summary.pda.total, 7);
        assert_eq!(summary.cfg.completed, 0);
        assert!(!summary.is_complete);
    }

    #[test]
    fn test_hint() {
        let s = session();
        assert_eq!(s.hint(), Some("We need to process the first 'a' by pushing it onto the stack"));
    }
}

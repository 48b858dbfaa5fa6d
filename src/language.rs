//! A language example bundles everything one demo needs: the PDA and CFG
//! definitions, a test string, and the two authored walkthrough scripts.

use crate::cfg::Cfg;
use crate::pda::Pda;
use crate::step::{CfgStep, PdaStep, Scripted};
use crate::types::{LanguageId, Mode};

/// One hardcoded language example.
#[derive(Debug, Clone)]
pub struct Language {
    pub id: LanguageId,
    /// Display name, e.g. `"L = {aⁿbⁿ | n ≥ 0}"`.
    pub name: String,
    pub description: String,
    /// The input string both walkthroughs process.
    pub test_string: String,
    pub pda: Pda,
    pub cfg: Cfg,
    pub pda_steps: Vec<PdaStep>,
    pub cfg_steps: Vec<CfgStep>,
}

impl Language {
    /// Number of scripted steps in the given track.
    pub fn track_len(&self, mode: Mode) -> usize {
        match mode {
            Mode::Pda => self.pda_steps.len(),
            Mode::Cfg => self.cfg_steps.len(),
        }
    }

    /// The step at `index` in the given track, seen through the common
    /// question/answer interface.
    pub fn scripted(&self, mode: Mode, index: usize) -> Option<&dyn Scripted> {
        match mode {
            Mode::Pda => self.pda_steps.get(index).map(|s| s as &dyn Scripted),
            Mode::Cfg => self.cfg_steps.get(index).map(|s| s as &dyn Scripted),
        }
    }
}

//! # pda-cfg-rs: interactive PDA–CFG equivalence demonstrations
//!
//! **`pda-cfg-rs`** is a small teaching library that walks a user step by step
//! through the equivalence between **Pushdown Automata (PDAs)** and
//! **Context-Free Grammars (CFGs)**, one hardcoded example language at a time.
//!
//! ## What it is (and is not)
//!
//! Every example ships with a PDA definition, a CFG definition, and two
//! hand-authored walkthrough scripts: one tracing an accepting PDA run, one
//! tracing a derivation of the same test string. The library advances a
//! cursor through those scripts and checks multiple-choice answers against
//! the authored correct index. There is **no** general PDA simulator and
//! **no** CFG parser here --- the definitions exist to be drawn and
//! cross-checked, not executed.
//!
//! ## Quick Start
//!
//! ```rust
//! use pda_cfg_rs::data;
//! use pda_cfg_rs::session::Session;
//! use pda_cfg_rs::step::Scripted;
//! use pda_cfg_rs::types::{LanguageId, Mode};
//!
//! // 1. Pick a language example (1 = a^n b^n)
//! let language = data::find(LanguageId::new(1)).unwrap();
//! let mut session = Session::new(language);
//!
//! // 2. Inspect the current step and its choices
//! let step = session.current_step().unwrap();
//! assert_eq!(step.number(), 1);
//! assert_eq!(step.choices().len(), 4);
//!
//! // 3. Answer; a correct choice advances the cursor
//! let feedback = session.answer(0).unwrap();
//! assert!(feedback.correct);
//! assert_eq!(session.track(Mode::Pda).current.index(), 1);
//! ```
//!
//! ## Core Components
//!
//! - **[`data`]**: the five authored language examples.
//! - **[`session`]**: the interaction engine (cursor, answers, progress).
//! - **[`dot`]**: PDA state diagrams for Graphviz.
//! - **[`progress`]**: JSON persistence of session state.
//! - **[`render`]**: plain-text formatting for terminal frontends.

pub mod cfg;
pub mod data;
pub mod dot;
pub mod language;
pub mod pda;
pub mod progress;
pub mod render;
pub mod session;
pub mod step;
pub mod types;

/// The epsilon symbol, used for empty input, empty stack effect, and empty
/// production right sides alike.
pub const EPSILON: char = 'ε';

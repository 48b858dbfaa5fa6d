//! Pushdown automaton definitions.
//!
//! A [`Pda`] here is a drawing and lookup table, not an execution engine:
//! the interactive walkthroughs in [`crate::step`] carry pre-recorded
//! configurations, and the definition exists so the state diagram can be
//! rendered ([`crate::dot`]) and so scripted choices can be checked against
//! the declared transition relation.
//!
//! The epsilon symbol is the literal [`EPSILON`] character; an empty
//! `stack_push` string means "push nothing".

use crate::EPSILON;

/// Errors found while validating a PDA definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdaError {
    #[error("start state `{0}` is not in the state set")]
    UnknownStartState(String),
    #[error("duplicate state id `{0}`")]
    DuplicateState(String),
    #[error("accept state `{0}` is not in the state set")]
    UnknownAcceptState(String),
    #[error("transition `{label}` references unknown state `{state}`")]
    UnknownState { state: String, label: String },
    #[error("transition `{label}` reads `{symbol}` which is not in the input alphabet")]
    UnknownInputSymbol { symbol: char, label: String },
    #[error("transition `{label}` uses stack symbol `{symbol}` which is not in the stack alphabet")]
    UnknownStackSymbol { symbol: char, label: String },
}

/// A single automaton state together with its diagram placement.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Internal identifier, e.g. `"q0"`.
    pub id: String,
    /// Display label, e.g. `"q₀"`.
    pub label: String,
    /// Horizontal diagram position, in the original canvas coordinates.
    pub x: f64,
    /// Vertical diagram position.
    pub y: f64,
    pub is_start: bool,
    pub is_accept: bool,
}

impl State {
    /// Creates a plain (non-start, non-accept) state.
    pub fn new(id: &str, label: &str, x: f64, y: f64) -> Self {
        State {
            id: id.to_string(),
            label: label.to_string(),
            x,
            y,
            is_start: false,
            is_accept: false,
        }
    }

    /// Marks this state as the start state.
    pub fn start(mut self) -> Self {
        self.is_start = true;
        self
    }

    /// Marks this state as an accept state.
    pub fn accept(mut self) -> Self {
        self.is_accept = true;
        self
    }
}

/// A PDA transition: consume `input` (or ε), pop `stack_pop`, push
/// `stack_push` (top of stack first), and move from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub input: char,
    pub stack_pop: char,
    /// Symbols pushed onto the stack, topmost first. Empty means pop-only.
    pub stack_push: String,
    /// Display label, e.g. `"a, Z → AZ"`.
    pub label: String,
}

impl Transition {
    /// Creates a transition with the conventional `"input, pop → push"` label.
    pub fn new(from: &str, to: &str, input: char, stack_pop: char, stack_push: &str) -> Self {
        let push_display = if stack_push.is_empty() { EPSILON.to_string() } else { stack_push.to_string() };
        Transition {
            from: from.to_string(),
            to: to.to_string(),
            input,
            stack_pop,
            stack_push: stack_push.to_string(),
            label: format!("{}, {} → {}", input, stack_pop, push_display),
        }
    }

    /// Replaces the derived label with an annotated one
    /// (used by examples that explain nondeterministic branches inline).
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Whether this transition consumes no input.
    pub fn is_epsilon(&self) -> bool {
        self.input == EPSILON
    }

    /// Whether this transition loops on a single state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// A pushdown automaton definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Pda {
    pub states: Vec<State>,
    pub alphabet: Vec<char>,
    pub stack_alphabet: Vec<char>,
    pub start_state: String,
    pub accept_states: Vec<String>,
    pub transitions: Vec<Transition>,
}

impl Pda {
    /// Looks up a state by id.
    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Returns the start state, if the definition declares a valid one.
    pub fn start(&self) -> Option<&State> {
        self.state(&self.start_state)
    }

    /// Checks whether `id` names an accept state.
    pub fn is_accept(&self, id: &str) -> bool {
        self.accept_states.iter().any(|s| s == id)
    }

    /// Iterates over all transitions leaving the given state.
    pub fn transitions_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.from == id)
    }

    /// Checks whether the declared transition relation contains a rule
    /// matching the given endpoints and consumed symbols.
    ///
    /// The pushed string is deliberately not part of the match: a scripted
    /// choice is considered declared as soon as source, input, popped symbol,
    /// and target agree.
    pub fn has_transition(&self, from: &str, input: char, stack_pop: char, to: &str) -> bool {
        self.transitions
            .iter()
            .any(|t| t.from == from && t.input == input && t.stack_pop == stack_pop && t.to == to)
    }

    /// Validates the structural consistency of the definition.
    ///
    /// The scripted steps shipped alongside a definition are trusted as
    /// authored, but the definition itself is checkable: state ids must be
    /// unique, the start and accept states must exist, and every transition
    /// must stay within the declared state set and alphabets.
    pub fn validate(&self) -> Result<(), PdaError> {
        for (i, s) in self.states.iter().enumerate() {
            if self.states[..i].iter().any(|other| other.id == s.id) {
                return Err(PdaError::DuplicateState(s.id.clone()));
            }
        }

        if self.state(&self.start_state).is_none() {
            return Err(PdaError::UnknownStartState(self.start_state.clone()));
        }
        for id in &self.accept_states {
            if self.state(id).is_none() {
                return Err(PdaError::UnknownAcceptState(id.clone()));
            }
        }

        for t in &self.transitions {
            for endpoint in [&t.from, &t.to] {
                if self.state(endpoint).is_none() {
                    return Err(PdaError::UnknownState {
                        state: endpoint.clone(),
                        label: t.label.clone(),
                    });
                }
            }
            if t.input != EPSILON && !self.alphabet.contains(&t.input) {
                return Err(PdaError::UnknownInputSymbol { symbol: t.input, label: t.label.clone() });
            }
            if !self.stack_alphabet.contains(&t.stack_pop) {
                return Err(PdaError::UnknownStackSymbol { symbol: t.stack_pop, label: t.label.clone() });
            }
            for c in t.stack_push.chars() {
                if !self.stack_alphabet.contains(&c) {
                    return Err(PdaError::UnknownStackSymbol { symbol: c, label: t.label.clone() });
                }
            }
        }

        Ok(())
    }
}

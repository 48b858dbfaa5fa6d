//! Hand-authored walkthrough steps.
//!
//! Every step is a pre-recorded snapshot plus a fixed multiple-choice
//! question. Nothing here is derived from the PDA or CFG definitions at
//! runtime; correctness of the authored `correct_answer` indices is the
//! author's responsibility (the shipped tables are swept by the data tests).

/// Common interface over the two step kinds, used by the session engine
/// wherever only the question/answer surface matters.
pub trait Scripted {
    /// 1-based display number of the step.
    fn number(&self) -> usize;
    /// Short description of the configuration, e.g. "Initial configuration".
    fn description(&self) -> &str;
    /// The fixed multiple-choice list. Empty for terminal steps.
    fn choices(&self) -> &[String];
    /// Index of the correct choice, or `None` for terminal steps.
    fn correct_answer(&self) -> Option<usize>;
    fn explanation(&self) -> &str;
    fn hint(&self) -> &str;
}

/// A scripted PDA simulation step: one snapshot of the machine
/// configuration plus the transition question for reaching the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct PdaStep {
    pub number: usize,
    /// State id the machine is in at this snapshot.
    pub state: String,
    /// Input not yet consumed.
    pub remaining_input: String,
    /// Stack contents, bottom of the stack first.
    pub stack: Vec<char>,
    pub description: String,
    pub choices: Vec<String>,
    pub correct_answer: Option<usize>,
    pub explanation: String,
    pub hint: String,
}

impl PdaStep {
    /// Creates a step snapshot; `stack` lists symbols bottom-first.
    pub fn new(number: usize, state: &str, remaining_input: &str, stack: &str, description: &str) -> Self {
        PdaStep {
            number,
            state: state.to_string(),
            remaining_input: remaining_input.to_string(),
            stack: stack.chars().collect(),
            description: description.to_string(),
            choices: Vec::new(),
            correct_answer: None,
            explanation: String::new(),
            hint: String::new(),
        }
    }

    /// Sets the choice list and the index of the correct entry.
    pub fn ask<const N: usize>(mut self, choices: [&str; N], correct: usize) -> Self {
        assert!(correct < N, "correct answer index out of bounds");
        self.choices = choices.iter().map(|s| s.to_string()).collect();
        self.correct_answer = Some(correct);
        self
    }

    pub fn explain(mut self, explanation: &str) -> Self {
        self.explanation = explanation.to_string();
        self
    }

    pub fn hint(mut self, hint: &str) -> Self {
        self.hint = hint.to_string();
        self
    }

    /// Stack contents top-first, the order in which stacks are displayed.
    pub fn stack_top_first(&self) -> Vec<char> {
        self.stack.iter().rev().copied().collect()
    }
}

impl Scripted for PdaStep {
    fn number(&self) -> usize {
        self.number
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn choices(&self) -> &[String] {
        &self.choices
    }
    fn correct_answer(&self) -> Option<usize> {
        self.correct_answer
    }
    fn explanation(&self) -> &str {
        &self.explanation
    }
    fn hint(&self) -> &str {
        &self.hint
    }
}

/// A scripted CFG derivation step: the current sentential form plus the
/// production question for reaching the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct CfgStep {
    pub number: usize,
    /// The sentential form derived so far.
    pub current: String,
    /// The terminal string being derived.
    pub target: String,
    pub description: String,
    pub choices: Vec<String>,
    pub correct_answer: Option<usize>,
    pub explanation: String,
    pub hint: String,
}

impl CfgStep {
    pub fn new(number: usize, current: &str, target: &str, description: &str) -> Self {
        CfgStep {
            number,
            current: current.to_string(),
            target: target.to_string(),
            description: description.to_string(),
            choices: Vec::new(),
            correct_answer: None,
            explanation: String::new(),
            hint: String::new(),
        }
    }

    /// Sets the choice list and the index of the correct entry.
    pub fn ask<const N: usize>(mut self, choices: [&str; N], correct: usize) -> Self {
        assert!(correct < N, "correct answer index out of bounds");
        self.choices = choices.iter().map(|s| s.to_string()).collect();
        self.correct_answer = Some(correct);
        self
    }

    pub fn explain(mut self, explanation: &str) -> Self {
        self.explanation = explanation.to_string();
        self
    }

    pub fn hint(mut self, hint: &str) -> Self {
        self.hint = hint.to_string();
        self
    }

    /// Whether the derivation has reached its target.
    pub fn is_terminal(&self) -> bool {
        self.current == self.target && self.choices.is_empty()
    }
}

impl Scripted for CfgStep {
    fn number(&self) -> usize {
        self.number
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn choices(&self) -> &[String] {
        &self.choices
    }
    fn correct_answer(&self) -> Option<usize> {
        self.correct_answer
    }
    fn explanation(&self) -> &str {
        &self.explanation
    }
    fn hint(&self) -> &str {
        &self.hint
    }
}

/// Outcome of answering the current step's question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    /// User-facing message: `"Correct! {explanation}"` or `"Incorrect. {hint}"`.
    pub message: String,
    pub explanation: String,
    pub hint: String,
}

impl Feedback {
    /// Builds the feedback for answering `step` with the given choice index.
    pub fn for_answer(step: &dyn Scripted, choice: usize) -> Self {
        let correct = step.correct_answer() == Some(choice);
        let message = if correct {
            format!("Correct! {}", step.explanation())
        } else {
            format!("Incorrect. {}", step.hint())
        };
        Feedback {
            correct,
            message,
            explanation: step.explanation().to_string(),
            hint: step.hint().to_string(),
        }
    }
}

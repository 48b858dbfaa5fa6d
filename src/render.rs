//! Plain-text rendering of stacks, configurations, derivations, and step
//! lists, used by the demo programs.

use std::fmt::Write as _;

use crate::cfg::Cfg;
use crate::step::{PdaStep, Scripted};
use crate::EPSILON;

/// Formats stack contents, top of the stack first: `"[ A, Z ]"`.
pub fn format_stack(stack_top_first: &[char]) -> String {
    if stack_top_first.is_empty() {
        return "[ empty ]".to_string();
    }
    let symbols: Vec<String> = stack_top_first.iter().map(|c| c.to_string()).collect();
    format!("[ {} ]", symbols.join(", "))
}

/// Formats an input string for display, quoted: `"abba"`, `""` when empty.
pub fn format_input(input: &str) -> String {
    format!("\"{}\"", input)
}

/// Formats a sentential form, bracketing nonterminals for emphasis:
/// `"aa[S]bb"`. The empty string renders as ε.
pub fn format_derivation(cfg: &Cfg, current: &str) -> String {
    if current.is_empty() {
        return EPSILON.to_string();
    }
    let mut out = String::with_capacity(current.len());
    for c in current.chars() {
        if cfg.is_nonterminal(c) {
            out.push('[');
            out.push(c);
            out.push(']');
        } else {
            out.push(c);
        }
    }
    out
}

/// Formats a PDA step as the conventional configuration triple
/// `(state, remaining input, stack)`, with the stack written top-first and
/// ε standing in for the empty input.
pub fn format_configuration(step: &PdaStep) -> String {
    let input = if step.remaining_input.is_empty() {
        EPSILON.to_string()
    } else {
        step.remaining_input.clone()
    };
    let stack: String = step.stack_top_first().into_iter().collect();
    format!("({}, {}, {})", step.state, input, stack)
}

/// Renders the grammar's production table, one numbered rule per line.
pub fn production_table(cfg: &Cfg) -> String {
    let mut out = String::new();
    for p in &cfg.productions {
        let _ = writeln!(out, "{}: {}", p.id, p);
    }
    out
}

/// Renders the step list for one track: completed steps first, then the
/// current one.
pub fn step_list(completed: &[&dyn Scripted], current: Option<&dyn Scripted>) -> String {
    let mut out = String::new();
    for step in completed {
        let _ = writeln!(out, "  [x] {}. {}", step.number(), step.description());
    }
    if let Some(step) = current {
        let _ = writeln!(out, "  [>] {}. {}", step.number(), step.description());
    }
    if out.is_empty() {
        out.push_str("  No steps completed yet\n");
    }
    out
}

/// Renders the current step's choice list, numbered from 1.
pub fn choice_list(choices: &[String]) -> String {
    let mut out = String::new();
    for (i, choice) in choices.iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", i + 1, choice);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::Production;
    use crate::step::CfgStep;

    fn anbn_grammar() -> Cfg {
        Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S'],
            terminals: vec!['a', 'b'],
            productions: vec![Production::new('S', "aSb", "p1"), Production::new('S', "ε", "p2")],
        }
    }

    #[test]
    fn test_format_stack() {
        assert_eq!(format_stack(&['A', 'A', 'Z']), "[ A, A, Z ]");
        assert_eq!(format_stack(&['Z']), "[ Z ]");
        assert_eq!(format_stack(&[]), "[ empty ]");
    }

    #[test]
    fn test_format_input() {
        assert_eq!(format_input("abba"), "\"abba\"");
        assert_eq!(format_input(""), "\"\"");
    }

    #[test]
    fn test_format_derivation() {
        let cfg = anbn_grammar();
        assert_eq!(format_derivation(&cfg, "aaSbb"), "aa[S]bb");
        assert_eq!(format_derivation(&cfg, "aabb"), "aabb");
        assert_eq!(format_derivation(&cfg, ""), "ε");
    }

    #[test]
    fn test_format_configuration() {
        let step = PdaStep::new(4, "q0", "bbb", "ZAAA", "After reading all a's");
        assert_eq!(format_configuration(&step), "(q0, bbb, AAAZ)");

        let done = PdaStep::new(7, "q1", "", "Z", "After reading all input");
        assert_eq!(format_configuration(&done), "(q1, ε, Z)");
    }

    #[test]
    fn test_production_table() {
        let table = production_table(&anbn_grammar());
        assert_eq!(table, "p1: S → aSb\np2: S → ε\n");
    }

    #[test]
    fn test_step_list() {
        let done = CfgStep::new(1, "S", "ab", "Start with start symbol");
        let current = CfgStep::new(2, "aSb", "ab", "After first production");
        let completed: Vec<&dyn Scripted> = vec![&done];

        let list = step_list(&completed, Some(&current));
        assert!(list.contains("[x] 1. Start with start symbol"));
        assert!(list.contains("[>] 2. After first production"));

        assert_eq!(step_list(&[], None), "  No steps completed yet\n");
    }

    #[test]
    fn test_choice_list() {
        let choices = vec!["S → aSb".to_string(), "S → ε".to_string()];
        let list = choice_list(&choices);
        assert_eq!(list, "  1) S → aSb\n  2) S → ε\n");
    }
}

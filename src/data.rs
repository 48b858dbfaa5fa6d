//! The authored language examples.
//!
//! Everything in this module is hand-written demo data: the PDA and CFG
//! definitions, and the per-step walkthrough scripts with their
//! multiple-choice questions. The step scripts are snapshots, not the output
//! of any simulator; the data tests sweep them for internal consistency.

use crate::cfg::{Cfg, Production};
use crate::language::Language;
use crate::pda::{Pda, State, Transition};
use crate::step::{CfgStep, PdaStep};
use crate::types::LanguageId;
use crate::EPSILON;

/// Returns all hardcoded language examples, in display order.
pub fn languages() -> Vec<Language> {
    vec![anbn(), palindromes(), anbmcn(), balanced_parens(), union_of_two()]
}

/// Looks up a language example by id.
pub fn find(id: LanguageId) -> Option<Language> {
    languages().into_iter().find(|lang| lang.id == id)
}

/// Returns the example after `id` in display order, wrapping around at the
/// end of the list.
pub fn next_after(id: LanguageId) -> Language {
    let all = languages();
    let index = all.iter().position(|lang| lang.id == id).unwrap_or(all.len() - 1);
    let next = (index + 1) % all.len();
    all.into_iter().nth(next).unwrap()
}

/// L = {aⁿbⁿ | n ≥ 0}: equal numbers of a's followed by b's.
fn anbn() -> Language {
    Language {
        id: LanguageId::new(1),
        name: "L = {aⁿbⁿ | n ≥ 0}".to_string(),
        description: "Language of equal numbers of a's followed by b's".to_string(),
        test_string: "aaabbb".to_string(),
        pda: Pda {
            states: vec![
                State::new("q0", "q₀", 150.0, 150.0).start(),
                State::new("q1", "q₁", 350.0, 150.0),
                State::new("q2", "q₂", 550.0, 150.0).accept(),
            ],
            alphabet: vec!['a', 'b'],
            stack_alphabet: vec!['Z', 'A'],
            start_state: "q0".to_string(),
            accept_states: vec!["q2".to_string()],
            transitions: vec![
                Transition::new("q0", "q0", 'a', 'Z', "AZ"),
                Transition::new("q0", "q0", 'a', 'A', "AA"),
                Transition::new("q0", "q1", 'b', 'A', ""),
                Transition::new("q1", "q1", 'b', 'A', ""),
                Transition::new("q1", "q2", EPSILON, 'Z', "Z"),
            ],
        },
        cfg: Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S'],
            terminals: vec!['a', 'b'],
            productions: vec![Production::new('S', "aSb", "p1"), Production::new('S', "ε", "p2")],
        },
        pda_steps: vec![
            PdaStep::new(1, "q0", "aaabbb", "Z", "Initial configuration")
                .ask(
                    [
                        "δ(q0, a, Z) = {(q0, AZ)}",
                        "δ(q0, b, Z) = {(q1, ε)}",
                        "δ(q0, ε, Z) = {(q2, Z)}",
                        "δ(q1, a, A) = {(q1, AA)}",
                    ],
                    0,
                )
                .explain("Read 'a' and push 'A' onto stack with Z at bottom")
                .hint("We need to process the first 'a' by pushing it onto the stack"),
            PdaStep::new(2, "q0", "aabbb", "ZA", "After reading first 'a'")
                .ask(
                    [
                        "δ(q0, a, A) = {(q0, AA)}",
                        "δ(q0, b, A) = {(q1, ε)}",
                        "δ(q0, ε, A) = {(q2, A)}",
                        "δ(q1, a, A) = {(q1, AA)}",
                    ],
                    0,
                )
                .explain("Read second 'a' and push another 'A' onto stack")
                .hint("Continue reading a's and pushing them onto the stack"),
            PdaStep::new(3, "q0", "abbb", "ZAA", "After reading second 'a'")
                .ask(
                    [
                        "δ(q0, a, A) = {(q0, AA)}",
                        "δ(q0, b, A) = {(q1, ε)}",
                        "δ(q0, ε, A) = {(q2, A)}",
                        "δ(q1, b, A) = {(q1, ε)}",
                    ],
                    0,
                )
                .explain("Read third 'a' and push another 'A' onto stack")
                .hint("We still have more a's to process"),
            PdaStep::new(4, "q0", "bbb", "ZAAA", "After reading all a's")
                .ask(
                    [
                        "δ(q0, a, A) = {(q0, AA)}",
                        "δ(q0, b, A) = {(q1, ε)}",
                        "δ(q0, ε, A) = {(q2, A)}",
                        "δ(q1, b, A) = {(q1, ε)}",
                    ],
                    1,
                )
                .explain("Read first 'b', transition to q1 and pop 'A' from stack")
                .hint("Now we switch to reading b's and popping from the stack"),
            PdaStep::new(5, "q1", "bb", "ZAA", "After reading first 'b'")
                .ask(
                    [
                        "δ(q0, b, A) = {(q1, ε)}",
                        "δ(q1, b, A) = {(q1, ε)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                        "δ(q1, a, A) = {(q1, AA)}",
                    ],
                    1,
                )
                .explain("Read second 'b' and pop another 'A' from stack")
                .hint("Continue matching b's with the A's on the stack"),
            PdaStep::new(6, "q1", "b", "ZA", "After reading second 'b'")
                .ask(
                    [
                        "δ(q0, b, A) = {(q1, ε)}",
                        "δ(q1, b, A) = {(q1, ε)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                        "δ(q1, a, A) = {(q1, AA)}",
                    ],
                    1,
                )
                .explain("Read third 'b' and pop the last 'A' from stack")
                .hint("Match the final b with the last A"),
            PdaStep::new(7, "q1", "", "Z", "After reading all input")
                .ask(
                    [
                        "δ(q0, b, A) = {(q1, ε)}",
                        "δ(q1, b, A) = {(q1, ε)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                        "δ(q1, a, A) = {(q1, AA)}",
                    ],
                    2,
                )
                .explain("Make epsilon transition to accept state q2 with Z on stack")
                .hint("With only Z left on stack and no input, transition to accept state"),
        ],
        cfg_steps: vec![
            CfgStep::new(1, "S", "aaabbb", "Start with start symbol")
                .ask(["S → aSb", "S → ε"], 0)
                .explain("Apply production S → aSb to generate outer a and b")
                .hint("We need to generate the structure for multiple a's and b's"),
            CfgStep::new(2, "aSb", "aaabbb", "After first production")
                .ask(["S → aSb", "S → ε"], 0)
                .explain("Apply S → aSb again to the middle S")
                .hint("We still need to generate more a's and b's"),
            CfgStep::new(3, "aaSbb", "aaabbb", "After second production")
                .ask(["S → aSb", "S → ε"], 0)
                .explain("Apply S → aSb once more to the middle S")
                .hint("We need one more layer of a's and b's"),
            CfgStep::new(4, "aaaSbbb", "aaabbb", "After third production")
                .ask(["S → aSb", "S → ε"], 1)
                .explain("Apply S → ε to eliminate the remaining S")
                .hint("No more a's and b's needed, remove the S"),
            CfgStep::new(5, "aaabbb", "aaabbb", "Final derivation complete")
                .explain("Derivation complete: aaabbb successfully generated")
                .hint("Success! The string has been fully derived"),
        ],
    }
}

/// L = {wwᴿ | w ∈ {a,b}*}: even-length palindromes.
fn palindromes() -> Language {
    Language {
        id: LanguageId::new(2),
        name: "L = {wwᴿ | w ∈ {a,b}*}".to_string(),
        description: "Language of palindromes (strings followed by their reverse)".to_string(),
        test_string: "abba".to_string(),
        pda: Pda {
            states: vec![
                State::new("q0", "q₀", 150.0, 150.0).start(),
                State::new("q1", "q₁", 350.0, 150.0),
                State::new("q2", "q₂", 550.0, 150.0).accept(),
            ],
            alphabet: vec!['a', 'b'],
            stack_alphabet: vec!['Z', 'a', 'b'],
            start_state: "q0".to_string(),
            accept_states: vec!["q2".to_string()],
            transitions: vec![
                Transition::new("q0", "q0", 'a', 'Z', "aZ"),
                Transition::new("q0", "q0", 'b', 'Z', "bZ"),
                Transition::new("q0", "q0", 'a', 'a', "aa"),
                Transition::new("q0", "q0", 'a', 'b', "ab"),
                Transition::new("q0", "q0", 'b', 'a', "ba"),
                Transition::new("q0", "q0", 'b', 'b', "bb"),
                Transition::new("q0", "q1", EPSILON, 'Z', "Z"),
                Transition::new("q0", "q1", EPSILON, 'a', "a"),
                Transition::new("q0", "q1", EPSILON, 'b', "b"),
                Transition::new("q1", "q1", 'a', 'a', ""),
                Transition::new("q1", "q1", 'b', 'b', ""),
                Transition::new("q1", "q2", EPSILON, 'Z', "Z"),
            ],
        },
        cfg: Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S'],
            terminals: vec!['a', 'b'],
            productions: vec![
                Production::new('S', "aSa", "p1"),
                Production::new('S', "bSb", "p2"),
                Production::new('S', "ε", "p3"),
            ],
        },
        pda_steps: vec![
            PdaStep::new(1, "q0", "abba", "Z", "Initial configuration")
                .ask(
                    [
                        "δ(q0, a, Z) = {(q0, aZ)}",
                        "δ(q0, b, Z) = {(q0, bZ)}",
                        "δ(q0, ε, Z) = {(q1, Z)}",
                        "δ(q1, a, a) = {(q1, ε)}",
                    ],
                    0,
                )
                .explain("Read 'a' and push it onto stack")
                .hint("Start by pushing the first symbol onto the stack"),
            PdaStep::new(2, "q0", "bba", "Za", "After reading first 'a'")
                .ask(
                    [
                        "δ(q0, b, a) = {(q0, ba)}",
                        "δ(q0, a, a) = {(q0, aa)}",
                        "δ(q0, ε, a) = {(q1, a)}",
                        "δ(q1, b, b) = {(q1, ε)}",
                    ],
                    0,
                )
                .explain("Read 'b' and push it onto stack")
                .hint("Continue pushing symbols for the first half"),
            PdaStep::new(3, "q0", "ba", "Zab", "After reading first half")
                .ask(
                    [
                        "δ(q0, b, b) = {(q0, bb)}",
                        "δ(q0, ε, b) = {(q1, b)}",
                        "δ(q1, b, b) = {(q1, ε)}",
                        "δ(q1, a, a) = {(q1, ε)}",
                    ],
                    1,
                )
                .explain("Guess middle of palindrome, transition to q1")
                .hint("Time to switch to matching mode"),
            PdaStep::new(4, "q1", "ba", "Zab", "Switched to matching mode")
                .ask(
                    [
                        "δ(q0, b, b) = {(q0, bb)}",
                        "δ(q1, b, b) = {(q1, ε)}",
                        "δ(q1, a, a) = {(q1, ε)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                    ],
                    1,
                )
                .explain("Read 'b' and match with top of stack")
                .hint("Match the input symbol with the stack top"),
            PdaStep::new(5, "q1", "a", "Za", "After matching first 'b'")
                .ask(
                    [
                        "δ(q1, b, b) = {(q1, ε)}",
                        "δ(q1, a, a) = {(q1, ε)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                        "δ(q0, a, a) = {(q0, aa)}",
                    ],
                    1,
                )
                .explain("Read 'a' and match with top of stack")
                .hint("Match the final input symbol"),
            PdaStep::new(6, "q1", "", "Z", "After matching all input")
                .ask(
                    [
                        "δ(q1, b, b) = {(q1, ε)}",
                        "δ(q1, a, a) = {(q1, ε)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                        "δ(q0, a, a) = {(q0, aa)}",
                    ],
                    2,
                )
                .explain("Transition to accept state with empty input and Z on stack")
                .hint("Accept the palindrome"),
        ],
        cfg_steps: vec![
            CfgStep::new(1, "S", "abba", "Start with start symbol")
                .ask(["S → aSa", "S → bSb", "S → ε"], 0)
                .explain("Apply S → aSa to generate outer a's")
                .hint("The palindrome starts and ends with 'a'"),
            CfgStep::new(2, "aSa", "abba", "After first production")
                .ask(["S → aSa", "S → bSb", "S → ε"], 1)
                .explain("Apply S → bSb to the middle S")
                .hint("The inner part has b's on both sides"),
            CfgStep::new(3, "abSba", "abba", "After second production")
                .ask(["S → aSa", "S → bSb", "S → ε"], 2)
                .explain("Apply S → ε to eliminate the middle S")
                .hint("No more symbols needed in the middle"),
            CfgStep::new(4, "abba", "abba", "Final derivation complete")
                .explain("Derivation complete: abba successfully generated")
                .hint("Success! The palindrome has been fully derived"),
        ],
    }
}

/// L = {aⁿbᵐcⁿ | n,m ≥ 0}: a's matched against c's with free b's between.
fn anbmcn() -> Language {
    Language {
        id: LanguageId::new(3),
        name: "L = {aⁿbᵐcⁿ | n,m ≥ 0}".to_string(),
        description: "Language where number of a's equals number of c's".to_string(),
        test_string: "aabbcc".to_string(),
        pda: Pda {
            states: vec![
                State::new("q0", "q₀", 120.0, 150.0).start(),
                State::new("q1", "q₁", 270.0, 150.0),
                State::new("q2", "q₂", 420.0, 150.0),
                State::new("q3", "q₃", 570.0, 150.0).accept(),
            ],
            alphabet: vec!['a', 'b', 'c'],
            stack_alphabet: vec!['Z', 'A'],
            start_state: "q0".to_string(),
            accept_states: vec!["q3".to_string()],
            transitions: vec![
                Transition::new("q0", "q0", 'a', 'Z', "AZ"),
                Transition::new("q0", "q0", 'a', 'A', "AA"),
                Transition::new("q0", "q1", 'b', 'Z', "Z"),
                Transition::new("q0", "q1", 'b', 'A', "A"),
                Transition::new("q1", "q1", 'b', 'Z', "Z"),
                Transition::new("q1", "q1", 'b', 'A', "A"),
                Transition::new("q1", "q2", 'c', 'A', ""),
                Transition::new("q2", "q2", 'c', 'A', ""),
                Transition::new("q2", "q3", EPSILON, 'Z', "Z"),
            ],
        },
        cfg: Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S', 'A'],
            terminals: vec!['a', 'b', 'c'],
            productions: vec![
                Production::new('S', "aSc", "p1"),
                Production::new('S', "A", "p2"),
                Production::new('A', "bA", "p3"),
                Production::new('A', "ε", "p4"),
            ],
        },
        pda_steps: vec![
            PdaStep::new(1, "q0", "aabbcc", "Z", "Initial configuration")
                .ask(
                    [
                        "δ(q0, a, Z) = {(q0, AZ)}",
                        "δ(q0, b, Z) = {(q1, Z)}",
                        "δ(q0, c, Z) = {(q2, Z)}",
                        "δ(q1, a, A) = {(q1, AA)}",
                    ],
                    0,
                )
                .explain("Read first 'a' and push 'A' onto stack")
                .hint("Start by processing the a's and pushing them onto the stack"),
            PdaStep::new(2, "q0", "abbcc", "ZA", "After reading first 'a'")
                .ask(
                    [
                        "δ(q0, a, A) = {(q0, AA)}",
                        "δ(q0, b, A) = {(q1, A)}",
                        "δ(q0, c, A) = {(q2, ε)}",
                        "δ(q1, a, A) = {(q1, AA)}",
                    ],
                    0,
                )
                .explain("Read second 'a' and push another 'A'")
                .hint("Continue processing the remaining a's"),
            PdaStep::new(3, "q0", "bbcc", "ZAA", "After reading all a's")
                .ask(
                    [
                        "δ(q0, a, A) = {(q0, AA)}",
                        "δ(q0, b, A) = {(q1, A)}",
                        "δ(q0, c, A) = {(q2, ε)}",
                        "δ(q1, b, A) = {(q1, A)}",
                    ],
                    1,
                )
                .explain("Read first 'b' and transition to q1")
                .hint("Switch to the b-processing state"),
            PdaStep::new(4, "q1", "bcc", "ZAA", "After reading first 'b'")
                .ask(
                    [
                        "δ(q0, b, A) = {(q1, A)}",
                        "δ(q1, b, A) = {(q1, A)}",
                        "δ(q1, c, A) = {(q2, ε)}",
                        "δ(q2, c, A) = {(q2, ε)}",
                    ],
                    1,
                )
                .explain("Read second 'b', stay in q1")
                .hint("Continue processing b's without changing the stack"),
            PdaStep::new(5, "q1", "cc", "ZAA", "After reading all b's")
                .ask(
                    [
                        "δ(q1, b, A) = {(q1, A)}",
                        "δ(q1, c, A) = {(q2, ε)}",
                        "δ(q2, c, A) = {(q2, ε)}",
                        "δ(q2, ε, Z) = {(q3, Z)}",
                    ],
                    1,
                )
                .explain("Read first 'c', transition to q2 and pop 'A'")
                .hint("Start matching c's with the A's on the stack"),
            PdaStep::new(6, "q2", "c", "ZA", "After reading first 'c'")
                .ask(
                    [
                        "δ(q1, c, A) = {(q2, ε)}",
                        "δ(q2, c, A) = {(q2, ε)}",
                        "δ(q2, ε, Z) = {(q3, Z)}",
                        "δ(q3, c, A) = {(q3, ε)}",
                    ],
                    1,
                )
                .explain("Read second 'c' and pop another 'A'")
                .hint("Match the remaining c with the last A"),
            PdaStep::new(7, "q2", "", "Z", "After reading all input")
                .ask(
                    [
                        "δ(q2, c, A) = {(q2, ε)}",
                        "δ(q2, ε, Z) = {(q3, Z)}",
                        "δ(q3, c, A) = {(q3, ε)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                    ],
                    1,
                )
                .explain("Transition to accept state q3")
                .hint("Accept the string with Z remaining on stack"),
        ],
        cfg_steps: vec![
            CfgStep::new(1, "S", "aabbcc", "Start with start symbol")
                .ask(["S → aSc", "S → A"], 0)
                .explain("Apply S → aSc to generate first a and last c")
                .hint("We need to match a's with c's"),
            CfgStep::new(2, "aSc", "aabbcc", "After first production")
                .ask(["S → aSc", "S → A"], 0)
                .explain("Apply S → aSc again to generate second a and c")
                .hint("We need another a-c pair"),
            CfgStep::new(3, "aaScc", "aabbcc", "After second production")
                .ask(["S → aSc", "S → A"], 1)
                .explain("Apply S → A to generate the middle part")
                .hint("Now generate the b's in the middle"),
            CfgStep::new(4, "aaAcc", "aabbcc", "After introducing A")
                .ask(["A → bA", "A → ε"], 0)
                .explain("Apply A → bA to generate first b")
                .hint("Generate the b's one by one"),
            CfgStep::new(5, "aabAcc", "aabbcc", "After generating first b")
                .ask(["A → bA", "A → ε"], 0)
                .explain("Apply A → bA to generate second b")
                .hint("We need one more b"),
            CfgStep::new(6, "aabbAcc", "aabbcc", "After generating second b")
                .ask(["A → bA", "A → ε"], 1)
                .explain("Apply A → ε to finish the derivation")
                .hint("No more b's needed"),
            CfgStep::new(7, "aabbcc", "aabbcc", "Final derivation complete")
                .explain("Derivation complete: aabbcc successfully generated")
                .hint("Success! The string has been fully derived"),
        ],
    }
}

/// Balanced parentheses, the classic CFL.
fn balanced_parens() -> Language {
    Language {
        id: LanguageId::new(4),
        name: "L = {w ∈ {(,)}* | parentheses balanced}".to_string(),
        description: "Language of well-balanced parentheses".to_string(),
        test_string: "()()".to_string(),
        pda: Pda {
            states: vec![
                State::new("q0", "q₀", 150.0, 150.0).start(),
                State::new("q1", "q₁", 350.0, 150.0).accept(),
            ],
            alphabet: vec!['(', ')'],
            stack_alphabet: vec!['Z', 'P'],
            start_state: "q0".to_string(),
            accept_states: vec!["q1".to_string()],
            transitions: vec![
                Transition::new("q0", "q0", '(', 'Z', "PZ"),
                Transition::new("q0", "q0", '(', 'P', "PP"),
                Transition::new("q0", "q0", ')', 'P', ""),
                Transition::new("q0", "q1", EPSILON, 'Z', "Z"),
            ],
        },
        cfg: Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S'],
            terminals: vec!['(', ')'],
            productions: vec![Production::new('S', "(S)S", "p1"), Production::new('S', "ε", "p2")],
        },
        pda_steps: vec![
            PdaStep::new(1, "q0", "()()", "Z", "Initial configuration")
                .ask(
                    [
                        "δ(q0, (, P) = {(q0, PP)}",
                        "δ(q0, (, Z) = {(q0, PZ)}",
                        "δ(q0, ε, Z) = {(q1, Z)}",
                        "δ(q0, ), Z) = {(q0, Z)}",
                    ],
                    1,
                )
                .explain("Read '(' and push a P onto stack (P represents '(')")
                .hint("Push for every '('"),
            PdaStep::new(2, "q0", ")()", "ZP", "After reading first '('")
                .ask(
                    [
                        "δ(q0, (, P) = {(q0, PP)}",
                        "δ(q0, ε, Z) = {(q1, Z)}",
                        "δ(q0, ), P) = {(q0, ε)}",
                        "δ(q0, (, Z) = {(q0, PZ)}",
                    ],
                    2,
                )
                .explain("Read ')', match and pop a P")
                .hint("Pop when you encounter a matching ')'."),
            PdaStep::new(3, "q0", "()", "Z", "After completing first pair")
                .ask(
                    [
                        "δ(q0, ), Z) = {(q0, Z)}",
                        "δ(q0, ε, Z) = {(q1, Z)}",
                        "δ(q0, (, Z) = {(q0, PZ)}",
                        "δ(q0, ), P) = {(q0, ε)}",
                    ],
                    2,
                )
                .explain("Push for next '('")
                .hint("Continue processing the remaining input"),
            PdaStep::new(4, "q0", ")", "ZP", "Prepare to pop second pair")
                .ask(
                    [
                        "δ(q0, ), Z) = {(q0, Z)}",
                        "δ(q0, (, P) = {(q0, PP)}",
                        "δ(q0, ε, Z) = {(q1, Z)}",
                        "δ(q0, ), P) = {(q0, ε)}",
                    ],
                    3,
                )
                .explain("Pop the P to match the last ')', leaving Z on stack")
                .hint("Finish matching the parentheses"),
            PdaStep::new(5, "q0", "", "Z", "All input processed")
                .ask(
                    [
                        "δ(q0, ε, Z) = {(q1, Z)}",
                        "δ(q0, (, Z) = {(q0, PZ)}",
                        "δ(q0, ), Z) = {(q0, Z)}",
                        "δ(q0, ), P) = {(q0, ε)}",
                    ],
                    0,
                )
                .explain("Use epsilon transition on Z to accept")
                .hint("When input is empty and only Z is on stack, accept"),
        ],
        cfg_steps: vec![
            CfgStep::new(1, "S", "()()", "Start with start symbol")
                .ask(["S → ε", "S → (S)S"], 1)
                .explain("Apply S → (S)S to start introducing parentheses")
                .hint("We need to generate pairs and possibly concatenate them"),
            CfgStep::new(2, "(S)S", "()()", "After first production")
                .ask(["S → (S)S", "S → ε"], 1)
                .explain("Replace the S inside parentheses with ε to make '()'")
                .hint("Close the inner parentheses when possible"),
            CfgStep::new(3, "()S", "()()", "We have one unit, generate the next")
                .ask(["S → ε", "S → (S)S"], 1)
                .explain("Apply S → (S)S to generate another '()'")
                .hint("Generate the second parentheses pair"),
            CfgStep::new(4, "()(S)S", "()()", "Finish derivation")
                .ask(["S → (S)S", "S → ε"], 1)
                .explain("Use S → ε to end the derivation")
                .hint("Stop when target string is reached"),
        ],
    }
}

/// L = {aⁿbⁿcᵐ} ∪ {aᵐbⁿcⁿ}: the nondeterministic PDA guesses which case.
fn union_of_two() -> Language {
    Language {
        id: LanguageId::new(5),
        name: "L = {a^n b^n c^m | n,m≥0} ∪ {a^m b^n c^n | m,n≥0}".to_string(),
        description: "Union of two context-free languages; nondeterministic PDA guesses which case".to_string(),
        test_string: "aabbbccc".to_string(),
        pda: Pda {
            states: vec![
                State::new("q0", "q₀", 120.0, 120.0).start(),
                State::new("q1", "q₁", 300.0, 120.0),
                State::new("q2", "q₂", 480.0, 120.0),
                State::new("q3", "q₃", 660.0, 120.0).accept(),
                State::new("q4", "q₄", 300.0, 240.0),
                State::new("q5", "q₅", 480.0, 240.0),
            ],
            alphabet: vec!['a', 'b', 'c'],
            stack_alphabet: vec!['Z', 'A'],
            start_state: "q0".to_string(),
            accept_states: vec!["q3".to_string()],
            transitions: vec![
                // Case 1 branch: a^n b^n c^m
                Transition::new("q0", "q1", EPSILON, 'Z', "Z").with_label("ε, Z → Z (choose case 1)"),
                Transition::new("q1", "q1", 'a', 'Z', "AZ"),
                Transition::new("q1", "q1", 'a', 'A', "AA"),
                Transition::new("q1", "q2", 'b', 'A', ""),
                Transition::new("q2", "q2", 'b', 'A', ""),
                Transition::new("q2", "q3", EPSILON, 'Z', "Z"),
                Transition::new("q3", "q3", 'c', 'Z', "Z"),
                // Case 2 branch: a^m b^n c^n
                Transition::new("q0", "q4", EPSILON, 'Z', "Z").with_label("ε, Z → Z (choose case 2)"),
                Transition::new("q4", "q4", 'a', 'Z', "Z"),
                Transition::new("q4", "q5", 'b', 'Z', "AZ"),
                Transition::new("q5", "q5", 'b', 'A', "AA"),
                Transition::new("q5", "q5", 'c', 'A', ""),
                Transition::new("q5", "q3", EPSILON, 'Z', "Z"),
            ],
        },
        cfg: Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S', 'X', 'Y', 'Z', 'W'],
            terminals: vec!['a', 'b', 'c'],
            productions: vec![
                // Union of the two cases.
                Production::new('S', "X", "p1"),
                Production::new('S', "Y", "p2"),
                // Case X (a^n b^n c^m): balanced a/b part, then c*.
                Production::new('X', "aXb", "p3"),
                Production::new('X', "Z", "p4"),
                Production::new('Z', "cZ", "p5"),
                Production::new('Z', "ε", "p6"),
                // Case Y (a^m b^n c^n): arbitrary a*, then balanced b/c.
                Production::new('Y', "aY", "p7"),
                Production::new('Y', "W", "p8"),
                Production::new('W', "bWc", "p9"),
                Production::new('W', "ε", "p10"),
            ],
        },
        pda_steps: vec![
            PdaStep::new(1, "q0", "aabbbccc", "Z", "Initial configuration (nondeterministic choice)")
                .ask(
                    [
                        "Read a and push (ambiguous)",
                        "ε-branch to case2: q4",
                        "ε-branch to case1: q1",
                        "Reject immediately",
                    ],
                    1,
                )
                .explain("Choose case 1 or case 2 nondeterministically; here we show case 2 path")
                .hint("We need to decide which pattern to follow"),
            PdaStep::new(2, "q4", "abbbccc", "Z", "Reading initial a's (case 2), a's are ignored on stack")
                .ask(
                    [
                        "δ(q4, b, Z) -> (q5, AZ)",
                        "δ(q4, a, Z) -> (q4, Z)",
                        "δ(q4, ε, Z) -> (q4, Z)",
                        "δ(q0, b, Z) -> (q1, Z)",
                    ],
                    1,
                )
                .explain("Consume an 'a' without changing the stack in case 2")
                .hint("In case 2 'a' is free and does not affect the b/c equality"),
            PdaStep::new(3, "q5", "bbbccc", "ZA", "Start counting b's by pushing A for each b")
                .ask(
                    [
                        "δ(q5, c, A) = {(q5, ε)}",
                        "δ(q5, b, A) = {(q5, AA)}",
                        "δ(q5, ε, Z) = {(q3, Z)}",
                        "δ(q5, a, Z) = {(q4, Z)}",
                    ],
                    1,
                )
                .explain("Push A for another 'b'")
                .hint("Count the number of b's to match later with c's"),
            PdaStep::new(4, "q5", "ccc", "ZAAA", "After pushing for all b's, switch to popping on c's")
                .ask(
                    [
                        "δ(q5, b, A) = {(q5, AA)}",
                        "δ(q5, c, A) = {(q5, ε)}",
                        "δ(q5, ε, Z) = {(q3, Z)}",
                        "δ(q4, b, Z) = {(q5, AZ)}",
                    ],
                    1,
                )
                .explain("Read c and pop an A for each c")
                .hint("Match each c with a corresponding b count"),
            PdaStep::new(5, "q5", "", "Z", "After all b/c matched and stack reduced to Z")
                .ask(
                    [
                        "δ(q5, ε, A) = {(q5, A)}",
                        "δ(q1, ε, Z) = {(q2, Z)}",
                        "δ(q2, c, Z) = {(q2, Z)}",
                        "δ(q5, ε, Z) = {(q3, Z)}",
                    ],
                    3,
                )
                .explain("Use epsilon transition to accept; we matched b's and c's")
                .hint("Accept if stack is back to Z and no input left"),
        ],
        cfg_steps: vec![
            CfgStep::new(1, "S", "aabbbccc", "Start; choose union branch")
                .ask(["S → X (case a^n b^n c^m)", "S → Y (case a^m b^n c^n)"], 1)
                .explain("Choose case Y to generate b^n c^n; we still must handle initial a's")
                .hint("We need to pick the grammar branch that produces equal b/c counts"),
            CfgStep::new(2, "Y", "aabbbccc", "Generate initial a* for Y")
                .ask(["Y → W", "Y → aY"], 1)
                .explain("Consume one 'a' using Y → aY")
                .hint("Repeat to generate 'aa' at the start"),
            CfgStep::new(3, "aaW", "aabbbccc", "Now produce the b^n c^n part from W")
                .ask(["W → ε", "W → bWc"], 1)
                .explain("Apply W → bWc to start matching b's and c's")
                .hint("Each application adds a pair 'b...c'"),
            CfgStep::new(4, "aabWcc", "aabbbccc", "Continue until counts match")
                .ask(["W → ε", "W → bWc"], 1)
                .explain("Apply W → bWc twice more to produce 'bbb' and 'ccc'")
                .hint("Stop when you have 'bbb' and 'ccc'"),
            CfgStep::new(5, "aabbbccc", "aabbbccc", "Derivation complete")
                .explain("String generated correctly under union branch Y")
                .hint("Union of grammars allows this non-overlapping form"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Scripted;
    use crate::types::Mode;

    #[test]
    fn test_five_languages_with_unique_ids() {
        let all = languages();
        assert_eq!(all.len(), 5);
        for (i, lang) in all.iter().enumerate() {
            assert_eq!(lang.id, LanguageId::new(i as u32 + 1));
        }
    }

    #[test]
    fn test_find() {
        assert!(find(LanguageId::new(1)).is_some());
        assert!(find(LanguageId::new(5)).is_some());
        assert!(find(LanguageId::new(6)).is_none());
    }

    #[test]
    fn test_next_after_wraps_around() {
        assert_eq!(next_after(LanguageId::new(1)).id, LanguageId::new(2));
        assert_eq!(next_after(LanguageId::new(5)).id, LanguageId::new(1));
    }

    #[test]
    fn test_all_pda_definitions_validate() {
        for lang in languages() {
            lang.pda.validate().unwrap_or_else(|e| panic!("{}: {}", lang.name, e));
        }
    }

    #[test]
    fn test_all_cfg_definitions_validate() {
        for lang in languages() {
            lang.cfg.validate().unwrap_or_else(|e| panic!("{}: {}", lang.name, e));
        }
    }

    #[test]
    fn test_correct_answers_are_in_bounds() {
        for lang in languages() {
            for mode in [Mode::Pda, Mode::Cfg] {
                for i in 0..lang.track_len(mode) {
                    let step = lang.scripted(mode, i).unwrap();
                    match step.correct_answer() {
                        Some(correct) => assert!(
                            correct < step.choices().len(),
                            "{}: {} step {} has out-of-bounds answer",
                            lang.name,
                            mode,
                            step.number()
                        ),
                        None => assert!(
                            step.choices().is_empty(),
                            "{}: {} step {} has choices but no answer",
                            lang.name,
                            mode,
                            step.number()
                        ),
                    }
                }
            }
        }
    }

    #[test]
    fn test_step_numbers_are_sequential() {
        for lang in languages() {
            for mode in [Mode::Pda, Mode::Cfg] {
                for i in 0..lang.track_len(mode) {
                    assert_eq!(lang.scripted(mode, i).unwrap().number(), i + 1);
                }
            }
        }
    }

    #[test]
    fn test_pda_scripts_start_at_initial_configuration() {
        for lang in languages() {
            let first = &lang.pda_steps[0];
            assert_eq!(first.state, lang.pda.start_state, "{}", lang.name);
            assert_eq!(first.remaining_input, lang.test_string, "{}", lang.name);
            assert_eq!(first.stack, vec!['Z'], "{}", lang.name);
        }
    }

    #[test]
    fn test_pda_script_states_exist() {
        for lang in languages() {
            for step in &lang.pda_steps {
                assert!(lang.pda.state(&step.state).is_some(), "{}: unknown state {}", lang.name, step.state);
            }
        }
    }

    #[test]
    fn test_cfg_scripts_start_at_start_symbol() {
        for lang in languages() {
            let first = &lang.cfg_steps[0];
            assert_eq!(first.current, lang.cfg.start_symbol.to_string(), "{}", lang.name);
            assert_eq!(first.target, lang.test_string, "{}", lang.name);
        }
    }

    #[test]
    fn test_cfg_terminal_steps_reach_target() {
        for lang in languages() {
            let last = lang.cfg_steps.last().unwrap();
            if last.correct_answer.is_none() {
                assert!(last.is_terminal(), "{}", lang.name);
                assert!(lang.cfg.is_terminal_string(&last.current), "{}", lang.name);
            }
        }
    }
}

//! Context-free grammar definitions.
//!
//! Like [`crate::pda`], a [`Cfg`] is authored data: the derivation walkthroughs
//! are scripted, and the grammar exists so the production table can be listed,
//! scripted choices can be checked against the declared rules, and a chosen
//! production can be replayed onto the current sentential form with
//! [`Cfg::apply_leftmost`].

use std::fmt;

use crate::EPSILON;

/// Errors found while validating a CFG definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CfgError {
    #[error("start symbol `{0}` is not a declared nonterminal")]
    UnknownStartSymbol(char),
    #[error("production `{0}` has left side `{1}` which is not a declared nonterminal")]
    UnknownLeftSide(String, char),
    #[error("production `{0}` produces `{1}` which is neither a terminal nor a nonterminal")]
    UnknownSymbol(String, char),
}

/// A single production rule, e.g. `S → aSb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// The rewritten nonterminal.
    pub left: char,
    /// The replacement string; the literal `"ε"` denotes the empty expansion.
    pub right: String,
    /// Stable identifier, e.g. `"p1"`.
    pub id: String,
}

impl Production {
    pub fn new(left: char, right: &str, id: &str) -> Self {
        Production {
            left,
            right: right.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether this production erases its left side.
    pub fn is_epsilon(&self) -> bool {
        self.right == EPSILON.to_string()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.left, self.right)
    }
}

/// A context-free grammar definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cfg {
    pub start_symbol: char,
    pub non_terminals: Vec<char>,
    pub terminals: Vec<char>,
    pub productions: Vec<Production>,
}

impl Cfg {
    /// Checks whether `symbol` is a declared nonterminal.
    pub fn is_nonterminal(&self, symbol: char) -> bool {
        self.non_terminals.contains(&symbol)
    }

    /// Checks whether the grammar declares a production `left → right`.
    pub fn has_production(&self, left: char, right: &str) -> bool {
        self.productions.iter().any(|p| p.left == left && p.right == right)
    }

    /// Looks up a production by its id.
    pub fn production(&self, id: &str) -> Option<&Production> {
        self.productions.iter().find(|p| p.id == id)
    }

    /// Returns the leftmost nonterminal of a sentential form, with its
    /// character position.
    pub fn leftmost_nonterminal(&self, current: &str) -> Option<(usize, char)> {
        current.chars().enumerate().find(|&(_, c)| self.is_nonterminal(c))
    }

    /// Rewrites the leftmost occurrence of the production's left side.
    ///
    /// Returns the new sentential form, or `None` if the left side does not
    /// occur in `current`. An `ε` right side expands to nothing.
    pub fn apply_leftmost(&self, current: &str, production: &Production) -> Option<String> {
        let position = current.chars().position(|c| c == production.left)?;

        let mut result = String::with_capacity(current.len() + production.right.len());
        for (i, c) in current.chars().enumerate() {
            if i == position {
                if !production.is_epsilon() {
                    result.push_str(&production.right);
                }
            } else {
                result.push(c);
            }
        }
        Some(result)
    }

    /// Whether a sentential form consists of terminals only.
    pub fn is_terminal_string(&self, current: &str) -> bool {
        current.chars().all(|c| !self.is_nonterminal(c))
    }

    /// Validates the structural consistency of the definition.
    ///
    /// The start symbol and every production left side must be declared
    /// nonterminals; right sides may contain only declared symbols or ε.
    pub fn validate(&self) -> Result<(), CfgError> {
        if !self.is_nonterminal(self.start_symbol) {
            return Err(CfgError::UnknownStartSymbol(self.start_symbol));
        }
        for p in &self.productions {
            if !self.is_nonterminal(p.left) {
                return Err(CfgError::UnknownLeftSide(p.id.clone(), p.left));
            }
            if p.is_epsilon() {
                continue;
            }
            for c in p.right.chars() {
                if !self.is_nonterminal(c) && !self.terminals.contains(&c) {
                    return Err(CfgError::UnknownSymbol(p.id.clone(), c));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anbn_grammar() -> Cfg {
        Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S'],
            terminals: vec!['a', 'b'],
            productions: vec![Production::new('S', "aSb", "p1"), Production::new('S', "ε", "p2")],
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Production::new('S', "aSb", "p1").to_string(), "S → aSb");
        assert_eq!(Production::new('S', "ε", "p2").to_string(), "S → ε");
    }

    #[test]
    fn test_has_production() {
        let cfg = anbn_grammar();
        assert!(cfg.has_production('S', "aSb"));
        assert!(cfg.has_production('S', "ε"));
        assert!(!cfg.has_production('S', "ab"));
        assert!(!cfg.has_production('A', "aSb"));
    }

    #[test]
    fn test_leftmost_nonterminal() {
        let cfg = anbn_grammar();
        assert_eq!(cfg.leftmost_nonterminal("aSb"), Some((1, 'S')));
        assert_eq!(cfg.leftmost_nonterminal("aabb"), None);
        assert_eq!(cfg.leftmost_nonterminal(""), None);
    }

    #[test]
    fn test_apply_leftmost() {
        let cfg = anbn_grammar();
        let grow = cfg.production("p1").unwrap().clone();
        let erase = cfg.production("p2").unwrap().clone();

        assert_eq!(cfg.apply_leftmost("S", &grow), Some("aSb".to_string()));
        assert_eq!(cfg.apply_leftmost("aSb", &grow), Some("aaSbb".to_string()));
        assert_eq!(cfg.apply_leftmost("aaSbb", &erase), Some("aabb".to_string()));
        assert_eq!(cfg.apply_leftmost("aabb", &grow), None);
    }

    #[test]
    fn test_apply_leftmost_rewrites_first_occurrence() {
        let cfg = Cfg {
            start_symbol: 'S',
            non_terminals: vec!['S', 'A'],
            terminals: vec!['a'],
            productions: vec![Production::new('A', "a", "p1")],
        };
        let p = cfg.production("p1").unwrap().clone();
        // Two occurrences of A: only the leftmost is rewritten.
        assert_eq!(cfg.apply_leftmost("AaA", &p), Some("aaA".to_string()));
    }

    #[test]
    fn test_is_terminal_string() {
        let cfg = anbn_grammar();
        assert!(cfg.is_terminal_string("aabb"));
        assert!(cfg.is_terminal_string(""));
        assert!(!cfg.is_terminal_string("aSb"));
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(anbn_grammar().validate(), Ok(()));
    }

    #[test]
    fn test_validate_unknown_start() {
        let mut cfg = anbn_grammar();
        cfg.start_symbol = 'T';
        assert_eq!(cfg.validate(), Err(CfgError::UnknownStartSymbol('T')));
    }

    #[test]
    fn test_validate_unknown_symbol_in_right_side() {
        let mut cfg = anbn_grammar();
        cfg.productions.push(Production::new('S', "aXb", "p3"));
        assert_eq!(cfg.validate(), Err(CfgError::UnknownSymbol("p3".to_string(), 'X')));
    }
}

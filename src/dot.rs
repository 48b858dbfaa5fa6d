//! PDA state diagrams in DOT (Graphviz) format.
//!
//! This module renders a [`Pda`] definition as a directed graph that can be
//! drawn with Graphviz tools like `dot`, `neato`, or online viewers.
//!
//! # Conventions
//!
//! - **States** are circles labeled with their display label (`q₀`, `q₁`, …)
//! - **Accept states** are double circles
//! - **The start state** is marked by an arrow from an invisible point
//! - **Edges** carry the transition label, e.g. `a, Z → AZ`; self-loops and
//!   parallel edges are left to the layout engine
//! - **The current state** (if given) is filled with the highlight color
//! - The authored diagram positions can be emitted as `pos` hints, which
//!   `neato -n` honors to reproduce the original layout
//!
//! # Examples
//!
//! ```
//! use pda_cfg_rs::data;
//! use pda_cfg_rs::types::LanguageId;
//!
//! let lang = data::find(LanguageId::new(1)).unwrap();
//! let dot = lang.pda.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng pda.dot -o pda.png
//! ```

use std::fmt::Write as _;

use crate::pda::Pda;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for ordinary states (default: "circle")
    pub node_shape: &'static str,
    /// Shape for accept states (default: "doublecircle")
    pub accept_shape: &'static str,
    /// Fill color for the highlighted current state (default: "lightblue")
    pub highlight_color: &'static str,
    /// Left-to-right layout (default: true)
    pub rankdir_lr: bool,
    /// Whether to emit the authored x/y positions as `pos` hints (default: false)
    pub use_positions: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            accept_shape: "doublecircle",
            highlight_color: "lightblue",
            rankdir_lr: true,
            use_positions: false,
        }
    }
}

impl Pda {
    /// Converts the automaton to DOT format with default settings and no
    /// highlighted state.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default(), None)
    }

    /// Converts the automaton to DOT format.
    ///
    /// `current` names a state to highlight (the state the walkthrough is
    /// in); unknown ids simply highlight nothing.
    pub fn to_dot_with_config(&self, config: &DotConfig, current: Option<&str>) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        if config.rankdir_lr {
            writeln!(dot, "rankdir=LR;")?;
        }
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        // Invisible source for the start arrow
        writeln!(dot, "__start [shape=point, style=invis];")?;

        for state in &self.states {
            let mut attrs = vec![format!("label=\"{}\"", state.label)];
            if state.is_accept {
                attrs.push(format!("shape={}", config.accept_shape));
            }
            if current == Some(state.id.as_str()) {
                attrs.push("style=filled".to_string());
                attrs.push(format!("fillcolor={}", config.highlight_color));
            }
            if config.use_positions {
                // Graphviz pos hints are in points; the authored coordinates
                // are canvas pixels with y growing downward.
                attrs.push(format!("pos=\"{},{}!\"", state.x, -state.y));
            }
            writeln!(dot, "{} [{}];", state.id, attrs.join(", "))?;
        }

        writeln!(dot, "__start -> {};", self.start_state)?;

        for t in &self.transitions {
            writeln!(dot, "{} -> {} [label=\"{}\"];", t.from, t.to, t.label)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::types::LanguageId;

    fn anbn_pda() -> Pda {
        data::find(LanguageId::new(1)).unwrap().pda
    }

    /// Basic test: verify DOT output is generated without errors
    #[test]
    fn test_to_dot_basic() {
        let dot = anbn_pda().to_dot().unwrap();

        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("__start -> q0;"));
    }

    /// Every state appears as a node, accept states as double circles
    #[test]
    fn test_to_dot_states() {
        let pda = anbn_pda();
        let dot = pda.to_dot().unwrap();

        for state in &pda.states {
            assert!(dot.contains(&format!("{} [", state.id)));
        }
        assert!(dot.contains("q2 [label=\"q₂\", shape=doublecircle];"));
    }

    /// Every transition appears as a labeled edge
    #[test]
    fn test_to_dot_edges() {
        let dot = anbn_pda().to_dot().unwrap();

        assert!(dot.contains("q0 -> q0 [label=\"a, Z → AZ\"];"));
        assert!(dot.contains("q0 -> q1 [label=\"b, A → ε\"];"));
        assert!(dot.contains("q1 -> q2 [label=\"ε, Z → Z\"];"));
    }

    /// Highlighting marks exactly the requested state
    #[test]
    fn test_to_dot_highlight() {
        let pda = anbn_pda();
        let config = DotConfig::default();

        let dot = pda.to_dot_with_config(&config, Some("q1")).unwrap();
        assert!(dot.contains("q1 [label=\"q₁\", style=filled, fillcolor=lightblue];"));
        assert!(!dot.contains("q0 [label=\"q₀\", style=filled"));

        let unknown = pda.to_dot_with_config(&config, Some("q9")).unwrap();
        assert!(!unknown.contains("fillcolor"));
    }

    /// Position hints appear only when requested
    #[test]
    fn test_to_dot_positions() {
        let pda = anbn_pda();
        let plain = pda.to_dot().unwrap();
        assert!(!plain.contains("pos="));

        let config = DotConfig {
            use_positions: true,
            ..DotConfig::default()
        };
        let positioned = pda.to_dot_with_config(&config, None).unwrap();
        assert!(positioned.contains("pos=\"150,-150!\""));
    }

    /// All shipped examples produce structurally sound output
    #[test]
    fn test_to_dot_all_languages() {
        for lang in data::languages() {
            let dot = lang.pda.to_dot().unwrap();
            assert!(dot.starts_with("digraph {"), "{}", lang.name);
            assert!(dot.ends_with("}\n"), "{}", lang.name);
            assert!(dot.contains("doublecircle"), "{}", lang.name);
        }
    }

    /// Helper test to write DOT files for manual inspection (disabled by default)
    #[test]
    #[ignore]
    fn test_write_dot_file() {
        let pda = anbn_pda();
        let dot = pda.to_dot().unwrap();

        std::fs::write("test_output.dot", &dot).unwrap();
        println!("DOT output:\n{}", dot);

        for format in ["png", "pdf", "svg"] {
            let output = std::process::Command::new("dot")
                .arg(format!("-T{}", format))
                .arg("test_output.dot")
                .arg("-o")
                .arg(format!("test_output.{}", format))
                .output();

            if let Ok(output) = output {
                if output.status.success() {
                    println!("Generated test_output.{}", format);
                }
            }
        }
    }
}

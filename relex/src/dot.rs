//! # Graphviz export
//! A one-way emitter of automata as `dot` directed graphs, meant for eyeballing machines
//! while debugging patterns. The start state is drawn as an oval (even when it is also
//! accepting), accepting states as octagons, all other states as boxes. Every edge is
//! labelled with its polarity and ranges, `eps` standing in for an epsilon transition.
//!
//! ```
//! use relex::parser;
//!
//! let nfa = parser::regex("a").unwrap().to_nfa();
//! let dot = nfa.to_dot();
//! assert!(dot.starts_with("digraph nfa {"));
//! assert!(dot.contains("[label=\"+ a-a\"]"));
//! ```

use crate::nfa::{Edge, Nfa, Polarity};
use std::fmt::Write;

impl Nfa {
    /// Renders this automaton as a Graphviz `digraph`.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph nfa {\n    rankdir=LR;\n");
        for idx in 0..self.states.len() {
            let shape = if self.start == Some(idx) {
                "oval"
            } else if self.is_accepting(idx) {
                "octagon"
            } else {
                "box"
            };
            writeln!(out, "    s{idx} [shape={shape}];").unwrap();
        }
        for (idx, state) in self.states.iter().enumerate() {
            for edge in &state.edges {
                let label = edge_label(edge);
                writeln!(out, "    s{idx} -> s{} [label=\"{label}\"];", edge.dest()).unwrap();
            }
        }
        out.push_str("}\n");
        out
    }
}

fn edge_label(edge: &Edge) -> String {
    match edge {
        Edge::Epsilon { .. } => "+ eps".to_owned(),
        Edge::Ranges {
            polarity, ranges, ..
        } => {
            let mut label = String::from(match polarity {
                Polarity::Positive => "+",
                Polarity::Negative => "-",
            });
            for &(low, high) in ranges {
                label.push(' ');
                push_label_char(&mut label, low);
                label.push('-');
                push_label_char(&mut label, high);
            }
            label
        }
    }
}

/// Dot double-quoted strings only reserve `"` and `\`; everything unprintable is spelled
/// out so labels survive any range endpoint.
fn push_label_char(label: &mut String, c: char) {
    match c {
        '"' => label.push_str("\\\""),
        '\\' => label.push_str("\\\\"),
        '\n' => label.push_str("\\\\n"),
        c if (c as u32) < 0x20 || c == '\u{7F}' => {
            write!(label, "\\\\x{:02X}", c as u32).unwrap();
        }
        c => label.push(c),
    }
}

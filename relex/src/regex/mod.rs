//! # Regular expressions
//! A parsed regular expression, and its compilation into an [Nfa] by the classic Thompson
//! construction: every atom becomes a two-state automaton, concatenation, alternation and
//! the postfix operators are exactly the in-place composition operators of
//! [the nfa module](crate::nfa).
//!
//! ## Example
//! ```
//! use relex::parser;
//!
//! let regex = parser::regex("0*1(0|\\e)").unwrap();
//! let nfa = regex.to_nfa();
//!
//! assert!(["1", "10", "0001"].iter().all(|s| nfa.accepts(s)));
//! assert!(!nfa.accepts(""));
//! assert!(!nfa.accepts("100"));
//! ```
//!
//! The compiled automaton borrows nothing from the [Regex], and a [Regex] can be compiled
//! any number of times. For matching inside a text instead of against the whole string, see
//! [`Nfa::search`]; for tokenization, see [`Lexer`](crate::lexer::Lexer).

use crate::nfa::{Edge, Nfa, Polarity, Range};
use crate::parser::regex::is_reserved;
use std::fmt::{Display, Formatter};

/// A parsed regular expression. Obtained from [`parser::regex`](crate::parser::regex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    pub ast: RegexAst,
}

/// The shape of a regular expression. `Empty` is the empty string (what `\e` denotes, and
/// what an empty pattern or an empty alternate parses to), not the empty language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexAst {
    Empty,
    Literal(char),
    Dot,
    Class { negated: bool, ranges: Vec<Range> },
    Sequence(Vec<RegexAst>),
    Alt(Vec<RegexAst>),
    Star(Box<RegexAst>),
    Plus(Box<RegexAst>),
    Optional(Box<RegexAst>),
}

impl Regex {
    /// Compiles this regular expression to an NFA. The automaton accepts exactly the
    /// language of the expression, matched against the whole input.
    pub fn to_nfa(&self) -> Nfa {
        compile(&self.ast)
    }
}

fn compile(ast: &RegexAst) -> Nfa {
    match ast {
        RegexAst::Empty => Nfa::empty_string(),
        RegexAst::Literal(c) => atom_nfa(vec![(*c, *c)], Polarity::Positive),
        RegexAst::Dot => atom_nfa(vec![('\0', char::MAX)], Polarity::Positive),
        RegexAst::Class { negated, ranges } => {
            let polarity = if *negated {
                Polarity::Negative
            } else {
                Polarity::Positive
            };
            atom_nfa(ranges.clone(), polarity)
        }
        RegexAst::Sequence(items) => {
            let mut nfa = Nfa::empty_string();
            for item in items {
                nfa.concat(&compile(item));
            }
            nfa
        }
        RegexAst::Alt(items) => {
            let mut items = items.iter();
            let mut nfa = items
                .next()
                .map(compile)
                .unwrap_or_else(Nfa::empty_string);
            for item in items {
                nfa.union(&compile(item));
            }
            nfa
        }
        RegexAst::Star(inner) => {
            let mut nfa = compile(inner);
            nfa.star();
            nfa
        }
        RegexAst::Plus(inner) => {
            let mut nfa = compile(inner);
            nfa.plus();
            nfa
        }
        RegexAst::Optional(inner) => {
            let mut nfa = compile(inner);
            nfa.optional();
            nfa
        }
    }
}

/// The two-state automaton of a single consuming atom.
fn atom_nfa(ranges: Vec<Range>, polarity: Polarity) -> Nfa {
    let mut nfa = Nfa::new();
    let from = nfa.add_state(false);
    let to = nfa.add_state(true);
    let edge = Edge::ranges(ranges, polarity, to).expect("parser only yields ordered ranges");
    nfa.add_edge(from, edge);
    nfa.set_start(from);
    nfa
}

impl Display for Regex {
    /// Writes the expression back in its surface syntax. Reparsing the output yields an
    /// equivalent expression, though not necessarily a structurally identical one.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_ast(&self.ast, f)
    }
}

fn write_ast(ast: &RegexAst, f: &mut Formatter<'_>) -> std::fmt::Result {
    match ast {
        RegexAst::Empty => write!(f, "\\e"),
        RegexAst::Literal(c) => write_literal(*c, f),
        RegexAst::Dot => write!(f, "."),
        RegexAst::Class { negated, ranges } => {
            write!(f, "[")?;
            if *negated {
                write!(f, "^")?;
            }
            for &(low, high) in ranges {
                write_class_char(low, f)?;
                if high != low {
                    write!(f, "-")?;
                    write_class_char(high, f)?;
                }
            }
            write!(f, "]")
        }
        RegexAst::Sequence(items) => {
            for item in items {
                if matches!(item, RegexAst::Alt(_)) {
                    write!(f, "(")?;
                    write_ast(item, f)?;
                    write!(f, ")")?;
                } else {
                    write_ast(item, f)?;
                }
            }
            Ok(())
        }
        RegexAst::Alt(items) => {
            let mut first = true;
            for item in items {
                if !first {
                    write!(f, "|")?;
                }
                first = false;
                if let RegexAst::Empty = item {
                    // An empty alternate is written as nothing at all
                    continue;
                }
                write_ast(item, f)?;
            }
            Ok(())
        }
        RegexAst::Star(inner) => write_postfixed(inner, '*', f),
        RegexAst::Plus(inner) => write_postfixed(inner, '+', f),
        RegexAst::Optional(inner) => write_postfixed(inner, '?', f),
    }
}

fn write_postfixed(inner: &RegexAst, op: char, f: &mut Formatter<'_>) -> std::fmt::Result {
    let atomic = matches!(
        inner,
        RegexAst::Literal(_) | RegexAst::Dot | RegexAst::Class { .. } | RegexAst::Empty
    );
    if atomic {
        write_ast(inner, f)?;
    } else {
        write!(f, "(")?;
        write_ast(inner, f)?;
        write!(f, ")")?;
    }
    write!(f, "{op}")
}

fn write_literal(c: char, f: &mut Formatter<'_>) -> std::fmt::Result {
    match c {
        c if is_reserved(c) => write!(f, "\\{c}"),
        '\u{07}' => write!(f, "\\a"),
        '\u{08}' => write!(f, "\\b"),
        '\u{0C}' => write!(f, "\\f"),
        '\n' => write!(f, "\\n"),
        '\r' => write!(f, "\\r"),
        '\t' => write!(f, "\\t"),
        '\u{0B}' => write!(f, "\\v"),
        c => write!(f, "{c}"),
    }
}

fn write_class_char(c: char, f: &mut Formatter<'_>) -> std::fmt::Result {
    match c {
        ']' | '-' | '^' | '\\' => write!(f, "\\{c}"),
        c => write_literal(c, f),
    }
}

//! # relex parser
//! This module contains the parsers for the two text formats of the crate: regular
//! expressions and automaton descriptions. (The lexicon format is line-oriented plumbing on
//! top of the regex parser and lives with [the lexer](crate::lexer).)
//!
//! ## Format for regular expressions
//! The surface syntax is the classic one:
//!
//! | Construct | Meaning |
//! |-----------|---------|
//! | `x` | the literal character `x` |
//! | `\X` | an escape (see [`chars`](crate::chars)) or a predefined class |
//! | `.` | any single character |
//! | `[abc]`, `[a-z0-9_]` | character class; `-` makes an inclusive range |
//! | `[^…]` | negated character class |
//! | `A\|B` | alternation, binds looser than concatenation |
//! | `AB` | concatenation |
//! | `A*`, `A+`, `A?` | zero-or-more, one-or-more, optional; bind tighter than concatenation |
//! | `(…)` | grouping |
//! | `\s \S \w \W \d \D` | whitespace, word and digit classes and their negations |
//!
//! Alternation is right-associative and an alternate may be empty, so `a\|` denotes "`a` or
//! the empty string". Parentheses must balance; a stray `)` or an unclosed `(` is a
//! [`RegexError::BadRegex`]. Whitespace is significant everywhere.
//!
//! ```
//! use relex::parser;
//!
//! let nfa = parser::regex("(ab)+|c?").unwrap().to_nfa();
//! assert!(nfa.accepts("ababab"));
//! assert!(nfa.accepts("c"));
//! assert!(nfa.accepts(""));
//! assert!(!nfa.accepts("abc"));
//! ```
//!
//! ## Format for automaton descriptions
//! A description is a line-oriented UTF-8 text:
//!
//! ```text
//! start:0
//! accept:0
//! 0-1:+a-a
//! 1-0:+b-b 0-9
//! ```
//!
//! * `start:<n>` names the start state; if absent, state 0 is the start. At most one.
//! * `accept:<n>` marks a state accepting; the lines may repeat and appear in any order.
//! * `<from>-<to>:<polarity><range>[ <range>…]` adds one edge. The polarity is `+` (accept
//!   characters inside some listed range) or `-` (accept characters inside none of them),
//!   and each range is `<low>-<high>` with inclusive endpoints.
//! * A range endpoint is any character except backslash, space, newline and `-`, or an
//!   escape; `\e-\e` (on a `+` edge) denotes an epsilon transition.
//! * Any state index mentioned anywhere extends the automaton up to that index, creating
//!   the missing states as non-accepting with no edges.
//!
//! Parsing is done in two steps: [`nfa`] parses the text into a [`ParsedNfa`], and
//! `TryInto<Nfa>` checks the invariants and builds the automaton (see
//! [`NfaSpecError`](crate::nfa::NfaSpecError)).

pub(crate) mod fa;
pub(crate) mod regex;

use crate::chars::split_lines;
use crate::nfa::{NfaSpecError, Polarity};
use crate::regex::Regex;
use nom::combinator::all_consuming;
use nom::Finish;
use thiserror::Error;

/// A parsed but not yet validated automaton description. Use `TryInto<Nfa>` to check the
/// invariants and build the automaton.
#[derive(Debug, Default)]
pub struct ParsedNfa {
    pub start: Option<usize>,
    pub accepting: Vec<usize>,
    pub transitions: Vec<ParsedTransition>,
}

/// One transition line of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTransition {
    /// Line number in the description, for diagnostics.
    pub line: usize,
    pub from: usize,
    pub to: usize,
    pub polarity: Polarity,
    pub ranges: Vec<(Endpoint, Endpoint)>,
}

/// A range endpoint as written: an ordinary character, or the `\e` epsilon marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Char(char),
    Epsilon,
}

/// Why a regular expression failed to parse. Offsets are byte offsets into the pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegexError {
    #[error("unknown or ill-formed escape sequence at offset {0}")]
    BadEscape(usize),
    #[error("malformed character class at offset {0}")]
    BadCharClass(usize),
    #[error("regular expression syntax error at offset {0}")]
    BadRegex(usize),
}

/// What a combinator failed on, so the public error can name the right kind. `Syntax` is the
/// catch-all classified by the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailKind {
    Escape,
    CharClass,
    Syntax,
}

/// The internal nom error: the remaining input at the point of failure plus a [`FailKind`].
/// Specific failures are raised as `nom::Err::Failure` so that `alt` does not paper over
/// them by backtracking.
#[derive(Debug, PartialEq)]
pub(crate) struct RawError<'a> {
    pub(crate) at: &'a str,
    pub(crate) kind: FailKind,
}

pub(crate) type PResult<'a, T> = nom::IResult<&'a str, T, RawError<'a>>;

impl<'a> nom::error::ParseError<&'a str> for RawError<'a> {
    fn from_error_kind(input: &'a str, _kind: nom::error::ErrorKind) -> Self {
        RawError {
            at: input,
            kind: FailKind::Syntax,
        }
    }

    fn append(_input: &'a str, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    fn or(self, other: Self) -> Self {
        // Keep the more specific of two alternatives
        if self.kind == FailKind::Syntax {
            other
        } else {
            self
        }
    }
}

impl<'a, E> nom::error::FromExternalError<&'a str, E> for RawError<'a> {
    fn from_external_error(input: &'a str, _kind: nom::error::ErrorKind, _e: E) -> Self {
        RawError {
            at: input,
            kind: FailKind::Syntax,
        }
    }
}

/// Parses a regular expression according to the format above. The whole pattern must be
/// consumed. All regexes successfully parsed by this function compile to valid automata
/// with [`Regex::to_nfa`].
pub fn regex(input: &str) -> Result<Regex, RegexError> {
    all_consuming(regex::full_regex)(input)
        .finish()
        .map(|(_, ast)| Regex { ast })
        .map_err(|e| {
            let offset = input.len() - e.at.len();
            match e.kind {
                FailKind::Escape => RegexError::BadEscape(offset),
                FailKind::CharClass => RegexError::BadCharClass(offset),
                FailKind::Syntax => RegexError::BadRegex(offset),
            }
        })
}

/// Parses an automaton description according to the format above. Leading and trailing
/// whitespace on each line is ignored and blank lines are skipped; every other line must
/// parse in full. Note that the result is a [ParsedNfa], which still
/// has to be validated into an [Nfa](crate::nfa::Nfa) with [TryInto::try_into].
pub fn nfa(input: &str) -> Result<ParsedNfa, NfaSpecError> {
    let mut parsed = ParsedNfa::default();
    for (idx, raw_line) in split_lines(input).enumerate() {
        let number = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let item = all_consuming(fa::line)(line)
            .finish()
            .map(|(_, item)| item)
            .map_err(|e| match e.kind {
                FailKind::Escape => NfaSpecError::BadEscape(number),
                _ => NfaSpecError::Malformed(number),
            })?;
        match item {
            fa::Line::Start(state) => {
                if parsed.start.replace(state).is_some() {
                    return Err(NfaSpecError::DuplicateStart(number));
                }
            }
            fa::Line::Accept(state) => parsed.accepting.push(state),
            fa::Line::Transition(mut transition) => {
                transition.line = number;
                parsed.transitions.push(transition);
            }
        }
    }
    Ok(parsed)
}

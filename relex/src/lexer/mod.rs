//! # Longest-match lexer
//! A [Lexer] is an ordered table of patterns, each a compiled [Nfa] with a token name. Given
//! an input, it runs one [evaluator](crate::nfa::NfaEvaluator) per pattern in lockstep and
//! reports the pattern with the longest accepting prefix; among patterns tying on length,
//! the one loaded first wins. This is the classic maximal-munch arbitration of table-driven
//! tokenizers.
//!
//! ## Lexicon descriptions
//! A lexer can be populated rule by rule with [`Lexer::add`], or loaded from a line-oriented
//! description with [`Lexer::load`]: every non-blank line is either a comment starting with
//! `#`, or a rule of the form `<regex>` TAB `<token-name>`. A rule without the tab separator
//! is an error.
//!
//! ```
//! use relex::lexer::Lexer;
//!
//! let mut lexer = Lexer::new();
//! lexer
//!     .load("# a tiny expression language\n[a-zA-Z_]\\w*\tIDENT\n\\d+\tINT\n\\+\tADD\n\\s+\tWS\n")
//!     .unwrap();
//! assert_eq!(lexer.len(), 4);
//!
//! let tokens: Vec<(&str, &str)> = lexer
//!     .tokens("sum+12")
//!     .map(|token| (token.name, token.lexeme))
//!     .collect();
//! assert_eq!(tokens, [("IDENT", "sum"), ("ADD", "+"), ("INT", "12")]);
//! ```
//!
//! ## Arbitration
//! [`Lexer::longest_match`] classifies one prefix: `sum` above is matched by `IDENT` at
//! length 3 rather than at length 1 or 2, and a keyword pattern listed before `IDENT` would
//! beat it on equal length. Acceptance is only recorded after consuming a character, so a
//! pattern accepting the empty string can never produce an empty token.

use crate::chars::split_lines;
use crate::nfa::{Nfa, NfaEvaluator};
use crate::parser;
use crate::parser::RegexError;
use thiserror::Error;

/// An ordered pattern table for longest-match tokenization.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    patterns: Vec<Pattern>,
}

#[derive(Debug, Clone)]
struct Pattern {
    nfa: Nfa,
    token: String,
}

/// Why a lexicon description was rejected, with the offending line number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("rule on line {0} has no tab between regex and token name")]
    MissingTab(usize),
    #[error("rule on line {0} has an empty token name")]
    MissingName(usize),
    #[error("bad regex on line {line}: {source}")]
    BadRegex { line: usize, source: RegexError },
}

/// The winning pattern for one input prefix, see [`Lexer::longest_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'l> {
    /// The token name of the winning pattern.
    pub token: &'l str,
    /// The index of the winning pattern, in load order.
    pub pattern: usize,
    /// The number of characters matched, always at least one.
    pub length: usize,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of loaded patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Compiles `pattern` and appends it with its token name. Order matters: earlier
    /// patterns win ties.
    pub fn add(&mut self, pattern: &str, token: &str) -> Result<(), RegexError> {
        let nfa = parser::regex(pattern)?.to_nfa();
        self.patterns.push(Pattern {
            nfa,
            token: token.to_owned(),
        });
        Ok(())
    }

    /// Loads a lexicon description, appending its rules in order. On an error the rules
    /// before the failing line have already been added; callers should discard the lexer.
    pub fn load(&mut self, description: &str) -> Result<(), LexiconError> {
        for (idx, line) in split_lines(description).enumerate() {
            let number = idx + 1;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let (pattern, token) = line
                .split_once('\t')
                .ok_or(LexiconError::MissingTab(number))?;
            let token = token.trim();
            if token.is_empty() {
                return Err(LexiconError::MissingName(number));
            }
            self.add(pattern, token)
                .map_err(|source| LexiconError::BadRegex {
                    line: number,
                    source,
                })?;
        }
        Ok(())
    }

    /// Finds the pattern with the longest accepting prefix of `input`, stepping every
    /// pattern's evaluator in lockstep until all of them are dead or the input ends.
    /// Returns `None` if no pattern accepts any prefix.
    pub fn longest_match(&self, input: &str) -> Option<Match<'_>> {
        let mut evaluators: Vec<NfaEvaluator> =
            self.patterns.iter().map(|p| p.nfa.evaluator()).collect();
        let mut best: Option<(usize, usize)> = None;
        for (consumed, c) in input.chars().enumerate() {
            let mut all_dead = true;
            for evaluator in evaluators.iter_mut() {
                evaluator.step(c);
                all_dead &= evaluator.is_rejected();
            }
            if let Some(winner) = evaluators.iter().position(NfaEvaluator::is_accepting) {
                best = Some((winner, consumed + 1));
            }
            if all_dead {
                break;
            }
        }
        best.map(|(pattern, length)| Match {
            token: &self.patterns[pattern].token,
            pattern,
            length,
        })
    }

    /// Iterates over the tokens of `input`, applying [`Lexer::longest_match`] repeatedly.
    /// The iterator ends at the end of the input or at the first position where no pattern
    /// matches; [`Tokens::rest`] tells the two apart.
    pub fn tokens<'l, 's>(&'l self, input: &'s str) -> Tokens<'l, 's> {
        Tokens {
            lexer: self,
            rest: input,
            position: 0,
        }
    }
}

/// One token produced by [`Lexer::tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'l, 's> {
    /// The token name of the winning pattern.
    pub name: &'l str,
    /// The matched slice of the input.
    pub lexeme: &'s str,
    /// The character position of the first matched character.
    pub start: usize,
}

/// The token iterator, see [`Lexer::tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'l, 's> {
    lexer: &'l Lexer,
    rest: &'s str,
    position: usize,
}

impl<'l, 's> Tokens<'l, 's> {
    /// The input not yet consumed. Non-empty after the iterator ends exactly when lexing
    /// stopped because no pattern matched.
    pub fn rest(&self) -> &'s str {
        self.rest
    }
}

impl<'l, 's> Iterator for Tokens<'l, 's> {
    type Item = Token<'l, 's>;

    fn next(&mut self) -> Option<Self::Item> {
        let matched = self.lexer.longest_match(self.rest)?;
        let bytes = self
            .rest
            .char_indices()
            .nth(matched.length)
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (lexeme, rest) = self.rest.split_at(bytes);
        let token = Token {
            name: matched.token,
            lexeme,
            start: self.position,
        };
        self.position += matched.length;
        self.rest = rest;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic() -> Lexer {
        let mut lexer = Lexer::new();
        lexer.add("[a-zA-Z_]\\w*", "IDENT").unwrap();
        lexer.add("\\d+", "INT").unwrap();
        lexer.add("\\+", "ADD").unwrap();
        lexer.add("\\-", "SUB").unwrap();
        lexer.add("\\s+", "WS").unwrap();
        lexer
    }

    #[test]
    fn longest_match_wins() {
        let lexer = arithmetic();
        let m = lexer.longest_match("var12+").unwrap();
        assert_eq!((m.token, m.length), ("IDENT", 5));
    }

    #[test]
    fn earliest_pattern_wins_ties() {
        let mut lexer = Lexer::new();
        lexer.add("if", "KEYWORD").unwrap();
        lexer.add("\\w+", "IDENT").unwrap();
        let m = lexer.longest_match("if").unwrap();
        assert_eq!((m.token, m.pattern), ("KEYWORD", 0));
        // The longer match still beats the earlier pattern
        let m = lexer.longest_match("iffy").unwrap();
        assert_eq!((m.token, m.length), ("IDENT", 4));
    }

    #[test]
    fn no_match_is_none() {
        let lexer = arithmetic();
        assert_eq!(lexer.longest_match("#"), None);
        assert_eq!(lexer.longest_match(""), None);
    }

    #[test]
    fn patterns_that_accept_late_are_not_cut_off() {
        let mut lexer = Lexer::new();
        lexer.add("abc", "ABC").unwrap();
        let m = lexer.longest_match("abc").unwrap();
        assert_eq!((m.token, m.length), ("ABC", 3));
    }

    #[test]
    fn tokenizes_mixed_input() {
        let lexer = arithmetic();
        let tokens: Vec<(&str, usize)> = lexer
            .tokens("var-12+ id3")
            .map(|t| (t.name, t.lexeme.chars().count()))
            .collect();
        assert_eq!(
            tokens,
            [
                ("IDENT", 3),
                ("SUB", 1),
                ("INT", 2),
                ("ADD", 1),
                ("WS", 1),
                ("IDENT", 3),
            ]
        );
    }

    #[test]
    fn token_positions_count_characters() {
        let mut lexer = Lexer::new();
        lexer.add("[^ ]+", "WORD").unwrap();
        lexer.add("\\s+", "WS").unwrap();
        let tokens: Vec<(usize, &str)> = lexer
            .tokens("héllo wörld")
            .map(|t| (t.start, t.lexeme))
            .collect();
        assert_eq!(tokens, [(0, "héllo"), (5, " "), (6, "wörld")]);
    }

    #[test]
    fn iterator_stops_at_unlexable_input() {
        let lexer = arithmetic();
        let mut tokens = lexer.tokens("ab#cd");
        assert_eq!(tokens.next().map(|t| t.name), Some("IDENT"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.rest(), "#cd");
    }

    #[test]
    fn load_counts_rules_and_skips_comments() {
        let mut lexer = Lexer::new();
        lexer
            .load("# comment\na+\tAS\nb+\tBS\n")
            .unwrap();
        assert_eq!(lexer.len(), 2);

        let mut single = Lexer::new();
        single.load("a+\tAS\n").unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn load_rejects_bad_rules() {
        let mut lexer = Lexer::new();
        assert_eq!(
            lexer.load("a+ NO_TAB\n").unwrap_err(),
            LexiconError::MissingTab(1)
        );

        let mut lexer = Lexer::new();
        assert_eq!(
            lexer.load("a+\tAS\nb+\t\n").unwrap_err(),
            LexiconError::MissingName(2)
        );
        // The rules before the failing line were kept; callers should discard the lexer
        assert_eq!(lexer.len(), 1);

        let mut lexer = Lexer::new();
        assert!(matches!(
            lexer.load("[a-\tBROKEN\n").unwrap_err(),
            LexiconError::BadRegex { line: 1, .. }
        ));
    }
}

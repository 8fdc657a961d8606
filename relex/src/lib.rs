//!# relex
//!
//! `relex` is a Rust library for range-labelled NFAs with ε-moves, compiled from regular
//! expressions by the classic Thompson construction and driven either as a matcher/searcher
//! or as the engine behind a longest-match lexer. Automata have a line-oriented text format
//! of their own, and can be exported to Graphviz.
//!
//! ## Usage
//!
//! ```rust
//! use relex::lexer::Lexer;
//! use relex::nfa::Nfa;
//! use relex::parser;
//!
//! fn main() {
//!     // Compile a regular expression and match against whole strings
//!     let nfa = parser::regex("c(a|b)*c").unwrap().to_nfa();
//!     assert!(nfa.accepts("cc"));
//!     assert!(nfa.accepts("cabbac"));
//!     assert!(!nfa.accepts("cabba"));
//!
//!     // ...or search inside a text (start and length count characters)
//!     let word = parser::regex("\\w+").unwrap().to_nfa();
//!     let hits = word.search("words words words", false, false);
//!     assert_eq!(
//!         hits.iter().map(|h| (h.start, h.length)).collect::<Vec<_>>(),
//!         [(0, 5), (6, 5), (12, 5)]
//!     );
//!
//!     // Automata round-trip through a textual description
//!     let description = "\
//!     start:0
//!     accept:1
//!     0-1:+a-z
//!     1-1:+a-z 0-9
//!     ";
//!     let loaded: Nfa = parser::nfa(description).unwrap().try_into().unwrap();
//!     assert!(loaded.accepts("ab2c3"));
//!
//!     // A lexer arbitrates several patterns, longest match first
//!     let mut lexer = Lexer::new();
//!     lexer.add("[a-zA-Z_]\\w*", "IDENT").unwrap();
//!     lexer.add("\\d+", "INT").unwrap();
//!     let m = lexer.longest_match("x12+y").unwrap();
//!     assert_eq!((m.token, m.length), ("IDENT", 3));
//! }
//! ```
//!
//! ## File formats
//!
//! An automaton description is a line-oriented UTF-8 text: an optional `start:<n>` line
//! (state 0 by default), any number of `accept:<n>` lines, and one
//! `<from>-<to>:<polarity><range>[ <range>…]` line per edge, where the polarity is `+`
//! (characters inside some range) or `-` (characters inside none), each range is
//! `<low>-<high>`, endpoints may use the escapes of [`chars`], and `\e-\e` denotes an
//! ε-transition. State indices referenced anywhere extend the machine. See [`parser`] for
//! the full grammar and [`Nfa::to_description`](nfa::Nfa::to_description) for the writer.
//!
//! A lexicon description has one `<regex>` TAB `<token-name>` rule per line, with `#`
//! starting a comment line; see [`lexer`].
//!
//! Regular expressions support literals, escapes, `.`, `[…]`/`[^…]` classes with ranges,
//! the predefined classes `\s \S \w \W \d \D`, alternation, concatenation, `* + ?` and
//! grouping. There are no backreferences, no lookaround and no capturing. See [`parser`]
//! for the grammar.
//!
//! ## Operations
//!
//! This library currently supports:
//!
//! * [Parsing regular expressions](parser::regex) and
//!   [compiling them to NFAs](regex::Regex::to_nfa)
//! * [Parsing](parser::nfa) and [validating](nfa::parse) automaton descriptions, and
//!   [writing them back](nfa::Nfa::to_description)
//! * In-place composition: [concatenation](nfa::Nfa::concat), [union](nfa::Nfa::union),
//!   [Kleene star](nfa::Nfa::star), [plus](nfa::Nfa::plus) and
//!   [optional](nfa::Nfa::optional)
//! * Checking if a string is [accepted by an NFA](nfa::Nfa::accepts), with
//!   [step-by-step simulation](nfa::Simulation) and a
//!   [deterministic fast path](nfa::Nfa::accepts_deterministic)
//! * [Searching a text](nfa::Nfa::search) for matches, greedily or not, overlapping or not
//! * [Longest-match tokenization](lexer::Lexer) over an ordered pattern table
//! * [Graphviz export](nfa::Nfa::to_dot)

pub mod chars;
pub mod dot;
pub mod lexer;
pub mod nfa;
pub mod parser;
pub mod regex;

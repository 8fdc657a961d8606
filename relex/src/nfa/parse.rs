//! Validation of parsed automaton descriptions. [`parser::nfa`](crate::parser::nfa) gets the
//! text into a [`ParsedNfa`] without judging it; the [`TryFrom`] here checks the invariants
//! and produces the actual [`Nfa`]:
//!
//! * every mentioned state index (start, accepting, either end of a transition) extends the
//!   state list up to that index, creating missing states as non-accepting with no edges;
//! * `\e` may only appear as the sole `\e-\e` range of a positive transition, which becomes
//!   an epsilon edge;
//! * every range must have its endpoints in order.
//!
//! ```
//! use relex::nfa::{Nfa, NfaSpecError};
//!
//! // Accepts strings of 'a's and 'b's with an even number of both (the
//! // missing `start:` line defaults the start state to 0)
//! let input = "\
//! accept:0
//! 0-1:+a-a
//! 0-2:+b-b
//! 1-0:+a-a
//! 1-3:+b-b
//! 2-3:+a-a
//! 2-0:+b-b
//! 3-1:+b-b
//! 3-2:+a-a
//! ";
//! let nfa: Nfa = relex::parser::nfa(input).unwrap().try_into().unwrap();
//! assert_eq!(nfa.states().len(), 4);
//! assert!(nfa.accepts("abab"));
//! assert!(!nfa.accepts("ab"));
//!
//! // Reversed ranges fail validation, not parsing
//! let parsed = relex::parser::nfa("0-1:+z-a").unwrap();
//! let result: Result<Nfa, _> = parsed.try_into();
//! assert_eq!(result.unwrap_err(), NfaSpecError::InvalidRange(1));
//! ```

use crate::nfa::{Edge, Nfa, Polarity, State};
use crate::parser::{Endpoint, ParsedNfa, ParsedTransition};
use thiserror::Error;

/// Why an automaton description was rejected, with the offending line number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NfaSpecError {
    #[error("malformed automaton description on line {0}")]
    Malformed(usize),
    #[error("unknown or ill-formed escape sequence on line {0}")]
    BadEscape(usize),
    #[error("second start line on line {0}")]
    DuplicateStart(usize),
    #[error("range endpoints out of order on line {0}")]
    InvalidRange(usize),
    #[error("epsilon must form the sole \\e-\\e range of a positive transition on line {0}")]
    MisplacedEpsilon(usize),
}

impl TryFrom<ParsedNfa> for Nfa {
    type Error = NfaSpecError;

    fn try_from(parsed: ParsedNfa) -> Result<Self, Self::Error> {
        let ParsedNfa {
            start,
            accepting,
            transitions,
        } = parsed;

        let mut nfa = Nfa::new();
        let start = start.unwrap_or(0);
        extend_to(&mut nfa, start);
        nfa.start = Some(start);

        for accept in accepting {
            extend_to(&mut nfa, accept);
            nfa.accepting.push(accept);
        }

        for transition in transitions {
            extend_to(&mut nfa, transition.from);
            extend_to(&mut nfa, transition.to);
            let (from, edge) = build_edge(transition)?;
            nfa.states[from].edges.push(edge);
        }

        Ok(nfa)
    }
}

/// Extends the state list so that `idx` is a valid state index.
fn extend_to(nfa: &mut Nfa, idx: usize) {
    while nfa.states.len() <= idx {
        nfa.states.push(State::default());
    }
}

fn build_edge(transition: ParsedTransition) -> Result<(usize, Edge), NfaSpecError> {
    let ParsedTransition {
        line,
        from,
        to,
        polarity,
        ranges,
    } = transition;

    if ranges == [(Endpoint::Epsilon, Endpoint::Epsilon)] {
        return if polarity == Polarity::Positive {
            Ok((from, Edge::epsilon(to)))
        } else {
            Err(NfaSpecError::MisplacedEpsilon(line))
        };
    }

    let mut char_ranges = Vec::with_capacity(ranges.len());
    for (low, high) in ranges {
        let (Endpoint::Char(low), Endpoint::Char(high)) = (low, high) else {
            return Err(NfaSpecError::MisplacedEpsilon(line));
        };
        char_ranges.push((low, high));
    }

    let edge = Edge::ranges(char_ranges, polarity, to)
        .map_err(|_| NfaSpecError::InvalidRange(line))?;
    Ok((from, edge))
}

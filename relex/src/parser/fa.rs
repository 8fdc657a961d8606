use crate::chars::{decode_escape, Escape};
use crate::nfa::Polarity;
use crate::parser::{Endpoint, FailKind, PResult, ParsedTransition, RawError};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, satisfy, space0};
use nom::combinator::{map, map_res, value};
use nom::multi::separated_list1;
use nom::sequence::{preceded, separated_pair, tuple};
use nom::Err;

/// One line of an automaton description.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line {
    Start(usize),
    Accept(usize),
    Transition(ParsedTransition),
}

pub(crate) fn line(input: &str) -> PResult<Line> {
    alt((start_line, accept_line, transition_line))(input)
}

fn start_line(input: &str) -> PResult<Line> {
    map(preceded(tuple((tag("start:"), space0)), number), Line::Start)(input)
}

fn accept_line(input: &str) -> PResult<Line> {
    map(
        preceded(tuple((tag("accept:"), space0)), number),
        Line::Accept,
    )(input)
}

fn transition_line(input: &str) -> PResult<Line> {
    map(
        tuple((
            separated_pair(number, char('-'), number),
            char(':'),
            polarity,
            separated_list1(char(' '), range),
        )),
        |((from, to), _, polarity, ranges)| {
            Line::Transition(ParsedTransition {
                line: 0, // filled in by the caller
                from,
                to,
                polarity,
                ranges,
            })
        },
    )(input)
}

fn number(input: &str) -> PResult<usize> {
    map_res(digit1, str::parse)(input)
}

fn polarity(input: &str) -> PResult<Polarity> {
    alt((
        value(Polarity::Positive, char('+')),
        value(Polarity::Negative, char('-')),
    ))(input)
}

fn range(input: &str) -> PResult<(Endpoint, Endpoint)> {
    separated_pair(endpoint, char('-'), endpoint)(input)
}

fn endpoint(input: &str) -> PResult<Endpoint> {
    alt((escaped_endpoint, plain_endpoint))(input)
}

fn plain_endpoint(input: &str) -> PResult<Endpoint> {
    map(
        satisfy(|c| !matches!(c, '\\' | ' ' | '\n' | '-')),
        Endpoint::Char,
    )(input)
}

fn escaped_endpoint(input: &str) -> PResult<Endpoint> {
    let (rest, _) = char('\\')(input)?;
    let mut cursor = rest.chars();
    match decode_escape(&mut cursor) {
        Ok(Escape::Char(c)) => Ok((cursor.as_str(), Endpoint::Char(c))),
        Ok(Escape::Epsilon) => Ok((cursor.as_str(), Endpoint::Epsilon)),
        Err(_) => Err(Err::Failure(RawError {
            at: rest,
            kind: FailKind::Escape,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Line {
        let (rest, line) = line(input).unwrap();
        assert_eq!(rest, "");
        line
    }

    #[test]
    fn start_and_accept_lines() {
        assert_eq!(parse("start:0"), Line::Start(0));
        assert_eq!(parse("start: 12"), Line::Start(12));
        assert_eq!(parse("accept:3"), Line::Accept(3));
    }

    #[test]
    fn simple_transition() {
        let Line::Transition(t) = parse("0-1:+a-a") else {
            panic!("expected a transition");
        };
        assert_eq!((t.from, t.to), (0, 1));
        assert_eq!(t.polarity, Polarity::Positive);
        assert_eq!(t.ranges, [(Endpoint::Char('a'), Endpoint::Char('a'))]);
    }

    #[test]
    fn multi_range_negative_transition() {
        let Line::Transition(t) = parse("4-17:-a-z 0-9") else {
            panic!("expected a transition");
        };
        assert_eq!((t.from, t.to), (4, 17));
        assert_eq!(t.polarity, Polarity::Negative);
        assert_eq!(
            t.ranges,
            [
                (Endpoint::Char('a'), Endpoint::Char('z')),
                (Endpoint::Char('0'), Endpoint::Char('9')),
            ]
        );
    }

    #[test]
    fn escaped_endpoints() {
        let Line::Transition(t) = parse("0-1:+\\e-\\e") else {
            panic!("expected a transition");
        };
        assert_eq!(t.ranges, [(Endpoint::Epsilon, Endpoint::Epsilon)]);

        let Line::Transition(t) = parse("0-1:+\\x41-\\\\") else {
            panic!("expected a transition");
        };
        assert_eq!(t.ranges, [(Endpoint::Char('A'), Endpoint::Char('\\'))]);

        // An escaped dash is an endpoint, not a range separator
        let Line::Transition(t) = parse("0-1:+\\--\\-") else {
            panic!("expected a transition");
        };
        assert_eq!(t.ranges, [(Endpoint::Char('-'), Endpoint::Char('-'))]);
    }

    #[test]
    fn malformed_lines_do_not_parse() {
        for bad in ["start:", "0-1:a-a", "0-1:+a", "0-1:+a-a,b-b", "0:+a-a"] {
            assert!(line(bad).is_err() || !line(bad).unwrap().0.is_empty(), "{bad}");
        }
    }
}

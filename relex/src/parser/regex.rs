use crate::chars::{decode_escape, Escape};
use crate::parser::{FailKind, PResult, RawError};
use crate::regex::RegexAst;
use nom::branch::alt;
use nom::character::complete::{char, one_of, satisfy};
use nom::combinator::{cut, map, opt, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded};
use nom::Err;

/// Ranges of the predefined whitespace class `\s`: space, `\f`, `\n`, `\r`, `\t`, `\v`.
const WHITESPACE: &[(char, char)] = &[
    (' ', ' '),
    ('\u{0C}', '\u{0C}'),
    ('\n', '\n'),
    ('\r', '\r'),
    ('\t', '\t'),
    ('\u{0B}', '\u{0B}'),
];

/// Ranges of the predefined word class `\w`.
const WORD: &[(char, char)] = &[('a', 'z'), ('A', 'Z'), ('_', '_'), ('0', '9')];

/// Ranges of the predefined digit class `\d`.
const DIGIT: &[(char, char)] = &[('0', '9')];

pub(crate) fn full_regex(input: &str) -> PResult<RegexAst> {
    alternation(input)
}

/// `A|B|…`, right-associative, binding looser than concatenation. An absent alternate
/// denotes the empty string, so `a|` accepts "a" and "".
fn alternation(input: &str) -> PResult<RegexAst> {
    let (rest, first) = sequence(input)?;
    match opt(preceded(char('|'), alternation))(rest)? {
        (rest, None) => Ok((rest, first)),
        (rest, Some(RegexAst::Alt(mut alts))) => {
            alts.insert(0, first);
            Ok((rest, RegexAst::Alt(alts)))
        }
        (rest, Some(other)) => Ok((rest, RegexAst::Alt(vec![first, other]))),
    }
}

fn sequence(input: &str) -> PResult<RegexAst> {
    map(many0(postfixed), |mut items| match items.len() {
        0 => RegexAst::Empty,
        1 => items.remove(0),
        _ => RegexAst::Sequence(items),
    })(input)
}

/// An atom with an optional `*`, `+` or `?` postfix, which bind tighter than concatenation.
fn postfixed(input: &str) -> PResult<RegexAst> {
    map(pair(atom, opt(one_of("*+?"))), |(inner, postfix)| {
        match postfix {
            Some('*') => RegexAst::Star(Box::new(inner)),
            Some('+') => RegexAst::Plus(Box::new(inner)),
            Some('?') => RegexAst::Optional(Box::new(inner)),
            None => inner,
            Some(_) => unreachable!("one_of only yields *, + or ?"),
        }
    })(input)
}

fn atom(input: &str) -> PResult<RegexAst> {
    alt((group, class, dot, escaped, literal))(input)
}

fn group(input: &str) -> PResult<RegexAst> {
    // A missing `)` must not backtrack into "treat `(` as something else"
    delimited(char('('), alternation, cut(char(')')))(input)
}

fn dot(input: &str) -> PResult<RegexAst> {
    value(RegexAst::Dot, char('.'))(input)
}

fn literal(input: &str) -> PResult<RegexAst> {
    map(satisfy(|c| !is_reserved(c)), RegexAst::Literal)(input)
}

pub(crate) fn is_reserved(c: char) -> bool {
    matches!(
        c,
        '|' | '*' | '+' | '?' | '(' | ')' | '[' | '\\' | '.'
    )
}

/// `\X`: a predefined class, an escape, or `\e` for the empty string.
fn escaped(input: &str) -> PResult<RegexAst> {
    let (rest, _) = char('\\')(input)?;
    if let Some(class) = rest.chars().next().and_then(predefined_class) {
        return Ok((&rest[1..], class));
    }
    let mut cursor = rest.chars();
    match decode_escape(&mut cursor) {
        Ok(Escape::Char(c)) => Ok((cursor.as_str(), RegexAst::Literal(c))),
        Ok(Escape::Epsilon) => Ok((cursor.as_str(), RegexAst::Empty)),
        Err(_) => Err(Err::Failure(RawError {
            at: rest,
            kind: FailKind::Escape,
        })),
    }
}

fn predefined_class(c: char) -> Option<RegexAst> {
    let (ranges, negated) = match c {
        's' => (WHITESPACE, false),
        'S' => (WHITESPACE, true),
        'w' => (WORD, false),
        'W' => (WORD, true),
        'd' => (DIGIT, false),
        'D' => (DIGIT, true),
        _ => return None,
    };
    Some(RegexAst::Class {
        negated,
        ranges: ranges.to_vec(),
    })
}

/// `[…]` and `[^…]`. Each plain character starts a `(c, c)` pair; a `-` between two
/// characters widens the previous pair into a range; a `-` just before `]` is a literal
/// dash, as is one at the very start. `]` may be matched by escaping it. An unterminated
/// class, an out-of-order range and `\e` inside a class are all malformed.
fn class(input: &str) -> PResult<RegexAst> {
    let (rest, _) = char('[')(input)?;
    let (rest, negation) = opt(char('^'))(rest)?;
    let mut ranges: Vec<(char, char)> = Vec::new();
    let mut pending_dash = false;
    let mut cursor = rest.chars();
    loop {
        let Some(c) = cursor.next() else {
            return Err(Err::Failure(RawError {
                at: input,
                kind: FailKind::CharClass,
            }));
        };
        let item = match c {
            ']' => {
                if pending_dash {
                    ranges.push(('-', '-'));
                }
                let ast = RegexAst::Class {
                    negated: negation.is_some(),
                    ranges,
                };
                return Ok((cursor.as_str(), ast));
            }
            '-' if !ranges.is_empty() && !pending_dash => {
                pending_dash = true;
                continue;
            }
            '\\' => {
                let at = cursor.as_str();
                match decode_escape(&mut cursor) {
                    Ok(Escape::Char(c)) => c,
                    Ok(Escape::Epsilon) => {
                        return Err(Err::Failure(RawError {
                            at: input,
                            kind: FailKind::CharClass,
                        }))
                    }
                    Err(_) => {
                        return Err(Err::Failure(RawError {
                            at,
                            kind: FailKind::Escape,
                        }))
                    }
                }
            }
            c => c,
        };
        if pending_dash {
            let (low, high) = ranges.last_mut().expect("guarded by pending_dash");
            if item < *low {
                return Err(Err::Failure(RawError {
                    at: input,
                    kind: FailKind::CharClass,
                }));
            }
            *high = item;
            pending_dash = false;
        } else {
            ranges.push((item, item));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::regex as parse_entry;
    use crate::regex::RegexAst;

    fn parse(input: &str) -> RegexAst {
        crate::parser::regex(input).unwrap().ast
    }

    #[test]
    fn literals_and_sequences() {
        assert_eq!(parse("a"), RegexAst::Literal('a'));
        assert_eq!(
            parse("ab"),
            RegexAst::Sequence(vec![RegexAst::Literal('a'), RegexAst::Literal('b')])
        );
        assert_eq!(parse(""), RegexAst::Empty);
    }

    #[test]
    fn alternation_is_flattened() {
        assert_eq!(
            parse("a|b|c"),
            RegexAst::Alt(vec![
                RegexAst::Literal('a'),
                RegexAst::Literal('b'),
                RegexAst::Literal('c'),
            ])
        );
    }

    #[test]
    fn empty_alternates() {
        assert_eq!(
            parse("a|"),
            RegexAst::Alt(vec![RegexAst::Literal('a'), RegexAst::Empty])
        );
    }

    #[test]
    fn postfix_binds_tighter_than_concatenation() {
        assert_eq!(
            parse("ab*"),
            RegexAst::Sequence(vec![
                RegexAst::Literal('a'),
                RegexAst::Star(Box::new(RegexAst::Literal('b'))),
            ])
        );
    }

    #[test]
    fn grouping() {
        assert_eq!(
            parse("(ab)+"),
            RegexAst::Plus(Box::new(RegexAst::Sequence(vec![
                RegexAst::Literal('a'),
                RegexAst::Literal('b'),
            ])))
        );
    }

    #[test]
    fn classes() {
        assert_eq!(
            parse("[a-z0]"),
            RegexAst::Class {
                negated: false,
                ranges: vec![('a', 'z'), ('0', '0')],
            }
        );
        assert_eq!(
            parse("[^ab]"),
            RegexAst::Class {
                negated: true,
                ranges: vec![('a', 'a'), ('b', 'b')],
            }
        );
        // Leading and trailing dashes are literal
        assert_eq!(
            parse("[-a-]"),
            RegexAst::Class {
                negated: false,
                ranges: vec![('-', '-'), ('a', 'a'), ('-', '-')],
            }
        );
        // An escaped `]` does not close the class
        assert_eq!(
            parse("[\\]]"),
            RegexAst::Class {
                negated: false,
                ranges: vec![(']', ']')],
            }
        );
        // The empty class is legal and matches nothing
        assert_eq!(
            parse("[]"),
            RegexAst::Class {
                negated: false,
                ranges: vec![],
            }
        );
    }

    #[test]
    fn escapes_and_predefined_classes() {
        assert_eq!(parse("\\+"), RegexAst::Literal('+'));
        assert_eq!(parse("\\n"), RegexAst::Literal('\n'));
        assert_eq!(parse("\\e"), RegexAst::Empty);
        assert_eq!(
            parse("\\d"),
            RegexAst::Class {
                negated: false,
                ranges: DIGIT.to_vec(),
            }
        );
        assert_eq!(
            parse("\\W"),
            RegexAst::Class {
                negated: true,
                ranges: WORD.to_vec(),
            }
        );
    }

    #[test]
    fn malformed_patterns() {
        use crate::parser::RegexError;
        assert!(matches!(
            parse_entry("[ab"),
            Err(RegexError::BadCharClass(_))
        ));
        assert!(matches!(
            parse_entry("[z-a]"),
            Err(RegexError::BadCharClass(_))
        ));
        assert!(matches!(
            parse_entry("\\x4"),
            Err(RegexError::BadEscape(_))
        ));
        assert!(matches!(parse_entry("(a"), Err(RegexError::BadRegex(_))));
        assert!(matches!(parse_entry("a)b"), Err(RegexError::BadRegex(_))));
    }
}

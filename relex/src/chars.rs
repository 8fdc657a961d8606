//! # Character utilities
//! Escape-sequence decoding and line splitting shared by the regular expression parser, the
//! automaton description format and the lexicon format. Escapes follow the usual C-style
//! mnemonics plus `\e`, which denotes an epsilon transition in the contexts that allow one:
//!
//! | Sequence | Result |
//! |----------|--------|
//! | `\a` `\b` `\f` `\n` `\r` `\t` `\v` `\\` | the corresponding control character / backslash |
//! | `\e` | epsilon ([`Escape::Epsilon`]) |
//! | `\xHH` | the byte value of two hex digits |
//! | `\uHHHH` | the scalar value of four hex digits |
//! | any other `\X` | the literal character `X` |
//!
//! ```
//! use relex::chars::{decode_escape, Escape};
//!
//! let mut cursor = "n rest".chars();
//! assert_eq!(decode_escape(&mut cursor), Ok(Escape::Char('\n')));
//! assert_eq!(cursor.as_str(), " rest");
//!
//! let mut cursor = "e".chars();
//! assert_eq!(decode_escape(&mut cursor), Ok(Escape::Epsilon));
//! ```

use std::str::Chars;
use thiserror::Error;

/// The result of decoding one escape sequence: either an ordinary character, or epsilon.
/// Epsilon is not a character of the alphabet and never matches input; it only ever labels
/// epsilon transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    Char(char),
    Epsilon,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("'{0}' is not a hex digit")]
    BadHexDigit(char),
    #[error("escape sequence ended early")]
    UnexpectedEnd,
    #[error("{0:#x} is not a unicode scalar value")]
    NotAScalarValue(u32),
}

/// Decodes one escape sequence from `cursor`, which must be positioned just *after* the
/// backslash. The cursor is advanced past the escape body. Unknown single-character escapes
/// decode to the character itself, so `\-` is a literal `-` and `\]` a literal `]`.
pub fn decode_escape(cursor: &mut Chars) -> Result<Escape, EscapeError> {
    let c = cursor.next().ok_or(EscapeError::UnexpectedEnd)?;
    let decoded = match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'e' => return Ok(Escape::Epsilon),
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        'x' => hex_escape(cursor, 2)?,
        'u' => hex_escape(cursor, 4)?,
        other => other,
    };
    Ok(Escape::Char(decoded))
}

fn hex_escape(cursor: &mut Chars, digits: u32) -> Result<char, EscapeError> {
    let mut value = 0u32;
    for _ in 0..digits {
        let c = cursor.next().ok_or(EscapeError::UnexpectedEnd)?;
        let digit = c.to_digit(16).ok_or(EscapeError::BadHexDigit(c))?;
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or(EscapeError::NotAScalarValue(value))
}

/// An iterator over the lines of a buffer, splitting on `\n` and excluding the terminator.
/// A trailing line without a newline is included; a trailing newline does not produce an
/// extra empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find('\n') {
            Some(idx) => {
                let (line, tail) = rest.split_at(idx);
                self.rest = (!tail[1..].is_empty()).then_some(&tail[1..]);
                Some(line)
            }
            None => {
                self.rest = None;
                (!rest.is_empty()).then_some(rest)
            }
        }
    }
}

/// Splits `buffer` into line views. See [`Lines`].
///
/// ```
/// use relex::chars::split_lines;
///
/// let lines: Vec<&str> = split_lines("one\ntwo\n\nfour").collect();
/// assert_eq!(lines, ["one", "two", "", "four"]);
/// ```
pub fn split_lines(buffer: &str) -> Lines<'_> {
    Lines { rest: Some(buffer) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> Result<Escape, EscapeError> {
        decode_escape(&mut s.chars())
    }

    #[test]
    fn mnemonic_escapes() {
        assert_eq!(decode("a"), Ok(Escape::Char('\u{07}')));
        assert_eq!(decode("b"), Ok(Escape::Char('\u{08}')));
        assert_eq!(decode("f"), Ok(Escape::Char('\u{0C}')));
        assert_eq!(decode("n"), Ok(Escape::Char('\n')));
        assert_eq!(decode("r"), Ok(Escape::Char('\r')));
        assert_eq!(decode("t"), Ok(Escape::Char('\t')));
        assert_eq!(decode("v"), Ok(Escape::Char('\u{0B}')));
        assert_eq!(decode("\\"), Ok(Escape::Char('\\')));
        assert_eq!(decode("e"), Ok(Escape::Epsilon));
    }

    #[test]
    fn literal_passthrough() {
        assert_eq!(decode("+"), Ok(Escape::Char('+')));
        assert_eq!(decode("-"), Ok(Escape::Char('-')));
        assert_eq!(decode("]"), Ok(Escape::Char(']')));
        assert_eq!(decode("ö"), Ok(Escape::Char('ö')));
    }

    #[test]
    fn hex_escapes() {
        assert_eq!(decode("x3A"), Ok(Escape::Char(':')));
        assert_eq!(decode("x00"), Ok(Escape::Char('\0')));
        assert_eq!(decode("u0051"), Ok(Escape::Char('Q')));
        assert_eq!(decode("u20AC"), Ok(Escape::Char('€')));
    }

    #[test]
    fn bad_hex_escapes() {
        assert_eq!(decode("xZ0"), Err(EscapeError::BadHexDigit('Z')));
        assert_eq!(decode("u00G0"), Err(EscapeError::BadHexDigit('G')));
        assert_eq!(decode("x1"), Err(EscapeError::UnexpectedEnd));
        assert_eq!(decode(""), Err(EscapeError::UnexpectedEnd));
        // Surrogates are not scalar values
        assert_eq!(decode("uD800"), Err(EscapeError::NotAScalarValue(0xD800)));
    }

    #[test]
    fn cursor_is_left_after_the_escape() {
        let mut cursor = "x41rest".chars();
        assert_eq!(decode_escape(&mut cursor), Ok(Escape::Char('A')));
        assert_eq!(cursor.as_str(), "rest");
    }

    #[test]
    fn line_splitting() {
        let collect = |s: &'static str| split_lines(s).collect::<Vec<_>>();
        assert_eq!(collect("a\nb\nc"), ["a", "b", "c"]);
        assert_eq!(collect("a\nb\nc\n"), ["a", "b", "c"]);
        assert_eq!(collect("a\n\nc"), ["a", "", "c"]);
        assert_eq!(collect("one line"), ["one line"]);
        assert_eq!(collect(""), Vec::<&str>::new());
        assert_eq!(collect("\n"), [""]);
    }
}

//! Low-level input cursor
//!
//! Byte-oriented view over the input text: whitespace skipping, literal
//! matching, string reading with full escape decoding and number token
//! scanning. The grammar driver in the parent module owns all structural
//! decisions; the cursor only consumes the characters a token grammatically
//! owns and reports precise positions on failure.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// A scanned number token, still in textual form
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberToken<'s> {
    /// The literal exactly as written
    pub text: &'s str,
    /// Whether a fractional part or exponent was present
    pub is_float: bool,
}

/// Cursor over the input with one byte of lookahead
#[derive(Debug)]
pub(crate) struct Cursor<'s> {
    input: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(input: &'s str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the next byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume and return the next byte
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// The character at the cursor, for error reporting
    pub fn current_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\u{FFFD}')
    }

    /// Skip space, tab, newline and carriage return
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Consume `byte` or fail with position context
    pub fn expect_byte(&mut self, byte: u8, expected: &'static str) -> Result<()> {
        match self.peek() {
            Some(found) if found == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(Error::unexpected_token(
                self.pos,
                expected,
                self.current_char(),
            )),
            None => Err(Error::end_of_input(self.pos)),
        }
    }

    /// Consume a keyword literal (`true`, `false`, `null`).
    ///
    /// The literal must not run into an identifier character: `truex` is a
    /// malformed token, not `true` followed by trailing data.
    pub fn eat_literal(&mut self, literal: &'static str) -> Result<()> {
        let remaining = &self.input.as_bytes()[self.pos..];
        if remaining.len() >= literal.len() {
            let followed_by_ident = matches!(
                remaining.get(literal.len()),
                Some(b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_')
            );
            if &remaining[..literal.len()] == literal.as_bytes() && !followed_by_ident {
                self.pos += literal.len();
                return Ok(());
            }
            Err(Error::unexpected_token(
                self.pos,
                "value",
                self.current_char(),
            ))
        } else if literal.as_bytes().starts_with(remaining) {
            Err(Error::end_of_input(self.input.len()))
        } else {
            Err(Error::unexpected_token(
                self.pos,
                "value",
                self.current_char(),
            ))
        }
    }

    /// Read a quoted string, decoding escapes.
    ///
    /// Borrows the input when the string contains no escapes; otherwise
    /// decodes into a fresh buffer. The cursor must be positioned on the
    /// opening quote.
    pub fn read_string(&mut self) -> Result<Cow<'s, str>> {
        self.expect_byte(b'"', "string")?;
        let start = self.pos;

        loop {
            match self.peek() {
                None => return Err(Error::end_of_input(self.pos)),
                Some(b'"') => {
                    let text = &self.input[start..self.pos];
                    self.pos += 1;
                    return Ok(Cow::Borrowed(text));
                }
                Some(b'\\') => {
                    // Escape found; switch to the decoding path from the
                    // start of the string body.
                    let prefix = &self.input[start..self.pos];
                    return self.read_string_escaped(prefix);
                }
                Some(byte) if byte < 0x20 => {
                    return Err(Error::unexpected_token(
                        self.pos,
                        "string character",
                        self.current_char(),
                    ));
                }
                Some(_) => {
                    self.pos += 1;
                }
            }
        }
    }

    /// Slow path for strings containing at least one escape; `prefix` is the
    /// already-scanned escape-free head of the string body.
    fn read_string_escaped(&mut self, prefix: &str) -> Result<Cow<'s, str>> {
        let mut decoded = String::with_capacity(prefix.len() + 16);
        decoded.push_str(prefix);

        loop {
            match self.bump() {
                None => return Err(Error::end_of_input(self.pos)),
                Some(b'"') => return Ok(Cow::Owned(decoded)),
                Some(b'\\') => self.decode_escape(&mut decoded)?,
                Some(byte) if byte < 0x20 => {
                    return Err(Error::unexpected_token(
                        self.pos - 1,
                        "string character",
                        char::from(byte),
                    ));
                }
                Some(byte) => {
                    // Raw bytes are valid UTF-8 by construction of &str;
                    // copy the whole multi-byte sequence as-is.
                    let char_start = self.pos - 1;
                    let mut width = utf8_width(byte);
                    while width > 1 {
                        self.pos += 1;
                        width -= 1;
                    }
                    decoded.push_str(&self.input[char_start..self.pos]);
                }
            }
        }
    }

    /// Decode one escape sequence; the backslash is already consumed
    fn decode_escape(&mut self, decoded: &mut String) -> Result<()> {
        let escape_pos = self.pos - 1;
        let Some(marker) = self.bump() else {
            return Err(Error::end_of_input(self.pos));
        };
        match marker {
            b'"' => decoded.push('"'),
            b'\\' => decoded.push('\\'),
            b'/' => decoded.push('/'),
            b'b' => decoded.push('\u{0008}'),
            b'f' => decoded.push('\u{000C}'),
            b'n' => decoded.push('\n'),
            b'r' => decoded.push('\r'),
            b't' => decoded.push('\t'),
            b'u' => {
                let unit = self.read_hex4(escape_pos)?;
                let ch = match unit {
                    0xD800..=0xDBFF => self.combine_surrogate(escape_pos, unit)?,
                    0xDC00..=0xDFFF => {
                        return Err(Error::invalid_escape(
                            escape_pos,
                            "lone low surrogate".to_string(),
                        ));
                    }
                    unit => char::from_u32(u32::from(unit)).ok_or_else(|| {
                        Error::invalid_escape(escape_pos, "invalid code point".to_string())
                    })?,
                };
                decoded.push(ch);
            }
            other => {
                return Err(Error::invalid_escape(
                    escape_pos,
                    format!("unrecognized escape character {:?}", char::from(other)),
                ));
            }
        }
        Ok(())
    }

    /// Read four hex digits of a `\u` escape
    fn read_hex4(&mut self, escape_pos: usize) -> Result<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let Some(byte) = self.bump() else {
                return Err(Error::end_of_input(self.pos));
            };
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => {
                    return Err(Error::invalid_escape(
                        escape_pos,
                        "malformed \\u escape: expected four hex digits".to_string(),
                    ));
                }
            };
            unit = (unit << 4) | u16::from(digit);
        }
        Ok(unit)
    }

    /// Combine a high surrogate with its trailing low surrogate
    fn combine_surrogate(&mut self, escape_pos: usize, high: u16) -> Result<char> {
        if self.bump() != Some(b'\\') || self.bump() != Some(b'u') {
            return Err(Error::invalid_escape(
                escape_pos,
                "high surrogate not followed by \\u escape".to_string(),
            ));
        }
        let low = self.read_hex4(escape_pos)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(Error::invalid_escape(
                escape_pos,
                "high surrogate not followed by low surrogate".to_string(),
            ));
        }
        let code =
            0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
        char::from_u32(code)
            .ok_or_else(|| Error::invalid_escape(escape_pos, "invalid surrogate pair".to_string()))
    }

    /// Scan a number token and classify it as integer or float.
    ///
    /// The cursor must be positioned on `-` or a digit. Leading zeros are
    /// rejected per the JSON grammar.
    pub fn read_number(&mut self) -> Result<NumberToken<'s>> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        self.read_digits(true)?;

        let mut is_float = false;
        if self.peek() == Some(b'.') {
            is_float = true;
            self.pos += 1;
            self.read_digits(false)?;
        }
        if let Some(b'e' | b'E') = self.peek() {
            is_float = true;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.read_digits(false)?;
        }

        Ok(NumberToken {
            text: &self.input[start..self.pos],
            is_float,
        })
    }

    /// Consume one or more digits; `integer_part` additionally enforces the
    /// no-leading-zero rule
    fn read_digits(&mut self, integer_part: bool) -> Result<()> {
        let first = match self.peek() {
            Some(byte @ b'0'..=b'9') => byte,
            Some(_) => {
                return Err(Error::unexpected_token(
                    self.pos,
                    "digit",
                    self.current_char(),
                ));
            }
            None => return Err(Error::end_of_input(self.pos)),
        };
        self.pos += 1;

        if integer_part && first == b'0' {
            if let Some(b'0'..=b'9') = self.peek() {
                return Err(Error::unexpected_token(
                    self.pos,
                    "'.', exponent or end of number",
                    self.current_char(),
                ));
            }
            return Ok(());
        }

        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        Ok(())
    }
}

/// Byte width of a UTF-8 sequence given its first byte
fn utf8_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(input: &str) -> Result<String> {
        let mut cursor = Cursor::new(input);
        cursor.read_string().map(|s| s.into_owned())
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n x");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some(b'x'));
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_read_plain_string_borrows() {
        let mut cursor = Cursor::new("\"hello\" tail");
        let result = cursor.read_string().unwrap();
        assert!(matches!(result, Cow::Borrowed("hello")));
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn test_read_string_with_escapes() {
        assert_eq!(read_str(r#""a\"b\\c\/d""#).unwrap(), "a\"b\\c/d");
        assert_eq!(read_str(r#""\b\f\n\r\t""#).unwrap(), "\u{8}\u{c}\n\r\t");
        assert_eq!(read_str(r#""Aé""#).unwrap(), "Aé");
    }

    #[test]
    fn test_surrogate_pair_decoding() {
        // U+1F980, crab
        assert_eq!(read_str(r#""\ud83e\udd80""#).unwrap(), "\u{1F980}");
    }

    #[test]
    fn test_lone_surrogate_rejected() {
        assert!(matches!(
            read_str(r#""\ud83e""#).unwrap_err(),
            Error::InvalidEscape { .. }
        ));
        assert!(matches!(
            read_str(r#""\udd80""#).unwrap_err(),
            Error::InvalidEscape { .. }
        ));
    }

    #[test]
    fn test_unknown_escape_rejected() {
        assert!(matches!(
            read_str(r#""\x""#).unwrap_err(),
            Error::InvalidEscape { .. }
        ));
    }

    #[test]
    fn test_malformed_unicode_escape_rejected() {
        assert!(matches!(
            read_str(r#""\u12g4""#).unwrap_err(),
            Error::InvalidEscape { .. }
        ));
    }

    #[test]
    fn test_unterminated_string() {
        assert!(matches!(
            read_str("\"abc").unwrap_err(),
            Error::UnexpectedEndOfInput { .. }
        ));
    }

    #[test]
    fn test_raw_control_character_rejected() {
        assert!(matches!(
            read_str("\"a\u{1}b\"").unwrap_err(),
            Error::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_multibyte_passthrough_in_escaped_string() {
        assert_eq!(read_str("\"é\\n日\"").unwrap(), "é\n日");
    }

    #[test]
    fn test_eat_literal_stops_at_non_identifier() {
        for tail in ["", ",", "]", "}", " x"] {
            let input = format!("true{tail}");
            let mut cursor = Cursor::new(&input);
            assert!(cursor.eat_literal("true").is_ok(), "should accept {input:?}");
            assert_eq!(cursor.position(), 4);
        }
    }

    #[test]
    fn test_eat_literal_rejects_identifier_run_on() {
        for (input, literal) in [("truex", "true"), ("nulla", "null"), ("false_", "false"), ("true1", "true")] {
            let mut cursor = Cursor::new(input);
            assert!(
                matches!(
                    cursor.eat_literal(literal).unwrap_err(),
                    Error::UnexpectedToken { position: 0, .. }
                ),
                "should reject {input:?} at the literal"
            );
        }
    }

    #[test]
    fn test_number_classification() {
        let mut cursor = Cursor::new("42");
        let token = cursor.read_number().unwrap();
        assert_eq!(token.text, "42");
        assert!(!token.is_float);

        let mut cursor = Cursor::new("-3.14");
        let token = cursor.read_number().unwrap();
        assert_eq!(token.text, "-3.14");
        assert!(token.is_float);

        let mut cursor = Cursor::new("1e-9,");
        let token = cursor.read_number().unwrap();
        assert_eq!(token.text, "1e-9");
        assert!(token.is_float);
    }

    #[test]
    fn test_number_leading_zero_rejected() {
        let mut cursor = Cursor::new("012");
        assert!(cursor.read_number().is_err());

        // A plain zero and a zero with fraction are fine.
        let mut cursor = Cursor::new("0");
        assert!(!cursor.read_number().unwrap().is_float);
        let mut cursor = Cursor::new("0.5");
        assert!(cursor.read_number().unwrap().is_float);
    }

    #[test]
    fn test_number_incomplete_forms() {
        for input in ["-", "1.", "2e", "3e+"] {
            let mut cursor = Cursor::new(input);
            assert!(cursor.read_number().is_err(), "should reject {input:?}");
        }
    }
}

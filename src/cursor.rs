//! Token cursor
//!
//! A stateful view over a byte buffer with primitive consume operations. Both the STEP
//! value decoders ([`crate::step::value`]) and the EXPRESS schema grammar
//! ([`crate::express::grammar`]) parse by threading a `&mut Cursor` through a set of
//! per-construct functions; nothing here knows about either grammar.

use crate::error::ParseError;

/// A byte-range view `[pos, end)` into a borrowed buffer.
///
/// Cursors are transient: they borrow from the input and must not outlive it (§5).
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            buf: input.as_bytes(),
            pos: 0,
        }
    }

    /// Absolute byte offset of the cursor, for error reporting.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte at the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Consume and return the next byte, regardless of its value.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Advance past ASCII spaces, tabs, newlines, and carriage returns.
    ///
    /// When `skip_commas` is set, `,` is also treated as insignificant whitespace; the
    /// STEP grammar never needs this (commas are meaningful separators there), but the
    /// EXPRESS grammar's opaque-segment skipping does.
    pub fn skip_whitespace(&mut self, skip_commas: bool) {
        while let Some(b) = self.peek() {
            let is_ws = matches!(b, b' ' | b'\t' | b'\n' | b'\r') || (skip_commas && b == b',');
            if !is_ws {
                break;
            }
            self.pos += 1;
        }
    }

    /// Destructive single-byte match. Fails (without advancing) if the next byte isn't `c`.
    pub fn consume(&mut self, c: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(b) if b == c => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(ParseError::syntax(
                self.pos,
                format!("expected '{}'", c as char),
            )),
        }
    }

    /// Returns true and advances past `c` if present; otherwise leaves the cursor untouched.
    pub fn try_consume(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Match a literal keyword (case-sensitive), advancing past it on success.
    pub fn consume_str(&mut self, s: &str) -> Result<(), ParseError> {
        let bytes = s.as_bytes();
        if self.buf[self.pos..].starts_with(bytes) {
            self.pos += bytes.len();
            Ok(())
        } else {
            Err(ParseError::syntax(self.pos, format!("expected '{s}'")))
        }
    }

    /// True if the upcoming bytes match `s`, without consuming.
    pub fn peek_str(&self, s: &str) -> bool {
        self.buf[self.pos..].starts_with(s.as_bytes())
    }

    /// Return the slice up to (excluding) the first byte in `stop_set`. The cursor is left
    /// pointing at the stop byte, or at `end` if none of `stop_set` occurs.
    pub fn take_until(&mut self, stop_set: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if stop_set.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        std::str::from_utf8(&self.buf[start..self.pos]).unwrap_or_default()
    }

    /// Consume bytes until the exact sentinel substring `sentinel` is found, leaving the
    /// cursor positioned right before it. Used for EXPRESS opaque segments (INVERSE/WHERE/
    /// UNIQUE/DERIVE clause bodies, trailing type/entity decorations) which are discarded
    /// rather than parsed. Fails if the sentinel never appears.
    pub fn take_until_sentinel(&mut self, sentinel: &str) -> Result<&'a str, ParseError> {
        let start = self.pos;
        let rest = std::str::from_utf8(&self.buf[self.pos..]).unwrap_or_default();
        match rest.find(sentinel) {
            Some(idx) => {
                self.pos += idx;
                Ok(&rest[..idx])
            }
            None => Err(ParseError::syntax(
                start,
                format!("expected to find '{sentinel}' before end of input"),
            )),
        }
    }

    /// Parse a base-10 signed integer. Fails if no digit is consumed.
    pub fn parse_int(&mut self) -> Result<i64, ParseError> {
        let start = self.pos;
        let neg = self.try_consume(b'-');
        let digits_start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            self.pos = start;
            return Err(ParseError::syntax(start, "expected an integer"));
        }
        let text = std::str::from_utf8(&self.buf[digits_start..self.pos]).unwrap();
        let mut value: i64 = text
            .parse()
            .map_err(|_| ParseError::syntax(start, "integer literal out of range"))?;
        if neg {
            value = -value;
        }
        Ok(value)
    }

    /// Parse a base-10 unsigned integer. Fails if no digit is consumed.
    pub fn parse_uint(&mut self) -> Result<u64, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(ParseError::syntax(start, "expected an unsigned integer"));
        }
        let text = std::str::from_utf8(&self.buf[start..self.pos]).unwrap();
        text.parse()
            .map_err(|_| ParseError::syntax(start, "integer literal out of range"))
    }

    /// Parse a real: `[-]digits['.'digits]['e'|'E'['+'|'-']digits]`. A bare trailing dot
    /// (`86.`) is valid STEP syntax and parses as `86.0`.
    pub fn parse_real(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        self.try_consume(b'-');
        let mut saw_digit = false;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
            saw_digit = true;
        }
        if self.try_consume(b'.') {
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
                saw_digit = true;
            }
        }
        if !saw_digit {
            self.pos = start;
            return Err(ParseError::syntax(start, "expected a real number"));
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let exp_start = self.pos;
            self.pos += 1;
            self.try_consume(b'+');
            self.try_consume(b'-');
            let exp_digits_start = self.pos;
            while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
            }
            if self.pos == exp_digits_start {
                // Not actually an exponent; back out and leave the 'e' unconsumed.
                self.pos = exp_start;
            }
        }
        let text = std::str::from_utf8(&self.buf[start..self.pos]).unwrap();
        text.parse()
            .map_err(|_| ParseError::syntax(start, "real literal out of range"))
    }

    /// Remaining unconsumed input, for diagnostics.
    pub fn remaining(&self) -> &'a str {
        std::str::from_utf8(&self.buf[self.pos..]).unwrap_or_default()
    }
}

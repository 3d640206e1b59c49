//! STEP value decoders (§4.B)
//!
//! Each function decodes exactly one STEP Part 21 value and leaves the cursor positioned
//! at the following attribute separator (`,` or `)`). These are the leaf primitives a
//! generated entity's `decode` routine composes to populate its attributes; the
//! composition itself (which decoder to call for which attribute) is the code generator's
//! job, not this module's.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::step::entity::Reference;

/// EXPRESS `LOGICAL`: tri-valued, written `.T.` / `.F.` / `.U.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logical {
    True,
    False,
    Unknown,
}

/// `'text'`, with `''` as an embedded single quote. Byte-scanning for the ASCII `'`
/// delimiter is UTF-8 safe: `'` (0x27) never occurs as a continuation or lead byte of a
/// multi-byte sequence, so every segment returned by `take_until` is a valid `&str` slice.
pub fn decode_string(c: &mut Cursor) -> Result<String, ParseError> {
    let start = c.offset();
    c.consume(b'\'')?;
    let mut out = String::new();
    loop {
        out.push_str(c.take_until(b"'"));
        if c.peek().is_none() {
            return Err(ParseError::syntax(start, "unterminated string literal"));
        }
        c.bump();
        if c.peek() == Some(b'\'') {
            out.push('\'');
            c.bump();
            continue;
        }
        break;
    }
    Ok(out)
}

/// `123` / `-5`.
pub fn decode_integer(c: &mut Cursor) -> Result<i64, ParseError> {
    c.parse_int()
}

/// `1.2` / `-0.5` / `1.2e3` / `86.`.
pub fn decode_real(c: &mut Cursor) -> Result<f64, ParseError> {
    c.parse_real()
}

/// `.T.` / `.F.` / `.U.`.
pub fn decode_logical(c: &mut Cursor) -> Result<Logical, ParseError> {
    let start = c.offset();
    let s = decode_enum_literal(c)?;
    match s.as_str() {
        "T" => Ok(Logical::True),
        "F" => Ok(Logical::False),
        "U" => Ok(Logical::Unknown),
        other => Err(ParseError::syntax(
            start,
            format!("invalid logical literal '.{other}.'"),
        )),
    }
}

/// The raw spelling between dots of a `.FOO.` enum literal, without validating it
/// against a specific enum's member set — that validation is [`decode_enum`]'s job, since
/// only the caller knows which enum type the attribute expects.
pub fn decode_enum_literal(c: &mut Cursor) -> Result<String, ParseError> {
    let start = c.offset();
    c.consume(b'.')?;
    let s = c.take_until(b".");
    if s.is_empty() {
        return Err(ParseError::syntax(start, "empty enumerator"));
    }
    let owned = s.to_string();
    c.consume(b'.')?;
    Ok(owned)
}

/// Decode a `.FOO.` literal into a generated enum type, raising
/// [`ParseError::UnknownEnumerator`] (not panicking) when `FOO` isn't one of `E`'s variants.
pub fn decode_enum<E: std::str::FromStr>(
    c: &mut Cursor,
    enum_name: &'static str,
) -> Result<E, ParseError> {
    let raw = decode_enum_literal(c)?;
    raw.parse::<E>()
        .map_err(|_| ParseError::UnknownEnumerator {
            enum_name,
            value: raw,
        })
}

/// `#123` → the raw integer id. The resolver (§4.E), not this function, turns it into a
/// live reference.
pub fn decode_reference_placeholder(c: &mut Cursor) -> Result<u64, ParseError> {
    c.consume(b'#')?;
    c.parse_uint()
}

/// A mandatory reference attribute: `#123` becomes a placeholder, `$` or `*` becomes
/// [`Reference::null`] (derived attributes resolve to nothing; see §3.2).
pub fn decode_reference<T>(c: &mut Cursor) -> Result<Reference<T>, ParseError> {
    match c.peek() {
        Some(b'$') | Some(b'*') => {
            c.bump();
            Ok(Reference::null())
        }
        Some(b'#') => Ok(Reference::placeholder(decode_reference_placeholder(c)?)),
        _ => Err(ParseError::syntax(
            c.offset(),
            "expected a reference, '$', or '*'",
        )),
    }
}

/// An optional reference attribute: `$` becomes `None`; anything else decodes as
/// [`decode_reference`].
pub fn decode_optional_reference<T>(
    c: &mut Cursor,
) -> Result<Option<Reference<T>>, ParseError> {
    if c.peek() == Some(b'$') {
        c.bump();
        return Ok(None);
    }
    Ok(Some(decode_reference(c)?))
}

/// An optional attribute of any other (non-reference) type: `$` or `*` becomes `None`.
pub fn decode_optional<T>(
    c: &mut Cursor,
    inner: impl FnOnce(&mut Cursor) -> Result<T, ParseError>,
) -> Result<Option<T>, ParseError> {
    match c.peek() {
        Some(b'$') | Some(b'*') => {
            c.bump();
            Ok(None)
        }
        _ => Ok(Some(inner(c)?)),
    }
}

/// `(a, b, …)`, possibly empty. `inner` is invoked once per element; nested lists and
/// nested typed wrappers work by passing a closure that itself calls `decode_list` or
/// [`decode_typed_wrapper_name`].
pub fn decode_list<T>(
    c: &mut Cursor,
    mut inner: impl FnMut(&mut Cursor) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    c.skip_whitespace(false);
    c.consume(b'(')?;
    let mut items = Vec::new();
    c.skip_whitespace(false);
    if c.peek() == Some(b')') {
        c.bump();
        return Ok(items);
    }
    loop {
        c.skip_whitespace(false);
        items.push(inner(c)?);
        c.skip_whitespace(false);
        if c.try_consume(b',') {
            continue;
        }
        break;
    }
    c.skip_whitespace(false);
    c.consume(b')')?;
    Ok(items)
}

/// As [`decode_list`], but raises [`ParseError::ListBoundsViolation`] when the decoded
/// length falls outside `[min, max]`. Bounds enforcement is opt-in per §9's resolved open
/// question; most generated decoders call [`decode_list`] directly.
pub fn decode_list_bounded<T>(
    c: &mut Cursor,
    min: usize,
    max: usize,
    inner: impl FnMut(&mut Cursor) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    let items = decode_list(c, inner)?;
    if items.len() < min || items.len() > max {
        return Err(ParseError::ListBoundsViolation {
            min,
            max,
            actual: items.len(),
        });
    }
    Ok(items)
}

/// The `NAME` of a `NAME(...)` typed wrapper (a disambiguated SELECT value), with the
/// opening `(` already consumed. The caller decodes the inner value using whatever
/// decoder `NAME` maps to for the select in question, then must consume the closing `)`
/// itself — only the caller (the select's generated decode routine) knows the branch's
/// inner type.
pub fn decode_typed_wrapper_name(c: &mut Cursor) -> Result<String, ParseError> {
    c.skip_whitespace(false);
    let start = c.offset();
    let name = c.take_until(b"(");
    if name.is_empty() {
        return Err(ParseError::syntax(start, "expected a typed-wrapper name"));
    }
    c.consume(b'(')?;
    Ok(name.to_string())
}

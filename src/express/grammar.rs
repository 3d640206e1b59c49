//! EXPRESS schema grammar
//!
//! Hand-rolled recursive descent over [`Cursor`], one function per production in
//! SPEC_FULL.md §4.F. No external PEG/combinator crate: §9's "Grammar tooling" note
//! explicitly allows this, and `original_source`'s Boost.Spirit grammar is translated
//! production-for-production rather than transliterated line-for-line.

use std::str::FromStr;

use crate::cursor::Cursor;
use crate::error::SchemaError;
use crate::express::ast::{Kind, Member, MemberType, Schema, Type, UNBOUNDED};

/// Parse a complete EXPRESS schema.
pub fn parse_schema(input: &str) -> Result<Schema, SchemaError> {
    let mut c = Cursor::new(input);
    skip_ws_and_comments(&mut c);
    c.consume_str("SCHEMA")?;
    skip_ws_and_comments(&mut c);
    let name = read_token(&mut c, b";")?.to_string();
    skip_ws_and_comments(&mut c);
    c.consume(b';')?;

    let mut types = Vec::new();
    loop {
        skip_ws_and_comments(&mut c);
        if c.peek_str("END_SCHEMA") {
            break;
        }
        types.push(parse_decl(&mut c)?);
    }
    c.consume_str("END_SCHEMA")?;
    skip_ws_and_comments(&mut c);
    c.try_consume(b';');

    Ok(Schema::new(name, types))
}

fn skip_ws_and_comments(c: &mut Cursor) {
    loop {
        c.skip_whitespace(false);
        if c.peek_str("(*") {
            // unwrap: peek_str already confirmed the literal is present.
            c.consume_str("(*").unwrap();
            let _ = c.take_until_sentinel("*)");
            let _ = c.consume_str("*)");
            continue;
        }
        break;
    }
}

/// Skip leading whitespace, then return the run of non-whitespace bytes up to (and
/// stopping at) the first byte in `extra_stops`. Fails if the result is empty.
fn read_token<'a>(c: &mut Cursor<'a>, extra_stops: &[u8]) -> Result<&'a str, SchemaError> {
    c.skip_whitespace(false);
    let start = c.offset();
    let mut stops = vec![b' ', b'\t', b'\r', b'\n'];
    stops.extend_from_slice(extra_stops);
    let s = c.take_until(&stops);
    if s.is_empty() {
        return Err(SchemaError::syntax(start, "expected an identifier"));
    }
    Ok(s)
}

/// Non-destructive lookahead at the next whitespace/punctuation-delimited word.
fn peek_word(c: &Cursor) -> String {
    let mut probe = c.clone();
    probe.skip_whitespace(false);
    probe.take_until(b" \t\r\n:;(=").to_string()
}

fn parse_decl(c: &mut Cursor) -> Result<Type, SchemaError> {
    skip_ws_and_comments(c);
    if c.peek_str("ENTITY") {
        return parse_entity(c);
    }
    if c.peek_str("TYPE") {
        let mut probe = c.clone();
        probe.consume_str("TYPE")?;
        probe.skip_whitespace(false);
        probe.take_until(b"= \t\r\n");
        probe.skip_whitespace(false);
        probe.consume(b'=')?;
        probe.skip_whitespace(false);
        return match peek_word(&probe).as_str() {
            "ENUMERATION" => parse_enum(c),
            "SELECT" => parse_select(c),
            _ => parse_type_alias_or_primitive(c),
        };
    }
    Err(SchemaError::syntax(
        c.offset(),
        "expected a TYPE or ENTITY declaration",
    ))
}

/// `"(" ident ("," ident)* ")"`, used identically by `enum_decl` and `select_decl`.
fn parse_paren_ident_list(c: &mut Cursor) -> Result<Vec<String>, SchemaError> {
    c.skip_whitespace(false);
    c.consume(b'(')?;
    let mut items = Vec::new();
    loop {
        let item = read_token(c, b",)")?.to_string();
        items.push(item);
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

fn parse_enum(c: &mut Cursor) -> Result<Type, SchemaError> {
    c.consume_str("TYPE")?;
    let name = read_token(c, b"=")?.to_string();
    c.skip_whitespace(false);
    c.consume(b'=')?;
    c.skip_whitespace(false);
    c.consume_str("ENUMERATION")?;
    c.skip_whitespace(false);
    c.consume_str("OF")?;
    let details = parse_paren_ident_list(c)?;
    c.take_until_sentinel("END_TYPE;")?;
    c.consume_str("END_TYPE;")?;

    let mut ty = Type::new(name, Kind::Enum);
    ty.details = details;
    Ok(ty)
}

fn parse_select(c: &mut Cursor) -> Result<Type, SchemaError> {
    c.consume_str("TYPE")?;
    let name = read_token(c, b"=")?.to_string();
    c.skip_whitespace(false);
    c.consume(b'=')?;
    c.skip_whitespace(false);
    c.consume_str("SELECT")?;
    let details = parse_paren_ident_list(c)?;
    c.take_until_sentinel("END_TYPE;")?;
    c.consume_str("END_TYPE;")?;

    let mut ty = Type::new(name, Kind::Select);
    ty.details = details;
    Ok(ty)
}

const PRIMITIVE_KEYWORDS: &[&str] = &[
    "BOOL", "LOGICAL", "REAL", "NUMBER", "STRING", "INTEGER", "ENTITY", "ENUM", "BINARY",
    "SELECT",
];

fn parse_type_alias_or_primitive(c: &mut Cursor) -> Result<Type, SchemaError> {
    c.consume_str("TYPE")?;
    let name = read_token(c, b"=")?.to_string();
    c.skip_whitespace(false);
    c.consume(b'=')?;

    let mut ty = Type::new(name, Kind::Unknown);

    c.skip_whitespace(false);
    let word = peek_word(c);
    if matches!(word.as_str(), "LIST" | "ARRAY" | "SET") {
        ty.is_list = true;
        c.consume_str(&word)?;
        c.skip_whitespace(false);
        c.consume(b'[')?;
        c.skip_whitespace(false);
        ty.min_size = parse_bound(c)?;
        c.skip_whitespace(false);
        c.consume(b':')?;
        c.skip_whitespace(false);
        ty.max_size = parse_bound(c)?;
        c.skip_whitespace(false);
        c.consume(b']')?;
        c.skip_whitespace(false);
        c.consume_str("OF")?;
    }

    c.skip_whitespace(false);
    let word = peek_word(c);
    if PRIMITIVE_KEYWORDS.contains(&word.as_str()) {
        c.consume_str(&word)?;
        ty.kind = Kind::from_str(&word)
            .map_err(|_| SchemaError::syntax(c.offset(), format!("unknown primitive '{word}'")))?;
    } else {
        let target = read_token(c, b";")?.to_string();
        ty.kind = Kind::Alias;
        ty.alias_target = target;
    }

    c.take_until_sentinel("END_TYPE;")?;
    c.consume_str("END_TYPE;")?;
    Ok(ty)
}

fn parse_bound(c: &mut Cursor) -> Result<u32, SchemaError> {
    if c.peek() == Some(b'?') {
        c.bump();
        return Ok(UNBOUNDED);
    }
    let v = c.parse_uint()?;
    u32::try_from(v).map_err(|_| SchemaError::syntax(c.offset(), "bound out of range"))
}

fn skip_balanced_parens(c: &mut Cursor) -> Result<(), SchemaError> {
    let mut depth = 1usize;
    loop {
        match c.bump() {
            Some(b'(') => depth += 1,
            Some(b')') => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Some(_) => {}
            None => {
                return Err(SchemaError::syntax(
                    c.offset(),
                    "unterminated parenthesized group",
                ));
            }
        }
    }
}

fn parse_entity(c: &mut Cursor) -> Result<Type, SchemaError> {
    c.consume_str("ENTITY")?;
    let name = read_token(c, b";")?.to_string();
    let mut ty = Type::new(name, Kind::Entity);

    c.skip_whitespace(false);
    let word = peek_word(c);
    if word == "ABSTRACT" || word == "SUPERTYPE" {
        if word == "ABSTRACT" {
            c.consume_str("ABSTRACT")?;
            c.skip_whitespace(false);
        }
        c.consume_str("SUPERTYPE")?;
        c.skip_whitespace(false);
        c.consume_str("OF")?;
        c.skip_whitespace(false);
        c.consume(b'(')?;
        skip_balanced_parens(c)?;
    }

    c.skip_whitespace(false);
    if c.peek_str("SUBTYPE OF (") {
        c.consume_str("SUBTYPE OF (")?;
        let parent = read_token(c, b")")?.to_string();
        ty.subtype_of = parent;
        c.skip_whitespace(false);
        c.consume(b')')?;
    }

    c.skip_whitespace(false);
    c.consume(b';')?;

    loop {
        c.skip_whitespace(false);
        if c.peek_str("END_ENTITY;") {
            break;
        }
        let word = peek_word(c);
        if matches!(word.as_str(), "INVERSE" | "WHERE" | "UNIQUE" | "DERIVE") {
            c.consume_str(&word)?;
            c.take_until_sentinel("END_ENTITY;")?;
            break;
        }
        ty.members.push(parse_member(c)?);
    }
    c.consume_str("END_ENTITY;")?;
    Ok(ty)
}

fn parse_member(c: &mut Cursor) -> Result<Member, SchemaError> {
    let name = read_token(c, b":")?.to_string();
    c.skip_whitespace(false);
    c.consume(b':')?;
    c.skip_whitespace(false);

    let optional = if peek_word(c) == "OPTIONAL" {
        c.consume_str("OPTIONAL")?;
        true
    } else {
        false
    };

    let r#type = parse_member_type(c)?;
    c.skip_whitespace(false);
    c.consume(b';')?;
    Ok(Member {
        name,
        r#type,
        optional,
    })
}

fn parse_member_type(c: &mut Cursor) -> Result<MemberType, SchemaError> {
    c.skip_whitespace(false);
    if peek_word(c) == "UNIQUE" {
        c.consume_str("UNIQUE")?;
        c.skip_whitespace(false);
    }

    let word = peek_word(c);
    if matches!(word.as_str(), "LIST" | "ARRAY" | "SET") {
        c.consume_str(&word)?;
        c.skip_whitespace(false);
        c.consume(b'[')?;
        c.skip_whitespace(false);
        let min = parse_bound(c)?;
        c.skip_whitespace(false);
        c.consume(b':')?;
        c.skip_whitespace(false);
        let max = parse_bound(c)?;
        c.skip_whitespace(false);
        c.consume(b']')?;
        c.skip_whitespace(false);
        c.consume_str("OF")?;
        let inner = parse_member_type(c)?;
        Ok(MemberType::List {
            min,
            max,
            inner: Box::new(inner),
        })
    } else {
        let name = read_token(c, b";")?.to_string();
        Ok(MemberType::Named(name))
    }
}

//! Line splitter (§4.C)
//!
//! Pulls `{id, name, body}` out of a `#id = NAME(...);` instance line. Lines that don't
//! match this shape (header section markers, `ISO-10303-21;`, blank lines) yield `None`
//! rather than an error — the splitter's job is to recognize instance lines among
//! everything else a Part 21 file contains, not to validate the whole file.

use crate::cursor::Cursor;

/// A split instance line, borrowing from the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub id: u64,
    pub name: &'a str,
    pub body: &'a str,
}

/// Split one line of the form `#id = NAME(body);`. Leading/trailing whitespace around the
/// line is tolerated; anything that doesn't start with `#` and parse through to a matching
/// closing paren and `;` returns `None`.
pub fn split(line: &str) -> Option<Line<'_>> {
    let mut c = Cursor::new(line);
    c.skip_whitespace(false);
    if c.peek() != Some(b'#') {
        return None;
    }
    c.bump();
    let id = c.parse_uint().ok()?;
    c.skip_whitespace(false);
    if !c.try_consume(b'=') {
        return None;
    }
    c.skip_whitespace(false);

    let name = c.take_until(b"(");
    if name.is_empty() || c.peek() != Some(b'(') {
        return None;
    }
    c.bump();

    let body_start = c.offset();
    let body_end = find_matching_close_paren(&line.as_bytes()[body_start..])?;
    let body = &line[body_start..body_start + body_end];

    c = Cursor::new(&line[body_start + body_end + 1..]);
    c.skip_whitespace(false);
    if c.peek() != Some(b';') {
        return None;
    }

    Some(Line { id, name, body })
}

/// Find the index (relative to `buf`) of the `)` that closes the `(` implicitly opened at
/// `buf[0]`, tracking nested parens and skipping over `'...'` string literals (which may
/// themselves contain unbalanced or escaped parens/quotes).
fn find_matching_close_paren(buf: &[u8]) -> Option<usize> {
    let mut depth = 1i32;
    let mut i = 0;
    while i < buf.len() {
        match buf[i] {
            b'\'' => {
                i += 1;
                loop {
                    if i >= buf.len() {
                        return None;
                    }
                    if buf[i] == b'\'' {
                        if buf.get(i + 1) == Some(&b'\'') {
                            i += 2;
                            continue;
                        }
                        i += 1;
                        break;
                    }
                    i += 1;
                }
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

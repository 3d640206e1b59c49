//! Round-trip emission (§6.3)
//!
//! Turns a resolved [`crate::step::resolve::Container`] back into STEP Part 21 instance
//! lines. Each entity writes its own attribute list via [`crate::step::entity::RootEntity::write`];
//! this module supplies the shared `#id = NAME(...)` wrapping and the attribute-value
//! formatting helpers a generated `write` implementation calls into.

use crate::step::entity::Reference;
use crate::step::resolve::Container;

/// Threaded through every `write` call. Currently just a marker for future extension
/// (e.g. float formatting precision); entities borrow it by reference so adding fields
/// later doesn't change every `write` signature's shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct WriteContext;

/// Emit every entity in `container` as STEP Part 21 instance lines, one per line, in
/// container (insertion) order.
pub fn write(container: &Container) -> String {
    let ctx = WriteContext;
    let mut out = String::new();
    for entity in container.iter() {
        out.push('#');
        out.push_str(&entity.line_idx().to_string());
        out.push('=');
        out.push_str(entity.name());
        out.push('(');
        entity.write(&ctx, container, &mut out);
        out.push_str(");\n");
    }
    out
}

/// `'text'`, doubling embedded `'` as STEP requires.
pub fn write_string(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
}

/// STEP reals always carry a decimal point, even for integral values (`86.`, not `86`).
pub fn write_real(out: &mut String, v: f64) {
    let s = format!("{v}");
    out.push_str(&s);
    if !s.contains(['.', 'e', 'E']) {
        out.push('.');
    }
}

pub fn write_integer(out: &mut String, v: i64) {
    out.push_str(&v.to_string());
}

pub fn write_enum(out: &mut String, variant: &str) {
    out.push('.');
    out.push_str(variant);
    out.push('.');
}

/// A resolved, unresolved, or null [`Reference`]: `#id` once resolved, the still-pending
/// `#id` placeholder, or `$` if null. Writing an unresolved reference is legal (a caller
/// may re-emit a file without ever calling [`crate::step::resolve::Container::resolve`]).
pub fn write_reference<T>(out: &mut String, r: &Reference<T>, container: &Container) {
    if let Some(id) = r.entity_id() {
        if let Some(entity) = container.get(id) {
            out.push('#');
            out.push_str(&entity.line_idx().to_string());
            return;
        }
    }
    if let Some(placeholder) = r.placeholder_id() {
        out.push('#');
        out.push_str(&placeholder.to_string());
        return;
    }
    out.push('$');
}

pub fn write_absent(out: &mut String) {
    out.push('$');
}

pub fn write_list<T>(out: &mut String, items: &[T], mut write_item: impl FnMut(&mut String, &T)) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_item(out, item);
    }
    out.push(')');
}

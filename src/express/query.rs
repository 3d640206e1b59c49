//! Schema meta-model queries (§4.G)
//!
//! `is_list` and the alias-chasing it requires. The spec's open question on alias cycles
//! is resolved here: a malformed schema with a self-referential `ALIAS` chain raises
//! [`SchemaError::AliasCycle`] instead of recursing forever.

use crate::error::SchemaError;
use crate::express::ast::{Kind, Schema};

/// Bound on alias-chain depth before we conclude the schema has a cycle. The source
/// (`original_source/express/src/parse_exp.cc`) has no such guard; SPEC_FULL.md §9 adds one.
pub const MAX_ALIAS_DEPTH: usize = 32;

/// True when `type_name` is a list-typed declaration, or an alias chain whose terminal
/// type is list-typed. Unknown names return `false`.
pub fn is_list(schema: &Schema, type_name: &str) -> bool {
    try_is_list(schema, type_name).unwrap_or(false)
}

/// Same as [`is_list`] but surfaces [`SchemaError::AliasCycle`] instead of silently
/// returning `false` when the alias chain does not terminate within [`MAX_ALIAS_DEPTH`].
pub fn try_is_list(schema: &Schema, type_name: &str) -> Result<bool, SchemaError> {
    let mut current = type_name;
    for _ in 0..MAX_ALIAS_DEPTH {
        let Some(ty) = schema.get(current) else {
            return Ok(false);
        };
        if ty.kind != Kind::Alias {
            return Ok(ty.is_list);
        }
        current = &ty.alias_target;
    }
    Err(SchemaError::AliasCycle {
        type_name: type_name.to_string(),
        max_depth: MAX_ALIAS_DEPTH,
    })
}

//! Error taxonomy
//!
//! Two enums: [`ParseError`] for the STEP instance side (cursor, value decoders, line
//! splitter, selective parser), and [`SchemaError`] for the EXPRESS schema side. Both
//! carry enough context (byte offsets, offending literals) to produce a useful message
//! without a second pass over the input.

use thiserror::Error;

/// Errors raised while decoding STEP Part 21 values or dispatching entities.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("unknown enumerator '{value}' for enum {enum_name}")]
    UnknownEnumerator {
        enum_name: &'static str,
        value: String,
    },

    #[error("unknown select branch '{branch}' for select {select_name}")]
    UnknownSelectBranch {
        select_name: &'static str,
        branch: String,
    },

    #[error("value out of range at byte {offset}: {message}")]
    OutOfRange { offset: usize, message: String },

    #[error("list has {actual} elements, expected between {min} and {max}")]
    ListBoundsViolation {
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ParseError {
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }
}

/// Errors raised while parsing EXPRESS schema text or querying the resulting meta-model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("alias chain for '{type_name}' exceeds depth {max_depth}")]
    AliasCycle {
        type_name: String,
        max_depth: usize,
    },
}

impl SchemaError {
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }
}

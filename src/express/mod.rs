//! EXPRESS schema parser
//!
//! Turns EXPRESS schema text into the in-memory meta-model of [`ast`]: entities, enums,
//! selects, and type aliases. See SPEC_FULL.md §4.F/§4.G.

pub mod ast;
pub mod grammar;
pub mod query;

pub use ast::{Kind, Member, MemberType, Schema, Type, UNBOUNDED};
pub use grammar::parse_schema;
pub use query::{is_list, try_is_list};

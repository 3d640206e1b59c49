//! express-step: EXPRESS schema parser and selective STEP Part 21 instance parser
//!
//! This library provides two independent pieces that compose: [`express`] turns EXPRESS
//! schema text into an in-memory meta-model (entities, enums, selects, type aliases), and
//! [`step`] decodes STEP Part 21 instance lines into entity types generated from that
//! meta-model, resolving cross-references and re-emitting them. Neither half depends on
//! the other; a caller that already has generated entity types can use [`step`] alone.

pub mod cursor;
pub mod error;
pub mod express;
pub mod step;

pub use cursor::Cursor;
pub use error::{ParseError, SchemaError};
pub use express::{is_list, parse_schema, try_is_list, Kind, Member, MemberType, Schema, Type};
pub use step::{
    decode_enum, decode_integer, decode_list, decode_logical, decode_optional,
    decode_optional_reference, decode_real, decode_reference, decode_reference_placeholder,
    decode_string, decode_typed_wrapper_name, split, write, Container, DecodeEntity, EntityId,
    Line, Logical as StepLogical, PlaceholderIndex, Reference, RootEntity, SelectiveParser,
    WriteContext,
};

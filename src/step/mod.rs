//! Selective STEP Part 21 instance parser
//!
//! Given generated entity types that implement [`entity::DecodeEntity`], decodes instance
//! lines into those types, resolves cross-references through a [`resolve::Container`], and
//! re-emits them. See SPEC_FULL.md §4.B–§4.E and §6.3.

pub mod entity;
pub mod line;
pub mod registry;
pub mod resolve;
pub mod value;
pub mod write;

pub use entity::{DecodeEntity, EntityId, Reference, RootEntity};
pub use line::{split, Line};
pub use registry::SelectiveParser;
pub use resolve::{Container, PlaceholderIndex};
pub use value::{
    decode_enum, decode_enum_literal, decode_integer, decode_list, decode_list_bounded,
    decode_logical, decode_optional, decode_optional_reference, decode_real, decode_reference,
    decode_reference_placeholder, decode_string, decode_typed_wrapper_name, Logical,
};
pub use write::{write, WriteContext};

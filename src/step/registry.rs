//! Selective entity parser registry (§4.D)
//!
//! A name-keyed table of decode functions, one per registered entity type. This is the
//! "selective" half of the selective parser: an instance line whose name was never
//! registered yields `None` rather than an error, so a caller can parse just the entity
//! types it cares about out of a file that may reference many more.

use std::collections::HashMap;

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::step::entity::{DecodeEntity, RootEntity};

type DecodeFn = fn(&mut Cursor) -> Result<Box<dyn RootEntity>, ParseError>;

/// Maps entity keyword → decode function. Built once (typically at startup, by a
/// generated `register_all` or hand-picked `register` calls) and then used to parse many
/// instance lines.
#[derive(Default)]
pub struct SelectiveParser {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl SelectiveParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register entity type `E` under its [`DecodeEntity::NAME`]. Registering the same
    /// name twice replaces the earlier decoder.
    pub fn register<E: DecodeEntity + 'static>(&mut self) {
        self.decoders
            .insert(E::NAME, |c| E::decode(c).map(|e| Box::new(e) as Box<dyn RootEntity>));
    }

    /// True if `name` has a registered decoder.
    pub fn is_registered(&self, name: &str) -> bool {
        self.decoders.contains_key(name)
    }

    /// Decode `body` (an instance line's attribute list, without the enclosing parens) as
    /// `name`. `Ok(None)` if `name` isn't registered — this is the selectivity: unknown
    /// entity types are skipped, not errors. `Err` only for a registered type whose body
    /// fails to decode.
    pub fn parse(&self, name: &str, body: &str) -> Result<Option<Box<dyn RootEntity>>, ParseError> {
        let Some(decode) = self.decoders.get(name) else {
            return Ok(None);
        };
        let mut cursor = Cursor::new(body);
        let entity = decode(&mut cursor)?;
        Ok(Some(entity))
    }
}

/// Sugar for calling [`SelectiveParser::register`] over a list of entity types:
///
/// ```ignore
/// let mut parser = SelectiveParser::new();
/// register_many!(parser, IfcCartesianPoint, IfcOwnerHistory, IfcSiUnit);
/// ```
///
/// Rust has no variadic generics, so this is a declarative macro rather than a method.
#[macro_export]
macro_rules! register_many {
    ($parser:expr, $($entity:ty),+ $(,)?) => {
        $( $parser.register::<$entity>(); )+
    };
}

//! Selective entity parser (§4.D)
//!
//! The central design choice here (SPEC_FULL.md §5): entities are addressed by an
//! arena-index [`EntityId`] into a [`crate::step::resolve::Container`], not by `Rc`/`Arc`.
//! STEP instance graphs are routinely cyclic (an `IfcProduct` referencing its
//! `IfcOwnerHistory`, which references back through a chain of actors), and an index into
//! a flat `Vec` sidesteps reference-counting cycles entirely at the cost of needing a
//! container handle to dereference.
//!
//! [`RootEntity`] is the capability every decoded entity exposes once boxed; [`DecodeEntity`]
//! is the (non-object-safe) construction side a generated type implements so it can be
//! registered with a [`crate::step::registry::SelectiveParser`].

use std::any::Any;
use std::marker::PhantomData;

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::step::resolve::PlaceholderIndex;
use crate::step::write::WriteContext;

/// Index of a decoded entity within a [`crate::step::resolve::Container`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Capability set every generated entity type exposes as a trait object. Construction
/// (`decode`) isn't part of this trait because it produces `Self`, which isn't
/// object-safe; see [`DecodeEntity`].
pub trait RootEntity: Any {
    /// The entity's keyword, e.g. `"IFCCARTESIANPOINT"`.
    fn name(&self) -> &'static str;

    /// The `#id` this entity was instantiated under.
    fn line_idx(&self) -> u64;

    fn set_line_idx(&mut self, idx: u64);

    /// Rewrite every [`Reference`] attribute this entity holds from placeholder to
    /// resolved form, using `index` to look up `#id → EntityId`. Dangling placeholders
    /// (an id the container never saw) are left as placeholders; see SPEC_FULL.md §4.E.
    fn resolve(&mut self, index: &PlaceholderIndex);

    /// Emit this entity's STEP Part 21 instance line body (everything between the outer
    /// parens) to `out`. Takes `container` so reference attributes can look up the
    /// referent's `line_idx` to print as `#n`.
    fn write(&self, ctx: &WriteContext, container: &crate::step::resolve::Container, out: &mut String);

    fn as_any(&self) -> &dyn Any;
}

/// The construction side of an entity type: decode a body cursor into `Self`. Implemented
/// by generated entity types and registered via
/// [`crate::step::registry::SelectiveParser::register`].
pub trait DecodeEntity: RootEntity + Sized {
    /// The entity's STEP keyword, matched case-sensitively against a parsed line's name.
    const NAME: &'static str;

    fn decode(body: &mut Cursor) -> Result<Self, ParseError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefState {
    Null,
    Placeholder(u64),
    Resolved(EntityId),
}

/// A typed pointer to another entity (SPEC_FULL.md §4.B/§5). Before [`Reference::resolve`]
/// runs it carries either an integer placeholder (`#123`) or [`Reference::null`] (from a
/// `$` absent or `*` derived attribute); afterward it carries a direct [`EntityId`], or
/// stays a placeholder if the id never appeared in the container.
///
/// `T` is a zero-sized marker documenting the expected entity type; it is only consulted
/// by [`Reference::get`], which downcasts through [`RootEntity::as_any`].
#[derive(Debug, Clone, Copy)]
pub struct Reference<T> {
    state: RefState,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for Reference<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> PartialEq for Reference<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}
impl<T> Eq for Reference<T> {}

impl<T> Reference<T> {
    pub fn null() -> Self {
        Self {
            state: RefState::Null,
            _marker: PhantomData,
        }
    }

    pub fn placeholder(id: u64) -> Self {
        Self {
            state: RefState::Placeholder(id),
            _marker: PhantomData,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.state, RefState::Null)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, RefState::Resolved(_))
    }

    /// The raw `#id`, while still unresolved. `None` once resolved or if this is
    /// [`Reference::null`].
    pub fn placeholder_id(&self) -> Option<u64> {
        match self.state {
            RefState::Placeholder(id) => Some(id),
            _ => None,
        }
    }

    /// The resolved arena index, once [`Reference::resolve`] has run successfully.
    pub fn entity_id(&self) -> Option<EntityId> {
        match self.state {
            RefState::Resolved(id) => Some(id),
            _ => None,
        }
    }

    /// Rewrite a placeholder into a resolved id using `index`. A no-op for
    /// already-resolved or null references. Leaves the reference as a placeholder
    /// (rather than erroring) if `index` has no entry for the id — a dangling reference
    /// is a fact about the input file, not a parse failure.
    pub fn resolve(&mut self, index: &PlaceholderIndex) {
        if let RefState::Placeholder(id) = self.state {
            if let Some(entity_id) = index.lookup(id) {
                self.state = RefState::Resolved(entity_id);
            }
        }
    }
}

impl<T: RootEntity + 'static> Reference<T> {
    /// The referenced entity, downcast to `T`. `None` if unresolved, dangling, or if the
    /// resolved entity isn't actually a `T`.
    pub fn get<'a>(&self, container: &'a crate::step::resolve::Container) -> Option<&'a T> {
        let id = self.entity_id()?;
        container.get(id)?.as_any().downcast_ref::<T>()
    }
}

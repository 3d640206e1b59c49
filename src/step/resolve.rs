//! Resolver (§4.E)
//!
//! [`Container`] owns every decoded entity in a flat arena and a sparse `#id → EntityId`
//! index built as entities are ingested. [`Container::resolve`] is the single linear sweep
//! that rewrites every entity's placeholder references into resolved [`EntityId`]s.

use std::collections::HashMap;

use crate::step::entity::{EntityId, RootEntity};

/// A snapshot of the `#id → EntityId` mapping, handed to each entity's
/// [`RootEntity::resolve`] during a resolve sweep. Cloned once per sweep (not once per
/// entity) so the sweep can mutably borrow the entity arena while looking up ids.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderIndex(HashMap<u64, EntityId>);

impl PlaceholderIndex {
    pub fn lookup(&self, placeholder_id: u64) -> Option<EntityId> {
        self.0.get(&placeholder_id).copied()
    }

    #[cfg(test)]
    pub(crate) fn for_test(entries: Vec<(u64, EntityId)>) -> Self {
        Self(entries.into_iter().collect())
    }
}

/// Owns every decoded entity and resolves cross-references between them.
///
/// Entities are addressed by [`EntityId`] rather than `Rc`/`Arc`: STEP instance graphs are
/// routinely cyclic, and an arena index sidesteps reference counting entirely.
#[derive(Default)]
pub struct Container {
    entities: Vec<Box<dyn RootEntity>>,
    index: HashMap<u64, EntityId>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decoded entity under its `#id`. Returns the [`EntityId`] it can now be
    /// addressed by.
    pub fn insert(&mut self, placeholder_id: u64, mut entity: Box<dyn RootEntity>) -> EntityId {
        entity.set_line_idx(placeholder_id);
        let id = EntityId(self.entities.len());
        self.entities.push(entity);
        self.index.insert(placeholder_id, id);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn RootEntity> {
        self.entities.get(id.index()).map(|b| b.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut (dyn RootEntity + 'static)> {
        self.entities.get_mut(id.index()).map(|b| b.as_mut())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The container index for a given `#id`, once [`Container::insert`] has been called
    /// for it (resolution does not require a prior [`Container::resolve`] sweep).
    pub fn lookup(&self, placeholder_id: u64) -> Option<EntityId> {
        self.index.get(&placeholder_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RootEntity> {
        self.entities.iter().map(|b| b.as_ref())
    }

    /// Rewrite every entity's placeholder references into resolved ids, in one linear
    /// pass. Idempotent: already-resolved references and dangling placeholders are left
    /// untouched by [`crate::step::entity::Reference::resolve`].
    pub fn resolve(&mut self) {
        let index = PlaceholderIndex(self.index.clone());
        for entity in &mut self.entities {
            entity.resolve(&index);
        }
    }
}

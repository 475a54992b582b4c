//! Owned storage for spawned bodies with stable ids.

use rustc_hash::FxHashMap;

use crate::body::{Body, BodyId};

/// Spawned bodies in spawn order, indexed by [`BodyId`].
///
/// Spawn order is the fixed order in which collision pairs are enumerated.
/// Removal keeps the relative order of the remaining bodies.
#[derive(Debug, Clone, Default)]
pub struct BodyArena {
    bodies: Vec<Body>,
    index: FxHashMap<BodyId, usize>,
}

impl BodyArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, body: Body) {
        debug_assert!(!body.is_controlled(), "the arena only holds spawned bodies");
        debug_assert!(!self.index.contains_key(&body.id), "duplicate body id");
        self.index.insert(body.id, self.bodies.len());
        self.bodies.push(body);
    }

    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let slot = self.index.remove(&id)?;
        let body = self.bodies.remove(slot);
        for later in &self.bodies[slot..] {
            if let Some(entry) = self.index.get_mut(&later.id) {
                *entry -= 1;
            }
        }
        Some(body)
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.index.get(&id).map(|&slot| &self.bodies[slot])
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let slot = *self.index.get(&id)?;
        self.bodies.get_mut(slot)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access in spawn order. Ids and order cannot be changed through it.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

/// Returns mutable references to two distinct elements, `i < j`.
pub(crate) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (left, right) = bodies.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

//! Fixed-capacity slot pool for falling objects
//!
//! A flat arena of `Option` slots allocated once up front - the steady state
//! is allocation-free. Spawns claim the first inactive slot (lowest index
//! wins); when every slot is active the spawn is dropped, which is documented
//! behavior rather than an error. Slots self-heal as objects leave the
//! screen.

use super::state::FallingObject;

/// Pool of reusable falling-object slots
#[derive(Debug, Clone)]
pub struct ObjectPool {
    slots: Vec<Option<FallingObject>>,
}

impl ObjectPool {
    /// Create a pool with `capacity` inactive slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Activate `object` in the first inactive slot
    ///
    /// Returns the slot index, or `None` when the pool is saturated (the
    /// spawn is silently dropped).
    pub fn spawn(&mut self, object: FallingObject) -> Option<usize> {
        let slot = self.slots.iter().position(Option::is_none)?;
        self.slots[slot] = Some(object);
        Some(slot)
    }

    /// Advance every active object by `speed * dt`
    pub fn update(&mut self, dt: f32) {
        for object in self.slots.iter_mut().flatten() {
            object.pos.y += object.speed * dt;
        }
    }

    /// The object in `slot`, if that slot is active
    pub fn get(&self, slot: usize) -> Option<&FallingObject> {
        self.slots.get(slot)?.as_ref()
    }

    /// Mark a slot inactive. Idempotent; out-of-range indices are ignored.
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = None;
        }
    }

    /// Deactivate every slot
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Iterate active objects with their slot indices, in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &FallingObject)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|o| (i, o)))
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

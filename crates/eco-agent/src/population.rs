//! Slot-indexed storage for one species.
//!
//! # Layout
//!
//! Agents live in a `Vec<Option<T>>` indexed by their handle, so the field's
//! `Occupant` handles resolve in O(1).  Alongside it, `live` records the
//! acting order: initial population first, then each tick's newborns in the
//! order they were born.
//!
//! Newborns get a slot the moment they are born (they must be placeable on
//! the field) but only join `live` when the simulator enrolls them after the
//! sweep, so they never act in the tick they were born in.
//!
//! Slots of dead agents are recycled by [`Population::retain_alive`], which
//! the simulator calls only between sweeps.  A recycled handle therefore
//! never aliases an agent that is still referenced by the field.

use eco_core::Handle;

use crate::Animal;

/// All agents of one species, addressable by handle `I`.
pub struct Population<I: Handle, T: Animal> {
    slots: Vec<Option<T>>,
    free:  Vec<u32>,
    live:  Vec<I>,
}

impl<I: Handle, T: Animal> Default for Population<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Handle, T: Animal> Population<I, T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free:  Vec::new(),
            live:  Vec::new(),
        }
    }

    /// Store `agent` and return its handle.
    ///
    /// The agent is *not* enrolled in the acting order; call
    /// [`enroll`](Self::enroll) for that.
    pub fn insert(&mut self, agent: T) -> I {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(agent);
                I::from_slot(slot)
            }
            None => {
                let slot = self.slots.len() as u32;
                self.slots.push(Some(agent));
                I::from_slot(slot)
            }
        }
    }

    /// Append handles to the acting order.
    pub fn enroll<It: IntoIterator<Item = I>>(&mut self, ids: It) {
        self.live.extend(ids);
    }

    #[inline]
    pub fn get(&self, id: I) -> Option<&T> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// `true` if `id` resolves to an agent that is still alive.
    #[inline]
    pub fn is_alive(&self, id: I) -> bool {
        self.get(id).is_some_and(Animal::is_alive)
    }

    /// Enrolled handles in acting order.  May include agents that died
    /// during the current tick.
    #[inline]
    pub fn live(&self) -> &[I] {
        &self.live
    }

    /// Enrolled agents that are alive, in acting order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.live
            .iter()
            .filter_map(|&id| self.get(id).map(|agent| (id, agent)))
            .filter(|(_, agent)| agent.is_alive())
    }

    /// Number of enrolled agents that are alive.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every dead agent, recycle its slot, and remove it from the
    /// acting order.  Returns how many agents were dropped.
    pub fn retain_alive(&mut self) -> usize {
        let mut dropped = 0;
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.as_ref().is_some_and(|agent| !agent.is_alive()) {
                *entry = None;
                self.free.push(slot as u32);
                dropped += 1;
            }
        }
        let slots = &self.slots;
        self.live.retain(|id| slots.get(id.index()).is_some_and(Option::is_some));
        dropped
    }

    /// Forget every agent.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live.clear();
    }
}

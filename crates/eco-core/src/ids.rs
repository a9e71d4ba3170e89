//! Strongly typed agent handles.
//!
//! Agents never hold references to each other or to the grid.  Instead the
//! field stores a handle (`PreyId` / `PredatorId`) and the population store
//! resolves it to agent state.  Both handles are `Copy + Ord + Hash` so they
//! can be used as map keys without ceremony.

use std::fmt;
use std::hash::Hash;

/// Common interface of slot-indexed handles, used by generic stores.
pub trait Handle: Copy + Eq + Ord + Hash + fmt::Debug {
    /// Build a handle from a raw slot index.
    fn from_slot(slot: u32) -> Self;

    /// Cast to `usize` for direct use as a `Vec` index.
    fn index(self) -> usize;
}

/// Generate a typed handle wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl Handle for $name {
            #[inline(always)]
            fn from_slot(slot: u32) -> Self {
                $name(slot)
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Slot of a prey animal in its population store.
    pub struct PreyId(u32);
}

typed_id! {
    /// Slot of a predator in its population store.
    pub struct PredatorId(u32);
}

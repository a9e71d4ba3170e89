//! `eco-field` — the grid the ecology lives on.
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`occupant`]   | `Occupant` tagged variant (empty / prey / predator)        |
//! | [`field`]      | `Field` occupancy grid, placement and neighbour queries    |
//!
//! The field holds handles, not agents.  Agents remember their own
//! `Location`; the field maps locations back to handles.  Neither side owns
//! the other, which keeps the two-way association free of lifetime cycles.

pub mod field;
pub mod occupant;


pub use field::Field;
pub use occupant::Occupant;

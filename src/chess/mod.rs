//! Implementation of the chess environment: board primitives and position
//! state, move generation, and the make/undo machinery the search depends
//! on.

pub mod core;
pub mod position;

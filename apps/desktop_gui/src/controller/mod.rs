//! Controller layer: picker events and reducer-like state transitions.

pub mod events;

//! Controller layer: UI events, reducer-like state transitions, and the warning timer.

pub mod events;
pub mod orchestration;
pub mod reducer;

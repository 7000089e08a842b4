//! Controller layer: user input parsing, backend completions, and command dispatch.

pub mod events;
pub mod input;
pub mod orchestration;

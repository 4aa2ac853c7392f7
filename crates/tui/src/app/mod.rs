//! Interactive picker state and behavior.
//!
//! [`Picker`] pairs an [`Autocomplete`](autopick_core::Autocomplete)
//! controller with the terminal widgets that present it. Supporting modules
//! split the implementation into input handling and rendering.

mod actions;
mod render;
mod state;

pub use state::{PickOutcome, Picker};

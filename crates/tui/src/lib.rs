//! Terminal front-end for the `autopick` search-and-select controller.
//!
//! The crate renders the query input, the results list and the empty/error
//! state with `ratatui`, and translates terminal key and mouse events into
//! controller calls.

mod app;
mod input;
mod runtime;

pub use app::{PickOutcome, Picker};
pub use input::QueryInput;
pub use runtime::run;

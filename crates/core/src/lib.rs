//! Search-and-selection controller behind the `autopick` picker.
//!
//! The [`Autocomplete`] controller decides what to search, when to search it,
//! how to interpret the response and how the user moves through and commits a
//! result. Everything presentation-specific (terminal widgets, mouse capture,
//! key decoding) lives outside this crate; hosts feed it text, keys and pointer
//! events and read back state plus a queue of [`AutocompleteEvent`]s.

mod controller;
pub mod debounce;
mod error;
pub mod events;
pub mod fetch;
pub mod format;
pub mod pointer;
pub mod selection;
pub mod source;

pub use controller::{Autocomplete, AutocompleteBuilder, Key, ResultsStatus};
pub use debounce::{Clock, DEBOUNCE_DELAY, DebounceTimer, ManualClock, SystemClock};
pub use error::{AutocompleteError, FetchError};
pub use events::{AutocompleteEvent, Selection};
pub use fetch::{Fetcher, FileFetcher};
pub use format::{ResultsDisplay, ResultsExtractor, extract_results, format_display};
pub use pointer::{PointerBus, PointerEvent, PointerSubscription, Region};
pub use selection::Cursor;
pub use source::{RequestDescriptor, ResolvedSource, Source};

/// Field holding the identity of an item; copied into the committed value.
pub const IDENTITY_FIELD: &str = "id";

/// Text shown when a completed search produced zero matches.
pub const DEFAULT_NO_RESULTS_TEXT: &str = "No Results.";

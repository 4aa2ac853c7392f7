//! Search-as-you-type picker over local JSON collections or remote JSON
//! endpoints.
//!
//! The controller lives in `autopick-core` and the terminal front-end in
//! `autopick-tui`; this crate re-exports both and adds the directory and
//! logging helpers the binary uses.

pub mod app_dirs;
pub mod logging;

pub use autopick_core::{
	Autocomplete, AutocompleteBuilder, AutocompleteError, AutocompleteEvent, Clock,
	DEBOUNCE_DELAY, FetchError, Fetcher, FileFetcher, IDENTITY_FIELD, Key, PointerBus,
	PointerEvent, Region, RequestDescriptor, ResultsDisplay, ResultsExtractor, ResultsStatus,
	Selection, Source, SystemClock,
};
pub use autopick_tui::{PickOutcome, Picker, run};

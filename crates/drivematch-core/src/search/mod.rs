//! Instructor search-and-filter pipeline.
//!
//! # Module Organization
//!
//! - [`query`] - Search input and its translation to API parameters
//! - [`source`] - The backend seam the pipeline queries
//! - [`pipeline`] - Fetch, adapt, locally filter
//! - [`debounce`] - Quiet-period driver with stale-response discard
//! - [`generation`] - Request ticket counter

mod debounce;
mod generation;
mod pipeline;
mod query;
mod source;

pub use debounce::{DebouncedSearch, SearchSnapshot};
pub use generation::SearchGeneration;
pub use pipeline::SearchPipeline;
pub use query::{SearchInput, SearchQuery};
pub use source::InstructorSource;

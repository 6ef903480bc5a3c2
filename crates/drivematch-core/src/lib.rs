//! DriveMatch Core - instructor search for a driving-instructor marketplace.
//!
//! Turns a free-text query and a set of filters into the list of instructor
//! cards to display: the query is translated into API parameters, the
//! returned records are adapted into view models, and filters the API does
//! not support are applied locally.
//!
//! # Example
//!
//! ```rust,ignore
//! use drivematch_core::{HttpInstructorSource, SearchInput, SearchPipeline};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> drivematch_core::Result<()> {
//!     let source = HttpInstructorSource::from_env()?;
//!     let pipeline = SearchPipeline::new(Arc::new(source));
//!
//!     let input = SearchInput::new("Curitiba", Default::default());
//!     let instructors = pipeline.run(&input).await;
//!     println!("Found {} instructors", instructors.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use config::{ApiConfig, SearchConfig};
pub use error::{DriveMatchError, Result};
pub use models::{
    apply_local_filters, ExperienceBracket, FilterCriteria, InstructorRecord, InstructorUser,
    InstructorViewModel, LicenseFilter, LicenseType,
};
pub use network::HttpInstructorSource;
pub use search::{
    DebouncedSearch, InstructorSource, SearchGeneration, SearchInput, SearchPipeline, SearchQuery,
    SearchSnapshot,
};
pub use session::{Session, SessionHandle, SessionUser, UserRole};

//! Data models for DriveMatch.
//!
//! Wire types mirror the backend's JSON; view types are what the search
//! pipeline hands to callers.

mod filter;
mod instructor;

pub use filter::*;
pub use instructor::*;

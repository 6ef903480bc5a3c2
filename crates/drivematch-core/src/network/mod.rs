//! HTTP access to the marketplace API.

mod client;

pub use client::{HttpInstructorSource, INSTRUCTORS_PATH, INSTRUCTOR_SEARCH_PATH};

//! Backend seam for instructor lookups.

use super::query::SearchQuery;
use crate::error::Result;
use crate::models::InstructorRecord;
use async_trait::async_trait;

/// Something that can return raw instructor records.
///
/// The production implementation is
/// [`HttpInstructorSource`](crate::network::HttpInstructorSource).
#[async_trait]
pub trait InstructorSource: Send + Sync {
    /// Every instructor (`GET /public/instructor`).
    async fn fetch_all(&self) -> Result<Vec<InstructorRecord>>;

    /// Instructors matching `query` (`GET /public/instructor/search`).
    async fn search(&self, query: &SearchQuery) -> Result<Vec<InstructorRecord>>;
}

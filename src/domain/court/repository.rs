//! Court repository interface

use async_trait::async_trait;

use super::model::{Court, CourtDetails, CourtUpdate, NewCourt};
use crate::domain::DomainResult;

#[async_trait]
pub trait CourtRepository: Send + Sync {
    /// Insert a new court and return its generated id.
    ///
    /// Fails with `Conflict` on a duplicate name or an invalid
    /// type/venue reference (both enforced by the storage constraints).
    async fn insert(&self, court: NewCourt) -> DomainResult<i32>;

    /// Find a court by id
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Court>>;

    /// All courts joined with type and venue names
    async fn find_all_details(&self) -> DomainResult<Vec<CourtDetails>>;

    /// Apply a partial update. Fails with `NotFound` if the id does not exist.
    async fn update(&self, id: i32, changes: CourtUpdate) -> DomainResult<()>;

    /// Total number of courts
    async fn count(&self) -> DomainResult<u64>;
}

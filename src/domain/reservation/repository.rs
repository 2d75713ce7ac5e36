//! Reservation repository interface

use async_trait::async_trait;

use super::model::{
    BookingRequest, CourtUsage, Reservation, ReservationDetails, ReservationFilter,
    ReservationUpdate,
};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Atomically execute the tail of the booking workflow: check the
    /// (court, date, time) slot is free, resolve the requester by email
    /// (creating the user when absent) and insert the reservation.
    ///
    /// Runs inside a single storage transaction so a failed insert never
    /// leaves an orphan user behind. Returns the new reservation id.
    /// Fails with `Conflict` when the slot is already taken, including the
    /// race where a concurrent insert wins between check and insert (the
    /// storage-level unique index reports it).
    async fn book(&self, request: BookingRequest) -> DomainResult<i32>;

    /// Find a reservation by id
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Reservation joined with user/court/payment display fields
    async fn find_details_by_id(&self, id: i32) -> DomainResult<Option<ReservationDetails>>;

    /// All reservations with display fields, narrowed by the filter
    async fn find_all_details(
        &self,
        filter: ReservationFilter,
    ) -> DomainResult<Vec<ReservationDetails>>;

    /// Whether a reservation exists for the exact (court, date, time)
    /// triple, optionally excluding one reservation id (for updates).
    async fn slot_taken(
        &self,
        court_id: i32,
        date: &str,
        start_time: &str,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool>;

    /// Apply a partial update. Fails with `NotFound` if the id does not exist.
    async fn update(&self, id: i32, changes: ReservationUpdate) -> DomainResult<()>;

    /// Delete by id; returns whether a row was removed.
    async fn delete(&self, id: i32) -> DomainResult<bool>;

    /// Total number of reservations
    async fn count(&self) -> DomainResult<u64>;

    /// The court with the most reservations (first encountered on ties),
    /// or `None` when there are no courts at all.
    async fn most_reserved_court(&self) -> DomainResult<Option<CourtUsage>>;
}

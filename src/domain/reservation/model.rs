//! Reservation domain entity

use chrono::{DateTime, Utc};

/// A persisted court reservation (reserva)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub court_id: i32,
    /// Calendar date, "YYYY-MM-DD". Opaque to the engine; conflict
    /// detection compares it for exact equality only.
    pub date: String,
    /// Start time, "HH:MM". Exact-equality comparison as well: two
    /// reservations conflict only when their start times are identical,
    /// never by interval overlap.
    pub start_time: String,
    /// Duration in minutes
    pub duration_min: i32,
    pub players: i32,
    pub payment_method_id: i32,
    /// Assigned once at creation, second precision, never mutated
    pub created_at: DateTime<Utc>,
}

/// Input for the booking workflow.
///
/// The requester is identified by email: an existing user is reused as-is,
/// otherwise a new one is created with the supplied name.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub requester_name: String,
    pub requester_email: String,
    pub court_id: i32,
    pub date: String,
    pub start_time: String,
    pub duration_min: i32,
    pub players: i32,
    pub payment_method_id: i32,
}

/// Partial reservation update; `None` leaves the stored value unchanged.
///
/// Provided values are applied verbatim, including zero.
#[derive(Debug, Clone, Default)]
pub struct ReservationUpdate {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub duration_min: Option<i32>,
    pub players: Option<i32>,
    pub payment_method_id: Option<i32>,
}

impl ReservationUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start_time.is_none()
            && self.duration_min.is_none()
            && self.players.is_none()
            && self.payment_method_id.is_none()
    }

    /// Whether this update moves the reservation to a different slot
    pub fn changes_slot(&self) -> bool {
        self.date.is_some() || self.start_time.is_some()
    }
}

/// Reservation joined with denormalized display fields
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub user_name: String,
    pub user_email: String,
    pub court_name: String,
    pub payment_method: String,
}

/// Optional exact-match filters for reservation listing; ANDed together.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub date: Option<String>,
    pub court_id: Option<i32>,
    pub payment_method_id: Option<i32>,
}

/// Reservation count for a single court, used by the summary report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtUsage {
    pub court_name: String,
    pub reservations: i64,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_detected() {
        assert!(ReservationUpdate::default().is_empty());
        let update = ReservationUpdate {
            duration_min: Some(0),
            ..Default::default()
        };
        // zero counts as provided
        assert!(!update.is_empty());
    }

    #[test]
    fn slot_change_detection() {
        let mut update = ReservationUpdate::default();
        assert!(!update.changes_slot());

        update.players = Some(8);
        assert!(!update.changes_slot());

        update.start_time = Some("11:00".to_string());
        assert!(update.changes_slot());
    }
}

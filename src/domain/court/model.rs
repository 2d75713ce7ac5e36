//! Court domain entity

/// A bookable court (cancha)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Court {
    pub id: i32,
    /// Court name, unique across all courts
    pub name: String,
    pub court_type_id: i32,
    pub venue_id: i32,
    /// Maximum number of players; positive
    pub capacity: i32,
}

/// Fields required to create a court
#[derive(Debug, Clone)]
pub struct NewCourt {
    pub name: String,
    pub court_type_id: i32,
    pub venue_id: i32,
    pub capacity: i32,
}

/// Partial court update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct CourtUpdate {
    pub name: Option<String>,
    pub court_type_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub capacity: Option<i32>,
}

impl CourtUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.court_type_id.is_none()
            && self.venue_id.is_none()
            && self.capacity.is_none()
    }
}

/// Court joined with its type and venue names for display.
///
/// The names come from LEFT JOINs, hence `Option`.
#[derive(Debug, Clone)]
pub struct CourtDetails {
    pub court: Court,
    pub court_type_name: Option<String>,
    pub venue_name: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_detected() {
        assert!(CourtUpdate::default().is_empty());
        let update = CourtUpdate {
            capacity: Some(0),
            ..Default::default()
        };
        // zero is a provided value, not "absent"
        assert!(!update.is_empty());
    }
}

//! Reservation engine
//!
//! The booking workflow, partial updates, deletion and the summary report.
//! Conflict policy: two reservations collide only when their court, date
//! and start time are all exactly equal; intervals are never compared.

use std::sync::Arc;

use tracing::info;

use crate::domain::reservation::{
    BookingRequest, CourtUsage, ReservationDetails, ReservationFilter, ReservationUpdate,
};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Tunable behavior of the reservation engine.
#[derive(Debug, Clone)]
pub struct BookingPolicy {
    /// Re-run the slot conflict check when an update changes fecha/hora.
    ///
    /// The historical behavior skipped it, silently allowing an update to
    /// double-book a slot; the storage unique index now rejects that
    /// regardless, this flag only controls the explicit pre-check.
    pub recheck_conflict_on_update: bool,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            recheck_conflict_on_update: true,
        }
    }
}

/// Booking use cases on top of the repositories.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    policy: BookingPolicy,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, policy: BookingPolicy) -> Self {
        Self { repos, policy }
    }

    /// Create a reservation.
    ///
    /// Ordered, short-circuiting steps: court existence, payment method
    /// existence, then an atomic conflict-check + user-resolution + insert
    /// in the repository. Returns the stored row joined with display fields.
    pub async fn create(&self, request: BookingRequest) -> DomainResult<ReservationDetails> {
        if self.repos.courts().find_by_id(request.court_id).await?.is_none() {
            return Err(DomainError::InvalidReference(
                "La cancha seleccionada no existe.".to_string(),
            ));
        }

        self.ensure_payment_method(request.payment_method_id).await?;

        let id = self.repos.reservations().book(request).await?;
        info!("Reservation {} created", id);

        self.repos
            .reservations()
            .find_details_by_id(id)
            .await?
            .ok_or_else(|| {
                DomainError::Storage(format!("reserva {} desapareció tras la inserción", id))
            })
    }

    /// Apply a partial update to a reservation.
    ///
    /// Only provided fields change. A provided payment method is
    /// re-validated first; a slot change re-runs the conflict check when
    /// the policy asks for it.
    pub async fn update(&self, id: i32, changes: ReservationUpdate) -> DomainResult<()> {
        let Some(current) = self.repos.reservations().find_by_id(id).await? else {
            return Err(DomainError::NotFound("Reserva no encontrada".to_string()));
        };

        if let Some(payment_method_id) = changes.payment_method_id {
            self.ensure_payment_method(payment_method_id).await?;
        }

        if self.policy.recheck_conflict_on_update && changes.changes_slot() {
            let date = changes.date.as_deref().unwrap_or(&current.date);
            let start_time = changes.start_time.as_deref().unwrap_or(&current.start_time);
            let taken = self
                .repos
                .reservations()
                .slot_taken(current.court_id, date, start_time, Some(id))
                .await?;
            if taken {
                return Err(DomainError::Conflict(
                    "Ya existe una reserva para esa cancha en la fecha y hora seleccionadas."
                        .to_string(),
                ));
            }
        }

        self.repos.reservations().update(id, changes).await
    }

    /// Delete a reservation by id.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repos.reservations().delete(id).await? {
            return Err(DomainError::NotFound("Reserva no encontrada".to_string()));
        }
        info!("Reservation {} deleted", id);
        Ok(())
    }

    /// List reservations with display fields, narrowed by the filter.
    pub async fn list(&self, filter: ReservationFilter) -> DomainResult<Vec<ReservationDetails>> {
        self.repos.reservations().find_all_details(filter).await
    }

    /// Aggregate statistics for the summary endpoint.
    pub async fn summary(&self) -> DomainResult<SummaryStats> {
        let total_courts = self.repos.courts().count().await?;
        let total_reservations = self.repos.reservations().count().await?;

        // With zero reservations the LEFT JOIN would still surface an
        // arbitrary court with count 0; report null instead.
        let most_reserved = if total_reservations == 0 {
            None
        } else {
            self.repos.reservations().most_reserved_court().await?
        };

        Ok(SummaryStats {
            total_courts,
            total_reservations,
            most_reserved,
        })
    }

    async fn ensure_payment_method(&self, id: i32) -> DomainResult<()> {
        if self
            .repos
            .reference()
            .payment_method_by_id(id)
            .await?
            .is_none()
        {
            return Err(DomainError::InvalidReference(
                "Método de pago inválido.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Summary report: totals plus the busiest court.
#[derive(Debug, Clone)]
pub struct SummaryStats {
    pub total_courts: u64,
    pub total_reservations: u64,
    pub most_reserved: Option<CourtUsage>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::court::NewCourt;
    use crate::domain::user::NewUser;
    use crate::infrastructure::database::entities::{court_type, payment_method, venue};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;
    use sea_orm::{Database, EntityTrait, Set};
    use sea_orm_migration::MigratorTrait;

    async fn setup() -> (Arc<dyn RepositoryProvider>, BookingService) {
        setup_with_policy(BookingPolicy::default()).await
    }

    async fn setup_with_policy(
        policy: BookingPolicy,
    ) -> (Arc<dyn RepositoryProvider>, BookingService) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        venue::Entity::insert(venue::ActiveModel {
            nombre: Set("Sede Central".to_string()),
            direccion: Set(Some("Av. Principal 123".to_string())),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap();

        court_type::Entity::insert(court_type::ActiveModel {
            nombre: Set("Fútbol 5".to_string()),
            ..Default::default()
        })
        .exec(&db)
        .await
        .unwrap();

        payment_method::Entity::insert_many([
            payment_method::ActiveModel {
                metodo: Set("Efectivo".to_string()),
                ..Default::default()
            },
            payment_method::ActiveModel {
                metodo: Set("Tarjeta".to_string()),
                ..Default::default()
            },
        ])
        .exec(&db)
        .await
        .unwrap();

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        for name in ["Cancha 1", "Cancha 2"] {
            repos
                .courts()
                .insert(NewCourt {
                    name: name.to_string(),
                    court_type_id: 1,
                    venue_id: 1,
                    capacity: 10,
                })
                .await
                .unwrap();
        }

        let service = BookingService::new(repos.clone(), policy);
        (repos, service)
    }

    fn booking(court_id: i32, start_time: &str) -> BookingRequest {
        BookingRequest {
            requester_name: "Juan Pérez".to_string(),
            requester_email: "juanp@example.com".to_string(),
            court_id,
            date: "2026-09-01".to_string(),
            start_time: start_time.to_string(),
            duration_min: 90,
            players: 10,
            payment_method_id: 1,
        }
    }

    #[tokio::test]
    async fn create_returns_joined_record() {
        let (_, service) = setup().await;

        let details = service.create(booking(1, "10:00")).await.unwrap();
        assert_eq!(details.court_name, "Cancha 1");
        assert_eq!(details.payment_method, "Efectivo");
        assert_eq!(details.user_name, "Juan Pérez");
        assert_eq!(details.user_email, "juanp@example.com");
        assert_eq!(details.reservation.date, "2026-09-01");
        assert_eq!(details.reservation.start_time, "10:00");
        // second precision
        assert_eq!(
            details.reservation.created_at.timestamp_subsec_nanos(),
            0
        );
    }

    #[tokio::test]
    async fn same_slot_conflicts_different_time_succeeds() {
        let (_, service) = setup().await;

        service.create(booking(1, "10:00")).await.unwrap();

        let err = service.create(booking(1, "10:00")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // same court and date, different start time
        let ok = service.create(booking(1, "11:00")).await.unwrap();
        assert_eq!(ok.reservation.start_time, "11:00");

        // same slot on a different court
        service.create(booking(2, "10:00")).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_court_is_invalid_reference() {
        let (repos, service) = setup().await;

        let err = service.create(booking(99, "10:00")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));
        // short-circuits before any write
        assert_eq!(repos.reservations().count().await.unwrap(), 0);
        assert!(repos.users().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_payment_method_is_invalid_reference() {
        let (repos, service) = setup().await;

        let mut request = booking(1, "10:00");
        request.payment_method_id = 99;
        let err = service.create(request).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));
        assert_eq!(repos.reservations().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn existing_email_reuses_user_untouched() {
        let (repos, service) = setup().await;

        let existing_id = repos
            .users()
            .insert(NewUser {
                name: "Juan Pérez".to_string(),
                email: "juanp@example.com".to_string(),
                phone: Some("341-111-0001".to_string()),
            })
            .await
            .unwrap();

        let mut request = booking(1, "10:00");
        request.requester_name = "Otro Nombre".to_string();
        let details = service.create(request).await.unwrap();

        assert_eq!(details.reservation.user_id, existing_id);
        // stored name and phone unchanged despite the different supplied name
        let stored = repos.users().find_by_id(existing_id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Juan Pérez");
        assert_eq!(stored.phone.as_deref(), Some("341-111-0001"));
        assert_eq!(repos.users().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn new_email_creates_exactly_one_user() {
        let (repos, service) = setup().await;

        let details = service.create(booking(1, "10:00")).await.unwrap();

        let users = repos.users().find_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, details.reservation.user_id);
        assert_eq!(users[0].name, "Juan Pérez");
        assert_eq!(users[0].email, "juanp@example.com");
        assert_eq!(users[0].phone, None);
    }

    #[tokio::test]
    async fn update_applies_only_provided_fields() {
        let (repos, service) = setup().await;
        let created = service.create(booking(1, "10:00")).await.unwrap();
        let id = created.reservation.id;

        service
            .update(
                id,
                ReservationUpdate {
                    players: Some(6),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = repos.reservations().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.players, 6);
        // untouched fields keep their values
        assert_eq!(stored.date, "2026-09-01");
        assert_eq!(stored.start_time, "10:00");
        assert_eq!(stored.duration_min, 90);
        assert_eq!(stored.created_at, created.reservation.created_at);
    }

    #[tokio::test]
    async fn update_accepts_explicit_zero() {
        let (repos, service) = setup().await;
        let id = service.create(booking(1, "10:00")).await.unwrap().reservation.id;

        service
            .update(
                id,
                ReservationUpdate {
                    duration_min: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = repos.reservations().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.duration_min, 0);
    }

    #[tokio::test]
    async fn update_with_invalid_payment_leaves_store_unchanged() {
        let (repos, service) = setup().await;
        let id = service.create(booking(1, "10:00")).await.unwrap().reservation.id;

        let err = service
            .update(
                id,
                ReservationUpdate {
                    duration_min: Some(120),
                    payment_method_id: Some(99),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidReference(_)));

        let stored = repos.reservations().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.duration_min, 90);
        assert_eq!(stored.payment_method_id, 1);
    }

    #[tokio::test]
    async fn update_valid_payment_is_applied() {
        let (repos, service) = setup().await;
        let id = service.create(booking(1, "10:00")).await.unwrap().reservation.id;

        service
            .update(
                id,
                ReservationUpdate {
                    payment_method_id: Some(2),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = repos.reservations().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.payment_method_id, 2);
    }

    #[tokio::test]
    async fn update_missing_reservation_is_not_found() {
        let (_, service) = setup().await;
        let err = service
            .update(999, ReservationUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_onto_taken_slot_conflicts() {
        let (_, service) = setup().await;
        service.create(booking(1, "10:00")).await.unwrap();
        let id = service.create(booking(1, "11:00")).await.unwrap().reservation.id;

        let err = service
            .update(
                id,
                ReservationUpdate {
                    start_time: Some("10:00".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // moving to a free slot works
        service
            .update(
                id,
                ReservationUpdate {
                    start_time: Some("12:00".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn recheck_policy_off_still_blocked_by_unique_index() {
        let (_, service) = setup_with_policy(BookingPolicy {
            recheck_conflict_on_update: false,
        })
        .await;
        service.create(booking(1, "10:00")).await.unwrap();
        let id = service.create(booking(1, "11:00")).await.unwrap().reservation.id;

        // the pre-check is skipped but the storage index still rejects it
        let err = service
            .update(
                id,
                ReservationUpdate {
                    start_time: Some("10:00".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let (_, service) = setup().await;
        let err = service.delete(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (repos, service) = setup().await;
        let id = service.create(booking(1, "10:00")).await.unwrap().reservation.id;

        service.delete(id).await.unwrap();
        assert!(repos.reservations().find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_filters_are_anded() {
        let (_, service) = setup().await;
        service.create(booking(1, "10:00")).await.unwrap();
        service.create(booking(1, "11:00")).await.unwrap();
        service.create(booking(2, "10:00")).await.unwrap();

        let all = service.list(ReservationFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let court1 = service
            .list(ReservationFilter {
                court_id: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(court1.len(), 2);

        let narrowed = service
            .list(ReservationFilter {
                date: Some("2026-09-01".to_string()),
                court_id: Some(2),
                payment_method_id: Some(1),
            })
            .await
            .unwrap();
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].court_name, "Cancha 2");

        let none = service
            .list(ReservationFilter {
                date: Some("2030-01-01".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn summary_on_empty_reservations() {
        let (_, service) = setup().await;
        let stats = service.summary().await.unwrap();
        assert_eq!(stats.total_courts, 2);
        assert_eq!(stats.total_reservations, 0);
        assert!(stats.most_reserved.is_none());
    }

    #[tokio::test]
    async fn summary_reports_busiest_court() {
        let (_, service) = setup().await;
        service.create(booking(1, "10:00")).await.unwrap();
        service.create(booking(1, "11:00")).await.unwrap();
        service.create(booking(2, "10:00")).await.unwrap();

        let stats = service.summary().await.unwrap();
        assert_eq!(stats.total_reservations, 3);
        let busiest = stats.most_reserved.unwrap();
        assert_eq!(busiest.court_name, "Cancha 1");
        assert_eq!(busiest.reservations, 2);
    }

    #[tokio::test]
    async fn duplicate_court_name_conflicts() {
        let (repos, _) = setup().await;
        let err = repos
            .courts()
            .insert(NewCourt {
                name: "Cancha 1".to_string(),
                court_type_id: 1,
                venue_id: 1,
                capacity: 5,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn court_with_invalid_reference_conflicts() {
        let (repos, _) = setup().await;
        let err = repos
            .courts()
            .insert(NewCourt {
                name: "Cancha 3".to_string(),
                court_type_id: 99,
                venue_id: 1,
                capacity: 5,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let (repos, _) = setup().await;
        let new_user = |name: &str| NewUser {
            name: name.to_string(),
            email: "juanp@example.com".to_string(),
            phone: None,
        };
        repos.users().insert(new_user("Juan Pérez")).await.unwrap();
        let err = repos.users().insert(new_user("Otro")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}

//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::court::CourtRepository;
use crate::domain::reference::ReferenceDataRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::user::UserRepository;

use super::court_repository::SeaOrmCourtRepository;
use super::reference_repository::SeaOrmReferenceDataRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    reference: SeaOrmReferenceDataRepository,
    courts: SeaOrmCourtRepository,
    users: SeaOrmUserRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            reference: SeaOrmReferenceDataRepository::new(db.clone()),
            courts: SeaOrmCourtRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn reference(&self) -> &dyn ReferenceDataRepository {
        &self.reference
    }

    fn courts(&self) -> &dyn CourtRepository {
        &self.courts
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

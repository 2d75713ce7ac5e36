//! Repository provider
//!
//! Single access point to every per-aggregate repository; implemented by
//! `infrastructure::database::SeaOrmRepositoryProvider`.

use crate::domain::court::CourtRepository;
use crate::domain::reference::ReferenceDataRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::user::UserRepository;

pub trait RepositoryProvider: Send + Sync {
    fn reference(&self) -> &dyn ReferenceDataRepository;

    fn courts(&self) -> &dyn CourtRepository;

    fn users(&self) -> &dyn UserRepository;

    fn reservations(&self) -> &dyn ReservationRepository;
}

pub mod court_repository;
pub mod reference_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod user_repository;

pub use court_repository::SeaOrmCourtRepository;
pub use reference_repository::SeaOrmReferenceDataRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_repository::SeaOrmReservationRepository;
pub use user_repository::SeaOrmUserRepository;

//! SeaORM implementation of ReferenceDataRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::reference::{CourtType, PaymentMethod, ReferenceDataRepository, Venue};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{court_type, payment_method, venue};

pub struct SeaOrmReferenceDataRepository {
    db: DatabaseConnection,
}

impl SeaOrmReferenceDataRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn venue_to_domain(m: venue::Model) -> Venue {
    Venue {
        id: m.id,
        name: m.nombre,
        address: m.direccion,
    }
}

fn court_type_to_domain(m: court_type::Model) -> CourtType {
    CourtType {
        id: m.id,
        name: m.nombre,
    }
}

fn payment_to_domain(m: payment_method::Model) -> PaymentMethod {
    PaymentMethod {
        id: m.id,
        method: m.metodo,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── ReferenceDataRepository impl ────────────────────────────────

#[async_trait]
impl ReferenceDataRepository for SeaOrmReferenceDataRepository {
    async fn venues(&self) -> DomainResult<Vec<Venue>> {
        let models = venue::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(venue_to_domain).collect())
    }

    async fn court_types(&self) -> DomainResult<Vec<CourtType>> {
        let models = court_type::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(court_type_to_domain).collect())
    }

    async fn payment_methods(&self) -> DomainResult<Vec<PaymentMethod>> {
        let models = payment_method::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(payment_to_domain).collect())
    }

    async fn payment_method_by_id(&self, id: i32) -> DomainResult<Option<PaymentMethod>> {
        let model = payment_method::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(payment_to_domain))
    }
}

//! SeaORM implementation of CourtRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QuerySelect, RelationTrait, Set, SqlErr,
};

use crate::domain::court::{Court, CourtDetails, CourtRepository, CourtUpdate, NewCourt};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{court, court_type, venue};

pub struct SeaOrmCourtRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourtRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: court::Model) -> Court {
    Court {
        id: m.id,
        name: m.nombre,
        court_type_id: m.tipo_id,
        venue_id: m.sucursal_id,
        capacity: m.capacidad,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Duplicate name and invalid type/venue references both surface as
/// constraint violations; the callers report them as one conflict.
fn write_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_))
        | Some(SqlErr::ForeignKeyConstraintViolation(_)) => DomainError::Conflict(
            "Ya existe una cancha con ese nombre o referencia inválida.".to_string(),
        ),
        _ => db_err(e),
    }
}

/// Row shape for the court listing with denormalized names
#[derive(Debug, FromQueryResult)]
struct CourtDetailsRow {
    id: i32,
    nombre: String,
    tipo_id: i32,
    sucursal_id: i32,
    capacidad: i32,
    tipo_nombre: Option<String>,
    sucursal_nombre: Option<String>,
}

// ── CourtRepository impl ────────────────────────────────────────

#[async_trait]
impl CourtRepository for SeaOrmCourtRepository {
    async fn insert(&self, new: NewCourt) -> DomainResult<i32> {
        debug!("Creating court: {}", new.name);

        let model = court::ActiveModel {
            nombre: Set(new.name),
            tipo_id: Set(new.court_type_id),
            sucursal_id: Set(new.venue_id),
            capacidad: Set(new.capacity),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(write_err)?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Court>> {
        let model = court::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all_details(&self) -> DomainResult<Vec<CourtDetails>> {
        let rows = court::Entity::find()
            .column_as(court_type::Column::Nombre, "tipo_nombre")
            .column_as(venue::Column::Nombre, "sucursal_nombre")
            .join(JoinType::LeftJoin, court::Relation::CourtType.def())
            .join(JoinType::LeftJoin, court::Relation::Venue.def())
            .into_model::<CourtDetailsRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| CourtDetails {
                court: Court {
                    id: r.id,
                    name: r.nombre,
                    court_type_id: r.tipo_id,
                    venue_id: r.sucursal_id,
                    capacity: r.capacidad,
                },
                court_type_name: r.tipo_nombre,
                venue_name: r.sucursal_nombre,
            })
            .collect())
    }

    async fn update(&self, id: i32, changes: CourtUpdate) -> DomainResult<()> {
        debug!("Updating court: {}", id);

        let existing = court::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound("Cancha no encontrada".to_string()));
        };

        if changes.is_empty() {
            return Ok(());
        }

        let mut active: court::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.nombre = Set(name);
        }
        if let Some(court_type_id) = changes.court_type_id {
            active.tipo_id = Set(court_type_id);
        }
        if let Some(venue_id) = changes.venue_id {
            active.sucursal_id = Set(venue_id);
        }
        if let Some(capacity) = changes.capacity {
            active.capacidad = Set(capacity);
        }
        active.update(&self.db).await.map_err(write_err)?;
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        court::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

//! SeaORM implementation of ReservationRepository
//!
//! `book` is the only multi-statement write in the service and runs inside
//! a transaction; everything else is a single statement per call.

use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};
use log::debug;
use sea_orm::sea_query::{Alias, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, SqlErr,
    TransactionTrait,
};

use crate::domain::reservation::{
    BookingRequest, CourtUsage, Reservation, ReservationDetails, ReservationFilter,
    ReservationRepository, ReservationUpdate,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{court, payment_method, reservation, user};

const SLOT_TAKEN: &str = "Ya existe una reserva para esa cancha en la fecha y hora seleccionadas.";

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        user_id: m.usuario_id,
        court_id: m.cancha_id,
        date: m.fecha,
        start_time: m.hora,
        duration_min: m.duracion,
        players: m.jugadores,
        payment_method_id: m.pago_id,
        created_at: m.fecha_creacion,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// The unique index on (cancha_id, fecha, hora) reports the slot conflict
/// that a concurrent writer slipped past the in-transaction check.
fn slot_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict(SLOT_TAKEN.to_string())
        }
        _ => db_err(e),
    }
}

/// Row shape for reservation listings joined with display fields
#[derive(Debug, FromQueryResult)]
struct DetailsRow {
    id: i32,
    usuario_id: i32,
    cancha_id: i32,
    fecha: String,
    hora: String,
    duracion: i32,
    jugadores: i32,
    pago_id: i32,
    fecha_creacion: DateTime<Utc>,
    usuario_nombre: String,
    usuario_email: String,
    cancha_nombre: String,
    metodo_pago: String,
}

impl From<DetailsRow> for ReservationDetails {
    fn from(r: DetailsRow) -> Self {
        ReservationDetails {
            reservation: Reservation {
                id: r.id,
                user_id: r.usuario_id,
                court_id: r.cancha_id,
                date: r.fecha,
                start_time: r.hora,
                duration_min: r.duracion,
                players: r.jugadores,
                payment_method_id: r.pago_id,
                created_at: r.fecha_creacion,
            },
            user_name: r.usuario_nombre,
            user_email: r.usuario_email,
            court_name: r.cancha_nombre,
            payment_method: r.metodo_pago,
        }
    }
}

fn details_query() -> Select<reservation::Entity> {
    reservation::Entity::find()
        .column_as(user::Column::Nombre, "usuario_nombre")
        .column_as(user::Column::Email, "usuario_email")
        .column_as(court::Column::Nombre, "cancha_nombre")
        .column_as(payment_method::Column::Metodo, "metodo_pago")
        .join(JoinType::InnerJoin, reservation::Relation::User.def())
        .join(JoinType::InnerJoin, reservation::Relation::Court.def())
        .join(JoinType::InnerJoin, reservation::Relation::PaymentMethod.def())
}

/// Row shape for the most-reserved-court report
#[derive(Debug, FromQueryResult)]
struct UsageRow {
    nombre: String,
    cantidad: i64,
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn book(&self, request: BookingRequest) -> DomainResult<i32> {
        debug!(
            "Booking court {} on {} at {}",
            request.court_id, request.date, request.start_time
        );

        let txn = self.db.begin().await.map_err(db_err)?;

        // Conflict check: exact (court, date, time) match only, never
        // interval overlap. Dropping the txn on any early return rolls
        // back the user insert below.
        let taken = reservation::Entity::find()
            .filter(reservation::Column::CanchaId.eq(request.court_id))
            .filter(reservation::Column::Fecha.eq(request.date.as_str()))
            .filter(reservation::Column::Hora.eq(request.start_time.as_str()))
            .one(&txn)
            .await
            .map_err(db_err)?;
        if taken.is_some() {
            return Err(DomainError::Conflict(SLOT_TAKEN.to_string()));
        }

        // Implicit upsert-by-email: an existing user is reused untouched,
        // even when the supplied name differs.
        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(request.requester_email.as_str()))
            .one(&txn)
            .await
            .map_err(db_err)?;
        let user_id = match existing {
            Some(u) => u.id,
            None => {
                user::ActiveModel {
                    nombre: Set(request.requester_name),
                    email: Set(request.requester_email),
                    telefono: Set(None),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(db_err)?
                .id
            }
        };

        let now = Utc::now();
        let inserted = reservation::ActiveModel {
            usuario_id: Set(user_id),
            cancha_id: Set(request.court_id),
            fecha: Set(request.date),
            hora: Set(request.start_time),
            duracion: Set(request.duration_min),
            jugadores: Set(request.players),
            pago_id: Set(request.payment_method_id),
            // second precision, assigned once
            fecha_creacion: Set(now.with_nanosecond(0).unwrap_or(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(slot_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_details_by_id(&self, id: i32) -> DomainResult<Option<ReservationDetails>> {
        let row = details_query()
            .filter(reservation::Column::Id.eq(id))
            .into_model::<DetailsRow>()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_all_details(
        &self,
        filter: ReservationFilter,
    ) -> DomainResult<Vec<ReservationDetails>> {
        let mut query = details_query();
        if let Some(date) = &filter.date {
            query = query.filter(reservation::Column::Fecha.eq(date.as_str()));
        }
        if let Some(court_id) = filter.court_id {
            query = query.filter(reservation::Column::CanchaId.eq(court_id));
        }
        if let Some(payment_method_id) = filter.payment_method_id {
            query = query.filter(reservation::Column::PagoId.eq(payment_method_id));
        }

        let rows = query
            .into_model::<DetailsRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn slot_taken(
        &self,
        court_id: i32,
        date: &str,
        start_time: &str,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool> {
        let mut query = reservation::Entity::find()
            .filter(reservation::Column::CanchaId.eq(court_id))
            .filter(reservation::Column::Fecha.eq(date))
            .filter(reservation::Column::Hora.eq(start_time));
        if let Some(id) = exclude_id {
            query = query.filter(reservation::Column::Id.ne(id));
        }
        let count = query.count(&self.db).await.map_err(db_err)?;
        Ok(count > 0)
    }

    async fn update(&self, id: i32, changes: ReservationUpdate) -> DomainResult<()> {
        debug!("Updating reservation: {}", id);

        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound("Reserva no encontrada".to_string()));
        };

        if changes.is_empty() {
            return Ok(());
        }

        let mut active: reservation::ActiveModel = existing.into();
        if let Some(date) = changes.date {
            active.fecha = Set(date);
        }
        if let Some(start_time) = changes.start_time {
            active.hora = Set(start_time);
        }
        if let Some(duration_min) = changes.duration_min {
            active.duracion = Set(duration_min);
        }
        if let Some(players) = changes.players {
            active.jugadores = Set(players);
        }
        if let Some(payment_method_id) = changes.payment_method_id {
            active.pago_id = Set(payment_method_id);
        }
        // fecha_creacion stays untouched: assigned once at creation.
        active.update(&self.db).await.map_err(slot_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        reservation::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn most_reserved_court(&self) -> DomainResult<Option<CourtUsage>> {
        let row = court::Entity::find()
            .select_only()
            .column(court::Column::Nombre)
            .column_as(reservation::Column::Id.count(), "cantidad")
            .join(JoinType::LeftJoin, court::Relation::Reservations.def())
            .group_by(court::Column::Nombre)
            .order_by_desc(Expr::col(Alias::new("cantidad")))
            .into_model::<UsageRow>()
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(|r| CourtUsage {
            court_name: r.nombre,
            reservations: r.cantidad,
        }))
    }
}

//! First-startup seed data
//!
//! Mirrors the reference dataset the service has always shipped with:
//! ten rows per table, inserted only when the store is brand new
//! (venue table empty) so restarts never duplicate it.

use chrono::{Local, Timelike, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use super::entities::{court, court_type, payment_method, reservation, user, venue};

/// Populate reference and sample data on the first-ever startup.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = venue::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    info!("Empty database detected, seeding initial data...");

    let venues = [
        ("Sede Central", "Av. Principal 123"),
        ("Sede Norte", "Calle Norte 45"),
        ("Sede Sur", "Boulevard Sur 9"),
        ("Sede Este", "Ruta Este 1"),
        ("Sede Oeste", "Av. Oeste 77"),
        ("Sede Universitaria", "Campus UTN 10"),
        ("Sede Centro", "Calle Centro 50"),
        ("Sede Parque", "Parque Central 3"),
        ("Sede Barrio", "Barrio Verde 12"),
        ("Sede Villa", "Villa Azul 6"),
    ];
    venue::Entity::insert_many(venues.iter().map(|(nombre, direccion)| {
        venue::ActiveModel {
            nombre: Set(nombre.to_string()),
            direccion: Set(Some(direccion.to_string())),
            ..Default::default()
        }
    }))
    .exec(db)
    .await?;

    let tipos = [
        "Fútbol 5",
        "Fútbol 7",
        "Fútbol 11",
        "Césped Sintético",
        "Cemento",
        "Polideportivo",
        "Cancha Techada",
        "Cancha Exterior",
        "Pista",
        "Multiuso",
    ];
    court_type::Entity::insert_many(tipos.iter().map(|nombre| court_type::ActiveModel {
        nombre: Set(nombre.to_string()),
        ..Default::default()
    }))
    .exec(db)
    .await?;

    court::Entity::insert_many((1..=10).map(|i: i32| court::ActiveModel {
        nombre: Set(format!("Cancha {}", i)),
        tipo_id: Set((i % 5) + 1),
        sucursal_id: Set(((i - 1) % 10) + 1),
        capacidad: Set(5 + (i % 4) * 3),
        ..Default::default()
    }))
    .exec(db)
    .await?;

    let usuarios = [
        ("Juan Pérez", "juanp@example.com", "341-111-0001"),
        ("María Gómez", "mariag@example.com", "341-111-0002"),
        ("Carlos Ruiz", "carlosr@example.com", "341-111-0003"),
        ("Lucía Fernández", "luciaf@example.com", "341-111-0004"),
        ("Diego Martín", "diegom@example.com", "341-111-0005"),
        ("Ana Torres", "anat@example.com", "341-111-0006"),
        ("Pablo Díaz", "pablod@example.com", "341-111-0007"),
        ("Sofía López", "sofial@example.com", "341-111-0008"),
        ("Mateo Ruiz", "mateor@example.com", "341-111-0009"),
        ("Valentina Cruz", "valentic@example.com", "341-111-0010"),
    ];
    user::Entity::insert_many(usuarios.iter().map(|(nombre, email, telefono)| {
        user::ActiveModel {
            nombre: Set(nombre.to_string()),
            email: Set(email.to_string()),
            telefono: Set(Some(telefono.to_string())),
            ..Default::default()
        }
    }))
    .exec(db)
    .await?;

    let pagos = [
        "Efectivo",
        "Transferencia",
        "Tarjeta",
        "MercadoPago",
        "QR",
        "Cheque",
        "Contraentrega",
        "Otro",
        "CuentaCorriente",
        "Débito",
    ];
    payment_method::Entity::insert_many(pagos.iter().map(|metodo| payment_method::ActiveModel {
        metodo: Set(metodo.to_string()),
        ..Default::default()
    }))
    .exec(db)
    .await?;

    let today = Local::now().format("%Y-%m-%d").to_string();
    let now = Utc::now();
    let created_at = now.with_nanosecond(0).unwrap_or(now);
    reservation::Entity::insert_many((1..=10).map(|i: i32| reservation::ActiveModel {
        usuario_id: Set(i),
        cancha_id: Set(i),
        fecha: Set(today.clone()),
        hora: Set(format!("{}:00", 10 + (i % 8))),
        duracion: Set(if i % 2 == 0 { 60 } else { 90 }),
        jugadores: Set(6 + (i % 6)),
        pago_id: Set((i % 5) + 1),
        fecha_creacion: Set(created_at),
        ..Default::default()
    }))
    .exec(db)
    .await?;

    info!("Seed data inserted (10 rows per table)");
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn fresh_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    #[tokio::test]
    async fn seeds_ten_rows_per_table() {
        let db = fresh_db().await;
        seed_if_empty(&db).await.unwrap();

        assert_eq!(venue::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(court_type::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(court::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(user::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(payment_method::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(reservation::Entity::find().count(&db).await.unwrap(), 10);
    }

    #[tokio::test]
    async fn second_run_is_a_noop() {
        let db = fresh_db().await;
        seed_if_empty(&db).await.unwrap();
        seed_if_empty(&db).await.unwrap();

        assert_eq!(venue::Entity::find().count(&db).await.unwrap(), 10);
        assert_eq!(reservation::Entity::find().count(&db).await.unwrap(), 10);
    }
}

//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_sucursales;
mod m20240101_000002_create_tipos_cancha;
mod m20240101_000003_create_canchas;
mod m20240101_000004_create_usuarios;
mod m20240101_000005_create_pagos;
mod m20240101_000006_create_reservas;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_sucursales::Migration),
            Box::new(m20240101_000002_create_tipos_cancha::Migration),
            Box::new(m20240101_000003_create_canchas::Migration),
            Box::new(m20240101_000004_create_usuarios::Migration),
            Box::new(m20240101_000005_create_pagos::Migration),
            Box::new(m20240101_000006_create_reservas::Migration),
        ]
    }
}

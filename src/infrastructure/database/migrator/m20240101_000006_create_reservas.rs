//! Create reservas (reservations) table
//!
//! The unique index on (cancha_id, fecha, hora) is the storage-level
//! backstop for the double-booking invariant: even if two requests pass
//! the in-transaction conflict check concurrently, only one insert wins.

use sea_orm_migration::prelude::*;

use super::m20240101_000003_create_canchas::Canchas;
use super::m20240101_000004_create_usuarios::Usuarios;
use super::m20240101_000005_create_pagos::Pagos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservas::UsuarioId).integer().not_null())
                    .col(ColumnDef::new(Reservas::CanchaId).integer().not_null())
                    .col(ColumnDef::new(Reservas::Fecha).string().not_null())
                    .col(ColumnDef::new(Reservas::Hora).string().not_null())
                    .col(ColumnDef::new(Reservas::Duracion).integer().not_null())
                    .col(ColumnDef::new(Reservas::Jugadores).integer().not_null())
                    .col(ColumnDef::new(Reservas::PagoId).integer().not_null())
                    .col(
                        ColumnDef::new(Reservas::FechaCreacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservas_usuario")
                            .from(Reservas::Table, Reservas::UsuarioId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservas_cancha")
                            .from(Reservas::Table, Reservas::CanchaId)
                            .to(Canchas::Table, Canchas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservas_pago")
                            .from(Reservas::Table, Reservas::PagoId)
                            .to(Pagos::Table, Pagos::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservas_slot")
                    .table(Reservas::Table)
                    .col(Reservas::CanchaId)
                    .col(Reservas::Fecha)
                    .col(Reservas::Hora)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservas_fecha")
                    .table(Reservas::Table)
                    .col(Reservas::Fecha)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservas {
    Table,
    Id,
    UsuarioId,
    CanchaId,
    Fecha,
    Hora,
    Duracion,
    Jugadores,
    PagoId,
    FechaCreacion,
}

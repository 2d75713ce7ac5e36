//! Create canchas (courts) table
//!
//! Court names are globally unique; type and venue references are
//! RESTRICT so reference data cannot be deleted while in use.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_sucursales::Sucursales;
use super::m20240101_000002_create_tipos_cancha::TiposCancha;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Canchas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Canchas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Canchas::Nombre)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Canchas::TipoId).integer().not_null())
                    .col(ColumnDef::new(Canchas::SucursalId).integer().not_null())
                    .col(ColumnDef::new(Canchas::Capacidad).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_canchas_tipo")
                            .from(Canchas::Table, Canchas::TipoId)
                            .to(TiposCancha::Table, TiposCancha::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_canchas_sucursal")
                            .from(Canchas::Table, Canchas::SucursalId)
                            .to(Sucursales::Table, Sucursales::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Canchas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Canchas {
    Table,
    Id,
    Nombre,
    TipoId,
    SucursalId,
    Capacidad,
}

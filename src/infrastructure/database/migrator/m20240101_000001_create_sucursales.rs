//! Create sucursales (venues) table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sucursales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sucursales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sucursales::Nombre).string().not_null())
                    .col(ColumnDef::new(Sucursales::Direccion).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sucursales::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Sucursales {
    Table,
    Id,
    Nombre,
    Direccion,
}

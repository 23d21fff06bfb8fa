/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Satellite::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Satellite::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Satellite::Name).string().not_null())
                    .col(ColumnDef::new(Satellite::Country).string().not_null())
                    .col(ColumnDef::new(Satellite::LaunchDate).date_time().not_null())
                    .col(ColumnDef::new(Satellite::Purpose).text().not_null())
                    .col(ColumnDef::new(Satellite::Weight).double().not_null())
                    .col(ColumnDef::new(Satellite::Height).double().not_null())
                    .col(
                        ColumnDef::new(Satellite::Geostationary)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Satellite::Processor).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-satellite-processor")
                            .from(Satellite::Table, Satellite::Processor)
                            .to(Processor::Table, Processor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Satellite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Satellite {
    Table,
    Id,
    Name,
    Country,
    LaunchDate,
    Purpose,
    Weight,
    Height,
    Geostationary,
    Processor,
}

#[derive(DeriveIden)]
enum Processor {
    Table,
    Id,
}

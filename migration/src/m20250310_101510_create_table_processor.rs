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
                    .table(Processor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Processor::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Processor::Name).string().not_null())
                    .col(ColumnDef::new(Processor::Manufacturer).string().not_null())
                    .col(ColumnDef::new(Processor::Cores).integer().not_null())
                    .col(ColumnDef::new(Processor::Frequency).double().not_null())
                    .col(ColumnDef::new(Processor::Socket).string().not_null())
                    .col(
                        ColumnDef::new(Processor::ProductionDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Processor::MmxSupport).boolean().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Processor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Processor {
    Table,
    Id,
    Name,
    Manufacturer,
    Cores,
    Frequency,
    Socket,
    ProductionDate,
    MmxSupport,
}

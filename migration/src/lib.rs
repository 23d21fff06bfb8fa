/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250310_101500_create_table_user;
mod m20250310_101510_create_table_processor;
mod m20250310_101520_create_table_satellite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_101500_create_table_user::Migration),
            Box::new(m20250310_101510_create_table_processor::Migration),
            Box::new(m20250310_101520_create_table_satellite::Migration),
        ]
    }
}

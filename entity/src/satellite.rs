/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "satellite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub country: String,
    pub launch_date: NaiveDateTime,
    #[sea_orm(column_type = "Text")]
    pub purpose: String,
    pub weight: f64,
    pub height: f64,
    pub geostationary: bool,
    pub processor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::processor::Entity",
        from = "Column::Processor",
        to = "super::processor::Column::Id"
    )]
    Processor,
}

impl ActiveModelBehavior for ActiveModel {}

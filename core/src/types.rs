/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Orbit", display_name = "Orbit", bin_name = "orbit-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "ORBIT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "ORBIT_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "ORBIT_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "ORBIT_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "ORBIT_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "ORBIT_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "ORBIT_DEFAULT_USER")]
    pub default_user: Option<String>,
    #[arg(long, env = "ORBIT_DEFAULT_PASSWORD_FILE")]
    pub default_password_file: Option<String>,
    #[arg(long, env = "ORBIT_DEFAULT_SCOPES", default_value = super::consts::DEFAULT_SCOPES)]
    pub default_scopes: String,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EProcessor = processor::Entity;
pub type ESatellite = satellite::Entity;
pub type EUser = user::Entity;

pub type MProcessor = processor::Model;
pub type MSatellite = satellite::Model;
pub type MUser = user::Model;

pub type AProcessor = processor::ActiveModel;
pub type ASatellite = satellite::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CProcessor = processor::Column;
pub type CSatellite = satellite::Column;
pub type CUser = user::Column;

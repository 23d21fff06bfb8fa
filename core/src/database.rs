/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use password_auth::generate_hash;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use super::input::load_secret;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url.trim().to_string());

    // SQL statement logging only at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_default_user(&db, cli)
        .await
        .context("Failed to seed default user")?;
    Ok(db)
}

// The token endpoint verifies against the user table; an empty table gets
// one principal from configuration.
async fn seed_default_user(db: &DatabaseConnection, cli: &Cli) -> Result<()> {
    let user_count = EUser::find().count(db).await?;

    if user_count > 0 {
        return Ok(());
    }

    let (Some(username), Some(password_file)) = (&cli.default_user, &cli.default_password_file)
    else {
        tracing::warn!("User table is empty and no default user is configured");
        return Ok(());
    };

    let password = load_secret(password_file);

    if password.is_empty() {
        anyhow::bail!("Default user password file {} is empty", password_file);
    }

    let auser = AUser {
        username: Set(username.clone()),
        password: Set(generate_hash(password)),
        scopes: Set(cli.default_scopes.clone()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let user = auser.insert(db).await?;
    tracing::info!("Seeded default user: {}", user.username);

    Ok(())
}

pub async fn get_satellite_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<(MSatellite, MProcessor)>> {
    let Some(satellite) = ESatellite::find_by_id(id)
        .one(db)
        .await
        .context("Failed to query satellite")?
    else {
        return Ok(None);
    };

    let processor = EProcessor::find_by_id(satellite.processor)
        .one(db)
        .await
        .context("Failed to query processor")?
        .ok_or_else(|| anyhow::anyhow!("Satellite {} has no processor row", satellite.id))?;

    Ok(Some((satellite, processor)))
}

pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<MUser>> {
    Ok(EUser::find()
        .filter(CUser::Username.eq(username))
        .one(db)
        .await
        .context("Failed to query user")?)
}

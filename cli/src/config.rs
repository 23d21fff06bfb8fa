/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::{fmt, fs};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    AuthToken,
    Server,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

fn get_config_file() -> PathBuf {
    let mut config_dir = dirs::config_dir().expect("Could not find configuration directory");
    config_dir.push("orbit");
    config_dir.push("config.toml");
    config_dir
}

pub fn load_config() -> HashMap<ConfigKey, Option<String>> {
    let config_file = get_config_file();
    if config_file.exists() {
        let contents = fs::read_to_string(&config_file).expect("Failed to read configuration file");
        toml::from_str(&contents).expect("Failed to parse configuration file")
    } else {
        ConfigKey::iter().map(|key| (key, None)).collect()
    }
}

pub fn save_config(config: &HashMap<ConfigKey, Option<String>>) {
    let config_file = get_config_file();
    let config_dir = config_file
        .parent()
        .expect("Failed to get configuration directory");

    fs::create_dir_all(config_dir).expect("Failed to create configuration directory");

    let contents = toml::to_string_pretty(config).expect("Failed to serialize configuration");
    let mut file = fs::File::create(config_file).expect("Failed to create configuration file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write configuration file");
}

pub fn get_value(key: ConfigKey) -> Option<String> {
    load_config().get(&key).cloned().flatten()
}

pub fn set_value(key: ConfigKey, value: Option<String>) {
    let mut config = load_config();
    config.insert(key, value);
    save_config(&config);
}

/// `orbit config <key> [value]` entry point; prints the current value when no
/// new value is given.
pub fn set_get_value_from_string(key: String, value: Option<String>) -> Result<(), String> {
    let Some(config_key) =
        ConfigKey::iter().find(|k| format!("{}", k).to_lowercase() == key.to_lowercase())
    else {
        eprintln!("Invalid key: {}", key);
        eprintln!("Valid keys are:");
        for config_key in ConfigKey::iter() {
            eprintln!("{}", config_key);
        }
        return Err("Invalid key".to_string());
    };

    if let Some(value) = value {
        set_value(config_key.clone(), Some(value.clone()));
        println!("{} set to \"{}\"", config_key, value);
    } else {
        match get_value(config_key) {
            Some(value) => println!("{}", value),
            None => println!("[unset]"),
        }
    }

    Ok(())
}

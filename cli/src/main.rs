/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod config;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use config::*;
use connector::satellites::{ProcessorRequest, SatelliteRequest, SatelliteResponse};
use connector::*;
use rpassword::read_password;
use std::io;
use std::io::Write;
use std::process::exit;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "Orbit", display_name = "Orbit", bin_name = "orbit", author = "Wavelens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    Logout,
    Satellite {
        #[command(subcommand)]
        cmd: SatelliteCommands,
    },
}

#[derive(Subcommand, Debug)]
enum SatelliteCommands {
    List,
    Show {
        id: i64,
    },
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        country: Option<String>,
        #[arg(short, long)]
        launch_date: Option<String>,
        #[arg(short, long)]
        purpose: Option<String>,
        #[arg(short, long)]
        weight: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(short, long)]
        geostationary: Option<bool>,
    },
    Update {
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        country: Option<String>,
        #[arg(short, long)]
        launch_date: Option<String>,
        #[arg(short, long)]
        purpose: Option<String>,
        #[arg(short, long)]
        weight: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(short, long)]
        geostationary: Option<bool>,
    },
    Delete {
        id: i64,
    },
}

fn ask_for_input(prompt: &str) -> String {
    print!("{}: ", prompt);
    std::io::stdout().flush().unwrap();
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .unwrap_or_else(|_| panic!("Failed to read {}.", prompt));
    let inp = inp.trim().to_string();

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", prompt);
        exit(1);
    }

    inp
}

fn ask_for_parsed<T: FromStr>(prompt: &str) -> T {
    let inp = ask_for_input(prompt);
    inp.parse().unwrap_or_else(|_| {
        eprintln!("`{}` is not a valid value for {}.", inp, prompt);
        exit(1)
    })
}

fn ask_for_password() -> String {
    print!("Password: ");
    std::io::stdout().flush().unwrap();
    let inp = read_password().unwrap();

    if inp.is_empty() {
        eprintln!("Password cannot be empty.");
        exit(1);
    }

    inp
}

fn get_request_config() -> Result<RequestConfig, String> {
    let Some(server_url) = get_value(ConfigKey::Server) else {
        return Err("Server URL not set. Use `orbit config server <url>` to set it.".to_string());
    };

    let token = get_value(ConfigKey::AuthToken).filter(|t| !t.is_empty());

    Ok(RequestConfig { server_url, token })
}

// The create/update dialog: any field not given as a flag is collected as
// text input, numeric and boolean fields converted before submit.
fn ask_satellite_request(
    name: Option<String>,
    country: Option<String>,
    launch_date: Option<String>,
    purpose: Option<String>,
    weight: Option<f64>,
    height: Option<f64>,
    geostationary: Option<bool>,
) -> SatelliteRequest {
    let name = name.unwrap_or_else(|| ask_for_input("Name"));
    let country = country.unwrap_or_else(|| ask_for_input("Country"));
    let launch_date = launch_date.unwrap_or_else(|| ask_for_input("Launch Date (ISO-8601)"));
    let purpose = purpose.unwrap_or_else(|| ask_for_input("Purpose"));
    let weight = weight.unwrap_or_else(|| ask_for_parsed("Weight"));
    let height = height.unwrap_or_else(|| ask_for_parsed("Height"));
    let is_geostationary =
        geostationary.unwrap_or_else(|| ask_for_parsed("Geostationary [true/false]"));

    let processor = ProcessorRequest {
        name: ask_for_input("Processor Name"),
        manufacturer: ask_for_input("Manufacturer"),
        cores: ask_for_parsed("Cores"),
        frequency: ask_for_parsed("Frequency"),
        socket: ask_for_input("Socket"),
        production_date: ask_for_input("Production Date (ISO-8601)"),
        mmx_support: ask_for_parsed("MMX Support [true/false]"),
    };

    SatelliteRequest {
        name,
        country,
        launch_date,
        purpose,
        weight,
        height,
        is_geostationary,
        processor,
    }
}

fn print_satellite(satellite: &SatelliteResponse) {
    println!("ID: {}", satellite.id);
    println!("Name: {}", satellite.name);
    println!("Country: {}", satellite.country);
    println!("Launch Date: {}", satellite.launch_date);
    println!("Purpose: {}", satellite.purpose);
    println!("Weight: {}", satellite.weight);
    println!("Height: {}", satellite.height);
    println!("Geostationary: {}", satellite.is_geostationary);
    println!("Processor:");
    println!("  ID: {}", satellite.processor.id);
    println!("  Name: {}", satellite.processor.name);
    println!("  Manufacturer: {}", satellite.processor.manufacturer);
    println!("  Cores: {}", satellite.processor.cores);
    println!("  Frequency: {}", satellite.processor.frequency);
    println!("  Socket: {}", satellite.processor.socket);
    println!("  Production Date: {}", satellite.processor.production_date);
    println!("  MMX Support: {}", satellite.processor.mmx_support);
}

fn bail(message: String) -> ! {
    eprintln!("{}", message);
    exit(1);
}

#[tokio::main]
pub async fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return;
    }

    let Some(cmd) = cli.cmd else {
        Cli::command().print_help().unwrap();
        return;
    };

    match cmd {
        MainCommands::Config { key, value } => {
            if set_get_value_from_string(key, value).is_err() {
                exit(1);
            }
        }

        MainCommands::Status => {
            let config = get_request_config().unwrap_or_else(|e| bail(e));

            health(config).await.unwrap_or_else(|e| bail(e));

            println!("Server Online.");
        }

        MainCommands::Login { username } => {
            if get_value(ConfigKey::Server).is_none() {
                set_value(ConfigKey::Server, Some(ask_for_input("Server URL")));
            }

            let username = match username {
                Some(username) => username,
                None => ask_for_input("Username"),
            };

            let password = ask_for_password();

            let config = get_request_config().unwrap_or_else(|e| bail(e));

            let res = auth::post_token(config, username, password)
                .await
                .unwrap_or_else(|e| bail(e));

            if res.error {
                eprintln!("Login failed: {}", res.message);
                exit(1);
            }

            set_value(ConfigKey::AuthToken, Some(res.message));
            println!("Logged in.");
        }

        MainCommands::Logout => {
            set_value(ConfigKey::AuthToken, None);
            println!("Logged out.");
        }

        MainCommands::Satellite { cmd } => match cmd {
            SatelliteCommands::List => {
                let config = get_request_config().unwrap_or_else(|e| bail(e));

                let res = satellites::get(config).await.unwrap_or_else(|e| bail(e));

                if res.error {
                    eprintln!("Failed to list satellites.");
                    exit(1);
                }

                if res.message.is_empty() {
                    println!("No satellites registered.");
                } else {
                    for satellite in res.message {
                        println!("{}: {}", satellite.id, satellite.name);
                    }
                }
            }

            SatelliteCommands::Show { id } => {
                let config = get_request_config().unwrap_or_else(|e| bail(e));

                let res = satellites::get_satellite(config, id)
                    .await
                    .unwrap_or_else(|e| bail(e));

                if res.error {
                    eprintln!("Failed to show satellite.");
                    exit(1);
                }

                print_satellite(&res.message);
            }

            SatelliteCommands::Create {
                name,
                country,
                launch_date,
                purpose,
                weight,
                height,
                geostationary,
            } => {
                let body = ask_satellite_request(
                    name,
                    country,
                    launch_date,
                    purpose,
                    weight,
                    height,
                    geostationary,
                );

                let config = get_request_config().unwrap_or_else(|e| bail(e));

                let res = satellites::post(config, body)
                    .await
                    .unwrap_or_else(|e| bail(e));

                if res.error {
                    eprintln!("Satellite creation failed.");
                    exit(1);
                }

                println!("Satellite created with id {}.", res.message.id);
            }

            SatelliteCommands::Update {
                id,
                name,
                country,
                launch_date,
                purpose,
                weight,
                height,
                geostationary,
            } => {
                let body = ask_satellite_request(
                    name,
                    country,
                    launch_date,
                    purpose,
                    weight,
                    height,
                    geostationary,
                );

                let config = get_request_config().unwrap_or_else(|e| bail(e));

                let res = satellites::put_satellite(config, id, body)
                    .await
                    .unwrap_or_else(|e| bail(e));

                if res.error {
                    eprintln!("Satellite update failed.");
                    exit(1);
                }

                println!("Satellite {} updated.", res.message.id);
            }

            SatelliteCommands::Delete { id } => {
                let config = get_request_config().unwrap_or_else(|e| bail(e));

                let res = satellites::delete_satellite(config, id)
                    .await
                    .unwrap_or_else(|e| bail(e));

                if res.error {
                    eprintln!("Failed to delete satellite.");
                    exit(1);
                }

                println!("Satellite {} deleted.", res.message.id);
            }
        },
    }
}

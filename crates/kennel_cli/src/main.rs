//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `kennel_core` end to end against a real SQLite database.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `kennel_cli [DB_PATH]`. Without a path the database lives in
//! memory. Set `KENNEL_LOG_DIR` (and optionally `KENNEL_LOG_LEVEL`) to
//! enable file logging.

use kennel_core::db::{open_db, open_db_in_memory};
use kennel_core::logging::{self, LogConfig};
use kennel_core::{DogService, SqliteDogRepository};
use log::error;
use std::process::ExitCode;

const SAMPLE_DOGS: &[(&str, &str)] = &[
    ("Fido", "Poodle"),
    ("Rex", "German Shepherd"),
    ("Biscuit", "Beagle"),
];

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error error={message}");
            eprintln!("kennel_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    if let Some(config) = LogConfig::from_env()? {
        logging::start(config)?;
    }

    let conn = match std::env::args().nth(1) {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
    .map_err(|err| err.to_string())?;

    let service = DogService::new(SqliteDogRepository::new(&conn));
    service.prepare_storage().map_err(|err| err.to_string())?;

    for (name, breed) in SAMPLE_DOGS {
        service.adopt(name, breed).map_err(|err| err.to_string())?;
    }

    println!("kennel_core version={}", kennel_core::core_version());
    for dog in service.list().map_err(|err| err.to_string())? {
        println!(
            "{}\t{}\t{}",
            dog.id().unwrap_or_default(),
            dog.name.as_deref().unwrap_or("-"),
            dog.breed.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

use emptrack::config::Config;
use emptrack::core::db::Database;
use emptrack::core::Result;
use emptrack::shell::Shell;
use std::io;
use tracing::{error, info};

fn run(config: &Config) -> Result<()> {
    let db = Database::open(&config.database.path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&db, stdin.lock(), stdout.lock()).run()?;

    db.close()
}

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("emptrack: {}", e);
            std::process::exit(1);
        }
    };

    let level = config.log_level().unwrap_or(tracing::Level::WARN);
    // Logs go to stderr; stdout carries the menu and result tables
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    info!(database = %config.database.path, "starting emptrack");

    if let Err(e) = run(&config) {
        error!(error = %e, "emptrack terminated");
        eprintln!("emptrack: {}", e);
        std::process::exit(1);
    }
}

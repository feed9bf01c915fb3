use anyhow::{Context, Result};
use chrono::Datelike;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use car_finder::command::{Command, CommandError};
use car_finder::config::Settings;
use car_finder::session::{self, Reply};
use car_finder::{Catalog, CatalogController, JsonFileStore, KeyValueStore, view};

fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging. Logs go to stderr so the screen on stdout stays readable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "car_finder=info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Car Finder...");

    let settings = match Settings::new() {
        Ok(s) => {
            tracing::info!(storage = %s.storage_path, page_size = s.page_size, "Configuration loaded");
            s
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let store = JsonFileStore::new(&settings.storage_path);
    let mut controller = CatalogController::new(Catalog::seeded(), store, settings.page_size);

    run(&mut controller).context("Terminal session failed")?;

    tracing::info!("Car Finder closed");
    Ok(())
}

// Reads one command per line and redraws after each, until quit or EOF
fn run<S: KeyValueStore>(controller: &mut CatalogController<S>) -> Result<()> {
    let year = chrono::Local::now().year();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}\n", view::render(controller, year))?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        match line.parse::<Command>() {
            Ok(command) => match session::dispatch(controller, command) {
                Reply::Quit => break,
                Reply::Screen => writeln!(stdout, "{}\n", view::render(controller, year))?,
                Reply::Message(message) => {
                    writeln!(stdout, "{}\n", message)?;
                    writeln!(stdout, "{}\n", view::render(controller, year))?;
                }
            },
            Err(CommandError::Empty) => {}
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

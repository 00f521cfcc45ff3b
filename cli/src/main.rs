//! Air quality zone monitor - interactive console

use std::io;

use airwatch::console::Console;
use airwatch::menu::App;
use airwatch::services::{self, DataOrigin, PersistenceService};
use airwatch::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing on stderr so it stays out of the menu output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting air quality monitor");
    tracing::info!("Environment: {}", config.environment);

    let persistence = PersistenceService::new(&config.data.path);
    let (store, origin) = services::initialize_store(&persistence, config.baseline.seed);
    match origin {
        DataOrigin::Loaded(summary) if summary.rows_skipped > 0 => {
            tracing::warn!(skipped = summary.rows_skipped, "Some rows in the data file were skipped");
        }
        DataOrigin::Loaded(_) => {}
        DataOrigin::Generated => {
            tracing::info!("Using synthetic baseline data");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let mut app = App::new(console, store, &config);
    app.run()?;

    tracing::info!("Air quality monitor stopped");
    Ok(())
}

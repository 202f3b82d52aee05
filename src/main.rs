use anyhow::{bail, Context, Result};
use clap::Parser;
use rental_scout::config::{parse_base_url, AppConfig};
use rental_scout::models::PropertySnapshot;
use rental_scout::network::HttpLogLevel;
use rental_scout::telemetry;
use rental_scout::ui::{screens, Navigator, RentalUiState, RentalViewModel, Route};
use rental_scout::{AppContainer, RentalProperty};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Browse rental properties served by the rental API
#[derive(Parser, Debug)]
#[command(name = "rental-scout", version)]
struct Cli {
    /// Root URL of the rental API (overrides RENTAL_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// HTTP logging: none, basic, headers or body (overrides RENTAL_HTTP_LOG)
    #[arg(long)]
    http_log: Option<HttpLogLevel>,

    /// Request timeout in seconds (overrides RENTAL_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Screen to show: properties, clients, visitors or visit
    #[arg(long, default_value = "properties")]
    screen: Route,

    /// Write the fetched properties to this JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Keep running, redraw on every state change and read commands from stdin
    #[arg(long, short)]
    interactive: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            config.base_url = parse_base_url(base_url)?;
        }
        if let Some(level) = self.http_log {
            config.http_log = level;
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 {
                bail!("--timeout-secs must be greater than zero");
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    cli.apply(&mut config)?;
    telemetry::init(&config.log_filter)?;

    info!("🏠 Rental Scout");

    let container = AppContainer::new(config)?;
    let view_model = container.view_model();

    if cli.interactive {
        run_interactive(&cli, &container, &view_model).await
    } else {
        run_once(&cli, &container, &view_model).await
    }
}

async fn run_once(cli: &Cli, container: &AppContainer, view_model: &RentalViewModel) -> Result<()> {
    let state = view_model.settled().await;
    println!("{}", screens::frame(cli.screen, &state, container.base_url()));

    match state {
        RentalUiState::Success(properties) => {
            info!("✅ Loaded {} properties", properties.len());
            if let Some(path) = &cli.save {
                save_snapshot(path, properties).await?;
            }
            Ok(())
        }
        RentalUiState::Error => bail!("Failed to load rental properties"),
        RentalUiState::Loading => Ok(()),
    }
}

async fn save_snapshot(path: &Path, properties: Vec<RentalProperty>) -> Result<()> {
    let count = properties.len();
    let json = serde_json::to_string_pretty(&PropertySnapshot::now(properties))?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("💾 Saved {} properties to {}", count, path.display());
    Ok(())
}

const HELP: &str = "commands: r=refresh p=properties c=clients v=visitors a=apply visit b=back q=quit";

async fn run_interactive(
    cli: &Cli,
    container: &AppContainer,
    view_model: &RentalViewModel,
) -> Result<()> {
    let mut navigator = Navigator::new();
    navigator.navigate(cli.screen);

    let mut updates = view_model.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let draw = |route: Route, state: &RentalUiState| {
        println!("{}", screens::frame(route, state, container.base_url()));
        println!("{}", HELP);
    };
    let initial = updates.borrow_and_update().clone();
    draw(navigator.current(), &initial);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                draw(navigator.current(), &state);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match line.trim() {
                    "" => continue,
                    "q" => break,
                    "r" => {
                        // Redrawn through the state notification.
                        view_model.refresh();
                        continue;
                    }
                    "b" => {
                        navigator.back();
                    }
                    "p" => navigator.navigate(Route::Properties),
                    "c" => navigator.navigate(Route::Clients),
                    "v" => navigator.navigate(Route::Visitors),
                    "a" => navigator.navigate(Route::ApplyVisit),
                    other => {
                        if let Err(err) = navigator.navigate_to(other) {
                            warn!("{}", err);
                            continue;
                        }
                    }
                }
                draw(navigator.current(), &view_model.state());
            }
        }
    }

    Ok(())
}

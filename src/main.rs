use std::env;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use benefits_engine::api::{AppState, create_router};
use benefits_engine::config::ConfigLoader;
use benefits_engine::store::EmployeeStore;

const DEFAULT_CONFIG_PATH: &str = "./config/benefits.yaml";
const DEFAULT_SEED_PATH: &str = "./config/seed.yaml";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set and falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reloads the benefits policy from `config_path` on every SIGHUP.
///
/// A file that fails to load or validate is logged and the running policy
/// stays in place.
#[cfg(unix)]
fn spawn_config_reload(state: AppState, config_path: String) -> anyhow::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = signal(SignalKind::hangup()).context("installing SIGHUP handler")?;
    tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            if let Err(err) = state.reload_settings(&config_path) {
                warn!(
                    path = %config_path,
                    error = %err,
                    "Config reload failed, keeping previous settings"
                );
            }
        }
    });
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_path = env_or("BENEFITS_CONFIG", DEFAULT_CONFIG_PATH);
    let seed_path = env_or("BENEFITS_SEED", DEFAULT_SEED_PATH);
    let addr = env_or("BENEFITS_ADDR", DEFAULT_ADDR);

    let config = ConfigLoader::load(&config_path)
        .with_context(|| format!("loading benefits configuration from {config_path}"))?;
    info!(
        path = %config_path,
        paychecks_per_year = config.settings().paychecks_per_year.get(),
        "Loaded benefits configuration"
    );

    let store = EmployeeStore::new();
    if Path::new(&seed_path).exists() {
        let seed = ConfigLoader::load_seed(&seed_path)
            .with_context(|| format!("loading seed data from {seed_path}"))?;
        store
            .seed(seed)
            .await
            .with_context(|| format!("seeding employees from {seed_path}"))?;
    } else {
        warn!(path = %seed_path, "Seed file not found, starting with an empty store");
    }

    let state = AppState::new(config, store);
    #[cfg(unix)]
    spawn_config_reload(state.clone(), config_path)?;
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(addr = %addr, "Benefits API listening");

    axum::serve(listener, router).await.context("serving API")?;

    Ok(())
}

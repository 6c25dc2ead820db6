mod config;
mod error;
mod server;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use brand_guidelines::checker::Checker;
use brand_guidelines::ruleset::RuleSet;
use url_tracking::store::SeenStore;

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("starting newsletter-api");

    let config = Config::from_env()?;
    info!(
        data_dir = %config.data_dir,
        rules = config.rules_path.as_deref().unwrap_or("builtin"),
        bind = %config.bind_addr,
        "configuration loaded"
    );

    let rules = match &config.rules_path {
        Some(path) => RuleSet::from_path(path)?,
        None => RuleSet::builtin(),
    };
    let checker = Arc::new(Checker::new(rules));
    let seen = Arc::new(SeenStore::new(config.data_dir.as_str()));

    let app = server::router(AppState { checker, seen });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

//! labmock-server: Lab mock APIs over HTTP.
//!
//! Usage:
//!   labmock-server
//!   labmock-server --config data/labmock.json
//!   labmock-server --config data/labmock.json --bind 127.0.0.1:9000
//!
//! Logging is controlled by RUST_LOG (default: info).

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use labmock_core::{MockConfig, MockEngine};
use labmock_server::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let mut config = match find_arg(&args, "--config") {
        Some(path) => MockConfig::load(path)?,
        None => MockConfig::default(),
    };
    if let Some(bind) = find_arg(&args, "--bind") {
        config.bind_addr = bind.to_string();
    }

    log::info!("Lab mock APIs");
    log::info!("  bind:                {}", config.bind_addr);
    log::info!("  success_probability: {}", config.success_probability);
    log::info!("  pinned report:       {}", config.pinned_report);
    log::info!("  pinned msisdn:       {}", config.pinned_msisdn);
    log::info!("  pinned nombre:       {:?}", config.pinned_customer_name);
    log::info!("  balance_on_failure:  {:?}", config.balance_on_failure);
    match config.reference_date {
        Some(date) => log::info!("  reference_date:      {date}"),
        None => log::info!("  reference_date:      (today)"),
    }

    let bind_addr = config.bind_addr.clone();
    let engine = Arc::new(MockEngine::new(config)?);
    let app = build_router(engine);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    log::info!("labmock-server listening on {bind_addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

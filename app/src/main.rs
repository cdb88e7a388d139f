// app/src/main.rs

use anyhow::Context;
use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use panha_mall::config::AppConfig;
use panha_mall::state::AppState;
use panha_mall::{db, web};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_json);

  tracing::info!("Starting Panha Mall server...");

  let store = db::open_store(&app_config.storage)
    .await
    .context("Failed to open the product store")?;
  let app_state = AppState::new(store).context("Failed to build application state")?;

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}

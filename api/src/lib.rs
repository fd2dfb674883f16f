mod config;
mod error;
mod form;
mod handlers;
mod view;

use anyhow::Context;
use axum::{
    Router,
    routing::{delete, get, post},
};
use bakery_service::sea_orm::{ConnectOptions, Database, DatabaseConnection};
use migration::{Migrator, MigratorTrait};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use error::ApiError;
pub use form::{BakeryNameForm, FormError, RawBakedGoodForm};
pub use view::{BakedGoodView, BakeryView};

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

/// Every route of the service, bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/bakeries", get(handlers::list_bakeries))
        .route(
            "/bakeries/{id}",
            get(handlers::show_bakery).patch(handlers::update_bakery),
        )
        .route("/baked_goods", post(handlers::create_baked_good))
        .route("/baked_goods/by_price", get(handlers::baked_goods_by_price))
        .route(
            "/baked_goods/most_expensive",
            get(handlers::most_expensive_baked_good),
        )
        .route("/baked_goods/{id}", delete(handlers::delete_baked_good))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connects to the store and brings its schema up to date.
pub async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let conn = Database::connect(opt)
        .await
        .with_context(|| format!("database connection to `{database_url}` failed"))?;
    Migrator::up(&conn, None)
        .await
        .context("database migration failed")?;

    Ok(conn)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let conn = connect(&config.database_url).await?;

    let server_url = config.server_url();
    let listener = tokio::net::TcpListener::bind(&server_url)
        .await
        .with_context(|| format!("failed to bind to {server_url}"))?;
    tracing::info!(addr = %server_url, "listening");

    axum::serve(listener, router(AppState { conn })).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

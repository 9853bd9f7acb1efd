//! Serves the task API.
//!
//! Usage:
//!
//! ```text
//! taskwise [--port 3001] [--store postgres|memory] [--database-url URL]
//! ```
//!
//! Every flag also reads an environment variable (`PORT`, `TASKWISE_STORE`,
//! `DATABASE_URL`, `GOOGLE_AI_API_KEY`, ...); run with `--help` for the full
//! list. Log verbosity follows `RUST_LOG` and defaults to
//! `taskwise=info,tower_http=info`.

use std::sync::Arc;

use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use eyre::{Result, WrapErr};
use taskwise::{
    api::{AppState, build_router, cors_layer, wait_for_shutdown},
    assist::{adapters::GeminiCompletionProvider, services::PromptBook},
    config::{ServerConfig, StoreBackend},
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, apply_schema},
        },
        ports::TaskRepository,
    },
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "taskwise=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::parse();
    let repository = open_store(&config).await?;
    let provider = completion_provider(&config);
    let model = provider.model().to_owned();
    let prompts =
        PromptBook::new(config.assist.language.as_str()).wrap_err("loading prompt templates")?;
    let cors = cors_layer(config.cors_origin.as_deref()).wrap_err("parsing CORS_ORIGIN")?;

    let app = build_router(AppState::new(repository, Arc::new(provider), prompts)).layer(cors);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("binding {addr}"))?;
    info!(%addr, store = ?config.store, %model, "task API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await
        .wrap_err("serving HTTP")?;

    info!("task API stopped");
    Ok(())
}

async fn open_store(config: &ServerConfig) -> Result<Arc<dyn TaskRepository>> {
    match config.store {
        StoreBackend::Memory => {
            warn!("using in-memory task store; data is lost on exit");
            Ok(Arc::new(InMemoryTaskRepository::new()))
        }
        StoreBackend::Postgres => {
            let manager = ConnectionManager::<PgConnection>::new(config.database.connection_url());
            let pool = Pool::builder()
                .max_size(config.database.pool_size)
                .build(manager)
                .wrap_err("connecting to PostgreSQL")?;
            apply_schema(&pool)
                .await
                .wrap_err("creating tasks table")?;
            info!(pool_size = config.database.pool_size, "PostgreSQL task store ready");
            Ok(Arc::new(PostgresTaskRepository::new(pool)))
        }
    }
}

fn completion_provider(config: &ServerConfig) -> GeminiCompletionProvider {
    let api_key = config.assist.api_key.clone().unwrap_or_else(|| {
        warn!("GOOGLE_AI_API_KEY is not set; assistant routes will fail upstream");
        String::new()
    });
    GeminiCompletionProvider::new(api_key, config.assist.model.as_str())
        .with_base_url(config.assist.base_url.as_str())
}

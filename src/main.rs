//! Arcade backend binary entrypoint wiring the REST surface, session
//! registry, and score store supervision.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dao;
mod dto;
mod engine;
mod error;
mod routes;
mod services;
mod state;

use config::AppConfig;
#[cfg(feature = "mongo-store")]
use dao::score_store::ScoreStore;
use dao::score_store::memory::MemoryScoreStore;
#[cfg(feature = "mongo-store")]
use services::storage_supervisor;
use state::{AppState, SharedState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let app_state = AppState::new(AppConfig::load());

    init_score_store(app_state.clone()).await;
    tokio::spawn(run_session_sweeper(app_state.clone()));

    // Build the HTTP router once the shared state is ready.
    let app = build_router(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Install the score store selected through `ARCADE_STORE`: the in-memory
/// backend immediately, or MongoDB behind the reconnecting supervisor.
async fn init_score_store(state: SharedState) {
    let backend = env::var("ARCADE_STORE").unwrap_or_else(|_| default_backend().into());

    match backend.as_str() {
        "memory" => {
            info!("using in-memory score store; records are lost on restart");
            state
                .install_score_store(Arc::new(MemoryScoreStore::new()))
                .await;
        }
        #[cfg(feature = "mongo-store")]
        "mongo" => {
            let uri = env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
            let db_name = env::var("MONGO_DB").ok();
            tokio::spawn(storage_supervisor::run(state, move || {
                let uri = uri.clone();
                let db_name = db_name.clone();
                async move {
                    let config = dao::score_store::mongodb::MongoConfig::from_uri(
                        &uri,
                        db_name.as_deref(),
                    )
                    .await?;
                    let store = dao::score_store::mongodb::MongoScoreStore::connect(config).await?;
                    Ok(Arc::new(store) as Arc<dyn ScoreStore>)
                }
            }));
        }
        other => {
            warn!(
                backend = other,
                "unknown score store backend; falling back to memory"
            );
            state
                .install_score_store(Arc::new(MemoryScoreStore::new()))
                .await;
        }
    }
}

fn default_backend() -> &'static str {
    if cfg!(feature = "mongo-store") {
        "mongo"
    } else {
        "memory"
    }
}

/// Periodically drop game states whose session sat idle past the TTL.
async fn run_session_sweeper(state: SharedState) {
    let interval = state.config().sweep_interval();
    let ttl = state.config().session_ttl();

    loop {
        sleep(interval).await;
        let removed = state.sessions().sweep_expired(ttl);
        if removed > 0 {
            debug!(removed, live = state.sessions().len(), "swept idle game sessions");
        }
    }
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

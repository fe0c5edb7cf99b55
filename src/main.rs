mod board;
mod catalog;
mod config;
mod error;
mod routes;
mod search;
mod session;
mod state;
mod ui;

use std::net::SocketAddr;
use std::process::ExitCode;

use crate::board::PhraseBoard;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::ErrorCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "catalog rejected");
            return ExitCode::FAILURE;
        }
    };
    let source = config.catalog_path.as_ref().map_or_else(|| "builtin".to_owned(), |p| p.display().to_string());
    tracing::info!(categories = catalog.categories().len(), source = %source, "catalog loaded");

    let state = state::AppState::new(PhraseBoard::new(catalog));
    let app = routes::app(state);

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, "phraseboard listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

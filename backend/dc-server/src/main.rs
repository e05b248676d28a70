use dc_auth::JwtValidator;
use dc_config::Config;
use dc_db::Store;
use dc_server::error::ServerError;
use dc_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting dc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let store = Store::connect(&database_path).await?;
    info!("Database ready");

    let jwt_validator = build_jwt_validator(&config)?;

    let app = build_router(AppState::new(store.clone(), jwt_validator))
        .layer(ConcurrencyLimitLayer::new(config.server.max_connections));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Port 0 is resolved by the OS
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Shutdown complete");

    Ok(())
}

fn build_jwt_validator(config: &Config) -> Result<Option<Arc<JwtValidator>>, ServerError> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - trusting X-User-Id (development mode)");
        return Ok(None);
    }

    let validator = if let Some(ref secret) = config.auth.jwt_secret {
        JwtValidator::with_hs256(secret.as_bytes())
    } else {
        // validate() guarantees one of the two is set
        let Some(key_path) = config.jwt_public_key_path()? else {
            return Err(ServerError::Config(dc_config::ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )));
        };

        let public_key =
            std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
                path: key_path.display().to_string(),
                source: e,
            })?;
        JwtValidator::with_rs256(&public_key)?
    };
    info!("JWT: {} authentication enabled", validator.algorithm());

    Ok(Some(Arc::new(validator)))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal handler, run until killed
            std::future::pending::<()>().await;
        }
    }
}

/**
 * Chatline Server Entry Point
 *
 * Loads `.env`, installs tracing, builds the Axum app from the environment
 * configuration and serves it on all interfaces.
 */
use chatline::backend::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env();
    let port = config.port;

    // Create the Axum app; a store that cannot be opened ends the process
    let app = match create_app(config).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("[STARTUP] Failed to initialize store: {}", e);
            return Err(e.into());
        }
    };

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use tokio::net::TcpListener;

use lamplight::config::{generate_config_template, Config};
use lamplight::poller::run_status_loop;
use lamplight::routes::build_router;
use lamplight::state::AppState;
use lamplight::ws::ConnectionRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config with layered precedence: defaults < TOML < env < CLI
    let config = Config::load()?;

    // Handle --generate-config: print template and exit
    if config.generate_config {
        print!("{}", generate_config_template());
        return Ok(());
    }

    // Initialize tracing/logging
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lamplight=info".parse().unwrap()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lamplight=info".parse().unwrap()),
            )
            .init();
    }

    tracing::info!("lamplight v{} starting", env!("CARGO_PKG_VERSION"));

    let connections = ConnectionRegistry::new();
    let state = AppState {
        connections: connections.clone(),
    };

    // Spawn the status loop; it runs until process shutdown.
    tokio::spawn(run_status_loop(
        connections,
        config.watch_path.clone(),
        config.poll_interval(),
    ));

    // Build router
    let app = build_router(state);

    // Bind and serve; a bind failure exits non-zero before serving.
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

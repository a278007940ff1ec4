use axum::{extract::Request, ServiceExt};
use chatrooms::{
    build_router, room::seed, AppState, InMemoryRoomRepository, ServerConfig,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatrooms=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting chat room server");

    let config = ServerConfig::from_env();
    info!(
        bind_addr = %config.bind_addr,
        seed_path = %config.seed_path.display(),
        "Loaded configuration"
    );

    // The registry lives for the whole process and is dropped on shutdown
    let rooms = seed::load_rooms(&config.seed_path)?;
    let room_repository = Arc::new(InMemoryRoomRepository::with_rooms(rooms)?);
    let app_state = AppState::new(room_repository);

    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

use dotenvy::dotenv;
use ecclesia::router::init_router;
use ecclesia::state::AppState;
use ecclesia_config::ServerConfig;
use ecclesia_observability::{init_metrics, init_tracing, metrics_app};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = AppState::from_env();

    let mut app = init_router(state);
    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}

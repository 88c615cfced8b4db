use hello_service::{config::Settings, serve, shutdown_signal, telemetry};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    telemetry::init_subscriber(env!("CARGO_PKG_NAME"), settings.log_format)?;

    let addr = settings.address();
    let listener = TcpListener::bind(addr).await?;
    info!("Server starting at http://{}", listener.local_addr()?);

    serve(listener, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

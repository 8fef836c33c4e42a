use bank_api::{routes::make_app, Config};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::init()?;
    let listen_addr = config.listen_addr;
    let app = make_app(config).await?;

    let listener = TcpListener::bind(listen_addr).await?;
    info!("🚀 Server listening on {}", listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

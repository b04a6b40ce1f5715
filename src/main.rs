mod core;
mod features;
mod modules;
mod shared;

use crate::core::app::build_router;
use crate::core::config::Config;
use crate::features::contact::{ContactService, MailDispatcher};
use crate::modules::mail::ResendClient;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    if config.app.expose_error_details {
        tracing::warn!("EXPOSE_ERROR_DETAILS is on: provider errors are returned to clients");
    }

    // Email provider transport and dispatcher
    let resend_client = ResendClient::new(&config.mail)
        .map_err(|e| anyhow::anyhow!("Failed to initialize email client: {}", e))?;
    tracing::info!("Email client initialized for {}", resend_client.api_url());

    let dispatcher = MailDispatcher::new(&config.mail, Arc::new(resend_client))
        .map_err(|e| anyhow::anyhow!("Failed to initialize mail dispatcher: {}", e))?;
    tracing::info!(
        "Mail dispatcher initialized: from={}, recipients={}",
        config.mail.from_address,
        config.mail.recipients.len()
    );

    let contact_service = Arc::new(ContactService::new(
        dispatcher,
        config.app.expose_error_details,
    ));

    let app = build_router(contact_service, &config.app, &config.swagger);

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server running on port {}", config.app.port);
    tracing::info!("Contact API endpoint: http://{}/api/contact", addr);
    if config.swagger.enabled {
        tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

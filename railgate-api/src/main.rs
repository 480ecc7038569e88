use std::net::SocketAddr;
use std::sync::Arc;

use railgate_api::{app_config::Config, TicketGrpc};
use railgate_core::ReservationStore;
use railgate_proto::ticketing::ticket_service_server::TicketServiceServer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "railgate_api=debug,railgate_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Starting railgate: {} -> {} at {:.2} per seat",
        config.route.origin,
        config.route.destination,
        config.route.price
    );

    let store = Arc::new(ReservationStore::new(config.route.clone().into()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    tonic::transport::Server::builder()
        .add_service(TicketServiceServer::new(TicketGrpc::new(store)))
        .serve(addr)
        .await?;

    Ok(())
}

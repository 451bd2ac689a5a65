use crate::utility::shutdown::shutdown_signal;
use axum::Router;
use eyre::{Report, WrapErr};
use std::net::SocketAddr;

pub async fn serve(router: Router) -> Result<(), Report> {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .wrap_err("PORT must be a valid port number")?;

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .wrap_err("Invalid HOST value")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("ICE Tracer API listening on http://{}", addr);
    tracing::info!("API docs at http://{}/swagger-ui/", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

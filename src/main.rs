use std::error::Error;
use std::sync::Arc;

use helius_rpc_proxy::{HttpUpstream, Proxy, ProxyConfig, serve};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env()?;
    let listen_addr = config.listen_addr;
    let options = config.into_options()?;

    let client = reqwest::Client::builder().build()?;
    let proxy = Arc::new(Proxy::new(options, HttpUpstream::new(client))?);

    let listener = TcpListener::bind(listen_addr).await?;
    info!(%listen_addr, "proxy listening");

    serve(listener, proxy).await?;
    Ok(())
}

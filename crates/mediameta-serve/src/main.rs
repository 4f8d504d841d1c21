use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use mediameta_serve::{DEFAULT_BIND, DEFAULT_PORT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mediameta-serve", version, about = "Serve a directory over HTTP with permissive CORS")]
struct Cli {
    /// Directory to serve
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();
    mediameta_serve::serve(SocketAddr::new(cli.bind, cli.port), &cli.root).await
}

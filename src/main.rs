use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use yaoshan_web::config::Config;
use yaoshan_web::llm_client::{ChatClient, DeepSeekClient};
use yaoshan_web::recommend::RecommendContext;

#[derive(Debug, Parser)]
#[command(name = "yaoshan_web")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    Serve {
        #[arg(long, default_value_t = 5000)]
        port: u16,
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Serve { port, host } => {
            let config = Config::from_env()?;
            let chat = ChatClient::DeepSeek(DeepSeekClient::new(&config)?);
            let ctx = RecommendContext::new(chat);
            let ip: IpAddr = host
                .parse()
                .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
            let addr = SocketAddr::new(ip, port);
            yaoshan_web::server::serve(addr, ctx).await?;
        }
    }
    Ok(())
}

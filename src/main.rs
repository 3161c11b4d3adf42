use clap::{Parser, Subcommand};
use urlsnap::ProxyConfig;

#[derive(Parser, Debug)]
#[command(name = "urlsnap", version, about = "Screenshot proxy API server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the API server
    Serve {
        /// Host to bind the server to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind the server to
        #[arg(short, long, default_value = "8787")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ProxyConfig::from_env();
            if config.api_key.is_empty() {
                log::warn!("APIFLASH_API_KEY is not set; upstream calls will fail authentication");
            }
            urlsnap::server::serve(config, &host, port).await
        }
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// elics - brand website backend
#[derive(Parser)]
#[command(name = "elics")]
#[command(about = "Contact form backend for the ELICS website", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit an inquiry through the contact form pipeline
    Submit {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Base URL of a running server; dispatches in-process when omitted
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = elics::config::Config::load(cli.config.clone())?;

    elics::observability::init_observability(
        "elics",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            cli::server::serve(config, host, port).await
        }
        Commands::Submit {
            name,
            email,
            phone,
            message,
            url,
        } => {
            let draft = elics_shared::InquiryDraft::new(name, email, phone, message);
            cli::submit::submit(config, draft, url).await
        }
    }
}

use clap::Parser;
use cocktail_client::{run_repl_styled, AskClient, DEFAULT_SERVER_URL};
use owo_colors::OwoColorize;
use std::io;
use std::time::Duration;

/// Interactive console client for the cocktail QA server
#[derive(Parser, Debug)]
#[command(name = "cocktail-client", version, about)]
struct Args {
    /// Full URL of the /ask endpoint
    #[arg(short, long, env = "COCKTAIL_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 120)]
    timeout: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let client = AskClient::new(args.url, Duration::from_secs(args.timeout))?;
    let stdin = io::stdin();
    run_repl_styled(&client, stdin.lock(), io::stdout(), !args.no_color).await?;
    Ok(())
}

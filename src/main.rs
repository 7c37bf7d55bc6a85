use clap::Parser;
use tokio::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

use prattle::{Config, Exit, Session, cli::Args, run_chat_loop};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "prattle=debug"
    } else {
        "prattle=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::connect(
        &args.server,
        args.port,
        &args.name,
        args.verbose,
        Config::default(),
    )
    .await?;
    if args.verbose {
        println!(
            "Client connected to server {} on port {}",
            args.server, args.port
        );
    }

    let input = BufReader::new(io::stdin());
    let exit = run_chat_loop(&mut session, input, io::stdout()).await?;
    if exit == Exit::Fault {
        std::process::exit(1);
    }
    Ok(())
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::App;

mod cli;
mod config;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    init_tracing(app.verbose);
    app.run().await
}

fn init_tracing(verbose: u8) {
    let default = if verbose > 0 { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

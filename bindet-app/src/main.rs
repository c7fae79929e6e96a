mod app;
mod cli;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("BINDET_LOG").unwrap_or_else(|_| "bindet=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "bindet starting");

    let app = App::new(args)?;
    app.run()
}

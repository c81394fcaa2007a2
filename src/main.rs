mod compare;
mod model;
mod watch;
use model::{Args, FileSettings, LogLevel, Operation, Settings};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();
    setup_tracing(&args.log_level);
    debug!("Parsed command line arguments: {args:?}");

    // Everything is validated before any directory is scanned
    let file_settings = FileSettings::load(args.config.as_deref())?;
    let settings = Settings::resolve(&args, file_settings)?;
    if !settings.color {
        colored::control::set_override(false);
    }

    match args.operation()? {
        Operation::Compare(left, right) => compare::compare(&left, &right, &settings),
        Operation::Watch(root) => watch::watch(&root, &settings).await,
    }
}

fn setup_tracing(log_level: &LogLevel) {
    if let Some(level) = log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

use crate::model::Settings;

use abst_fs::AbstPath;
use tree_diff::{render_summary, CycleOutcome, Monitor};

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing::info;

/// Watch `root` until it disappears or the process is interrupted.
///
/// The interrupt is only looked at while waiting between two cycles; a cycle
/// that has started always runs to completion
pub async fn watch(root: &AbstPath, settings: &Settings) -> Result<()> {
    let mut monitor = Monitor::new(
        root.clone(),
        settings.flags.clone(),
        settings.mode,
        settings.exclude_list.clone(),
    );

    let mut interrupt = listen_for_interrupt().await;

    loop {
        let outcome = monitor
            .cycle()
            .with_context(|| format!("could not watch directory [{root}]"))?;
        match outcome {
            CycleOutcome::RootVanished => {
                info!("Stopped watching: [{root}] doesn't exist anymore");
                return Ok(());
            }
            CycleOutcome::Primed => info!("Watching [{root}]"),
            CycleOutcome::Compared(report) => {
                if let Some(summary) = render_summary(&report, settings.cutoff) {
                    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                    println!("[{now}]\n{summary}");
                }
            }
        }

        tokio::select! {
            result = &mut interrupt => {
                result
                    .context("interrupt listener stopped")?
                    .context("could not listen for interrupt signal")?;
                println!();
                info!("Stopped watching: interrupted");
                return Ok(());
            }
            _ = tokio::time::sleep(settings.interval) => {}
        }
    }
}

/// Listen for Ctrl-C from now on. The signal handler is installed when the
/// listener is first polled, which the yield guarantees before any cycle
/// blocks the runtime
async fn listen_for_interrupt() -> JoinHandle<std::io::Result<()>> {
    let listener = tokio::spawn(tokio::signal::ctrl_c());
    tokio::task::yield_now().await;
    listener
}

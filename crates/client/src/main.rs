//! Incremental game client binary.
//!
//! ```bash
//! # three days of survival, then a fight, with a fixed seed
//! cargo run -p client-cli -- --seed 7 survive survive survive battle
//!
//! # custom content and a faster encounter timer
//! cargo run -p client-cli -- --data-dir ./content --tick-ms 10 battle
//! ```

use anyhow::Result;
use clap::Parser;
use client_cli::{Cli, Script, run_script};
use runtime::Runtime;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (registry, game_config) = cli.load_content()?;

    let runtime = Runtime::builder()
        .config(cli.runtime_config(game_config))
        .registry(registry)
        .build()
        .await?;
    let handle = runtime.handle();

    let script = Script::new(cli.actions.iter().map(String::as_str), cli.encounter_timeout());
    let reports = run_script(&handle, &script).await?;
    let state = handle.query_state().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        for report in &reports {
            match &report.encounter {
                Some(resolution) => {
                    println!("{}: {} ({:?})", report.action, report.outcome, resolution)
                }
                None => println!("{}: {}", report.action, report.outcome),
            }
        }
        println!();
        for line in state.log.iter() {
            println!("{line}");
        }
    }

    drop(handle);
    runtime.shutdown().await?;
    Ok(())
}

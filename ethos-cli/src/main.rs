//! Command-line front end for the ethos engine.
//!
//! Evaluates the built-in case library or a stored context and renders
//! per-framework reports plus a cross-framework consistency summary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ethos::{run_engines, EngineReport, MoralContext};
use ethos_store::ContextStore;

mod cases;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "ethos",
    version,
    about = "Evaluate an action against competing ethical frameworks"
)]
struct Cli {
    /// Directory where named contexts are stored
    #[arg(long, env = "ETHOS_DATA_DIR", default_value = "moral_data", global = true)]
    data_dir: PathBuf,

    /// Log filter when RUST_LOG is unset
    #[arg(long, env = "ETHOS_LOG", default_value = "info", global = true)]
    log_level: String,

    /// Emit machine-readable JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the built-in case library
    Demo,
    /// Evaluate a stored context by name
    Eval { name: String },
    /// List stored context names
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = ContextStore::new(&cli.data_dir)?;
    info!(data_dir = %store.data_dir().display(), "context store ready");

    match &cli.command {
        Command::Demo => demo(&store, cli.json)?,
        Command::Eval { name } => {
            let context = store.load(name)?;
            let report = run_engines(name, &context);
            if cli.json {
                render::print_report_json(&report)?;
            } else {
                render::print_report(&report, &context);
            }
        }
        Command::List => {
            for name in store.list()? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// Run the whole case library, round-tripping the adultery case through
/// the store along the way.
fn demo(store: &ContextStore, json: bool) -> anyhow::Result<()> {
    if !store.exists("adultery") {
        store.save(&cases::adultery(), "adultery")?;
        info!("seeded adultery case into the store");
    }
    let adultery = store.load("adultery")?;

    let mut evaluated: Vec<(EngineReport, MoralContext)> = Vec::new();
    evaluated.push((run_engines("adultery", &adultery), adultery));
    for (label, context) in cases::library() {
        let report = run_engines(label, &context);
        evaluated.push((report, context));
    }

    for (report, context) in &evaluated {
        if json {
            render::print_report_json(report)?;
        } else {
            render::print_report(report, context);
        }
    }

    if !json {
        render::print_consistency(evaluated.iter().map(|(report, _)| report));
    }

    Ok(())
}

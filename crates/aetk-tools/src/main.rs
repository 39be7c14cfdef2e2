//! Command-line entry point for the AETK toolkit.
//!
//! The `aetk` binary bundles the toolkit's helper scripts:
//!
//! ```text
//! aetk rename <root>           rename *.hpp -> *.cpp recursively
//! aetk bindgen <header>        generate the bind_all dispatcher
//! aetk host <snapshot.json>    inspect a project snapshot
//! aetk describe <record.json>  print an item or character description
//! aetk plugin <plugin.yaml>    validate a plugin description
//! ```
//!
//! Settings come from `aetk-config.yaml` (or `--config`); command-line
//! arguments override them.

mod bindgen;
mod config;
mod describe;
mod error;
mod host;
mod plugin;
mod rename;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::bindgen::DispatcherGenerator;
use crate::config::ToolsConfig;
use crate::host::{Host, SnapshotHost};

#[derive(Parser)]
#[command(name = "aetk", version, about = "After Effects scripting toolkit helpers")]
struct Cli {
    /// Configuration file (defaults to aetk-config.yaml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recursively rename files from one extension to another.
    Rename {
        /// Directory to walk.
        root: PathBuf,
        /// Extension to rename from, without the dot.
        #[arg(long = "from")]
        from_ext: Option<String>,
        /// Extension to rename to, without the dot.
        #[arg(long = "to")]
        to_ext: Option<String>,
        /// Report what would be renamed without touching the disk.
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate the binding dispatcher from a header.
    Bindgen {
        /// Header declaring the binding functions.
        input: PathBuf,
        /// Output source file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect a project snapshot through the host interface.
    Host {
        /// Project snapshot (JSON).
        snapshot: PathBuf,
        /// Look up an item by name.
        #[arg(long)]
        find: Option<String>,
        /// Report an alert message.
        #[arg(long)]
        alert: Option<String>,
    },
    /// Print the description of an item or character record.
    Describe {
        /// Record file (JSON).
        record: PathBuf,
    },
    /// Load a plugin description and print its configuration.
    Plugin {
        /// Plugin description (YAML or JSON).
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ToolsConfig::load(cli.config.as_deref()).context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("aetk starting");

    match cli.command {
        Command::Rename {
            root,
            from_ext,
            to_ext,
            dry_run,
        } => {
            let from_ext = from_ext.unwrap_or(config.rename.from_ext);
            let to_ext = to_ext.unwrap_or(config.rename.to_ext);
            let report = rename::rename_extensions(&root, &from_ext, &to_ext, dry_run)?;
            for (from, to) in &report.renamed {
                println!("{} -> {}", from.display(), to.display());
            }
            for path in &report.skipped {
                println!("skipped {} (destination exists)", path.display());
            }
            println!(
                "{} renamed, {} skipped",
                report.renamed.len(),
                report.skipped.len()
            );
        }
        Command::Bindgen { input, output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.bindings.output));
            let generator = DispatcherGenerator::new(&config.bindings)?;
            let bindings = generator.generate(&input, &output)?;
            println!(
                "wrote {} with {} bindings",
                output.display(),
                bindings.len()
            );
        }
        Command::Host {
            snapshot,
            find,
            alert,
        } => {
            let project_host = SnapshotHost::from_file(&snapshot)?;
            host::report_active_item(&project_host);
            if let Some(name) = find {
                let message = match host::find_item_by_name(project_host.project(), &name) {
                    Some(item) => format!("Found: {}", item.name()),
                    None => format!("Not found: {name}"),
                };
                project_host.report_info(&message);
            }
            if let Some(message) = alert {
                host::display_alert(&project_host, &message);
            }
            for message in project_host.take_messages() {
                println!("{message}");
            }
        }
        Command::Describe { record } => {
            println!("{}", describe::describe_file(&record)?);
        }
        Command::Plugin { file } => {
            let plugin = plugin::load_plugin(&file)?;
            info!(
                plugin = plugin.name.as_str(),
                parameters = plugin.parameters().len(),
                "plugin loaded"
            );
            let rendered = serde_json::to_string_pretty(&plugin.config())?;
            println!("{rendered}");
        }
    }

    Ok(())
}

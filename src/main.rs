//! lulu-widget - Lulu baby tracker widgets, from the command line.
//!
//! Publishes snapshots into the widget store, renders the widget for each
//! form factor, reports the refresh schedule and runs an interactive
//! terminal preview.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lulu_widget_protocol::{FormFactor, WidgetAction, WidgetState};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "lulu-widget", version, about = "Lulu baby tracker widgets")]
struct Cli {
    /// Configuration file to use instead of the default search path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Snapshot store file, overriding the configuration.
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal preview of the widget
    Preview {
        /// Form factor shown first
        #[arg(long, short)]
        form_factor: Option<FormFactor>,
    },
    /// Print the rendered widget and its refresh plan
    Render {
        /// Form factor to render
        #[arg(long, short, default_value = "medium")]
        form_factor: FormFactor,
        /// Print JSON instead of the outline
        #[arg(long)]
        json: bool,
    },
    /// Print when the widget refreshes next
    Schedule,
    /// Write a snapshot into the store, as the app would
    Publish(PublishArgs),
    /// Hand the deep link of a widget action to the system
    Dispatch {
        /// One of log-wake, log-sleep, feeding, diaper, open-app
        action: WidgetAction,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PublishArgs {
    /// Publish a built-in sample (empty, active or urgent)
    #[arg(long, value_name = "STATE")]
    sample: Option<WidgetState>,
    /// Publish the key-value entries of a JSON file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let context = commands::Context::load(cli.config, cli.store)?;

    match cli.command {
        Commands::Preview { form_factor } => commands::preview(context, form_factor).await,
        Commands::Render { form_factor, json } => commands::render(&context, form_factor, json),
        Commands::Schedule => commands::schedule(&context),
        Commands::Publish(args) => commands::publish(&context, args.sample, args.file),
        Commands::Dispatch { action } => commands::dispatch(&context, action),
    }
}

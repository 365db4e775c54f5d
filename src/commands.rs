//! Command implementations.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::Utc;
use lulu_widget_config::Config;
use lulu_widget_protocol::{
    Entries, FormFactor, RefreshPlan, RenderedView, Snapshot, WidgetAction, WidgetState, derive,
    dummy::sample_snapshot, render as render_view,
};
use lulu_widget_store::{JsonFileStore, SnapshotReader, SnapshotWriter, default_store_path};
use lulu_widget_tui::{ActionDispatcher, App, OsDispatcher, terminal};
use serde::Serialize;
use tracing::debug;

use crate::logging;

/// What every command needs: the loaded configuration and the store.
pub struct Context {
    config: Config,
    store: JsonFileStore,
}

impl Context {
    /// Loads the configuration and resolves the store location.
    ///
    /// The store path comes from `--store`, then the configuration (which
    /// already includes `LULU_WIDGET_STORE`), then the platform default.
    pub fn load(
        config_path: Option<PathBuf>,
        store_path: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_with_overrides(&path).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            None => Config::load().context("failed to load configuration")?,
        };
        let store_path = resolve_store_path(store_path, &config)?;
        Ok(Self {
            config,
            store: JsonFileStore::new(store_path),
        })
    }

    fn reader(&self) -> SnapshotReader<&JsonFileStore> {
        SnapshotReader::new(&self.store)
    }

    fn init_stderr_logging(&self) -> anyhow::Result<()> {
        logging::init_stderr(&self.config.log.filter)?;
        debug!(store = %self.store.path().display(), "using snapshot store");
        Ok(())
    }
}

fn resolve_store_path(cli: Option<PathBuf>, config: &Config) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.or_else(|| config.store.path.clone()) {
        return Ok(path);
    }
    Ok(default_store_path()?)
}

/// The JSON printed by `render --json`.
#[derive(Serialize)]
struct RenderOutput<'a> {
    view: &'a RenderedView,
    refresh: &'a RefreshPlan,
}

/// Runs the interactive preview until the user quits.
pub async fn preview(context: Context, form_factor: Option<FormFactor>) -> anyhow::Result<()> {
    let Context { mut config, store } = context;
    let _guard = logging::init_file(&config.log.filter, config.log.file_path().as_deref())?;
    if let Some(form_factor) = form_factor {
        config.preview.form_factor = form_factor;
    }

    terminal::install_panic_hook();
    let mut guard = terminal::TerminalGuard::new()?;
    let mut app = App::with_config(SnapshotReader::new(store), OsDispatcher, &config, Utc::now());
    let result = app.run(guard.terminal_mut()).await;
    guard.restore()?;
    result
}

/// Prints the rendered widget and when it refreshes next.
pub fn render(context: &Context, form_factor: FormFactor, json: bool) -> anyhow::Result<()> {
    context.init_stderr_logging()?;
    let snapshot = context.reader().read();
    let view = render_view(&derive(&snapshot), form_factor);
    let plan = RefreshPlan::after(Utc::now(), snapshot.minutes_remaining);

    if json {
        let output = RenderOutput {
            view: &view,
            refresh: &plan,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", view.outline());
        println!("{}", describe_plan(&plan));
        for url in view.deep_links(&context.config.deep_links.scheme) {
            println!("deep link: {url}");
        }
    }
    Ok(())
}

/// Prints the refresh delay the current snapshot calls for.
pub fn schedule(context: &Context) -> anyhow::Result<()> {
    context.init_stderr_logging()?;
    let snapshot = context.reader().read();
    let plan = RefreshPlan::after(Utc::now(), snapshot.minutes_remaining);

    match snapshot.minutes_remaining {
        Some(minutes) => println!("{} with {minutes} min remaining", snapshot.state),
        None => println!("{} with no countdown", snapshot.state),
    }
    println!("{}", describe_plan(&plan));
    Ok(())
}

fn describe_plan(plan: &RefreshPlan) -> String {
    format!(
        "next refresh in {} min at {}",
        plan.delay.as_secs() / 60,
        plan.refresh_at.format("%H:%M:%S UTC")
    )
}

/// Publishes a sample or a file's entries into the store.
pub fn publish(
    context: &Context,
    sample: Option<WidgetState>,
    file: Option<PathBuf>,
) -> anyhow::Result<()> {
    context.init_stderr_logging()?;
    let snapshot = match (sample, file) {
        (Some(state), _) => sample_snapshot(state),
        (None, Some(path)) => read_snapshot_file(&path)?,
        (None, None) => anyhow::bail!("either --sample or --file is required"),
    };

    SnapshotWriter::new(&context.store)
        .publish(&snapshot)
        .with_context(|| format!("failed to publish to {}", context.store.path().display()))?;
    println!(
        "published {} snapshot to {}",
        snapshot.state,
        context.store.path().display()
    );
    Ok(())
}

/// Reads a JSON object of widget keys, the same shape the store holds.
fn read_snapshot_file(path: &Path) -> anyhow::Result<Snapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let entries: Entries = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON object of widget keys", path.display()))?;
    Ok(Snapshot::from_entries(&entries))
}

/// Hands the deep link for `action` to the system URL handler.
pub fn dispatch(context: &Context, action: WidgetAction) -> anyhow::Result<()> {
    context.init_stderr_logging()?;
    let url = action.deep_link(&context.config.deep_links.scheme);
    OsDispatcher
        .dispatch(&url)
        .with_context(|| format!("failed to open {url}"))?;
    println!("{url}");
    Ok(())
}

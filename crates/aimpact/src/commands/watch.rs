//! Watch command — re-analyze a file after edits settle.

use std::io::ErrorKind;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, instrument, warn};

use aimpact_core::debounce::Debouncer;
use aimpact_core::{AnalysisResult, metrics};

use super::analyze::print_report;
use super::read_input_file;

/// Arguments for the `watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// File to watch.
    pub file: Utf8PathBuf,

    /// Quiet period in milliseconds before re-analyzing.
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Stop after this many analyses (runs until interrupted when omitted).
    #[arg(long)]
    pub max_runs: Option<usize>,
}

/// Watch a file and print fresh statistics once its content stops changing.
#[instrument(name = "cmd_watch", skip_all, fields(file = %args.file))]
pub fn cmd_watch(
    args: WatchArgs,
    global_json: bool,
    config_debounce: Duration,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let delay = args
        .debounce_ms
        .map_or(config_debounce, Duration::from_millis);
    debug!(file = %args.file, delay_ms = delay.as_millis() as u64, "executing watch command");

    let mut spinner: Option<ProgressBar> = None;
    watch_file(&args.file, delay, max_input_bytes, args.max_runs, |update| {
        match update {
            WatchUpdate::Pending => {
                spinner.get_or_insert_with(analyzing_spinner);
            }
            WatchUpdate::Settled(report) => {
                if let Some(spinner) = spinner.take() {
                    spinner.finish_and_clear();
                }
                if global_json {
                    println!("{}", serde_json::to_string(report)?);
                } else {
                    print_report(args.file.as_str(), report);
                    println!();
                }
            }
        }
        Ok(())
    })
}

/// Progress reported by [`watch_file`].
enum WatchUpdate<'a> {
    /// New content is waiting out the debounce delay.
    Pending,
    /// Content settled and was analyzed.
    Settled(&'a AnalysisResult),
}

/// Feed filesystem events for `file` through a [`Debouncer`] and hand each
/// settled analysis to `on_update`.
///
/// The parent directory is watched so that editors which save by replacing
/// the file keep being followed. A missing file is fatal only at startup.
fn watch_file<F>(
    file: &Utf8Path,
    delay: Duration,
    max_input_bytes: Option<usize>,
    max_runs: Option<usize>,
    mut on_update: F,
) -> anyhow::Result<()>
where
    F: FnMut(WatchUpdate<'_>) -> anyhow::Result<()>,
{
    let initial = read_input_file(file, max_input_bytes)?;

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = tx.send(res);
        },
        NotifyConfig::default(),
    )
    .context("failed to start file watcher")?;
    let dir = match file.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    watcher
        .watch(dir.as_std_path(), RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {dir}"))?;

    let mut debouncer = Debouncer::new(delay);
    let mut last_seen = initial.clone();
    debouncer.push(initial, Instant::now());
    on_update(WatchUpdate::Pending)?;
    let mut runs = 0usize;

    loop {
        let received = match debouncer.deadline() {
            Some(deadline) => {
                rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(Ok(event)) if touches(&event, file) => {
                if let Some(content) = read_if_present(file, max_input_bytes)?
                    && content != last_seen
                {
                    last_seen = content.clone();
                    debouncer.push(content, Instant::now());
                    on_update(WatchUpdate::Pending)?;
                }
            }
            Ok(Ok(_)) => {}
            Ok(Err(err)) => warn!(error = %err, "file watcher reported an error"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => bail!("file watcher stopped unexpectedly"),
        }

        if let Some(settled) = debouncer.poll(Instant::now()) {
            on_update(WatchUpdate::Settled(&metrics::analyze(&settled)))?;
            runs += 1;
            info!(runs, superseded = debouncer.superseded(), "analysis refreshed");
            if max_runs.is_some_and(|max| runs >= max) {
                return Ok(());
            }
        }
    }
}

/// Whether a watcher event concerns `file` (matched by file name, since only
/// its own directory is watched).
fn touches(event: &Event, file: &Utf8Path) -> bool {
    let Some(name) = file.file_name() else {
        return false;
    };
    event
        .paths
        .iter()
        .any(|p| p.file_name().and_then(|n| n.to_str()) == Some(name))
}

/// Read the file, treating its absence as a transient mid-save state.
fn read_if_present(
    file: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<Option<String>> {
    match read_input_file(file, max_input_bytes) {
        Ok(content) => Ok(Some(content)),
        Err(err) if is_not_found(&err) => {
            debug!(file = %file, "file missing; waiting for it to reappear");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|e| e.downcast_ref::<std::io::Error>())
        .any(|e| e.kind() == ErrorKind::NotFound)
}

fn analyzing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

use crate::config::ToolchainConfig;
use crate::dispatch;
use crate::engine::BuildEngine;
use crate::host::FileHost;
use crate::model::{BuildEvent, CompileOutcome, Notification, Severity};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Output line routing for stdout/stderr writer.
enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Spawn a blocking writer for stdout/stderr to avoid blocking async tasks.
fn spawn_output_writer() -> (
    mpsc::UnboundedSender<OutputLine>,
    tokio::task::JoinHandle<()>,
) {
    let (tx, mut rx) = mpsc::unbounded_channel::<OutputLine>();
    let handle = tokio::task::spawn_blocking(move || {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let mut out = std::io::LineWriter::new(stdout.lock());
        let mut err = std::io::LineWriter::new(stderr.lock());

        while let Some(line) = rx.blocking_recv() {
            match line {
                OutputLine::Stdout(msg) => {
                    let _ = writeln!(out, "{}", msg);
                }
                OutputLine::Stderr(msg) => {
                    let _ = writeln!(err, "{}", msg);
                }
            }
        }

        let _ = out.flush();
        let _ = err.flush();
    });
    (tx, handle)
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "onebuild",
    version,
    about = "Compile the current file with gcc/g++/rustc and optionally run it in a terminal"
)]
pub struct Cli {
    /// Source file to compile
    pub file: Option<PathBuf>,

    /// Grammar label for the file ("C", "C++", "Rust"); defaults to extension detection
    #[arg(long)]
    pub grammar: Option<String>,

    /// Use --run true or --run false to override runAfterCompile from the config
    #[arg(long, action = clap::ArgAction::Set)]
    pub run: Option<bool>,

    /// Path to the config file (defaults to <config dir>/onebuild/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as JSON
    #[arg(long)]
    pub print_config: bool,
}

/// Render a notification for terminal output. The CLI's line-break markup is a plain
/// newline; an editor front-end would pass its own markup instead.
fn render_notification(n: &Notification) -> String {
    let tag = match n.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    format!("[{tag}] {}", n.render("\n"))
}

/// Drive one build: load the config snapshot, dispatch, run the engine, and render its
/// events. Returns whether the build (if any) succeeded.
pub async fn run(args: Cli) -> Result<bool> {
    let config_path = match &args.config {
        Some(p) => p.clone(),
        None => ToolchainConfig::default_path()?,
    };
    let mut cfg = ToolchainConfig::load(&config_path)?;
    if let Some(run_after) = args.run {
        cfg.run_after_compile = run_after;
    }

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        if args.file.is_none() {
            return Ok(true);
        }
    }

    let file = args
        .file
        .clone()
        .context("no source file given (see --help)")?;
    // Absolute paths keep the derived output path and working directory stable no matter
    // where the tool was invoked from.
    let file = if file.is_absolute() {
        file
    } else {
        std::env::current_dir()
            .context("could not determine current directory")?
            .join(file)
    };
    let host = FileHost::new(file, args.grammar.clone());

    let (out_tx, out_handle) = spawn_output_writer();

    let success = match dispatch::dispatch(&host, &cfg) {
        Err(e) => {
            let _ = out_tx.send(OutputLine::Stderr(render_notification(
                &Notification::error(e.to_string()),
            )));
            false
        }
        Ok((request, command)) => {
            let (evt_tx, mut evt_rx) = mpsc::unbounded_channel::<BuildEvent>();
            let engine = BuildEngine::new(cfg);
            let handle = tokio::spawn(async move { engine.run(request, command, evt_tx).await });

            let mut success = false;
            while let Some(ev) = evt_rx.recv().await {
                match ev {
                    BuildEvent::PhaseStarted { phase } => {
                        log::debug!("phase started: {phase:?}");
                    }
                    BuildEvent::Notification(n) => {
                        let _ = out_tx.send(OutputLine::Stderr(render_notification(&n)));
                    }
                    BuildEvent::Completed { outcome } => {
                        success = outcome.is_success();
                        if let CompileOutcome::Success { .. } = outcome {
                            let _ = out_tx.send(OutputLine::Stdout("Compiled.".to_string()));
                        }
                    }
                }
            }

            match handle.await.context("build task failed")? {
                Ok(_) => success,
                Err(e) => {
                    let _ = out_tx.send(OutputLine::Stderr(render_notification(
                        &Notification::error(format!("{e:#}")),
                    )));
                    false
                }
            }
        }
    };

    drop(out_tx);
    let _ = out_handle.await;
    Ok(success)
}

//! Child-process plumbing for the build engine.

use crate::config::ToolchainConfig;
use crate::model::{BuildRequest, CompileCommand};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// What the compiler left behind: its exit classification and everything it wrote to
/// stderr, in arrival order.
pub(crate) struct CompilerExit {
    pub success: bool,
    pub stderr: String,
}

/// Spawn the compiler and wait for it without blocking the caller's thread. The stderr
/// pipe is drained to completion before waiting so a chatty compiler can never stall on
/// a full pipe.
pub(crate) async fn run_compiler(
    command: &CompileCommand,
    work_dir: &Path,
) -> Result<CompilerExit> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .current_dir(work_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn compiler '{}'", command.program))?;

    let mut buf = Vec::new();
    if let Some(mut stderr) = child.stderr.take() {
        stderr
            .read_to_end(&mut buf)
            .await
            .context("failed to read compiler stderr")?;
    }

    let status = child.wait().await.context("failed to wait for compiler")?;
    log::debug!("compiler '{}' exited with {status}", command.program);

    Ok(CompilerExit {
        success: status.success(),
        stderr: String::from_utf8_lossy(&buf).into_owned(),
    })
}

/// Launch the built binary inside the configured terminal emulator. Fire-and-forget:
/// the terminal's output and exit status are never observed, and a failure to launch is
/// only logged.
pub(crate) fn launch_terminal(cfg: &ToolchainConfig, request: &BuildRequest) {
    let mut cmd = Command::new(&cfg.terminal);
    cmd.args(cfg.terminal_argv())
        .arg(&request.output)
        .current_dir(&request.work_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match cmd.spawn() {
        Ok(child) => {
            log::debug!(
                "launched terminal '{}' for {} (pid {:?})",
                cfg.terminal,
                request.output.display(),
                child.id()
            );
        }
        Err(e) => {
            log::debug!("terminal '{}' failed to launch: {e}", cfg.terminal);
        }
    }
}

//! Build engine: runs one compile, classifies its outcome, and optionally chains the
//! run-in-terminal phase. Emits `BuildEvent`s for presentation layers; owns nothing
//! shared, so overlapping builds cannot interfere with each other.

mod process;

use crate::config::ToolchainConfig;
use crate::model::{
    BuildEvent, BuildPhase, BuildRequest, CompileCommand, CompileOutcome, Notification,
};
use anyhow::Result;
use tokio::sync::mpsc;

pub struct BuildEngine {
    cfg: ToolchainConfig,
}

impl BuildEngine {
    pub fn new(cfg: ToolchainConfig) -> Self {
        Self { cfg }
    }

    /// Run one build to completion: Idle -> Compiling -> {Failed | Succeeded} ->
    /// [Running] -> Idle. Exactly one `CompileOutcome` is produced per request.
    pub async fn run(
        self,
        request: BuildRequest,
        command: CompileCommand,
        event_tx: mpsc::UnboundedSender<BuildEvent>,
    ) -> Result<CompileOutcome> {
        let _ = event_tx.send(BuildEvent::PhaseStarted {
            phase: BuildPhase::Compiling,
        });

        let exit = process::run_compiler(&command, &request.work_dir).await?;

        let outcome = if !exit.success {
            let _ = event_tx.send(BuildEvent::Notification(Notification::error(
                exit.stderr.clone(),
            )));
            CompileOutcome::Failure {
                errors: exit.stderr,
            }
        } else if !exit.stderr.is_empty() {
            // Zero exit with stderr text: the build succeeded but carries warnings,
            // surfaced before any run-phase attempt.
            let _ = event_tx.send(BuildEvent::Notification(Notification::warning(
                exit.stderr.clone(),
            )));
            CompileOutcome::Success {
                warnings: Some(exit.stderr),
            }
        } else {
            CompileOutcome::Success { warnings: None }
        };

        if outcome.is_success() && self.cfg.run_after_compile {
            let _ = event_tx.send(BuildEvent::PhaseStarted {
                phase: BuildPhase::Running,
            });
            process::launch_terminal(&self.cfg, &request);
        }

        let _ = event_tx.send(BuildEvent::Completed {
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }
}

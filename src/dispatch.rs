//! Dispatcher: turns the active buffer plus its grammar label into a concrete compiler
//! invocation, or a user-facing error. Never both, never neither.

use crate::config::{split_tokens, ToolchainConfig};
use crate::host::EditorHost;
use crate::model::{BuildRequest, CompileCommand, FileType};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The buffer has no backing file; there is nothing on disk to compile.
    #[error("File not found.\nSave before compiling.")]
    FileNotSaved,

    /// No compiler is configured for the detected grammar.
    #[error("File type not supported.\nNot a supported file type: {grammar}")]
    UnsupportedFileType { grammar: String },
}

/// Resolve the active buffer into a `BuildRequest` and the compiler command to run.
///
/// Side effect: the active buffer is persisted to disk before this returns, so the
/// compiler always sees the latest content. A failed save is logged, not fatal.
pub fn dispatch(
    host: &dyn EditorHost,
    cfg: &ToolchainConfig,
) -> Result<(BuildRequest, CompileCommand), DispatchError> {
    let source = host.active_file().ok_or(DispatchError::FileNotSaved)?;

    let grammar = host.grammar_name();
    let file_type = FileType::from_grammar(&grammar)
        .ok_or(DispatchError::UnsupportedFileType { grammar })?;

    let request = BuildRequest::new(&source, file_type);
    let (compiler, options) = cfg.toolchain(file_type);
    let command = CompileCommand {
        program: compiler.to_string(),
        args: compile_args(&request, options),
    };

    if let Err(e) = host.save_active_buffer() {
        log::warn!("failed to save buffer before compiling: {e:#}");
    }

    log::debug!(
        "dispatch: {} -> {} {:?}",
        request.source.display(),
        command.program,
        command.args
    );
    Ok((request, command))
}

/// Argument vector for the compile: source, `-o`, output, then the user's flags split on
/// whitespace with empty tokens discarded.
fn compile_args(request: &BuildRequest, options: &str) -> Vec<String> {
    let mut args = vec![
        request.source.to_string_lossy().to_string(),
        "-o".to_string(),
        request.output.to_string_lossy().to_string(),
    ];
    args.extend(split_tokens(options));
    args
}

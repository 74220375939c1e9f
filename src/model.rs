use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Languages the build dispatcher knows how to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    C,
    Cpp,
    Rust,
}

impl FileType {
    /// Resolve an editor grammar label ("C", "C++", "Rust") to a file type.
    /// Matching is case-insensitive; unknown labels yield `None`.
    pub fn from_grammar(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "c" => Some(FileType::C),
            "c++" | "cpp" => Some(FileType::Cpp),
            "rust" => Some(FileType::Rust),
            _ => None,
        }
    }

    pub fn grammar_name(self) -> &'static str {
        match self {
            FileType::C => "C",
            FileType::Cpp => "C++",
            FileType::Rust => "Rust",
        }
    }
}

/// One compile invocation, built fresh per user action and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    pub source: PathBuf,
    pub file_type: FileType,
    /// Directory the compiler (and later the terminal) runs in.
    pub work_dir: PathBuf,
    /// Source path with its extension stripped; the `-o` target.
    pub output: PathBuf,
}

impl BuildRequest {
    pub fn new(source: &Path, file_type: FileType) -> Self {
        let work_dir = source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let output = source.with_extension("");
        Self {
            source: source.to_path_buf(),
            file_type,
            work_dir,
            output,
        }
    }
}

/// Fully resolved compiler invocation handed from the dispatcher to the runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Classification of a finished compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompileOutcome {
    Success {
        /// Accumulated stderr when the compiler exited 0 but still wrote diagnostics.
        warnings: Option<String>,
    },
    Failure {
        errors: String,
    },
}

impl CompileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildPhase {
    Compiling,
    Running,
}

/// Notification severities the host renderer must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A user-facing popup emitted by the engine and rendered by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub body: String,
}

impl Notification {
    pub fn error(body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            body: body.into(),
        }
    }

    pub fn warning(body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            body: body.into(),
        }
    }

    /// Render the body with the consumer's line-break markup substituted for `\n`.
    /// The CLI passes "\n"; an HTML-style renderer passes "<br/>".
    pub fn render(&self, line_break: &str) -> String {
        self.body.replace('\n', line_break)
    }
}

/// Events emitted by the build engine and consumed by presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BuildEvent {
    PhaseStarted { phase: BuildPhase },
    Notification(Notification),
    Completed { outcome: CompileOutcome },
}

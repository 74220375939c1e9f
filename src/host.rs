//! Editor-host seam.
//!
//! The dispatcher only ever talks to the host through this trait, so the core carries no
//! editor API. The CLI binary supplies a file-backed host; tests supply mocks.

use anyhow::Result;
use std::path::{Path, PathBuf};

pub trait EditorHost {
    /// Grammar label of the active buffer, exactly as the host detects it (e.g. "C++").
    fn grammar_name(&self) -> String;

    /// Backing file of the active buffer, absent if the buffer was never saved.
    fn active_file(&self) -> Option<PathBuf>;

    /// Persist the active buffer to disk. A no-op on an already-clean buffer.
    fn save_active_buffer(&self) -> Result<()>;
}

/// Host over a plain on-disk file, used by the CLI front-end. The grammar is inferred
/// from the file extension unless an explicit label is supplied.
pub struct FileHost {
    path: PathBuf,
    grammar_override: Option<String>,
}

impl FileHost {
    pub fn new(path: PathBuf, grammar_override: Option<String>) -> Self {
        Self {
            path,
            grammar_override,
        }
    }
}

impl EditorHost for FileHost {
    fn grammar_name(&self) -> String {
        if let Some(g) = &self.grammar_override {
            return g.clone();
        }
        grammar_from_extension(&self.path)
    }

    fn active_file(&self) -> Option<PathBuf> {
        if self.path.exists() {
            Some(self.path.clone())
        } else {
            None
        }
    }

    fn save_active_buffer(&self) -> Result<()> {
        // The file is already on disk; nothing to flush.
        Ok(())
    }
}

/// Map a file extension to the grammar label an editor would report. Unknown extensions
/// are passed through as-is so they surface as an unsupported-type error downstream.
pub fn grammar_from_extension(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "c" | "h" => "C".to_string(),
        "cpp" | "cc" | "cxx" | "hpp" => "C++".to_string(),
        "rs" => "Rust".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_map_to_grammar_labels() {
        assert_eq!(grammar_from_extension(Path::new("a.c")), "C");
        assert_eq!(grammar_from_extension(Path::new("a.h")), "C");
        assert_eq!(grammar_from_extension(Path::new("a.cpp")), "C++");
        assert_eq!(grammar_from_extension(Path::new("a.cc")), "C++");
        assert_eq!(grammar_from_extension(Path::new("a.CXX")), "C++");
        assert_eq!(grammar_from_extension(Path::new("a.rs")), "Rust");
        assert_eq!(grammar_from_extension(Path::new("a.py")), "py");
        assert_eq!(grammar_from_extension(Path::new("Makefile")), "");
    }

    #[test]
    fn grammar_override_wins_over_extension() {
        let host = FileHost::new(PathBuf::from("weird.txt"), Some("Rust".into()));
        assert_eq!(host.grammar_name(), "Rust");
    }

    #[test]
    fn missing_file_reports_no_backing_file() {
        let host = FileHost::new(PathBuf::from("/definitely/not/here.c"), None);
        assert!(host.active_file().is_none());
    }
}

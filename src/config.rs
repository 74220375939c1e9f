//! Persisted toolchain configuration.
//!
//! Loaded once per invocation and threaded through the dispatcher and the engine as a
//! read-only snapshot; nothing in the core reaches back into mutable settings.

use crate::model::FileType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User-editable settings, one flat record per the persisted schema. Every field is
/// defaulted so a missing or partial config file still yields a usable snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolchainConfig {
    pub c_compiler: String,
    pub c_compiler_options: String,
    pub cpp_compiler: String,
    pub cpp_compiler_options: String,
    pub rust_compiler: String,
    pub rust_compiler_options: String,
    pub run_after_compile: bool,
    pub terminal: String,
    pub terminal_args: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            c_compiler: "gcc".to_string(),
            c_compiler_options: String::new(),
            cpp_compiler: "g++".to_string(),
            cpp_compiler_options: String::new(),
            rust_compiler: "rustc".to_string(),
            rust_compiler_options: String::new(),
            run_after_compile: true,
            terminal: "st".to_string(),
            terminal_args: "-ae".to_string(),
        }
    }
}

impl ToolchainConfig {
    /// Compiler executable and flag string for a file type. The mapping is a closed
    /// enum match, so every supported type resolves a distinct record.
    pub fn toolchain(&self, file_type: FileType) -> (&str, &str) {
        match file_type {
            FileType::C => (&self.c_compiler, &self.c_compiler_options),
            FileType::Cpp => (&self.cpp_compiler, &self.cpp_compiler_options),
            FileType::Rust => (&self.rust_compiler, &self.rust_compiler_options),
        }
    }

    /// Terminal argument string as individual tokens.
    pub fn terminal_argv(&self) -> Vec<String> {
        split_tokens(&self.terminal_args)
    }

    /// Load a snapshot from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Default location: `<config dir>/onebuild/config.json`.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine config directory")?;
        Ok(base.join("onebuild").join("config.json"))
    }
}

/// Split a user-entered option string on whitespace, discarding empty tokens so runs of
/// spaces never produce empty arguments.
pub fn split_tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

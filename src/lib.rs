//! onebuild: compile the current file, classify the result, optionally run it.
//!
//! The library splits along the two components of the design: the dispatcher
//! ([`dispatch`]) resolves a file plus grammar label into a compiler invocation, and the
//! engine ([`engine`]) spawns that invocation, accumulates its stderr, classifies the
//! outcome, and conditionally launches the built binary in a terminal emulator. The
//! editor integration surface is the [`host::EditorHost`] trait; the CLI in [`cli`] is
//! one host implementation over plain files.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod host;
pub mod model;

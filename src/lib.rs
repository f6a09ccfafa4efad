//! # Reliverse CLI
//!
//! An interactive wizard that installs the Relivator starter: it greets the
//! user, asks for confirmation, clones the starter into the first free
//! `relivator`, `relivator-1`, ... directory and offers to open its README.
//!
//! ## Quick Start
//!
//! ```bash
//! # Clone into the current directory
//! reliverse
//!
//! # Clone somewhere else
//! reliverse --install-dir ~/projects
//! ```
//!
//! ## Module Structure
//!
//! - [`commands`] - The install workflow
//! - [`target`] - Picks a clone directory name that is not taken yet
//! - [`prompt`] - Yes/no input over a terminal, a pipe, or a mock
//! - [`git`] - Clones through the `git` executable
//! - [`browser`] - Opens URLs with the platform launcher
//! - [`config`] - Per-run settings and their defaults
//! - [`messages`] - Text printed by the wizard
//! - [`logging`] - Diagnostic output on stderr
//! - [`traits`] - Collaborator traits for testability and abstraction

pub mod browser;
pub mod commands;
pub mod config;
pub mod git;
pub mod logging;
pub mod messages;
pub mod prompt;
pub mod target;
pub mod traits;

pub use anyhow::Result;

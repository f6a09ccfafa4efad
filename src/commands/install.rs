use anyhow::{Context, Result};

use crate::browser::SystemBrowser;
use crate::config::InstallConfig;
use crate::git::GitCli;
use crate::messages;
use crate::prompt::{Prompter, confirm};
use crate::target::resolve_dir_name;
use crate::traits::{Cloner, UrlOpener};

/// How a run ended when nothing went wrong
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The starter was cloned into the named directory
    Done { dir_name: String },
    /// The user declined the install prompt
    Cancelled,
}

/// Runs the install wizard with the real git and browser collaborators
///
/// # Errors
/// Returns an error if reading input, resolving the target directory,
/// cloning, or launching the browser fails
pub fn run_install(config: &InstallConfig, prompter: &dyn Prompter) -> Result<InstallOutcome> {
    run_install_with(config, prompter, &GitCli, &SystemBrowser)
}

/// Test version that accepts mock collaborators
///
/// # Errors
/// Returns an error if reading input, resolving the target directory,
/// cloning, or launching the browser fails
pub fn run_install_with(
    config: &InstallConfig,
    prompter: &dyn Prompter,
    cloner: &dyn Cloner,
    opener: &dyn UrlOpener,
) -> Result<InstallOutcome> {
    for line in messages::WELCOME {
        println!("{}", line);
    }

    println!();
    println!("{}", messages::INSTALL_INTRO);
    println!();
    if !confirm(prompter, messages::INSTALL_PROMPT)? {
        tracing::info!("install declined");
        println!("{}", messages::CANCELLED);
        return Ok(InstallOutcome::Cancelled);
    }

    let dir_name = resolve_dir_name(config.target_root(), &config.base_name)?;
    let dest = config.target_root().join(&dir_name);
    cloner
        .clone_repo(&config.repo_url, &dest)
        .with_context(|| messages::clone_failed(&config.repo_url))?;
    println!("{}", messages::cloned(&config.repo_url, &dir_name));

    println!();
    if confirm(prompter, messages::README_PROMPT)? {
        opener
            .open_url(&config.readme_url)
            .context(messages::README_FAILED)?;
        println!("{}", messages::README_OPENED);
    } else {
        tracing::info!("readme declined");
        println!("{}", messages::EXITING);
    }

    println!();
    println!("{}", messages::CLOSING);
    println!();

    Ok(InstallOutcome::Done { dir_name })
}

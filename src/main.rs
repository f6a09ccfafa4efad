use clap::{ArgAction, Parser, ValueHint};
use reliverse::Result;
use reliverse::commands::install::{self, InstallOutcome};
use reliverse::config::{DEFAULT_README_URL, DEFAULT_REPO_URL, InstallConfig};
use reliverse::logging;
use reliverse::prompt::{InquirePrompter, LinePrompter, Prompter};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reliverse")]
#[command(about = "Install the Relivator starter into a fresh directory")]
#[command(version)]
pub struct Cli {
    /// Directory to clone into (defaults to the current directory)
    #[arg(long, env = "RELIVERSE_INSTALL_DIR", value_hint = ValueHint::DirPath)]
    install_dir: Option<PathBuf>,

    /// Show diagnostics on stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Repository to clone
    #[arg(long, env = "RELIVERSE_REPO_URL", default_value = DEFAULT_REPO_URL, hide = true)]
    repo_url: String,

    /// Page offered after a successful clone
    #[arg(long, env = "RELIVERSE_README_URL", default_value = DEFAULT_README_URL, hide = true)]
    readme_url: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_tracing(cli.verbose);

    let mut config = InstallConfig {
        repo_url: cli.repo_url,
        readme_url: cli.readme_url,
        ..InstallConfig::default()
    };
    if let Some(dir) = cli.install_dir {
        config = config.with_install_dir(dir);
    }

    let prompter: Box<dyn Prompter> = if std::io::stdin().is_terminal() {
        Box::new(InquirePrompter)
    } else {
        Box::new(LinePrompter::new(std::io::stdin().lock(), std::io::stdout()))
    };

    match install::run_install(&config, prompter.as_ref())? {
        InstallOutcome::Done { dir_name } => tracing::info!(%dir_name, "install finished"),
        InstallOutcome::Cancelled => tracing::info!("install cancelled"),
    }

    Ok(())
}

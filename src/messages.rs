//! Text shown by the install wizard.

pub const WELCOME: &[&str] = &[
    concat!("▲ Reliverse CLI v", env!("CARGO_PKG_VERSION")),
    "▲ Issue? Hotline: https://discord.gg/Pb8uKbwpsJ",
    "",
    "👋 Hello and thank you for testing the Reliverse CLI! This is still an early alpha version, so we apologize if you encounter any issues. Please reach out on Discord to report any, as well as to provide any suggestions on how to improve our wizard. Really, thanks so much! And good luck with your Relivator-based web-app deployment!",
    "",
    "🦄 Hey there! Did someone say Reli? It's me! Your friend and personal AI assistant! I'm here to help you deploy Relivator. Let's get started!",
];

pub const INSTALL_INTRO: &str = "🦄 So far, I have only been trained to install the full version of Relivator for you, where you will need to specify your database in your .env file. In the future I will be able to install the simplest possible Relivator edition too, which does not require any additional configuration. But, for now, are you ready to install the latest full-featured Relivator?";

pub const INSTALL_PROMPT: &str =
    "🔵 Type Y to start the installation (please wait for completion), N to cancel, then press Enter.";

pub const CANCELLED: &str = "🔴 Installation cancelled.";

pub const README_PROMPT: &str = "📖 Do you want to read the Relivator's README? [Y/N]";

pub const README_OPENED: &str = "📖 README opened successfully.";

pub const README_FAILED: &str = "🔴 Failed to open the README";

pub const EXITING: &str = "🔴 Exiting the program.";

pub const CLOSING: &str =
    "⚠️ To be continued... Check back later or please help with code contributions...";

#[must_use]
pub fn cloned(repo_url: &str, dir_name: &str) -> String {
    format!("✅ Successfully cloned the {} repository into {}", repo_url, dir_name)
}

#[must_use]
pub fn clone_failed(repo_url: &str) -> String {
    format!("🔴 Failed to clone the {} repository", repo_url)
}

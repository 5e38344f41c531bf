/// Error type shared by every installation step
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::utils::terminal::hyperlink;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("This script was designed to run on a ChromeOS device. Please run on a proper device.")]
    UnsupportedHost,

    #[error(
        "This script is designed to run exclusively within the Steam environment (Borealis).\nPlease {}.",
        hyperlink("visit the list of devices compatible with Steam (Borealis)", .help_url)
    )]
    NestedContainer { help_url: String },

    #[error("The file '{}' already exists.", .0.display())]
    FileExists(PathBuf),

    #[error("Failed to read host identification from {}: {source}", .path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Extracting '{}' failed: {status}", .package.display())]
    Extraction { package: PathBuf, status: ExitStatus },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("No confirmation received on standard input")]
    NoConfirmation,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InstallError {
    /// Host mismatches are reported to the user on stdout, not as failures
    pub fn is_environment_mismatch(&self) -> bool {
        matches!(
            self,
            InstallError::UnsupportedHost | InstallError::NestedContainer { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;

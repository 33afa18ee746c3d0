use std::path::PathBuf;
use thiserror::Error;

/// `install.sh` could not be found in any templates directory.
pub const EXIT_NOT_FOUND: u8 = 72;
/// The installer script could not be started.
pub const EXIT_LAUNCH_FAILURE: u8 = 71;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Could not find templates. Ensure claude-parallel is properly installed.{}", searched_hint(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("failed to launch installer {}: {detail}", .script.display())]
    LaunchFailure { script: PathBuf, detail: String },
}

impl InstallError {
    pub fn exit_code(&self) -> u8 {
        match self {
            InstallError::NotFound { .. } => EXIT_NOT_FOUND,
            InstallError::LaunchFailure { .. } => EXIT_LAUNCH_FAILURE,
        }
    }
}

fn searched_hint(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return String::new();
    }
    let mut out = String::from("\nSearched:");
    for dir in searched {
        out.push_str("\n  ");
        out.push_str(&dir.display().to_string());
    }
    out
}

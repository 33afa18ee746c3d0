use crate::platform::{platform, PlatformOps};
use log::{info, warn};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub entry_point: PathBuf,
    pub template: OsString,
    pub target: OsString,
}

/// How a single installer run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ChildNonZero(i32),
    LaunchFailure(String),
}

pub trait Launcher {
    /// Run the installer to completion. Called at most once per request.
    fn launch(&self, request: &InstallRequest) -> Outcome;
}

/// Runs `bash <entry_point> <template> <target>` with inherited stdio and cwd.
pub struct ShellLauncher {
    platform: &'static dyn PlatformOps,
}

impl ShellLauncher {
    pub fn new() -> Self {
        ShellLauncher {
            platform: platform(),
        }
    }
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for ShellLauncher {
    fn launch(&self, request: &InstallRequest) -> Outcome {
        let shell = match which::which(self.platform.shell_program()) {
            Ok(path) => path,
            Err(e) => {
                warn!("{} not found on PATH", self.platform.shell_program());
                return Outcome::LaunchFailure(format!(
                    "{}: {e}",
                    self.platform.shell_program()
                ));
            }
        };
        info!(
            "running {} {} {:?} {:?}",
            shell.display(),
            request.entry_point.display(),
            request.template,
            request.target
        );
        let status = Command::new(&shell)
            .arg(&request.entry_point)
            .arg(&request.template)
            .arg(&request.target)
            .status();
        match status {
            Ok(status) if status.success() => Outcome::Success,
            Ok(status) => Outcome::ChildNonZero(self.platform.exit_code(status)),
            Err(e) => {
                warn!("spawning {} failed: {e}", shell.display());
                Outcome::LaunchFailure(format!("{}: {e}", shell.display()))
            }
        }
    }
}

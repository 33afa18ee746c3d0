use crate::platform::PlatformOps;
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::ExitStatus;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
    fn shell_program(&self) -> &'static str {
        "bash"
    }
    fn exit_code(&self, status: ExitStatus) -> i32 {
        // Killed by a signal: report it the way a shell would.
        match (status.code(), status.signal()) {
            (Some(code), _) => code,
            (None, Some(sig)) => 128 + sig,
            (None, None) => 1,
        }
    }
}

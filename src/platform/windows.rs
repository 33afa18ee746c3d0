use crate::platform::PlatformOps;
use std::path::PathBuf;
use std::process::ExitStatus;

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn home_dir(&self) -> Option<PathBuf> { dirs::home_dir() }
    // Git Bash / MSYS ship `bash.exe` on PATH.
    fn shell_program(&self) -> &'static str { "bash" }
    fn exit_code(&self, status: ExitStatus) -> i32 { status.code().unwrap_or(1) }
}

pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::path::PathBuf;
use std::process::ExitStatus;

pub trait PlatformOps: Sync + Send {
    fn home_dir(&self) -> Option<PathBuf>;
    /// Directory the running binary was installed under, i.e. the parent of its `bin/`.
    fn install_prefix(&self) -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        exe.parent()?.parent().map(|p| p.to_path_buf())
    }
    fn shell_program(&self) -> &'static str;
    fn exit_code(&self, status: ExitStatus) -> i32;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;

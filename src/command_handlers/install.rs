use crate::error::InstallError;
use crate::invoker::{InstallRequest, Launcher, Outcome};
use crate::locator::{locate, SearchRoots};
use log::debug;
use std::ffi::OsStr;

pub struct InstallArgs<'a> {
    pub template: &'a OsStr,
    pub target: &'a OsStr,
    pub roots: &'a SearchRoots,
}

/// Locate the templates and run their installer once.
///
/// Returns the exit code this process should finish with: `0` on success or
/// the installer's own non-zero code. Nothing is launched if the templates
/// cannot be found.
pub fn run_install(args: InstallArgs, launcher: &dyn Launcher) -> Result<i32, InstallError> {
    let target = locate(args.roots)?;
    debug!(
        "installing template {:?} from {}",
        args.template,
        target.templates_dir.display()
    );
    let request = InstallRequest {
        entry_point: target.entry_point_path,
        template: args.template.to_os_string(),
        target: args.target.to_os_string(),
    };
    match launcher.launch(&request) {
        Outcome::Success => Ok(0),
        Outcome::ChildNonZero(code) => Ok(code),
        Outcome::LaunchFailure(detail) => Err(InstallError::LaunchFailure {
            script: request.entry_point,
            detail,
        }),
    }
}

use std::convert::Infallible;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use std::thread;
use std::time::Duration;

use tracing::event;

use super::error::{Result, UpdateError};

/// Wait `delay`, then replace this process with a fresh run of `exe`
/// using the same arguments. Only returns if that fails.
///
/// `exe` must be resolved before the update renames anything: once the
/// running binary has been moved to its `.bak` name the OS reports that
/// name as the current executable.
pub fn restart_process(exe: &Path, delay: Duration) -> Result<Infallible> {
    thread::sleep(delay);
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    event!(tracing::Level::INFO, exe = %exe.display(), ?args, "Restarting");
    exec(exe, &args)
}

#[cfg(unix)]
fn exec(exe: &Path, args: &[OsString]) -> Result<Infallible> {
    use std::os::unix::process::CommandExt;

    let err = Command::new(exe).args(args).exec();
    Err(UpdateError::Restart(err))
}

/// No `exec` here, so run the new process to completion and exit with
/// its status.
#[cfg(not(unix))]
fn exec(exe: &Path, args: &[OsString]) -> Result<Infallible> {
    let status = Command::new(exe)
        .args(args)
        .status()
        .map_err(UpdateError::Restart)?;
    std::process::exit(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = restart_process(&dir.path().join("does-not-exist"), Duration::ZERO);
        assert!(matches!(result, Err(UpdateError::Restart(_))));
    }
}

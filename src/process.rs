use std::process::{Child, Command, Stdio};

use log::info;

use crate::error::LauncherError;

/// How a child process ended: a normal exit carrying a code, or termination
/// without one (killed or signaled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Exited(i32),
    Terminated,
}

impl ExitStatus {
    pub fn exited(&self) -> bool {
        matches!(self, ExitStatus::Exited(_))
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitStatus::Exited(code),
            None => ExitStatus::Terminated,
        }
    }
}

/// Process operations the launch sequence runs on. Implemented over
/// `std::process` in production and as a recording fake in tests.
pub trait ProcessApi {
    type Child: ChildProcess;

    fn start(&self, path: &str, arguments: &[String]) -> Result<Self::Child, LauncherError>;
}

pub trait ChildProcess {
    fn wait(&mut self) -> Result<ExitStatus, LauncherError>;

    /// Gives up ownership without waiting for or killing the process.
    fn release(self);
}

/// Starts children with the console streams inherited, so the launched
/// program shares the launcher's stdin, stdout and stderr.
pub struct SystemProcesses;

impl ProcessApi for SystemProcesses {
    type Child = SystemChild;

    fn start(&self, path: &str, arguments: &[String]) -> Result<SystemChild, LauncherError> {
        info!("Starting `{}`", path);
        let child = Command::new(path)
            .args(arguments)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| LauncherError::Launch {
                path: path.to_string(),
                source: err,
            })?;

        Ok(SystemChild {
            path: path.to_string(),
            child,
        })
    }
}

pub struct SystemChild {
    path: String,
    child: Child,
}

impl ChildProcess for SystemChild {
    fn wait(&mut self) -> Result<ExitStatus, LauncherError> {
        let status = self
            .child
            .wait()
            .map_err(|err| LauncherError::ProcessWait {
                path: self.path.clone(),
                source: err,
            })?;

        Ok(ExitStatus::from(status))
    }

    // Dropping a std Child leaves the process running, so consuming self is
    // all a detach takes.
    fn release(self) {}
}

use log::{info, warn};

use crate::config::Config;
use crate::error::LauncherError;
use crate::platform::WindowApi;
use crate::process::{ChildProcess, ProcessApi};
use crate::watcher;

/// Runs the whole launch sequence: start the program, wait for its window,
/// maximize every match, then optionally run the follow-up program once the
/// primary exits normally.
///
/// Without a follow-up program the sequence ends right after maximizing;
/// the primary keeps running on its own.
pub fn run<W, P>(config: &Config, windows: &W, processes: &P) -> Result<(), LauncherError>
where
    W: WindowApi,
    P: ProcessApi,
{
    let mut primary = processes.start(&config.program.path, &config.program.arguments)?;

    let matches =
        watcher::wait_for_window(windows, &config.program.title, watcher::POLL_INTERVAL)?;
    watcher::maximize_all(windows, &matches);

    if !config.has_after() {
        return Ok(());
    }

    info!("Waiting for process to exit");
    let status = primary.wait()?;

    if status.exited() {
        info!("Process exited");
        let after = processes.start(&config.after.path, &config.after.arguments)?;
        after.release();
    } else {
        warn!(
            "'{}' was terminated ({:?}); not starting '{}'",
            config.program.path, status, config.after.path
        );
    }

    Ok(())
}

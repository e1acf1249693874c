use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::error::LauncherError;
use crate::platform::{WindowApi, WindowHandle};

/// Delay between enumeration passes while waiting for the window to appear.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Matching handles from a single enumeration pass, in OS enumeration order.
pub type MatchSet = Vec<WindowHandle>;

/// Returns the visible top-level windows whose caption equals `title`.
///
/// Windows whose caption cannot be read are skipped; one bad window must not
/// abort the pass. Only the enumeration call itself failing is an error.
pub fn find_windows<W: WindowApi>(api: &W, title: &str) -> Result<MatchSet, LauncherError> {
    let mut matches = Vec::new();

    for handle in api.top_level_windows()? {
        if let Some(caption) = api.window_caption(handle) {
            if caption == title && api.is_window_visible(handle) {
                matches.push(handle);
            }
        }
    }

    Ok(matches)
}

/// Blocks until at least one visible window carries `title`, enumerating
/// once per `interval`. There is no timeout; the caller waits for a window
/// that is expected to eventually appear.
pub fn wait_for_window<W: WindowApi>(
    api: &W,
    title: &str,
    interval: Duration,
) -> Result<MatchSet, LauncherError> {
    loop {
        info!("Waiting for window `{}`", title);
        let matches = find_windows(api, title)?;
        if !matches.is_empty() {
            info!("Found `{}`: {:?}", title, matches);
            return Ok(matches);
        }
        thread::sleep(interval);
    }
}

/// Asks the OS to maximize every window in the set. Each handle is attempted
/// even when an earlier one fails, since several windows may share a title.
/// Returns how many windows reported a state change.
pub fn maximize_all<W: WindowApi>(api: &W, windows: &[WindowHandle]) -> usize {
    let mut maximized = 0;
    for &handle in windows {
        info!("Maximizing {:?}", handle);
        if api.show_maximized(handle) {
            maximized += 1;
        } else {
            warn!("Window {:?} did not change state", handle);
        }
    }
    maximized
}

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{WindowApi, WindowHandle};
use crate::error::LauncherError;

#[derive(Debug, Clone)]
struct FakeWindow {
    handle: WindowHandle,
    caption: Option<String>,
    visible: bool,
    appears_on_pass: usize,
}

/// Scripted window source for tests. Windows can be added while a poller is
/// blocked on another thread; every enumeration pass reflects the current
/// script.
#[derive(Default)]
pub struct FakeWindows {
    windows: Mutex<Vec<FakeWindow>>,
    fail_enumeration: AtomicBool,
    passes: AtomicUsize,
    denied: Mutex<Vec<WindowHandle>>,
    attempts: Mutex<Vec<WindowHandle>>,
}

impl FakeWindows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_window(&self, handle: isize, caption: &str, visible: bool) {
        self.windows.lock().unwrap().push(FakeWindow {
            handle: WindowHandle(handle),
            caption: Some(caption.to_string()),
            visible,
            appears_on_pass: 0,
        });
    }

    /// Adds a visible window that enumeration only reports from the given
    /// pass on (1-based).
    pub fn add_window_on_pass(&self, handle: isize, caption: &str, pass: usize) {
        self.windows.lock().unwrap().push(FakeWindow {
            handle: WindowHandle(handle),
            caption: Some(caption.to_string()),
            visible: true,
            appears_on_pass: pass,
        });
    }

    /// Adds a visible window whose caption cannot be read.
    pub fn add_untitled_window(&self, handle: isize) {
        self.windows.lock().unwrap().push(FakeWindow {
            handle: WindowHandle(handle),
            caption: None,
            visible: true,
            appears_on_pass: 0,
        });
    }

    /// Makes every subsequent enumeration call fail.
    pub fn fail_enumeration(&self) {
        self.fail_enumeration.store(true, Ordering::SeqCst);
    }

    /// Number of enumeration passes completed so far.
    pub fn passes(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }

    /// Makes `show_maximized` report `false` for the given handle.
    pub fn deny_maximize(&self, handle: isize) {
        self.denied.lock().unwrap().push(WindowHandle(handle));
    }

    /// Every handle `show_maximized` was called with, in call order.
    pub fn maximize_attempts(&self) -> Vec<WindowHandle> {
        self.attempts.lock().unwrap().clone()
    }

    fn find(&self, handle: WindowHandle) -> Option<FakeWindow> {
        self.windows
            .lock()
            .unwrap()
            .iter()
            .find(|window| window.handle == handle)
            .cloned()
    }
}

impl WindowApi for FakeWindows {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>, LauncherError> {
        if self.fail_enumeration.load(Ordering::SeqCst) {
            return Err(LauncherError::Enumeration {
                message: "enumeration rejected".to_string(),
            });
        }

        let pass = self.passes.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(self
            .windows
            .lock()
            .unwrap()
            .iter()
            .filter(|window| window.appears_on_pass <= pass)
            .map(|window| window.handle)
            .collect())
    }

    fn window_caption(&self, window: WindowHandle) -> Option<String> {
        self.find(window).and_then(|window| window.caption)
    }

    fn is_window_visible(&self, window: WindowHandle) -> bool {
        self.find(window).map(|window| window.visible).unwrap_or(false)
    }

    fn show_maximized(&self, window: WindowHandle) -> bool {
        self.attempts.lock().unwrap().push(window);
        !self.denied.lock().unwrap().contains(&window)
    }
}

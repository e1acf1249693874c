use crate::error::LauncherError;

#[cfg(windows)]
pub mod windows;

#[cfg(test)]
pub mod fake;

/// Identifier for a top-level window. Only valid while the OS keeps the
/// window alive; handles are re-derived on every enumeration pass and never
/// cached across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// The windowing calls the watcher runs on. Implemented over Win32 in
/// production and as a scripted fake in tests.
pub trait WindowApi {
    /// Every top-level window, in OS enumeration order. Fails only when the
    /// enumeration call itself is rejected, not when individual windows are
    /// unreadable.
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>, LauncherError>;

    /// The window's caption text, or `None` when it cannot be read.
    fn window_caption(&self, window: WindowHandle) -> Option<String>;

    fn is_window_visible(&self, window: WindowHandle) -> bool;

    /// Asks the OS to show the window maximized. Returns whether the window
    /// state changed.
    fn show_maximized(&self, window: WindowHandle) -> bool;
}

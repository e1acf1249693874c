use std::ffi::c_void;

use windows::Win32::{
    Foundation::{BOOL, HWND, LPARAM},
    UI::WindowsAndMessaging::{
        EnumWindows, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible, ShowWindow,
        SW_MAXIMIZE,
    },
};

use super::{WindowApi, WindowHandle};
use crate::error::LauncherError;

/// `WindowApi` over the user32 entry points.
pub struct Win32Api;

impl WindowApi for Win32Api {
    fn top_level_windows(&self) -> Result<Vec<WindowHandle>, LauncherError> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        let state_ptr = &mut handles as *mut _ as isize;

        // The callback only collects raw handles; captions and visibility
        // are queried per handle after the call returns.
        let result = unsafe { EnumWindows(Some(collect_windows), LPARAM(state_ptr)) };
        if let Err(err) = result {
            return Err(LauncherError::Enumeration {
                message: err.to_string(),
            });
        }

        Ok(handles)
    }

    fn window_caption(&self, window: WindowHandle) -> Option<String> {
        unsafe { get_window_title(hwnd(window)) }
    }

    fn is_window_visible(&self, window: WindowHandle) -> bool {
        unsafe { IsWindowVisible(hwnd(window)).as_bool() }
    }

    fn show_maximized(&self, window: WindowHandle) -> bool {
        unsafe { ShowWindow(hwnd(window), SW_MAXIMIZE).as_bool() }
    }
}

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut c_void)
}

unsafe extern "system" fn collect_windows(window: HWND, state: LPARAM) -> BOOL {
    let handles = &mut *(state.0 as *mut Vec<WindowHandle>);
    handles.push(WindowHandle(window.0 as isize));
    BOOL::from(true)
}

unsafe fn get_window_title(window: HWND) -> Option<String> {
    let length = GetWindowTextLengthW(window);
    if length == 0 {
        return None;
    }

    let mut buffer = vec![0u16; (length + 1) as usize];
    let len = GetWindowTextW(window, &mut buffer);
    buffer.truncate(len as usize);

    String::from_utf16(&buffer).ok()
}

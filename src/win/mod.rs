//! Hidden host window, tray callbacks and the message loop.
//!
//! The window is never shown. It exists to own the tray icon and to give
//! the low level keyboard hook a thread with a message loop.

pub(crate) mod keyboard;

use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, MSG,
    PostQuitMessage, RegisterClassExW, TranslateMessage, WINDOW_EX_STYLE, WM_DESTROY,
    WNDCLASSEXW, WS_OVERLAPPEDWINDOW,
};
use windows::core::{PCWSTR, Result, w};

use crate::{helpers, tray};

fn register_main_class(class_name: PCWSTR, hinstance: HINSTANCE) -> Result<()> {
    let wc = WNDCLASSEXW {
        cbSize: u32::try_from(std::mem::size_of::<WNDCLASSEXW>())?,
        lpfnWndProc: Some(wndproc),
        lpszClassName: class_name,
        hInstance: hinstance,
        ..Default::default()
    };

    if unsafe { RegisterClassExW(&raw const wc) } == 0 {
        return Err(helpers::last_error());
    }
    Ok(())
}

fn create_main_window(class_name: PCWSTR, hinstance: HINSTANCE) -> Result<HWND> {
    unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            class_name,
            w!("di-switcher"),
            WS_OVERLAPPEDWINDOW,
            0,
            0,
            0,
            0,
            None,
            None,
            Some(hinstance),
            None,
        )
    }
}

fn message_loop() -> Result<()> {
    let mut msg = MSG::default();
    loop {
        let r = unsafe { GetMessageW(&raw mut msg, None, 0, 0) };
        if r.0 == -1 {
            return Err(helpers::last_error());
        }
        if r.0 == 0 {
            break;
        }
        unsafe {
            let _ = TranslateMessage(&raw const msg);
            DispatchMessageW(&raw const msg);
        }
    }
    Ok(())
}

/// Creates the hidden window and tray icon, installs the keyboard hook and
/// pumps messages until Exit is chosen or the panic chord is pressed.
pub fn run() -> Result<()> {
    let class_name = w!("DiSwitcherHostWindow");
    let hinstance: HINSTANCE = unsafe { GetModuleHandleW(PCWSTR::null()) }?.into();

    register_main_class(class_name, hinstance)
        .inspect_err(|e| helpers::show_error_box("Failed to register the window class.", e))?;
    let hwnd = create_main_window(class_name, hinstance)
        .inspect_err(|e| helpers::show_error_box("Failed to create the host window.", e))?;

    tray::allow_shell_messages(hwnd);

    // Without the tray there is no way to exit, so refuse to run.
    if let Err(e) = tray::ensure_icon(hwnd) {
        tracing::warn!(error = ?e, "tray ensure_icon failed");
        helpers::show_error_box("Failed to create tray icon.", &e);
        let _ = unsafe { DestroyWindow(hwnd) };
        return Err(e);
    }

    if let Err(e) = keyboard::install() {
        tracing::warn!(error = ?e, "keyboard hook install failed");
        helpers::show_error_box("Failed to install keyboard hook.", &e);
        let _ = unsafe { DestroyWindow(hwnd) };
        return Err(e);
    }

    tracing::info!("di-switcher running");
    let result = message_loop();

    // The panic chord leaves the loop without destroying the window.
    keyboard::uninstall();
    tray::remove_icon(hwnd);
    tracing::info!("di-switcher stopped");

    result
}

fn on_tray(hwnd: HWND, lparam: LPARAM) -> LRESULT {
    if !tray::opens_menu(lparam.0) {
        return LRESULT(0);
    }

    match tray::show_menu(hwnd) {
        Ok(tray::ID_EXIT) => {
            tracing::info!("exit requested from tray");
            let _ = unsafe { DestroyWindow(hwnd) };
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = ?e, "tray menu failed"),
    }
    LRESULT(0)
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        tray::WM_APP_TRAY => on_tray(hwnd, lparam),
        WM_DESTROY => {
            keyboard::uninstall();
            tray::remove_icon(hwnd);
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

//! Small wrappers around Win32 calls shared by the host modules.

use windows::Win32::Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, HANDLE};
use windows::Win32::System::Threading::CreateMutexW;
use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
use windows::core::{Error, HRESULT, HSTRING, Result, w};

/// Retrieve the last OS error as a `windows::core::Error`.
pub fn last_error() -> Error {
    Error::from_hresult(HRESULT::from_win32(unsafe { GetLastError() }.0))
}

/// Tells the user why start-up failed. Release builds log nothing, and the
/// process has no console, so this is the only trace the failure leaves.
pub fn show_error_box(context: &str, error: &Error) {
    let text = error_box_text(context, error);
    unsafe {
        let _ = MessageBoxW(
            None,
            &HSTRING::from(text),
            w!("di-switcher"),
            MB_OK | MB_ICONERROR,
        );
    }
}

pub fn error_box_text(context: &str, error: &Error) -> String {
    format!(
        "{context}\n\nWin32 error {:#010X}: {}",
        error.code().0,
        error.message()
    )
}

/// Holds the named mutex for the lifetime of the process.
pub struct SingleInstanceGuard(HANDLE);

impl Drop for SingleInstanceGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Acquire the single instance mutex.
///
/// Returns `None` when another instance already owns it.
pub fn single_instance_guard() -> Result<Option<SingleInstanceGuard>> {
    unsafe {
        let h = CreateMutexW(None, false, w!("Local\\DiSwitcher_SingleInstance"))?;

        if GetLastError() == ERROR_ALREADY_EXISTS {
            let _ = CloseHandle(h);
            return Ok(None);
        }

        Ok(Some(SingleInstanceGuard(h)))
    }
}

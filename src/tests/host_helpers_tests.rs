use windows::Win32::Foundation::{E_ACCESSDENIED, E_FAIL};
use windows::core::Error;

use crate::helpers::error_box_text;

#[test]
fn error_box_names_the_failed_step_and_the_code() {
    let text = error_box_text("Failed to install keyboard hook.", &Error::from_hresult(E_FAIL));

    assert!(text.starts_with("Failed to install keyboard hook.\n\n"));
    assert!(text.contains("Win32 error 0x80004005"));
}

#[test]
fn error_box_carries_the_system_message() {
    let error = Error::from_hresult(E_ACCESSDENIED);
    let text = error_box_text("Failed to create tray icon.", &error);

    assert!(text.ends_with(&error.message()));
}

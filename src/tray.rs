use windows::{
    Win32::{
        Foundation::{HWND, POINT},
        UI::{
            Shell::{
                NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY,
                NOTIFY_ICON_MESSAGE, NOTIFYICONDATAW, Shell_NotifyIconW,
            },
            WindowsAndMessaging::{
                AppendMenuW, ChangeWindowMessageFilterEx, CreatePopupMenu, DestroyMenu,
                GetCursorPos, HMENU, IDI_APPLICATION, LoadIconW, MF_STRING, MSGFLT_ALLOW,
                SetForegroundWindow, TPM_BOTTOMALIGN, TPM_NOANIMATION, TPM_RETURNCMD,
                TPM_RIGHTALIGN, TPM_RIGHTBUTTON, TrackPopupMenu, WM_APP, WM_CONTEXTMENU,
                WM_LBUTTONDBLCLK, WM_RBUTTONUP, WM_USER,
            },
        },
    },
    core::{HRESULT, Result, w},
};

pub const WM_APP_TRAY: u32 = WM_APP + 1;
pub const ID_EXIT: u32 = 1001;
const TRAY_UID: u32 = 1;

// Selection notifications the shell sends for keyboard and click activation.
const NIN_SELECT: u32 = WM_USER;
const NIN_KEYSELECT: u32 = NIN_SELECT | 1;

/// Whether a tray callback `lparam` should pop the menu up. Only the low
/// word carries the mouse message.
pub fn opens_menu(lparam: isize) -> bool {
    let event = (lparam as usize & 0xFFFF) as u32;
    matches!(
        event,
        WM_RBUTTONUP | WM_CONTEXTMENU | WM_LBUTTONDBLCLK | NIN_SELECT | NIN_KEYSELECT
    )
}

/// Lets Explorer deliver tray callbacks when we run elevated.
pub fn allow_shell_messages(hwnd: HWND) {
    let allowed = unsafe { ChangeWindowMessageFilterEx(hwnd, WM_APP_TRAY, MSGFLT_ALLOW, None) };
    if let Err(e) = allowed {
        tracing::warn!(error = ?e, "ChangeWindowMessageFilterEx failed");
    }
}

fn fill_wide(dst: &mut [u16], s: &str) {
    if let Some((last, body)) = dst.split_last_mut() {
        for (d, ch) in body
            .iter_mut()
            .zip(s.encode_utf16().chain(std::iter::repeat(0)))
        {
            *d = ch;
        }
        *last = 0;
    }
}

fn shell_notify(action: NOTIFY_ICON_MESSAGE, nid: &NOTIFYICONDATAW, what: &str) -> Result<()> {
    if unsafe { Shell_NotifyIconW(action, nid) }.as_bool() {
        Ok(())
    } else {
        Err(windows::core::Error::new(
            HRESULT(0x8000_4005_u32.cast_signed()),
            format!("Shell_NotifyIconW returned FALSE: {what}"),
        ))
    }
}

fn base_nid(hwnd: HWND) -> Result<NOTIFYICONDATAW> {
    Ok(NOTIFYICONDATAW {
        cbSize: u32::try_from(core::mem::size_of::<NOTIFYICONDATAW>())?,
        hWnd: hwnd,
        uID: TRAY_UID,
        ..Default::default()
    })
}

/// Adds the tray icon, or refreshes it if the shell already has one for us.
pub fn ensure_icon(hwnd: HWND) -> Result<()> {
    let mut nid = base_nid(hwnd)?;
    nid.uCallbackMessage = WM_APP_TRAY;
    nid.uFlags = NIF_MESSAGE | NIF_ICON | NIF_TIP;
    nid.hIcon = unsafe { LoadIconW(None, IDI_APPLICATION) }?;
    fill_wide(&mut nid.szTip, "di-switcher");

    if unsafe { Shell_NotifyIconW(NIM_ADD, &raw const nid) }.as_bool() {
        return Ok(());
    }

    shell_notify(
        NIM_MODIFY,
        &nid,
        "ensure_icon: NIM_MODIFY after NIM_ADD failure",
    )
}

pub fn remove_icon(hwnd: HWND) {
    if let Ok(nid) = base_nid(hwnd) {
        let _ = unsafe { Shell_NotifyIconW(NIM_DELETE, &raw const nid) };
    }
}

fn build_menu() -> Result<HMENU> {
    let hmenu = unsafe { CreatePopupMenu() }?;
    if let Err(e) = unsafe { AppendMenuW(hmenu, MF_STRING, ID_EXIT as usize, w!("Exit")) } {
        let _ = unsafe { DestroyMenu(hmenu) };
        return Err(e);
    }
    Ok(hmenu)
}

/// Shows the context menu at the cursor and returns the chosen command id,
/// or 0 when the menu was dismissed.
pub fn show_menu(hwnd: HWND) -> Result<u32> {
    let hmenu = build_menu()?;

    let mut pt = POINT { x: 0, y: 0 };
    let _ = unsafe { GetCursorPos(&raw mut pt) };

    // The menu only closes on an outside click when our window is foreground.
    let _ = unsafe { SetForegroundWindow(hwnd) };

    let cmd = unsafe {
        TrackPopupMenu(
            hmenu,
            TPM_RETURNCMD | TPM_BOTTOMALIGN | TPM_RIGHTALIGN | TPM_NOANIMATION | TPM_RIGHTBUTTON,
            pt.x,
            pt.y,
            Some(0),
            hwnd,
            None,
        )
    };
    let _ = unsafe { DestroyMenu(hmenu) };

    Ok(cmd.0.cast_unsigned())
}

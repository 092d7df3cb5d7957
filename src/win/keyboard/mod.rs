pub(crate) mod port;
pub(crate) mod vk;

use std::{
    cell::RefCell,
    sync::atomic::{AtomicIsize, Ordering},
};

use di_switcher_core::{HookDecision, Session};
use windows::Win32::{
    Foundation::{LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{
        CallNextHookEx, HC_ACTION, HHOOK, KBDLLHOOKSTRUCT, PostQuitMessage, SetWindowsHookExW,
        UnhookWindowsHookEx, WH_KEYBOARD_LL,
    },
};

use self::port::WinInputPort;

static HOOK_HANDLE: AtomicIsize = AtomicIsize::new(0);

thread_local! {
    // Low level hooks run on the thread that installed them.
    static SESSION: RefCell<Session> = const { RefCell::new(Session::new()) };
}

fn next_hook() -> Option<HHOOK> {
    let h = HOOK_HANDLE.load(Ordering::Relaxed);
    (h != 0).then_some(HHOOK(h as *mut _))
}

fn dispatch(kb: &KBDLLHOOKSTRUCT, msg: u32) -> HookDecision {
    let Some(event) = vk::key_event(msg, kb) else {
        return HookDecision::Pass;
    };

    SESSION.with(|cell| match cell.try_borrow_mut() {
        Ok(mut session) => session.handle_event(&mut WinInputPort, &event),
        Err(_) => {
            tracing::trace!(vk = event.vk, "hook re-entered, passing event");
            HookDecision::Pass
        }
    })
}

extern "system" fn proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let hook = next_hook();

    if code != HC_ACTION.cast_signed() {
        return unsafe { CallNextHookEx(hook, code, wparam, lparam) };
    }

    let Ok(msg) = u32::try_from(wparam.0) else {
        return unsafe { CallNextHookEx(hook, code, wparam, lparam) };
    };

    let kb = unsafe { &*(lparam.0 as *const KBDLLHOOKSTRUCT) };

    match dispatch(kb, msg) {
        HookDecision::Pass => unsafe { CallNextHookEx(hook, code, wparam, lparam) },
        HookDecision::Swallow => LRESULT(1),
        HookDecision::Exit => {
            tracing::info!("panic chord pressed, shutting down");
            unsafe { PostQuitMessage(0) };
            LRESULT(1)
        }
    }
}

/// Installs the low level keyboard hook that feeds the session.
pub fn install() -> windows::core::Result<()> {
    if HOOK_HANDLE.load(Ordering::Relaxed) != 0 {
        return Ok(());
    }

    let h = unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(proc), None, 0) }?;
    HOOK_HANDLE.store(h.0 as isize, Ordering::Relaxed);
    tracing::info!("WH_KEYBOARD_LL installed");
    Ok(())
}

pub fn uninstall() {
    let h = HOOK_HANDLE.swap(0, Ordering::Relaxed);
    if h == 0 {
        return;
    }

    if let Err(e) = unsafe { UnhookWindowsHookEx(HHOOK(h as *mut _)) } {
        tracing::warn!(error = ?e, "UnhookWindowsHookEx failed");
    } else {
        tracing::info!("WH_KEYBOARD_LL removed");
    }
}

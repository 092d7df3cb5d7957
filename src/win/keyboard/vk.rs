use di_switcher_core::{
    KeyEvent,
    engine::{KeyKind, Modifiers, Origin},
};
use windows::Win32::UI::{
    Input::KeyboardAndMouse::{GetAsyncKeyState, VIRTUAL_KEY, VK_CONTROL, VK_MENU, VK_SHIFT},
    WindowsAndMessaging::{
        KBDLLHOOKSTRUCT, LLKHF_INJECTED, WM_KEYDOWN, WM_KEYUP, WM_SYSKEYDOWN, WM_SYSKEYUP,
    },
};

pub fn is_keydown_msg(msg: u32) -> bool {
    msg == WM_KEYDOWN || msg == WM_SYSKEYDOWN
}

pub fn is_keyup_msg(msg: u32) -> bool {
    msg == WM_KEYUP || msg == WM_SYSKEYUP
}

pub fn key_held(vk: VIRTUAL_KEY) -> bool {
    let v = unsafe { GetAsyncKeyState(i32::from(vk.0)) }.cast_unsigned();
    (v & 0x8000) != 0
}

fn sample_modifiers() -> Modifiers {
    Modifiers {
        ctrl: key_held(VK_CONTROL),
        alt: key_held(VK_MENU),
        shift: key_held(VK_SHIFT),
    }
}

pub fn kind_for_msg(msg: u32) -> Option<KeyKind> {
    if is_keydown_msg(msg) {
        Some(KeyKind::Down)
    } else if is_keyup_msg(msg) {
        Some(KeyKind::Up)
    } else {
        None
    }
}

pub fn origin_of(kb: &KBDLLHOOKSTRUCT) -> Origin {
    if kb.flags.contains(LLKHF_INJECTED) {
        Origin::Synthetic
    } else {
        Origin::Physical
    }
}

/// Translates a hook message into an engine event. Modifier state is
/// sampled only for physical events; synthetic ones are passed through
/// before it would be read.
pub fn key_event(msg: u32, kb: &KBDLLHOOKSTRUCT) -> Option<KeyEvent> {
    let kind = kind_for_msg(msg)?;
    let origin = origin_of(kb);
    let mods = match origin {
        Origin::Physical => sample_modifiers(),
        Origin::Synthetic => Modifiers::NONE,
    };

    Some(KeyEvent {
        kind,
        vk: kb.vkCode,
        scan: kb.scanCode,
        origin,
        mods,
    })
}

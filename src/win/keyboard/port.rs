//! `InputPort` on top of Win32.

use di_switcher_core::{
    InputPort, KeyEvent, Language,
    engine::Replacement,
    outcome::PortError,
};
use windows::Win32::{
    Foundation::{LPARAM, WPARAM},
    System::SystemInformation::GetTickCount64,
    UI::{
        Input::KeyboardAndMouse::{
            GetKeyboardLayout, GetKeyboardLayoutList, GetKeyboardState, HKL, INPUT, INPUT_0,
            INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_KEYUP, KEYEVENTF_UNICODE,
            SendInput, ToUnicodeEx, VIRTUAL_KEY, VK_BACK, VK_LSHIFT, VK_RETURN, VK_RSHIFT, VK_SHIFT,
            VK_TAB,
        },
        WindowsAndMessaging::{
            GetForegroundWindow, GetWindowThreadProcessId, PostMessageW,
            WM_INPUTLANGCHANGEREQUEST,
        },
    },
};

use super::vk::key_held;

const LANG_ENGLISH: u16 = 0x09;
const LANG_RUSSIAN: u16 = 0x19;

/// Primary language id of `lang`, as found in the low bits of an `HKL`.
pub const fn lang_id(lang: Language) -> u16 {
    match lang {
        Language::English => LANG_ENGLISH,
        Language::Russian => LANG_RUSSIAN,
    }
}

/// `PRIMARYLANGID(LOWORD(hkl))`.
pub fn primary_lang_id(raw_hkl: usize) -> u16 {
    ((raw_hkl & 0xFFFF) as u16) & 0x03FF
}

fn key_input(vk: VIRTUAL_KEY, key_up: bool) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: 0,
                dwFlags: if key_up {
                    KEYEVENTF_KEYUP
                } else {
                    KEYBD_EVENT_FLAGS(0)
                },
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn unicode_input(unit: u16, key_up: bool) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(0),
                wScan: unit,
                dwFlags: if key_up {
                    KEYEVENTF_UNICODE | KEYEVENTF_KEYUP
                } else {
                    KEYEVENTF_UNICODE
                },
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

/// Keeps what `ToUnicodeEx` produced if it is text or one of the control
/// characters that end a word in place (Enter, Tab).
pub fn typed_char(ch: char) -> Option<char> {
    match ch {
        '\r' | '\t' => Some(ch),
        c if c.is_control() => None,
        c => Some(c),
    }
}

fn key_tap(vk: VIRTUAL_KEY) -> [INPUT; 2] {
    [key_input(vk, false), key_input(vk, true)]
}

fn char_inputs(ch: char, out: &mut Vec<INPUT>) {
    match ch {
        '\r' => out.extend(key_tap(VK_RETURN)),
        '\t' => out.extend(key_tap(VK_TAB)),
        _ => {
            let mut units = [0u16; 2];
            for &u in ch.encode_utf16(&mut units).iter() {
                out.extend([unicode_input(u, false), unicode_input(u, true)]);
            }
        }
    }
}

/// The whole replacement as one `SendInput` batch: Backspace taps first,
/// then a down/up pair per UTF-16 unit of the typed text. Enter and Tab go
/// out as real key taps so applications that act on the key see them.
pub fn replacement_inputs(replacement: &Replacement) -> Vec<INPUT> {
    let taps = replacement.backspaces + replacement.text.len() + 1;
    let mut inputs = Vec::with_capacity(2 * taps);
    for _ in 0..replacement.backspaces {
        inputs.extend(key_tap(VK_BACK));
    }
    for ch in replacement.typed_chars() {
        char_inputs(ch, &mut inputs);
    }
    inputs
}

fn input_struct_size_i32() -> Option<i32> {
    i32::try_from(std::mem::size_of::<INPUT>()).ok()
}

fn find_layout(lang: Language) -> Option<HKL> {
    let count = usize::try_from(unsafe { GetKeyboardLayoutList(None) }).ok()?;
    if count == 0 {
        return None;
    }

    let mut layouts = vec![HKL::default(); count];
    let filled = usize::try_from(unsafe { GetKeyboardLayoutList(Some(&mut layouts)) }).ok()?;
    layouts.truncate(filled);

    let wanted = lang_id(lang);
    layouts
        .into_iter()
        .find(|hkl| primary_lang_id(hkl.0 as usize) == wanted)
}

/// Stateless; every call asks the system directly.
#[derive(Copy, Clone, Debug, Default)]
pub struct WinInputPort;

impl InputPort for WinInputPort {
    fn now_ms(&self) -> u64 {
        unsafe { GetTickCount64() }
    }

    fn resolve_char(&mut self, event: &KeyEvent) -> Option<char> {
        let vk = u16::try_from(event.vk).ok()?;

        let fg = unsafe { GetForegroundWindow() };
        if fg.0.is_null() {
            return None;
        }

        let tid = unsafe { GetWindowThreadProcessId(fg, None) };
        let hkl = unsafe { GetKeyboardLayout(tid) };

        let mut state = [0u8; 256];
        if unsafe { GetKeyboardState(&mut state) }.is_err() {
            return None;
        }

        // The hook thread's key state lags behind; Shift is what matters
        // for the produced character.
        for shift in [VK_SHIFT, VK_LSHIFT, VK_RSHIFT] {
            let idx = usize::from(shift.0);
            if key_held(shift) {
                state[idx] |= 0x80;
            } else {
                state[idx] &= !0x80;
            }
        }

        let mut buf = [0u16; 8];
        let rc = unsafe {
            ToUnicodeEx(
                u32::from(vk),
                event.scan,
                &state,
                &mut buf,
                0,
                Some(hkl),
            )
        };

        if rc == -1 {
            // Dead key: call again so the pending accent is not left
            // half-consumed for the application.
            let _ = unsafe {
                ToUnicodeEx(
                    u32::from(vk),
                    event.scan,
                    &state,
                    &mut buf,
                    0,
                    Some(hkl),
                )
            };
            return None;
        }

        if rc != 1 {
            return None;
        }

        char::from_u32(u32::from(buf[0])).and_then(typed_char)
    }

    fn request_layout(&mut self, lang: Language) -> Result<(), PortError> {
        let fg = unsafe { GetForegroundWindow() };
        if fg.0.is_null() {
            return Err(PortError::LayoutRequestFailed);
        }

        let hkl = find_layout(lang).ok_or(PortError::LayoutUnavailable)?;

        unsafe {
            PostMessageW(
                Some(fg),
                WM_INPUTLANGCHANGEREQUEST,
                WPARAM(0),
                LPARAM(hkl.0 as isize),
            )
        }
        .map_err(|_| PortError::LayoutRequestFailed)
    }

    fn send_replacement(&mut self, replacement: &Replacement) -> Result<(), PortError> {
        let inputs = replacement_inputs(replacement);
        if inputs.is_empty() {
            return Ok(());
        }

        let input_size = input_struct_size_i32().ok_or(PortError::InputRejected)?;
        let sent = unsafe { SendInput(&inputs, input_size) } as usize;

        match sent {
            0 => Err(PortError::InputRejected),
            n if n < inputs.len() => Err(PortError::InputTruncated),
            _ => Ok(()),
        }
    }
}

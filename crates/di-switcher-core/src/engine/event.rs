//! Key events as the engine sees them.

pub const VK_BACK: u32 = 0x08;
pub const VK_SHIFT: u32 = 0x10;
pub const VK_CONTROL: u32 = 0x11;
pub const VK_MENU: u32 = 0x12;
pub const VK_PAUSE: u32 = 0x13;
pub const VK_CAPITAL: u32 = 0x14;
pub const VK_ESCAPE: u32 = 0x1B;
pub const VK_Q: u32 = 0x51;
pub const VK_LWIN: u32 = 0x5B;
pub const VK_RWIN: u32 = 0x5C;
pub const VK_LSHIFT: u32 = 0xA0;
pub const VK_RMENU: u32 = 0xA5;

/// Key that flips the last correction.
pub const TOGGLE_VK: u32 = VK_PAUSE;

/// Ctrl+Alt+Shift + this key stops the process.
pub const PANIC_VK: u32 = VK_Q;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyKind {
    Down,
    Up,
}

/// Who produced the event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Origin {
    /// A real key press.
    Physical,
    /// Injected input, including our own replacements echoing back.
    Synthetic,
}

/// Modifier state at the time of the event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Ctrl or Alt held: the key is part of a shortcut.
    #[must_use]
    pub fn is_chord(self) -> bool {
        self.ctrl || self.alt
    }

    #[must_use]
    pub fn is_panic(self) -> bool {
        self.ctrl && self.alt && self.shift
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyEvent {
    pub kind: KeyKind,
    pub vk: u32,
    pub scan: u32,
    pub origin: Origin,
    pub mods: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub fn down(vk: u32) -> Self {
        Self {
            kind: KeyKind::Down,
            vk,
            scan: 0,
            origin: Origin::Physical,
            mods: Modifiers::NONE,
        }
    }

    #[must_use]
    pub fn up(vk: u32) -> Self {
        Self {
            kind: KeyKind::Up,
            ..Self::down(vk)
        }
    }

    #[must_use]
    pub fn with_scan(self, scan: u32) -> Self {
        Self { scan, ..self }
    }

    #[must_use]
    pub fn with_mods(self, mods: Modifiers) -> Self {
        Self { mods, ..self }
    }

    #[must_use]
    pub fn synthetic(self) -> Self {
        Self {
            origin: Origin::Synthetic,
            ..self
        }
    }

    /// Shift, Ctrl, Alt, Win and Caps Lock on their own.
    #[must_use]
    pub fn is_modifier_key(&self) -> bool {
        matches!(
            self.vk,
            VK_SHIFT | VK_CONTROL | VK_MENU | VK_CAPITAL | VK_LWIN | VK_RWIN
        ) || (VK_LSHIFT..=VK_RMENU).contains(&self.vk)
    }
}

/// What the host should do with the event it delivered.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HookDecision {
    /// Forward to the rest of the system.
    Pass,
    /// Consume; nobody else sees the event.
    Swallow,
    /// Consume and shut the host down.
    Exit,
}

impl HookDecision {
    #[must_use]
    pub fn should_swallow(self) -> bool {
        matches!(self, Self::Swallow | Self::Exit)
    }
}

/// High-level input events, targeted at an element id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Primary activation of an element (pointer click)
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Whole-text replacement of a text field (paste, host-side editing)
    Input { target: String, text: String },
}

impl Event {
    /// Left click on an element.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Unmodified key press on an element.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Text replacement on an element.
    pub fn input(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            text: text.into(),
        }
    }

    /// The element id this event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. } | Self::Click { target, .. } => target.as_deref(),
            Self::Input { target, .. } => Some(target),
        }
    }
}

/// Pointer press broadcast on the input surface.
///
/// `path` is the chain of element ids from the root down to the pressed
/// element, so listeners can tell whether the press landed inside a subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointerDown {
    pub target: Option<String>,
    pub path: Vec<String>,
    pub x: u16,
    pub y: u16,
}

impl PointerDown {
    /// Press on an element reached through `path`.
    pub fn on_path(path: Vec<String>) -> Self {
        Self {
            target: path.last().cloned(),
            path,
            ..Default::default()
        }
    }

    /// Press that hit no element at all.
    pub fn nowhere(x: u16, y: u16) -> Self {
        Self {
            target: None,
            path: Vec::new(),
            x,
            y,
        }
    }

    /// Whether the press landed on `id` or one of its descendants.
    pub fn is_within(&self, id: &str) -> bool {
        self.path.iter().any(|p| p == id)
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Any key this layer does not model
    Other,
}

impl Key {
    /// Enter or Space, the keys that activate buttons and toggles.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Build a key event for `target` from a raw crossterm key event.
pub fn key_event(target: Option<String>, event: crossterm::event::KeyEvent) -> Event {
    Event::Key {
        target,
        key: event.code.into(),
        modifiers: event.modifiers.into(),
    }
}

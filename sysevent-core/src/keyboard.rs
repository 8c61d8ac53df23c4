//! Types related to the keyboard.
//!
//! A key event carries two views of the same key: the logical [`Key`], which depends on the
//! active keyboard layout, and the physical [`Scancode`], which only depends on the key's
//! position on the keyboard. Use [`Key`] for shortcuts that follow the printed label
//! (<kbd>Ctrl</kbd>+<kbd>Z</kbd>) and [`Scancode`] for layout-independent bindings such as
//! <kbd>W</kbd><kbd>A</kbd><kbd>S</kbd><kbd>D</kbd> movement.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

input_enum! {
    /// Key codes.
    ///
    /// The enumerators refer to the "localized" key; i.e. depending on the layout set by the
    /// operating system, a key can be mapped to `Y` or `Z`.
    pub enum Key {
        /// Unhandled key.
        @unknown Unknown,
        /// The A key.
        A,
        /// The B key.
        B,
        /// The C key.
        C,
        /// The D key.
        D,
        /// The E key.
        E,
        /// The F key.
        F,
        /// The G key.
        G,
        /// The H key.
        H,
        /// The I key.
        I,
        /// The J key.
        J,
        /// The K key.
        K,
        /// The L key.
        L,
        /// The M key.
        M,
        /// The N key.
        N,
        /// The O key.
        O,
        /// The P key.
        P,
        /// The Q key.
        Q,
        /// The R key.
        R,
        /// The S key.
        S,
        /// The T key.
        T,
        /// The U key.
        U,
        /// The V key.
        V,
        /// The W key.
        W,
        /// The X key.
        X,
        /// The Y key.
        Y,
        /// The Z key.
        Z,
        /// The 0 key (top row).
        Num0,
        /// The 1 key (top row).
        Num1,
        /// The 2 key (top row).
        Num2,
        /// The 3 key (top row).
        Num3,
        /// The 4 key (top row).
        Num4,
        /// The 5 key (top row).
        Num5,
        /// The 6 key (top row).
        Num6,
        /// The 7 key (top row).
        Num7,
        /// The 8 key (top row).
        Num8,
        /// The 9 key (top row).
        Num9,
        /// The Escape key.
        Escape,
        /// The left Control key.
        LControl,
        /// The left Shift key.
        LShift,
        /// The left Alt key.
        LAlt,
        /// The left OS specific key: window (Windows and Linux), apple (macOS), ...
        LSystem,
        /// The right Control key.
        RControl,
        /// The right Shift key.
        RShift,
        /// The right Alt key.
        RAlt,
        /// The right OS specific key: window (Windows and Linux), apple (macOS), ...
        RSystem,
        /// The Menu key.
        Menu,
        /// The <kbd>[</kbd> key.
        LBracket,
        /// The <kbd>]</kbd> key.
        RBracket,
        /// The <kbd>;</kbd> key.
        Semicolon,
        /// The <kbd>,</kbd> key.
        Comma,
        /// The <kbd>.</kbd> key.
        Period,
        /// The <kbd>'</kbd> key.
        Apostrophe,
        /// The <kbd>/</kbd> key.
        Slash,
        /// The <kbd>\\</kbd> key.
        Backslash,
        /// The <kbd>`</kbd> key.
        Grave,
        /// The <kbd>=</kbd> key.
        Equal,
        /// The <kbd>-</kbd> key (hyphen).
        Hyphen,
        /// The Space key.
        Space,
        /// The Enter/Return keys.
        Enter,
        /// The Backspace key.
        Backspace,
        /// The Tabulation key.
        Tab,
        /// The Page up key.
        PageUp,
        /// The Page down key.
        PageDown,
        /// The End key.
        End,
        /// The Home key.
        Home,
        /// The Insert key.
        Insert,
        /// The Delete key.
        Delete,
        /// The <kbd>+</kbd> key.
        Add,
        /// The <kbd>-</kbd> key (minus, usually from numpad).
        Subtract,
        /// The <kbd>*</kbd> key.
        Multiply,
        /// The <kbd>/</kbd> key.
        Divide,
        /// Left arrow.
        Left,
        /// Right arrow.
        Right,
        /// Up arrow.
        Up,
        /// Down arrow.
        Down,
        /// The numpad 0 key.
        Numpad0,
        /// The numpad 1 key.
        Numpad1,
        /// The numpad 2 key.
        Numpad2,
        /// The numpad 3 key.
        Numpad3,
        /// The numpad 4 key.
        Numpad4,
        /// The numpad 5 key.
        Numpad5,
        /// The numpad 6 key.
        Numpad6,
        /// The numpad 7 key.
        Numpad7,
        /// The numpad 8 key.
        Numpad8,
        /// The numpad 9 key.
        Numpad9,
        /// The F1 key.
        F1,
        /// The F2 key.
        F2,
        /// The F3 key.
        F3,
        /// The F4 key.
        F4,
        /// The F5 key.
        F5,
        /// The F6 key.
        F6,
        /// The F7 key.
        F7,
        /// The F8 key.
        F8,
        /// The F9 key.
        F9,
        /// The F10 key.
        F10,
        /// The F11 key.
        F11,
        /// The F12 key.
        F12,
        /// The F13 key.
        F13,
        /// The F14 key.
        F14,
        /// The F15 key.
        F15,
        /// The Pause key.
        Pause,
    }
}

input_enum! {
    /// Scancodes.
    ///
    /// The enumerators are bound to a physical key and do not depend on the keyboard layout
    /// used by the operating system. Usually, the AT-101 keyboard can be used as reference for
    /// the physical position of the keys.
    pub enum Scancode {
        /// Represents any scancode not present in this enum.
        @unknown Unknown,
        A,
        B,
        C,
        D,
        E,
        F,
        G,
        H,
        I,
        J,
        K,
        L,
        M,
        N,
        O,
        P,
        Q,
        R,
        S,
        T,
        U,
        V,
        W,
        X,
        Y,
        Z,
        Num1,
        Num2,
        Num3,
        Num4,
        Num5,
        Num6,
        Num7,
        Num8,
        Num9,
        Num0,
        Enter,
        Escape,
        Backspace,
        Tab,
        Space,
        /// <kbd>-</kbd> and <kbd>_</kbd> on a US keyboard.
        Hyphen,
        /// <kbd>=</kbd> and <kbd>+</kbd> on a US keyboard.
        Equal,
        /// <kbd>[</kbd> and <kbd>{</kbd> on a US keyboard.
        LBracket,
        /// <kbd>]</kbd> and <kbd>}</kbd> on a US keyboard.
        RBracket,
        /// <kbd>\\</kbd> and <kbd>|</kbd> on a US keyboard, or <kbd>#</kbd> and <kbd>~</kbd> on a UK keyboard.
        Backslash,
        /// <kbd>;</kbd> and <kbd>:</kbd> on a US keyboard.
        Semicolon,
        /// <kbd>'</kbd> and <kbd>"</kbd> on a US keyboard.
        Apostrophe,
        /// <kbd>`</kbd> and <kbd>~</kbd> on a US keyboard.
        Grave,
        /// <kbd>,</kbd> and <kbd>&lt;</kbd> on a US keyboard.
        Comma,
        /// <kbd>.</kbd> and <kbd>&gt;</kbd> on a US keyboard.
        Period,
        /// <kbd>/</kbd> and <kbd>?</kbd> on a US keyboard.
        Slash,
        F1,
        F2,
        F3,
        F4,
        F5,
        F6,
        F7,
        F8,
        F9,
        F10,
        F11,
        F12,
        F13,
        F14,
        F15,
        F16,
        F17,
        F18,
        F19,
        F20,
        F21,
        F22,
        F23,
        F24,
        CapsLock,
        PrintScreen,
        ScrollLock,
        Pause,
        Insert,
        Home,
        PageUp,
        Delete,
        End,
        PageDown,
        Right,
        Left,
        Down,
        Up,
        NumLock,
        NumpadDivide,
        NumpadMultiply,
        NumpadMinus,
        NumpadPlus,
        NumpadEqual,
        NumpadEnter,
        NumpadDecimal,
        Numpad1,
        Numpad2,
        Numpad3,
        Numpad4,
        Numpad5,
        Numpad6,
        Numpad7,
        Numpad8,
        Numpad9,
        Numpad0,
        /// Located between the left Shift and <kbd>Z</kbd> keys on ISO keyboards.
        NonUsBackslash,
        /// Keyboard Application key.
        Application,
        Execute,
        /// Keyboard Mode Change key.
        ModeChange,
        Help,
        Menu,
        Select,
        Redo,
        Undo,
        Cut,
        Copy,
        Paste,
        VolumeMute,
        VolumeUp,
        VolumeDown,
        MediaPlayPause,
        MediaStop,
        MediaNextTrack,
        MediaPreviousTrack,
        LControl,
        LShift,
        LAlt,
        LSystem,
        RControl,
        RShift,
        RAlt,
        RSystem,
        Back,
        Forward,
        Refresh,
        Stop,
        Search,
        Favorites,
        HomePage,
        LaunchApplication1,
        LaunchApplication2,
        LaunchMail,
        LaunchMediaSelect,
    }
}

bitflags! {
    /// Represents the state of the keyboard modifiers when a key event was produced.
    ///
    /// Each flag represents a modifier and is set if this modifier was held.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ModifiersState: u8 {
        /// The "shift" key.
        const SHIFT = 0b0001;
        /// The "control" key.
        const CONTROL = 0b0010;
        /// The "alt" key.
        const ALT = 0b0100;
        /// This is the "windows" key on PC and "command" key on Mac.
        const SYSTEM = 0b1000;
    }
}

impl ModifiersState {
    /// Builds the state from the four modifier flags carried by key events.
    pub fn from_keys(alt: bool, control: bool, shift: bool, system: bool) -> Self {
        let mut state = Self::empty();
        state.set(Self::ALT, alt);
        state.set(Self::CONTROL, control);
        state.set(Self::SHIFT, shift);
        state.set(Self::SYSTEM, system);
        state
    }

    /// Returns whether the shift modifier is active.
    pub fn shift_key(&self) -> bool {
        self.intersects(Self::SHIFT)
    }

    /// Returns whether the control modifier is active.
    pub fn control_key(&self) -> bool {
        self.intersects(Self::CONTROL)
    }

    /// Returns whether the alt modifier is active.
    pub fn alt_key(&self) -> bool {
        self.intersects(Self::ALT)
    }

    /// Returns whether the system modifier is active.
    pub fn system_key(&self) -> bool {
        self.intersects(Self::SYSTEM)
    }
}

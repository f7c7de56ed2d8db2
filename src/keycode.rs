//! Virtual key code definitions.
//!
//! Keys are identified by integer codes in `[0, KEY_LAST]`; [`Key`] names
//! every supported code. Printable keys occupy the ASCII range so that
//! `Key::KeyA.code()` is `'A'` as an integer; special keys live in a block
//! above 255. Query and ingestion APIs accept either a [`Key`] or a raw
//! `i32` code, and raw codes outside the valid range degrade to a safe
//! default instead of faulting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest valid key code.
pub const KEY_LAST: i32 = 348;

/// Number of slots in a per-window key latch array.
pub(crate) const KEY_COUNT: usize = (KEY_LAST + 1) as usize;

/// Virtual key codes for keyboard keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    // Printable keys (ASCII codes)
    Space = 32,
    Quote = 39,   // ' "
    Comma = 44,   // , <
    Minus = 45,   // - _
    Period = 46,  // . >
    Slash = 47,   // / ?
    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,
    Semicolon = 59, // ; :
    Equal = 61,     // = +
    KeyA = 65,
    KeyB = 66,
    KeyC = 67,
    KeyD = 68,
    KeyE = 69,
    KeyF = 70,
    KeyG = 71,
    KeyH = 72,
    KeyI = 73,
    KeyJ = 74,
    KeyK = 75,
    KeyL = 76,
    KeyM = 77,
    KeyN = 78,
    KeyO = 79,
    KeyP = 80,
    KeyQ = 81,
    KeyR = 82,
    KeyS = 83,
    KeyT = 84,
    KeyU = 85,
    KeyV = 86,
    KeyW = 87,
    KeyX = 88,
    KeyY = 89,
    KeyZ = 90,
    BracketLeft = 91,  // [ {
    Backslash = 92,    // \ |
    BracketRight = 93, // ] }
    Grave = 96,        // ` ~

    // Navigation and editing
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    ArrowRight = 262,
    ArrowLeft = 263,
    ArrowDown = 264,
    ArrowUp = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,

    // Lock keys
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,

    // Function keys
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,

    // Numpad
    Numpad0 = 320,
    Numpad1 = 321,
    Numpad2 = 322,
    Numpad3 = 323,
    Numpad4 = 324,
    Numpad5 = 325,
    Numpad6 = 326,
    Numpad7 = 327,
    Numpad8 = 328,
    Numpad9 = 329,
    NumpadDecimal = 330,
    NumpadDivide = 331,
    NumpadMultiply = 332,
    NumpadSubtract = 333,
    NumpadAdd = 334,
    NumpadEnter = 335,
    NumpadEqual = 336,

    // Modifiers
    ShiftLeft = 340,
    ControlLeft = 341,
    AltLeft = 342,
    MetaLeft = 343, // Windows/Command/Super
    ShiftRight = 344,
    ControlRight = 345,
    AltRight = 346,
    MetaRight = 347,

    // Context menu
    ContextMenu = 348,
}

impl Key {
    /// Get the raw key code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Create a Key from a raw code, if it names one.
    pub fn from_code(code: i32) -> Option<Self> {
        let key = match code {
            32 => Key::Space,
            39 => Key::Quote,
            44 => Key::Comma,
            45 => Key::Minus,
            46 => Key::Period,
            47 => Key::Slash,
            48 => Key::Num0,
            49 => Key::Num1,
            50 => Key::Num2,
            51 => Key::Num3,
            52 => Key::Num4,
            53 => Key::Num5,
            54 => Key::Num6,
            55 => Key::Num7,
            56 => Key::Num8,
            57 => Key::Num9,
            59 => Key::Semicolon,
            61 => Key::Equal,
            65 => Key::KeyA,
            66 => Key::KeyB,
            67 => Key::KeyC,
            68 => Key::KeyD,
            69 => Key::KeyE,
            70 => Key::KeyF,
            71 => Key::KeyG,
            72 => Key::KeyH,
            73 => Key::KeyI,
            74 => Key::KeyJ,
            75 => Key::KeyK,
            76 => Key::KeyL,
            77 => Key::KeyM,
            78 => Key::KeyN,
            79 => Key::KeyO,
            80 => Key::KeyP,
            81 => Key::KeyQ,
            82 => Key::KeyR,
            83 => Key::KeyS,
            84 => Key::KeyT,
            85 => Key::KeyU,
            86 => Key::KeyV,
            87 => Key::KeyW,
            88 => Key::KeyX,
            89 => Key::KeyY,
            90 => Key::KeyZ,
            91 => Key::BracketLeft,
            92 => Key::Backslash,
            93 => Key::BracketRight,
            96 => Key::Grave,
            256 => Key::Escape,
            257 => Key::Enter,
            258 => Key::Tab,
            259 => Key::Backspace,
            260 => Key::Insert,
            261 => Key::Delete,
            262 => Key::ArrowRight,
            263 => Key::ArrowLeft,
            264 => Key::ArrowDown,
            265 => Key::ArrowUp,
            266 => Key::PageUp,
            267 => Key::PageDown,
            268 => Key::Home,
            269 => Key::End,
            280 => Key::CapsLock,
            281 => Key::ScrollLock,
            282 => Key::NumLock,
            283 => Key::PrintScreen,
            284 => Key::Pause,
            290 => Key::F1,
            291 => Key::F2,
            292 => Key::F3,
            293 => Key::F4,
            294 => Key::F5,
            295 => Key::F6,
            296 => Key::F7,
            297 => Key::F8,
            298 => Key::F9,
            299 => Key::F10,
            300 => Key::F11,
            301 => Key::F12,
            302 => Key::F13,
            303 => Key::F14,
            304 => Key::F15,
            305 => Key::F16,
            306 => Key::F17,
            307 => Key::F18,
            308 => Key::F19,
            309 => Key::F20,
            310 => Key::F21,
            311 => Key::F22,
            312 => Key::F23,
            313 => Key::F24,
            320 => Key::Numpad0,
            321 => Key::Numpad1,
            322 => Key::Numpad2,
            323 => Key::Numpad3,
            324 => Key::Numpad4,
            325 => Key::Numpad5,
            326 => Key::Numpad6,
            327 => Key::Numpad7,
            328 => Key::Numpad8,
            329 => Key::Numpad9,
            330 => Key::NumpadDecimal,
            331 => Key::NumpadDivide,
            332 => Key::NumpadMultiply,
            333 => Key::NumpadSubtract,
            334 => Key::NumpadAdd,
            335 => Key::NumpadEnter,
            336 => Key::NumpadEqual,
            340 => Key::ShiftLeft,
            341 => Key::ControlLeft,
            342 => Key::AltLeft,
            343 => Key::MetaLeft,
            344 => Key::ShiftRight,
            345 => Key::ControlRight,
            346 => Key::AltRight,
            347 => Key::MetaRight,
            348 => Key::ContextMenu,
            _ => return None,
        };
        Some(key)
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(self) -> bool {
        (Key::ShiftLeft.code()..=Key::MetaRight.code()).contains(&self.code())
    }

    /// Check if this is a function key.
    pub fn is_function_key(self) -> bool {
        (Key::F1.code()..=Key::F24.code()).contains(&self.code())
    }

    /// Check if this key produces a printable character.
    pub fn is_printable(self) -> bool {
        self.code() <= Key::Grave.code()
    }
}

impl From<Key> for i32 {
    fn from(key: Key) -> i32 {
        key.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in 0..=KEY_LAST {
            if let Some(key) = Key::from_code(code) {
                assert_eq!(key.code(), code);
            }
        }
        assert_eq!(Key::from_code(-1), None);
        assert_eq!(Key::from_code(KEY_LAST + 1), None);
    }

    #[test]
    fn test_codes_stay_in_bounds() {
        assert_eq!(Key::ContextMenu.code(), KEY_LAST);
        assert!(Key::Space.code() >= 0);
    }

    #[test]
    fn test_classification() {
        assert!(Key::ShiftLeft.is_modifier());
        assert!(!Key::KeyA.is_modifier());
        assert!(Key::F12.is_function_key());
        assert!(!Key::Escape.is_function_key());
        assert!(Key::KeyA.is_printable());
        assert!(!Key::Enter.is_printable());
    }
}

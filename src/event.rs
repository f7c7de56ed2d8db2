//! Action and mouse button types shared across the input core.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw press/release transition.
///
/// This is both the action the platform layer reports on ingestion and the
/// value the query API returns. A sticky latch is internal bookkeeping and
/// never escapes as a third action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// The key or button went (or is reported) up.
    Release,
    /// The key or button went (or is reported) down.
    Press,
}

/// Highest valid mouse button code.
pub const BUTTON_LAST: i32 = 7;

/// Named codes for the supported mouse buttons.
///
/// Buttons are identified by small integer codes in `[0, BUTTON_LAST]`; the
/// enum names the usual ones. Raw codes outside the range are dropped at the
/// ingestion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    /// Left mouse button.
    Left = 0,
    /// Right mouse button.
    Right = 1,
    /// Middle mouse button.
    Middle = 2,
    /// Extra button 1 (typically back).
    Button4 = 3,
    /// Extra button 2 (typically forward).
    Button5 = 4,
    Button6 = 5,
    Button7 = 6,
    Button8 = 7,
}

impl Button {
    /// Get the raw button code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Create a Button from a raw code, if it names one.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Button::Left),
            1 => Some(Button::Right),
            2 => Some(Button::Middle),
            3 => Some(Button::Button4),
            4 => Some(Button::Button5),
            5 => Some(Button::Button6),
            6 => Some(Button::Button7),
            7 => Some(Button::Button8),
            _ => None,
        }
    }
}

impl From<Button> for i32 {
    fn from(button: Button) -> i32 {
        button.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_code_round_trip() {
        for code in 0..=BUTTON_LAST {
            let button = Button::from_code(code).unwrap();
            assert_eq!(button.code(), code);
        }
        assert_eq!(Button::from_code(-1), None);
        assert_eq!(Button::from_code(BUTTON_LAST + 1), None);
    }

    #[test]
    fn test_button_into_raw_code() {
        let code: i32 = Button::Middle.into();
        assert_eq!(code, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&(Action::Press, Button::Left)).unwrap();
        let (action, button): (Action, Button) = serde_json::from_str(&json).unwrap();
        assert_eq!(action, Action::Press);
        assert_eq!(button, Button::Left);
    }
}

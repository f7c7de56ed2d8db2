//! Per-window input state.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::event::BUTTON_LAST;
use crate::handler::{
    CharHandler, KeyHandler, MouseButtonHandler, MouseMoveHandler, Slot, WheelHandler,
};
use crate::keycode::KEY_COUNT;
use crate::latch::Latch;

pub(crate) const BUTTON_COUNT: usize = (BUTTON_LAST + 1) as usize;

/// Opaque handle to an open window.
///
/// Allocated by [`Context::open_window`](crate::Context::open_window) and
/// never reused within a context's lifetime, so a stale handle held across
/// a close can never alias a newer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowId(pub(crate) u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Input state of one window: latch arrays, cursor and wheel snapshot,
/// behavior flags, and the five callback slots.
pub(crate) struct Window {
    pub(crate) keys: [Latch; KEY_COUNT],
    pub(crate) buttons: [Latch; BUTTON_COUNT],
    pub(crate) mouse_x: i32,
    pub(crate) mouse_y: i32,
    pub(crate) wheel_pos: i32,
    pub(crate) last_char: Option<char>,
    pub(crate) sticky_keys: bool,
    pub(crate) sticky_mouse_buttons: bool,
    pub(crate) key_repeat: bool,
    pub(crate) active: bool,
    pub(crate) on_key: Slot<dyn KeyHandler>,
    pub(crate) on_char: Slot<dyn CharHandler>,
    pub(crate) on_mouse_button: Slot<dyn MouseButtonHandler>,
    pub(crate) on_mouse_move: Slot<dyn MouseMoveHandler>,
    pub(crate) on_wheel: Slot<dyn WheelHandler>,
}

impl Window {
    pub(crate) fn new() -> Self {
        Self {
            keys: [Latch::Released; KEY_COUNT],
            buttons: [Latch::Released; BUTTON_COUNT],
            mouse_x: 0,
            mouse_y: 0,
            wheel_pos: 0,
            last_char: None,
            sticky_keys: false,
            sticky_mouse_buttons: false,
            key_repeat: false,
            active: true,
            on_key: Slot::default(),
            on_char: Slot::default(),
            on_mouse_button: Slot::default(),
            on_mouse_move: Slot::default(),
            on_wheel: Slot::default(),
        }
    }

    /// Reset both latch arrays to released. Runs whenever the window gains
    /// or loses the current context.
    pub(crate) fn clear_latches(&mut self) {
        self.keys = [Latch::Released; KEY_COUNT];
        self.buttons = [Latch::Released; BUTTON_COUNT];
    }

    /// Drop every registered handler. Runs before the window itself is
    /// dropped so no dangling handler can be invoked.
    pub(crate) fn clear_handlers(&mut self) {
        self.on_key.clear();
        self.on_char.clear();
        self.on_mouse_button.clear();
        self.on_mouse_move.clear();
        self.on_wheel.clear();
    }
}

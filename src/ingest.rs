//! Platform-facing event ingestion.
//!
//! These are the entry points the platform layer calls once per raw OS
//! event. They are the single choke point that mutates input state and
//! invokes user callbacks, and they always update state before any callback
//! can observe it. Callbacks run synchronously on this call stack and may
//! re-enter the context; the dispatch helpers below pair
//! [`Slot::begin`](crate::handler::Slot) with `finish` so replacement,
//! clearing, nested dispatch, and window closure from inside a handler are
//! all well defined.

use crate::context::Context;
use crate::event::{Action, BUTTON_LAST};
use crate::keycode::KEY_LAST;
use crate::latch::Latch;
use crate::window::WindowId;

impl Context {
    /// Ingest one raw key transition.
    ///
    /// Applies the sticky-latch policy, then delivers the raw code and
    /// action to the key callback — the callback observes the event, not
    /// the post-policy latch. A release for an already-released key is
    /// dropped as platform noise, and a repeated press of a held key is
    /// delivered only while key repeat is enabled for the window.
    pub fn input_key(&mut self, window: WindowId, key: impl Into<i32>, action: Action) {
        let code = key.into();
        if !(0..=KEY_LAST).contains(&code) {
            log::debug!("dropping key code {code} outside 0..={KEY_LAST}");
            return;
        }
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let old = win.keys[code as usize];
        if action == Action::Release && old == Latch::Released {
            return;
        }
        let repeated = action == Action::Press && old == Latch::Pressed;
        win.keys[code as usize] = old.apply(action, win.sticky_keys);
        if repeated && !win.key_repeat {
            return;
        }
        self.dispatch_key(window, code, action);
    }

    /// Ingest one character of text input.
    ///
    /// Stores the code point and delivers it to the char callback on every
    /// press (repeats arrive as further presses and are delivered
    /// unconditionally). Releases carry no character semantics and are
    /// ignored, as are non-printable code points.
    pub fn input_char(&mut self, window: WindowId, ch: char, action: Action) {
        if !is_printable(ch) || action != Action::Press {
            return;
        }
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        win.last_char = Some(ch);
        self.dispatch_char(window, ch);
    }

    /// Ingest one raw mouse button transition. Mirrors
    /// [`input_key`](Context::input_key) for the button domain; buttons
    /// have no repeat concept.
    pub fn input_mouse_button(&mut self, window: WindowId, button: impl Into<i32>, action: Action) {
        let code = button.into();
        if !(0..=BUTTON_LAST).contains(&code) {
            log::debug!("dropping button code {code} outside 0..={BUTTON_LAST}");
            return;
        }
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let old = win.buttons[code as usize];
        if action == Action::Release && old == Latch::Released {
            return;
        }
        win.buttons[code as usize] = old.apply(action, win.sticky_mouse_buttons);
        self.dispatch_mouse_button(window, code, action);
    }

    /// Ingest a cursor position report. Stores the new position and
    /// delivers it to the mouse move callback; an unchanged position is a
    /// no-op. The physical cursor is never touched from here — that is
    /// [`set_mouse_pos`](Context::set_mouse_pos)'s job.
    pub fn input_mouse_move(&mut self, window: WindowId, x: i32, y: i32) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        if (x, y) == (win.mouse_x, win.mouse_y) {
            return;
        }
        win.mouse_x = x;
        win.mouse_y = y;
        self.dispatch_mouse_move(window, x, y);
    }

    /// Ingest a wheel delta. Adds it to the accumulator and delivers the
    /// new accumulator value to the wheel callback. Zero deltas are
    /// dropped.
    pub fn input_wheel(&mut self, window: WindowId, delta: i32) {
        if delta == 0 {
            return;
        }
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        win.wheel_pos = win.wheel_pos.wrapping_add(delta);
        let pos = win.wheel_pos;
        self.dispatch_wheel(window, pos);
    }

    /// The window regained input focus.
    pub fn input_activation(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.active = true;
        }
    }

    /// The window lost input focus.
    ///
    /// Every held latch is force-released, sticky latches included — a key
    /// released while the window was unfocused must not stay stuck down.
    /// The latches are cleared first, then the key and button callbacks are
    /// notified of the synthetic releases for keys that were physically
    /// held.
    pub fn input_deactivation(&mut self, window: WindowId) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        win.active = false;

        let mut cleared = 0usize;
        let mut released_keys = Vec::new();
        for (code, latch) in win.keys.iter_mut().enumerate() {
            if latch.is_down() {
                if *latch == Latch::Pressed {
                    released_keys.push(code as i32);
                }
                *latch = Latch::Released;
                cleared += 1;
            }
        }
        let mut released_buttons = Vec::new();
        for (code, latch) in win.buttons.iter_mut().enumerate() {
            if latch.is_down() {
                if *latch == Latch::Pressed {
                    released_buttons.push(code as i32);
                }
                *latch = Latch::Released;
                cleared += 1;
            }
        }
        if cleared > 0 {
            log::debug!("window {window} deactivated, released {cleared} held latches");
        }

        for code in released_keys {
            self.dispatch_key(window, code, Action::Release);
        }
        for code in released_buttons {
            self.dispatch_mouse_button(window, code, Action::Release);
        }
    }

    // ------------------------------------------------------------------
    // Dispatch helpers
    // ------------------------------------------------------------------

    pub(crate) fn dispatch_key(&mut self, window: WindowId, key: i32, action: Action) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let Some(mut handler) = win.on_key.begin() else {
            return;
        };
        handler.on_key(self, window, key, action);
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_key.finish(handler);
        }
    }

    pub(crate) fn dispatch_char(&mut self, window: WindowId, ch: char) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let Some(mut handler) = win.on_char.begin() else {
            return;
        };
        handler.on_char(self, window, ch);
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_char.finish(handler);
        }
    }

    pub(crate) fn dispatch_mouse_button(&mut self, window: WindowId, button: i32, action: Action) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let Some(mut handler) = win.on_mouse_button.begin() else {
            return;
        };
        handler.on_mouse_button(self, window, button, action);
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_mouse_button.finish(handler);
        }
    }

    pub(crate) fn dispatch_mouse_move(&mut self, window: WindowId, x: i32, y: i32) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let Some(mut handler) = win.on_mouse_move.begin() else {
            return;
        };
        handler.on_mouse_move(self, window, x, y);
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_mouse_move.finish(handler);
        }
    }

    pub(crate) fn dispatch_wheel(&mut self, window: WindowId, pos: i32) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let Some(mut handler) = win.on_wheel.begin() else {
            return;
        };
        handler.on_wheel(self, window, pos);
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_wheel.finish(handler);
        }
    }
}

fn is_printable(ch: char) -> bool {
    let code = ch as u32;
    (32..=126).contains(&code) || code >= 160
}

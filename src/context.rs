//! The input context: window table, cursor lock, and the query API.
//!
//! `Context` replaces the process-wide library singleton found in older
//! windowing libraries with an explicitly constructed object threaded
//! through every call. It owns all per-window input state, tracks which
//! window is current and which (if any) holds the cursor lock, and exposes
//! the synchronous query API the application polls between event-pump
//! cycles.
//!
//! Queries and setters never fail: an unknown window or out-of-range code
//! degrades to a safe default (release, zero, no-op) rather than signaling
//! an error. Window lifecycle operations return [`Result`] instead, since
//! those indicate caller logic errors rather than input noise.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::event::{Action, BUTTON_LAST};
use crate::handler::{CharHandler, KeyHandler, MouseButtonHandler, MouseMoveHandler, WheelHandler};
use crate::keycode::KEY_LAST;
use crate::latch::Latch;
use crate::platform::CursorSink;
use crate::window::{Window, WindowId};

/// Owner of all input state for one embedding application.
pub struct Context {
    pub(crate) windows: HashMap<WindowId, Window>,
    pub(crate) current: Option<WindowId>,
    pub(crate) cursor_lock: Option<WindowId>,
    pub(crate) cursor_sink: Option<Box<dyn CursorSink>>,
    next_id: u32,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create an empty context with no windows and no cursor sink.
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            current: None,
            cursor_lock: None,
            cursor_sink: None,
            next_id: 0,
        }
    }

    /// Attach the platform cursor sink, replacing any prior one.
    pub fn set_cursor_sink<S>(&mut self, sink: S)
    where
        S: CursorSink + 'static,
    {
        self.cursor_sink = Some(Box::new(sink));
    }

    /// Detach the cursor sink; physical-move requests become no-ops.
    pub fn clear_cursor_sink(&mut self) {
        self.cursor_sink = None;
    }

    // ------------------------------------------------------------------
    // Window lifecycle
    // ------------------------------------------------------------------

    /// Open a window: all latches released, numeric state zeroed, behavior
    /// flags off, active, and current.
    pub fn open_window(&mut self) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.insert(id, Window::new());
        self.current = Some(id);
        id
    }

    /// Close a window, dropping its handlers first and releasing the
    /// cursor lock if it held one.
    pub fn close_window(&mut self, window: WindowId) -> Result<()> {
        let Some(mut win) = self.windows.remove(&window) else {
            return Err(Error::UnknownWindow(window));
        };
        win.clear_handlers();
        if self.current == Some(window) {
            self.current = None;
        }
        if self.cursor_lock == Some(window) {
            self.cursor_lock = None;
        }
        Ok(())
    }

    /// Make `window` the current window. Both the window losing and the
    /// window gaining currency get their latch arrays reset, so edges from
    /// one context era cannot leak into the next.
    pub fn make_current(&mut self, window: WindowId) -> Result<()> {
        if !self.windows.contains_key(&window) {
            return Err(Error::UnknownWindow(window));
        }
        if self.current == Some(window) {
            return Ok(());
        }
        if let Some(prev) = self.current.take() {
            if let Some(win) = self.windows.get_mut(&prev) {
                win.clear_latches();
            }
        }
        if let Some(win) = self.windows.get_mut(&window) {
            win.clear_latches();
        }
        self.current = Some(window);
        Ok(())
    }

    /// The currently-current window, if any.
    pub fn current(&self) -> Option<WindowId> {
        self.current
    }

    /// Whether `window` names an open window.
    pub fn is_open(&self, window: WindowId) -> bool {
        self.windows.contains_key(&window)
    }

    /// Whether `window` has input focus.
    pub fn is_active(&self, window: WindowId) -> bool {
        self.windows.get(&window).map(|w| w.active).unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Cursor lock
    // ------------------------------------------------------------------

    /// Claim the context-wide cursor lock for `window`, replacing any
    /// previous holder. While any window holds the lock,
    /// [`set_mouse_pos`](Context::set_mouse_pos) stops moving the physical
    /// cursor.
    pub fn lock_cursor(&mut self, window: WindowId) -> Result<()> {
        if !self.windows.contains_key(&window) {
            return Err(Error::UnknownWindow(window));
        }
        self.cursor_lock = Some(window);
        Ok(())
    }

    /// Release the cursor lock.
    pub fn unlock_cursor(&mut self) -> Result<()> {
        if self.cursor_lock.take().is_none() {
            return Err(Error::NoCursorLock);
        }
        Ok(())
    }

    /// The window holding the cursor lock, if any.
    pub fn cursor_lock(&self) -> Option<WindowId> {
        self.cursor_lock
    }

    // ------------------------------------------------------------------
    // Queries and setters
    // ------------------------------------------------------------------

    /// Read the latched state of `key` for `window`.
    ///
    /// This is a consuming read: an unread sticky latch reports
    /// [`Action::Press`] exactly once and resets to released. Unknown
    /// windows and out-of-range codes return [`Action::Release`].
    pub fn key(&mut self, window: WindowId, key: impl Into<i32>) -> Action {
        let code = key.into();
        if !(0..=KEY_LAST).contains(&code) {
            return Action::Release;
        }
        match self.windows.get_mut(&window) {
            Some(win) => win.keys[code as usize].consume(),
            None => Action::Release,
        }
    }

    /// Read the latched state of `button` for `window`. Same consuming
    /// semantics as [`key`](Context::key).
    pub fn mouse_button(&mut self, window: WindowId, button: impl Into<i32>) -> Action {
        let code = button.into();
        if !(0..=BUTTON_LAST).contains(&code) {
            return Action::Release;
        }
        match self.windows.get_mut(&window) {
            Some(win) => win.buttons[code as usize].consume(),
            None => Action::Release,
        }
    }

    /// Last known cursor position of `window`.
    pub fn mouse_pos(&self, window: WindowId) -> (i32, i32) {
        self.windows
            .get(&window)
            .map(|w| (w.mouse_x, w.mouse_y))
            .unwrap_or((0, 0))
    }

    /// Move the logical cursor of `window`, and the physical cursor with it
    /// unless a cursor lock is active.
    ///
    /// Writing the position the window already has is a no-op; the cursor
    /// sink is not asked to move.
    pub fn set_mouse_pos(&mut self, window: WindowId, x: i32, y: i32) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        if (x, y) == (win.mouse_x, win.mouse_y) {
            return;
        }
        win.mouse_x = x;
        win.mouse_y = y;
        if self.cursor_lock.is_some() {
            return;
        }
        if let Some(sink) = self.cursor_sink.as_mut() {
            sink.move_cursor(window, x, y);
        }
    }

    /// Current wheel accumulator of `window`.
    pub fn mouse_wheel(&self, window: WindowId) -> i32 {
        self.windows.get(&window).map(|w| w.wheel_pos).unwrap_or(0)
    }

    /// Overwrite the wheel accumulator. No clamping; the range is entirely
    /// caller-defined.
    pub fn set_mouse_wheel(&mut self, window: WindowId, pos: i32) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.wheel_pos = pos;
        }
    }

    /// Last character-input code point delivered to `window`.
    pub fn last_char(&self, window: WindowId) -> Option<char> {
        self.windows.get(&window).and_then(|w| w.last_char)
    }

    // ------------------------------------------------------------------
    // Behavior flags
    // ------------------------------------------------------------------

    /// Enable or disable sticky keys for `window`. Disabling demotes every
    /// unread sticky latch, so a latch cannot outlive the policy that
    /// created it.
    pub fn set_sticky_keys(&mut self, window: WindowId, enabled: bool) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        win.sticky_keys = enabled;
        if !enabled {
            demote_sticks(&mut win.keys);
        }
    }

    pub fn sticky_keys(&self, window: WindowId) -> bool {
        self.windows
            .get(&window)
            .map(|w| w.sticky_keys)
            .unwrap_or(false)
    }

    /// Enable or disable sticky mouse buttons for `window`.
    pub fn set_sticky_mouse_buttons(&mut self, window: WindowId, enabled: bool) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        win.sticky_mouse_buttons = enabled;
        if !enabled {
            demote_sticks(&mut win.buttons);
        }
    }

    pub fn sticky_mouse_buttons(&self, window: WindowId) -> bool {
        self.windows
            .get(&window)
            .map(|w| w.sticky_mouse_buttons)
            .unwrap_or(false)
    }

    /// Enable or disable key-repeat delivery for `window`. While disabled
    /// (the default), repeated presses of a held key still update state but
    /// are not delivered to the key callback.
    pub fn set_key_repeat(&mut self, window: WindowId, enabled: bool) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.key_repeat = enabled;
        }
    }

    pub fn key_repeat(&self, window: WindowId) -> bool {
        self.windows
            .get(&window)
            .map(|w| w.key_repeat)
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Callback registration
    // ------------------------------------------------------------------

    /// Register the key callback for `window`, replacing any prior handler.
    pub fn set_key_callback<H>(&mut self, window: WindowId, handler: H)
    where
        H: KeyHandler + 'static,
    {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_key.set(Box::new(handler));
        }
    }

    pub fn clear_key_callback(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_key.clear();
        }
    }

    /// Register the character callback for `window`, replacing any prior
    /// handler.
    pub fn set_char_callback<H>(&mut self, window: WindowId, handler: H)
    where
        H: CharHandler + 'static,
    {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_char.set(Box::new(handler));
        }
    }

    pub fn clear_char_callback(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_char.clear();
        }
    }

    /// Register the mouse button callback for `window`, replacing any prior
    /// handler.
    pub fn set_mouse_button_callback<H>(&mut self, window: WindowId, handler: H)
    where
        H: MouseButtonHandler + 'static,
    {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_mouse_button.set(Box::new(handler));
        }
    }

    pub fn clear_mouse_button_callback(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_mouse_button.clear();
        }
    }

    /// Register the mouse move callback for `window`, replacing any prior
    /// handler, and prime it once with the current cursor position so the
    /// new observer starts from present state rather than future deltas.
    pub fn set_mouse_move_callback<H>(&mut self, window: WindowId, handler: H)
    where
        H: MouseMoveHandler + 'static,
    {
        let (x, y) = match self.windows.get_mut(&window) {
            Some(win) => {
                win.on_mouse_move.set(Box::new(handler));
                (win.mouse_x, win.mouse_y)
            }
            None => return,
        };
        self.dispatch_mouse_move(window, x, y);
    }

    pub fn clear_mouse_move_callback(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_mouse_move.clear();
        }
    }

    /// Register the wheel callback for `window`, replacing any prior
    /// handler, and prime it once with the current accumulator.
    pub fn set_wheel_callback<H>(&mut self, window: WindowId, handler: H)
    where
        H: WheelHandler + 'static,
    {
        let pos = match self.windows.get_mut(&window) {
            Some(win) => {
                win.on_wheel.set(Box::new(handler));
                win.wheel_pos
            }
            None => return,
        };
        self.dispatch_wheel(window, pos);
    }

    pub fn clear_wheel_callback(&mut self, window: WindowId) {
        if let Some(win) = self.windows.get_mut(&window) {
            win.on_wheel.clear();
        }
    }
}

fn demote_sticks(latches: &mut [Latch]) {
    for latch in latches {
        if *latch == Latch::Stick {
            *latch = Latch::Released;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Button;
    use crate::keycode::Key;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unknown_window_defaults() {
        let mut ctx = Context::new();
        let ghost = WindowId(99);
        assert_eq!(ctx.key(ghost, Key::Space), Action::Release);
        assert_eq!(ctx.mouse_button(ghost, Button::Left), Action::Release);
        assert_eq!(ctx.mouse_pos(ghost), (0, 0));
        assert_eq!(ctx.mouse_wheel(ghost), 0);
        assert_eq!(ctx.last_char(ghost), None);
        assert!(!ctx.is_active(ghost));
    }

    #[test]
    fn test_out_of_range_codes_return_release() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        assert_eq!(ctx.key(win, -1), Action::Release);
        assert_eq!(ctx.key(win, KEY_LAST + 1), Action::Release);
        assert_eq!(ctx.mouse_button(win, -1), Action::Release);
        assert_eq!(ctx.mouse_button(win, BUTTON_LAST + 1), Action::Release);
    }

    #[test]
    fn test_set_mouse_pos_is_idempotent() {
        let mut ctx = Context::new();
        let moves = Rc::new(RefCell::new(Vec::new()));
        let sink = moves.clone();
        ctx.set_cursor_sink(move |w: WindowId, x: i32, y: i32| {
            sink.borrow_mut().push((w, x, y));
        });
        let win = ctx.open_window();

        ctx.set_mouse_pos(win, 3, 4);
        ctx.set_mouse_pos(win, 3, 4);
        assert_eq!(ctx.mouse_pos(win), (3, 4));
        assert_eq!(moves.borrow().as_slice(), &[(win, 3, 4)]);
    }

    #[test]
    fn test_cursor_lock_suppresses_physical_moves() {
        let mut ctx = Context::new();
        let moves = Rc::new(RefCell::new(0));
        let sink = moves.clone();
        ctx.set_cursor_sink(move |_: WindowId, _: i32, _: i32| {
            *sink.borrow_mut() += 1;
        });
        let locked = ctx.open_window();
        let other = ctx.open_window();
        ctx.lock_cursor(locked).unwrap();

        // The lock suppresses physical moves for every window, not just the
        // holder.
        ctx.set_mouse_pos(locked, 10, 10);
        ctx.set_mouse_pos(other, 20, 20);
        assert_eq!(*moves.borrow(), 0);
        assert_eq!(ctx.mouse_pos(locked), (10, 10));
        assert_eq!(ctx.mouse_pos(other), (20, 20));

        ctx.unlock_cursor().unwrap();
        ctx.set_mouse_pos(other, 30, 30);
        assert_eq!(*moves.borrow(), 1);
    }

    #[test]
    fn test_unlock_without_lock_is_an_error() {
        let mut ctx = Context::new();
        assert_eq!(ctx.unlock_cursor(), Err(Error::NoCursorLock));
    }

    #[test]
    fn test_close_window_releases_lock_and_currency() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        ctx.lock_cursor(win).unwrap();
        assert_eq!(ctx.current(), Some(win));

        ctx.close_window(win).unwrap();
        assert_eq!(ctx.cursor_lock(), None);
        assert_eq!(ctx.current(), None);
        assert!(!ctx.is_open(win));
        assert_eq!(ctx.close_window(win), Err(Error::UnknownWindow(win)));
    }

    #[test]
    fn test_window_ids_are_not_reused() {
        let mut ctx = Context::new();
        let first = ctx.open_window();
        ctx.close_window(first).unwrap();
        let second = ctx.open_window();
        assert_ne!(first, second);
    }

    #[test]
    fn test_make_current_resets_latches() {
        let mut ctx = Context::new();
        let a = ctx.open_window();
        let b = ctx.open_window();
        ctx.input_key(a, Key::KeyW, Action::Press);
        ctx.input_key(b, Key::KeyS, Action::Press);

        ctx.make_current(a).unwrap();
        assert_eq!(ctx.key(a, Key::KeyW), Action::Release);
        assert_eq!(ctx.key(b, Key::KeyS), Action::Release);
    }

    #[test]
    fn test_disabling_sticky_demotes_unread_latches() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        ctx.set_sticky_keys(win, true);
        ctx.input_key(win, Key::Space, Action::Press);
        ctx.input_key(win, Key::Space, Action::Release);

        ctx.set_sticky_keys(win, false);
        assert_eq!(ctx.key(win, Key::Space), Action::Release);
    }

    #[test]
    fn test_mouse_move_registration_primes_once() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        ctx.input_mouse_move(win, 10, 20);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        ctx.set_mouse_move_callback(win, move |_: &mut Context, _: WindowId, x: i32, y: i32| {
            log.borrow_mut().push((x, y));
        });
        assert_eq!(seen.borrow().as_slice(), &[(10, 20)]);
    }

    #[test]
    fn test_wheel_registration_primes_once() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        ctx.set_mouse_wheel(win, -5);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        ctx.set_wheel_callback(win, move |_: &mut Context, _: WindowId, pos: i32| {
            log.borrow_mut().push(pos);
        });
        assert_eq!(seen.borrow().as_slice(), &[-5]);
    }

    #[test]
    fn test_key_registration_does_not_prime() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        let calls = Rc::new(RefCell::new(0));

        let key_calls = calls.clone();
        ctx.set_key_callback(win, move |_: &mut Context, _: WindowId, _: i32, _: Action| {
            *key_calls.borrow_mut() += 1;
        });
        let char_calls = calls.clone();
        ctx.set_char_callback(win, move |_: &mut Context, _: WindowId, _: char| {
            *char_calls.borrow_mut() += 1;
        });
        let button_calls = calls.clone();
        ctx.set_mouse_button_callback(win, move |_: &mut Context, _: WindowId, _: i32, _: Action| {
            *button_calls.borrow_mut() += 1;
        });
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_registration_replaces_prior_handler() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        ctx.set_key_callback(win, move |_: &mut Context, _: WindowId, _: i32, _: Action| {
            first.borrow_mut().push("first");
        });
        let second = seen.clone();
        ctx.set_key_callback(win, move |_: &mut Context, _: WindowId, _: i32, _: Action| {
            second.borrow_mut().push("second");
        });

        ctx.input_key(win, Key::KeyA, Action::Press);
        assert_eq!(seen.borrow().as_slice(), &["second"]);
    }

    #[test]
    fn test_cleared_callback_stays_silent() {
        let mut ctx = Context::new();
        let win = ctx.open_window();
        let calls = Rc::new(RefCell::new(0));
        let log = calls.clone();
        ctx.set_key_callback(win, move |_: &mut Context, _: WindowId, _: i32, _: Action| {
            *log.borrow_mut() += 1;
        });
        ctx.clear_key_callback(win);
        ctx.input_key(win, Key::KeyA, Action::Press);
        assert_eq!(*calls.borrow(), 0);
    }
}

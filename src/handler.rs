//! Handler traits and slots for the per-window callback registry.
//!
//! Each event category (key, char, mouse-button, mouse-move, wheel) has one
//! handler trait and exactly one subscriber slot per window. Registration
//! replaces the slot's prior handler wholly; there is no multi-subscriber
//! fan-out. Every trait has a blanket impl for the matching closure shape,
//! so plain `FnMut` closures register directly.
//!
//! Handlers run synchronously on the ingestion call stack and receive
//! `&mut Context`, so they may re-enter the query, ingestion, and
//! registration APIs — including closing their own window. The [`Slot`]
//! state machine pins down what happens in each of those cases. Handlers
//! need neither `Send` nor `Sync`: the core is single-threaded by contract.

use crate::context::Context;
use crate::event::Action;
use crate::window::WindowId;

/// Receiver for key press/release events.
///
/// `key` is the raw code the platform layer reported, already validated
/// against `[0, KEY_LAST]`; `action` is the raw transition, not the
/// post-sticky-policy latch.
pub trait KeyHandler {
    fn on_key(&mut self, ctx: &mut Context, window: WindowId, key: i32, action: Action);
}

impl<F> KeyHandler for F
where
    F: FnMut(&mut Context, WindowId, i32, Action),
{
    fn on_key(&mut self, ctx: &mut Context, window: WindowId, key: i32, action: Action) {
        self(ctx, window, key, action)
    }
}

/// Receiver for character input. Invoked for presses and repeats, never for
/// releases.
pub trait CharHandler {
    fn on_char(&mut self, ctx: &mut Context, window: WindowId, ch: char);
}

impl<F> CharHandler for F
where
    F: FnMut(&mut Context, WindowId, char),
{
    fn on_char(&mut self, ctx: &mut Context, window: WindowId, ch: char) {
        self(ctx, window, ch)
    }
}

/// Receiver for mouse button press/release events.
pub trait MouseButtonHandler {
    fn on_mouse_button(&mut self, ctx: &mut Context, window: WindowId, button: i32, action: Action);
}

impl<F> MouseButtonHandler for F
where
    F: FnMut(&mut Context, WindowId, i32, Action),
{
    fn on_mouse_button(&mut self, ctx: &mut Context, window: WindowId, button: i32, action: Action) {
        self(ctx, window, button, action)
    }
}

/// Receiver for cursor position changes. Primed once with the current
/// position on registration.
pub trait MouseMoveHandler {
    fn on_mouse_move(&mut self, ctx: &mut Context, window: WindowId, x: i32, y: i32);
}

impl<F> MouseMoveHandler for F
where
    F: FnMut(&mut Context, WindowId, i32, i32),
{
    fn on_mouse_move(&mut self, ctx: &mut Context, window: WindowId, x: i32, y: i32) {
        self(ctx, window, x, y)
    }
}

/// Receiver for wheel accumulator changes. Primed once with the current
/// accumulator on registration.
pub trait WheelHandler {
    fn on_wheel(&mut self, ctx: &mut Context, window: WindowId, pos: i32);
}

impl<F> WheelHandler for F
where
    F: FnMut(&mut Context, WindowId, i32),
{
    fn on_wheel(&mut self, ctx: &mut Context, window: WindowId, pos: i32) {
        self(ctx, window, pos)
    }
}

/// Single-subscriber callback slot.
///
/// Dispatch takes the handler out with [`Slot::begin`], leaving the slot
/// `Busy`, invokes it, and puts it back with [`Slot::finish`] — but only if
/// the slot is still `Busy`. That one rule defines every re-entrant case:
///
/// - a handler that registers a replacement wins over the restore,
/// - a handler that clears its own slot stays cleared,
/// - a nested dispatch of the same slot finds it `Busy` and is skipped,
/// - a handler that closes its own window is dropped with it (the slot is
///   gone, so `finish` never runs).
pub(crate) enum Slot<T: ?Sized> {
    Empty,
    Set(Box<T>),
    Busy,
}

impl<T: ?Sized> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<T: ?Sized> Slot<T> {
    pub(crate) fn set(&mut self, handler: Box<T>) {
        *self = Slot::Set(handler);
    }

    pub(crate) fn clear(&mut self) {
        *self = Slot::Empty;
    }

    /// Take the handler out for dispatch, marking the slot `Busy`.
    /// Returns `None` if the slot is empty or already mid-dispatch.
    pub(crate) fn begin(&mut self) -> Option<Box<T>> {
        match std::mem::replace(self, Slot::Busy) {
            Slot::Set(handler) => Some(handler),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Return the handler after dispatch unless the slot was written to in
    /// the meantime (last writer wins).
    pub(crate) fn finish(&mut self, handler: Box<T>) {
        if matches!(self, Slot::Busy) {
            *self = Slot::Set(handler);
        }
    }
}

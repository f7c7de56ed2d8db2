//! Platform-facing outward interface.
//!
//! The core makes exactly one call outward: asking the platform layer to
//! move the physical cursor. Everything else flows inward through the
//! ingestion API on [`Context`](crate::Context).

use crate::window::WindowId;

/// Receiver for physical cursor repositioning requests.
///
/// Implemented by the platform layer and attached with
/// [`Context::set_cursor_sink`](crate::Context::set_cursor_sink). Invoked
/// only from [`Context::set_mouse_pos`](crate::Context::set_mouse_pos), and
/// only while no window holds the cursor lock — under a lock the stored
/// logical position intentionally diverges from the OS cursor.
pub trait CursorSink {
    fn move_cursor(&mut self, window: WindowId, x: i32, y: i32);
}

impl<F> CursorSink for F
where
    F: FnMut(WindowId, i32, i32),
{
    fn move_cursor(&mut self, window: WindowId, x: i32, y: i32) {
        self(window, x, y)
    }
}

//! # latchio
//!
//! Platform-independent input state and event dispatch core for windowing
//! backends.
//!
//! A windowing library's platform layer feeds raw OS input events into a
//! [`Context`]; latchio normalizes them into per-window latch state, cursor
//! and wheel snapshots, and synchronous callbacks, and answers polls at any
//! time in between.
//!
//! ## Features
//!
//! - Per-window key and mouse button latches with optional "sticky" mode,
//!   so a slow poller never misses a press/release cycle
//! - Single-subscriber callbacks per event category with defined
//!   re-entrancy (a handler may close its own window mid-dispatch)
//! - Cursor and wheel snapshots with no-op write suppression and a
//!   context-wide cursor lock for relative mouse input
//! - Safe-default degradation: unknown windows and out-of-range codes
//!   return releases and zeros instead of faulting
//!
//! ## Quick Start
//!
//! ### Polling with sticky latches
//!
//! ```
//! use latchio::{Action, Context, Key};
//!
//! let mut ctx = Context::new();
//! let win = ctx.open_window();
//! ctx.set_sticky_keys(win, true);
//!
//! // The platform layer reports a press/release pair between two polls.
//! ctx.input_key(win, Key::Space, Action::Press);
//! ctx.input_key(win, Key::Space, Action::Release);
//!
//! // The first poll still observes the press; the second sees the release.
//! assert_eq!(ctx.key(win, Key::Space), Action::Press);
//! assert_eq!(ctx.key(win, Key::Space), Action::Release);
//! ```
//!
//! ### Callbacks
//!
//! ```
//! use latchio::{Action, Context, WindowId};
//!
//! let mut ctx = Context::new();
//! let win = ctx.open_window();
//! ctx.set_key_callback(win, |_: &mut Context, _: WindowId, key: i32, action: Action| {
//!     println!("key {key}: {action:?}");
//! });
//! ctx.input_key(win, 65, Action::Press);
//! ```
//!
//! ## Architecture
//!
//! Ingestion (`input_*`) is the single choke point: it mutates state first
//! and notifies the matching callback second, so a callback always observes
//! a consistent snapshot. The whole core is single-threaded by contract —
//! ingestion happens inside the platform event pump on the application's
//! thread, and the `&mut Context` threading makes that exclusivity a
//! compile-time fact rather than a convention. Callbacks receive
//! `&mut Context` back and may re-enter any API; see the [`handler`] module
//! for the exact rules.

pub mod context;
pub mod error;
pub mod event;
pub mod handler;
pub mod keycode;
pub mod platform;

mod ingest;
mod latch;
mod window;

pub use context::Context;
pub use error::{Error, Result};
pub use event::{Action, BUTTON_LAST, Button};
pub use handler::{CharHandler, KeyHandler, MouseButtonHandler, MouseMoveHandler, WheelHandler};
pub use keycode::{KEY_LAST, Key};
pub use platform::CursorSink;
pub use window::WindowId;

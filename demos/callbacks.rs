//! Callback registration, priming, and cursor-lock suppression.
//!
//! Run with: cargo run --example callbacks

use latchio::{Context, WindowId};

fn main() {
    let mut ctx = Context::new();
    ctx.set_cursor_sink(|window: WindowId, x: i32, y: i32| {
        println!("platform: move cursor of {window} to ({x}, {y})");
    });
    let win = ctx.open_window();

    ctx.input_mouse_move(win, 10, 20);

    // A fresh mouse-move observer is primed with the current position
    // before any further event arrives.
    ctx.set_mouse_move_callback(win, |_: &mut Context, _: WindowId, x: i32, y: i32| {
        println!("observer: cursor at ({x}, {y})");
    });

    // Moving the logical cursor asks the platform to move the physical one.
    ctx.set_mouse_pos(win, 50, 60);

    // Under a cursor lock the logical position keeps updating but the
    // physical cursor stays put.
    if let Err(e) = ctx.lock_cursor(win) {
        eprintln!("Error: {e}");
        return;
    }
    ctx.set_mouse_pos(win, 500, 600);
    println!("logical position: {:?}", ctx.mouse_pos(win));
}

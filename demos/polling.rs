//! Sticky-latch polling driven by a scripted platform layer.
//!
//! Run with: cargo run --example polling

use latchio::{Action, Context, Key};

fn main() {
    let mut ctx = Context::new();
    let win = ctx.open_window();
    ctx.set_sticky_keys(win, true);

    // A press/release pair that lands entirely between two polls — the kind
    // of edge a plain keydown flag would miss.
    ctx.input_key(win, Key::Space, Action::Press);
    ctx.input_key(win, Key::Space, Action::Release);

    println!("first poll:  {:?}", ctx.key(win, Key::Space));
    println!("second poll: {:?}", ctx.key(win, Key::Space));

    // Without sticky mode the same pair leaves no trace.
    ctx.set_sticky_keys(win, false);
    ctx.input_key(win, Key::Space, Action::Press);
    ctx.input_key(win, Key::Space, Action::Release);
    println!("non-sticky:  {:?}", ctx.key(win, Key::Space));
}

//! Latch values and the sticky-latch transition policy.
//!
//! Every key and mouse button of a window owns one [`Latch`]. The policy is
//! a pure function over (current latch, raw action, sticky flag), so the
//! whole state machine is testable without a window or platform layer.
//! Sticky mode exists so a polling application cannot miss a press/release
//! cycle that lands entirely between two polls: the press is latched as
//! `Stick` and the first consuming read observes it exactly once.

use crate::event::Action;

/// Stored state of one key or mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Latch {
    /// The key is up and no edge is pending.
    #[default]
    Released,
    /// The key is down.
    Pressed,
    /// A press was latched and has not been read yet.
    Stick,
}

impl Latch {
    /// Apply one raw press/release transition under the window's sticky
    /// flag, returning the next latch value.
    ///
    /// Under sticky mode a press latches as `Stick` only from `Released`,
    /// and an unread `Stick` survives the matching release; the edge is
    /// surrendered only to [`Latch::consume`].
    pub(crate) fn apply(self, action: Action, sticky: bool) -> Latch {
        match action {
            Action::Press if !sticky => Latch::Pressed,
            Action::Press => match self {
                Latch::Released => Latch::Stick,
                latched => latched,
            },
            Action::Release if sticky && self == Latch::Stick => Latch::Stick,
            Action::Release => Latch::Released,
        }
    }

    /// Consuming read: an unread `Stick` reports `Press` exactly once and
    /// demotes itself to `Released`.
    pub(crate) fn consume(&mut self) -> Action {
        match *self {
            Latch::Released => Action::Release,
            Latch::Pressed => Action::Press,
            Latch::Stick => {
                *self = Latch::Released;
                Action::Press
            }
        }
    }

    pub(crate) fn is_down(self) -> bool {
        self != Latch::Released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_sticky_mirrors_last_action() {
        let mut latch = Latch::default();
        latch = latch.apply(Action::Press, false);
        assert_eq!(latch.consume(), Action::Press);
        latch = latch.apply(Action::Release, false);
        assert_eq!(latch.consume(), Action::Release);
    }

    #[test]
    fn test_sticky_press_latches_from_released_only() {
        assert_eq!(Latch::Released.apply(Action::Press, true), Latch::Stick);
        assert_eq!(Latch::Stick.apply(Action::Press, true), Latch::Stick);
        assert_eq!(Latch::Pressed.apply(Action::Press, true), Latch::Pressed);
    }

    #[test]
    fn test_sticky_edge_survives_release() {
        let latch = Latch::Released
            .apply(Action::Press, true)
            .apply(Action::Release, true);
        assert_eq!(latch, Latch::Stick);
    }

    #[test]
    fn test_release_clears_pressed_in_any_mode() {
        assert_eq!(Latch::Pressed.apply(Action::Release, true), Latch::Released);
        assert_eq!(Latch::Pressed.apply(Action::Release, false), Latch::Released);
    }

    #[test]
    fn test_consume_is_one_shot() {
        let mut latch = Latch::Stick;
        assert_eq!(latch.consume(), Action::Press);
        assert_eq!(latch, Latch::Released);
        assert_eq!(latch.consume(), Action::Release);
    }

    #[test]
    fn test_stale_stick_clears_once_sticky_is_off() {
        // A leftover Stick under a disabled flag must not survive a release.
        assert_eq!(Latch::Stick.apply(Action::Release, false), Latch::Released);
    }
}

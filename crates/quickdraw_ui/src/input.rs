//! Input events.
//!
//! The platform collaborator drains its event queue once per frame, before
//! any widget call, and feeds each event to [`Ui::handle_event`](crate::Ui::handle_event).

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button. The only button that drives widget activation.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

/// Keyboard key.
///
/// Only the keys the toolkit reacts to; keyboard navigation is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key. Released escape requests shutdown.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Space bar.
    Space,
}

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The pointer moved to a new position.
    PointerMoved {
        /// New X position.
        x: i32,
        /// New Y position.
        y: i32,
    },
    /// A mouse button was pressed.
    ButtonDown(MouseButton),
    /// A mouse button was released.
    ButtonUp(MouseButton),
    /// A key was released.
    KeyUp(Key),
    /// The platform requested shutdown (window close).
    Quit,
}

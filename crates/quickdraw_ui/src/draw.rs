//! Per-frame draw command buffer.
//!
//! Widgets describe themselves declaratively every frame; the backend
//! consumes the finished list after `end_frame` and may batch however it
//! likes. No diffing happens on this side.

use crate::rect::Rect;
use crate::style::Color;

/// A draw command issued by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Fill an axis-aligned rectangle with a solid color.
    FillRect {
        /// Bounds in screen coordinates.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
}

/// The frame's accumulated draw commands, in issue order.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    /// Clears the list for a new frame. Capacity is retained.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Convenience for the one primitive widgets actually use.
    pub fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.push(DrawCommand::FillRect { bounds, color });
    }

    /// Returns the commands issued so far this frame.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the number of commands issued so far this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands have been issued this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_clear() {
        let mut list = DrawList::new();
        assert!(list.is_empty());

        list.fill_rect(Rect::new(0, 0, 10, 10), Color::WHITE);
        list.fill_rect(Rect::new(5, 5, 10, 10), Color::BLACK);
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.commands()[0],
            DrawCommand::FillRect {
                bounds: Rect::new(0, 0, 10, 10),
                color: Color::WHITE,
            }
        );

        list.clear();
        assert!(list.is_empty());
    }
}

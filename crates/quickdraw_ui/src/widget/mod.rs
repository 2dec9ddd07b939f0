//! The widget functions.
//!
//! Each widget is a pure-per-call procedure on [`Ui`](crate::Ui): it runs the
//! shared hover/claim step over its rectangle, issues this frame's draw
//! commands for its current state, and returns the interaction result. No
//! widget object survives past the call; calling the same id every frame is
//! what makes hover, click and drag observable.

mod button;
mod checkbox;
mod slider;

pub use slider::SliderResponse;

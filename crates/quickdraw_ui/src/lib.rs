//! # Quickdraw UI
//!
//! An immediate-mode widget toolkit. Widgets are not retained as objects:
//! each frame re-issues widget calls that simultaneously update a tiny
//! persistent [`Ui`] state, emit draw commands, and report interaction.
//!
//! ## Frame protocol
//!
//! ```text
//! events -> Ui::handle_event*    (platform drains its queue)
//! Ui::begin_frame                (hot slot and draw list reset)
//! Ui::button / slider / checkbox (hover, claim, draw, result)
//! Ui::end_frame                  (active slot reconciled against the press)
//! render Ui::draw_list           (backend fills rectangles, presents)
//! ```
//!
//! Two identity slots drive everything: **hot** is the widget under the
//! pointer this frame, **active** is the widget that claimed the current
//! press. A claim is taken on a fresh press while no claim exists and is
//! dropped on release; a press that lands on empty space is parked on a
//! sentinel so nothing can steal it mid-drag.
//!
//! ```
//! use quickdraw_ui::{Event, Ui, WidgetId};
//!
//! let mut ui = Ui::new();
//! let ok = WidgetId::from_label("ok");
//!
//! ui.handle_event(&Event::PointerMoved { x: 10, y: 10 });
//! ui.begin_frame();
//! if ui.button(ok, 0, 0) {
//!     // fires on the frame the press is released over the button
//! }
//! ui.end_frame();
//! ```
//!
//! The toolkit is single-threaded by construction: `Ui` is plain owned data
//! threaded by `&mut` through the loop, with no globals and no locks.

pub mod draw;
pub mod id;
pub mod input;
pub mod rect;
pub mod style;
pub mod ui;
pub mod widget;

pub use draw::{DrawCommand, DrawList};
pub use id::{IdAllocator, WidgetId};
pub use input::{Event, Key, MouseButton};
pub use rect::Rect;
pub use style::{Color, Theme};
pub use ui::Ui;
pub use widget::SliderResponse;

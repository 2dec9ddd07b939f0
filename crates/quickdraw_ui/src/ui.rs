//! The persistent UI state and frame bracket.
//!
//! This is the whole of the toolkit's memory: pointer position, one
//! pointer-down flag, the hot and active slots, and the per-id checkbox
//! store. Everything else about a widget is recomputed on every call.

use std::collections::HashMap;

use crate::draw::DrawList;
use crate::id::WidgetId;
use crate::input::{Event, Key, MouseButton};
use crate::rect::Rect;
use crate::style::Theme;

/// Immediate-mode UI state.
///
/// One `Ui` lives for the life of the application and is threaded by
/// `&mut` through the frame loop; there are no ambient globals. Each frame:
///
/// ```text
/// drain events -> begin_frame -> widget calls -> end_frame -> render draw list
/// ```
///
/// `begin_frame`/`end_frame` must bracket exactly one frame's widget calls;
/// omitting either breaks hover and activation semantics.
#[derive(Debug)]
pub struct Ui {
    /// Current pointer X position.
    pub(crate) pointer_x: i32,
    /// Current pointer Y position.
    pub(crate) pointer_y: i32,
    /// Whether the primary button is held.
    pub(crate) pointer_down: bool,
    /// The widget currently under the pointer, if any.
    pub(crate) hot: WidgetId,
    /// The widget that has claimed the current press, if any.
    pub(crate) active: WidgetId,
    /// Persisted checkbox flags, keyed by widget identity.
    checked: HashMap<WidgetId, bool>,
    /// Colors used by the widget draw passes.
    pub(crate) theme: Theme,
    /// The frame's draw commands.
    pub(crate) draw: DrawList,
    /// True between `begin_frame` and `end_frame`.
    frame_open: bool,
}

impl Ui {
    /// Creates a fresh UI state with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Creates a fresh UI state with the given theme.
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            pointer_x: 0,
            pointer_y: 0,
            pointer_down: false,
            hot: WidgetId::NONE,
            active: WidgetId::NONE,
            checked: HashMap::new(),
            theme,
            draw: DrawList::new(),
            frame_open: false,
        }
    }

    /// Applies one input event.
    ///
    /// Pointer motion and primary-button transitions update the pointer
    /// state; other buttons are ignored. Returns `true` when the event
    /// requests shutdown (window close, or escape released).
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::PointerMoved { x, y } => {
                self.pointer_x = x;
                self.pointer_y = y;
            }
            Event::ButtonDown(MouseButton::Left) => self.pointer_down = true,
            Event::ButtonUp(MouseButton::Left) => self.pointer_down = false,
            Event::ButtonDown(_) | Event::ButtonUp(_) | Event::KeyUp(_) => {}
            Event::Quit => return true,
        }
        matches!(*event, Event::KeyUp(Key::Escape))
    }

    /// Starts a frame: forgets last frame's hot widget and draw commands.
    ///
    /// Hot is re-derived from scratch by this frame's widget calls, so a
    /// widget that is no longer hovered (or no longer exists) drops out
    /// without any bookkeeping.
    pub fn begin_frame(&mut self) {
        debug_assert!(!self.frame_open, "begin_frame called while a frame is open");
        if self.frame_open {
            tracing::warn!("begin_frame called while a frame is open");
        }
        self.hot = WidgetId::NONE;
        self.draw.clear();
        self.frame_open = true;
    }

    /// Ends a frame: reconciles the active slot against the pointer button.
    ///
    /// On release, any claim is dropped. If the button is held but nothing
    /// claimed it this frame, the claim is parked on
    /// [`WidgetId::UNCLAIMED`] so that a widget the pointer is dragged onto
    /// mid-press can never become active.
    pub fn end_frame(&mut self) {
        debug_assert!(self.frame_open, "end_frame called without begin_frame");
        if !self.frame_open {
            tracing::warn!("end_frame called without begin_frame");
        }
        if self.pointer_down {
            if self.active == WidgetId::NONE {
                self.active = WidgetId::UNCLAIMED;
            }
        } else {
            self.active = WidgetId::NONE;
        }
        self.frame_open = false;
    }

    /// Returns true if the pointer lies within the rectangle's half-open
    /// bounds.
    #[must_use]
    pub fn region_hit(&self, bounds: Rect) -> bool {
        bounds.contains(self.pointer_x, self.pointer_y)
    }

    /// The shared hover/claim step of every widget.
    ///
    /// If the pointer is over `bounds`, the widget becomes hot; if on top of
    /// that the button is held and no claim exists yet, it becomes active.
    /// Last caller to hit wins the hot slot within a frame. Public so custom
    /// widgets can take part in the same protocol.
    pub fn interact(&mut self, id: WidgetId, bounds: Rect) {
        debug_assert!(self.frame_open, "widget called outside the frame bracket");
        if self.region_hit(bounds) {
            self.hot = id;
            if self.active == WidgetId::NONE && self.pointer_down {
                self.active = id;
            }
        }
    }

    /// The click edge: true iff the button is up while `id` is still both
    /// hot and active, i.e. the press started and ended on this widget.
    #[must_use]
    pub fn released_over(&self, id: WidgetId) -> bool {
        !self.pointer_down && self.hot == id && self.active == id
    }

    /// Returns the persisted checkbox flag for `id` (false if never set).
    #[must_use]
    pub fn is_checked(&self, id: WidgetId) -> bool {
        self.checked.get(&id).copied().unwrap_or(false)
    }

    /// Seeds or overwrites the persisted checkbox flag for `id`.
    pub fn set_checked(&mut self, id: WidgetId, checked: bool) {
        self.checked.insert(id, checked);
    }

    /// Flips and returns the persisted checkbox flag for `id`.
    pub(crate) fn toggle_checked(&mut self, id: WidgetId) -> bool {
        let flag = self.checked.entry(id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Drops the current claim. Used by widgets that consume the release
    /// edge themselves instead of waiting for `end_frame`.
    pub(crate) fn release_active(&mut self) {
        self.active = WidgetId::NONE;
    }

    /// Current pointer position.
    #[must_use]
    pub fn pointer_pos(&self) -> (i32, i32) {
        (self.pointer_x, self.pointer_y)
    }

    /// Whether the primary button is currently held.
    #[must_use]
    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// The widget currently under the pointer ([`WidgetId::NONE`] if none).
    #[must_use]
    pub fn hot(&self) -> WidgetId {
        self.hot
    }

    /// The widget owning the current press ([`WidgetId::NONE`] if none).
    #[must_use]
    pub fn active(&self) -> WidgetId {
        self.active
    }

    /// The theme widgets draw with.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The frame's draw commands. Meaningful after `end_frame`.
    #[must_use]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

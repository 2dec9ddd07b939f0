//! Vertical slider (scrollbar style).

use crate::id::WidgetId;
use crate::rect::Rect;
use crate::ui::Ui;

/// Track width.
const TRACK_W: i32 = 32;
/// Track height.
const TRACK_H: i32 = 272;
/// Thumb edge length.
const THUMB: i32 = 16;
/// Inset of the thumb lane from the track edges.
const PADDING: i32 = 8;
/// Pointer offsets along the lane are clamped to `[0, POINTER_RANGE]`.
const POINTER_RANGE: i32 = 255;
/// Pixels the thumb's top edge can travel.
const THUMB_TRAVEL: i32 = 240;

/// Result of a slider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderResponse {
    /// True iff `value` differs from the value passed in.
    pub changed: bool,
    /// The value after this call, always within `[0, max]`. The caller
    /// decides whether to commit it.
    pub value: i32,
}

impl SliderResponse {
    const fn unchanged(value: i32) -> Self {
        Self {
            changed: false,
            value,
        }
    }
}

impl Ui {
    /// A fixed-size vertical slider at `(x, y)` over the range `[0, max]`.
    ///
    /// Unlike [`button`](Ui::button) this is a continuous drag control: while
    /// this slider owns the press, the value is recomputed from the pointer's
    /// clamped offset along the lane on every frame, not just on release.
    ///
    /// A non-positive `max` is a programmer error; debug builds assert, and
    /// release builds draw the slider at rest and report no change.
    pub fn slider(&mut self, id: WidgetId, x: i32, y: i32, max: i32, value: i32) -> SliderResponse {
        debug_assert!(max > 0, "slider range must be positive, got {max}");

        let track = Rect::new(x, y, TRACK_W, TRACK_H);
        let lane = Rect::new(x + PADDING, y + PADDING, THUMB, POINTER_RANGE);

        if max <= 0 {
            self.draw.fill_rect(track, self.theme.slider_track);
            let thumb = Rect::new(x + PADDING, y + PADDING, THUMB, THUMB);
            self.draw.fill_rect(thumb, self.theme.slider_thumb_idle);
            return SliderResponse::unchanged(value);
        }

        let thumb_y = scale(value.clamp(0, max), THUMB_TRAVEL, max);

        self.interact(id, lane);

        self.draw.fill_rect(track, self.theme.slider_track);
        let thumb = Rect::new(x + PADDING, y + PADDING + thumb_y, THUMB, THUMB);
        let thumb_color = if self.hot == id || self.active == id {
            self.theme.slider_thumb_hot
        } else {
            self.theme.slider_thumb_idle
        };
        self.draw.fill_rect(thumb, thumb_color);

        if self.active == id {
            let offset = (self.pointer_y - (y + PADDING)).clamp(0, POINTER_RANGE);
            let new_value = scale(offset, max, POINTER_RANGE);
            if new_value != value {
                return SliderResponse {
                    changed: true,
                    value: new_value,
                };
            }
        }

        SliderResponse::unchanged(value)
    }
}

/// `value * numerator / denominator` without intermediate overflow.
fn scale(value: i32, numerator: i32, denominator: i32) -> i32 {
    let scaled = i64::from(value) * i64::from(numerator) / i64::from(denominator);
    scaled as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Event, MouseButton};

    const ID: WidgetId = WidgetId::new(9);
    const X: i32 = 100;
    const Y: i32 = 40;
    const MAX: i32 = 255;

    fn frame(ui: &mut Ui, value: i32) -> SliderResponse {
        ui.begin_frame();
        let response = ui.slider(ID, X, Y, MAX, value);
        ui.end_frame();
        response
    }

    fn point_into_lane(ui: &mut Ui, offset: i32) {
        ui.handle_event(&Event::PointerMoved {
            x: X + PADDING + 2,
            y: Y + PADDING + offset,
        });
    }

    #[test]
    fn test_idle_slider_reports_no_change() {
        let mut ui = Ui::new();
        let response = frame(&mut ui, 42);
        assert_eq!(response, SliderResponse::unchanged(42));
    }

    #[test]
    fn test_drag_updates_value_every_frame() {
        let mut ui = Ui::new();
        point_into_lane(&mut ui, 0);
        ui.handle_event(&Event::ButtonDown(MouseButton::Left));
        let response = frame(&mut ui, 42);
        assert!(response.changed);
        assert_eq!(response.value, 0);

        // Still held: a new pointer position yields a new value mid-press.
        point_into_lane(&mut ui, 128);
        let response = frame(&mut ui, response.value);
        assert!(response.changed);
        assert_eq!(response.value, 128 * MAX / POINTER_RANGE);
    }

    #[test]
    fn test_changed_iff_value_differs() {
        let mut ui = Ui::new();
        point_into_lane(&mut ui, 100);
        ui.handle_event(&Event::ButtonDown(MouseButton::Left));
        let first = frame(&mut ui, 0);
        assert!(first.changed);

        // Same pointer position, value already committed: no change.
        let second = frame(&mut ui, first.value);
        assert!(!second.changed);
        assert_eq!(second.value, first.value);
    }

    #[test]
    fn test_value_clamped_outside_lane() {
        let mut ui = Ui::new();
        point_into_lane(&mut ui, 10);
        ui.handle_event(&Event::ButtonDown(MouseButton::Left));
        frame(&mut ui, 0);

        // Drag far above the track: clamps to 0.
        ui.handle_event(&Event::PointerMoved { x: X + 10, y: -5000 });
        let response = frame(&mut ui, 100);
        assert_eq!(response.value, 0);

        // Drag far below: clamps to max.
        ui.handle_event(&Event::PointerMoved { x: X + 10, y: 5000 });
        let response = frame(&mut ui, 100);
        assert_eq!(response.value, MAX);
    }

    #[test]
    fn test_release_stops_updates() {
        let mut ui = Ui::new();
        point_into_lane(&mut ui, 100);
        ui.handle_event(&Event::ButtonDown(MouseButton::Left));
        frame(&mut ui, 0);
        ui.handle_event(&Event::ButtonUp(MouseButton::Left));
        frame(&mut ui, 100);

        // Hovering without a claim must not move the value.
        point_into_lane(&mut ui, 200);
        let response = frame(&mut ui, 100);
        assert!(!response.changed);
        assert_eq!(response.value, 100);
    }

    #[test]
    fn test_large_range_does_not_overflow() {
        let mut ui = Ui::new();
        point_into_lane(&mut ui, 100);
        ui.handle_event(&Event::ButtonDown(MouseButton::Left));
        ui.begin_frame();
        let first = ui.slider(ID, X, Y, i32::MAX, 0);
        ui.end_frame();
        assert!(first.changed);

        // Drag past the bottom of the lane: clamps to the full range.
        point_into_lane(&mut ui, 5000);
        ui.begin_frame();
        let second = ui.slider(ID, X, Y, i32::MAX, first.value);
        ui.end_frame();
        assert_eq!(second.value, i32::MAX);
    }
}

//! Checkbox.

use crate::id::WidgetId;
use crate::rect::Rect;
use crate::ui::Ui;

/// Box edge length.
const BOX: i32 = 20;
/// Inset of the checked mark from the box edges.
const MARK_INSET: i32 = 4;

impl Ui {
    /// A fixed-size checkbox at `(x, y)`.
    ///
    /// Returns the persisted checked flag after this call. The flag lives in
    /// the [`Ui`] keyed by `id`, so every checkbox identity toggles
    /// independently; seed an initial value with
    /// [`set_checked`](Ui::set_checked) if `false` is not the right start.
    ///
    /// The toggle fires on the same release edge as a button click and
    /// consumes the claim immediately rather than waiting for `end_frame`.
    pub fn checkbox(&mut self, id: WidgetId, x: i32, y: i32) -> bool {
        let bounds = Rect::new(x, y, BOX, BOX);
        self.interact(id, bounds);

        self.draw.fill_rect(bounds, self.theme.checkbox_background);

        let checked = if self.released_over(id) {
            self.release_active();
            self.toggle_checked(id)
        } else {
            self.is_checked(id)
        };

        if checked {
            let mark = Rect::new(
                x + MARK_INSET,
                y + MARK_INSET,
                BOX - 2 * MARK_INSET,
                BOX - 2 * MARK_INSET,
            );
            self.draw.fill_rect(mark, self.theme.checkbox_mark);
        }

        checked
    }
}

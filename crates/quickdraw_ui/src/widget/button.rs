//! Push button.

use crate::id::WidgetId;
use crate::rect::Rect;
use crate::ui::Ui;

/// Button face width.
const WIDTH: i32 = 64;
/// Button face height.
const HEIGHT: i32 = 48;
/// Drop-shadow offset.
const SHADOW_OFFSET: i32 = 8;
/// Face offset while pressed.
const PRESS_OFFSET: i32 = 2;

impl Ui {
    /// A fixed-size push button at `(x, y)`.
    ///
    /// Returns `true` exactly once per interaction: on the frame the pointer
    /// is released while this button is still both hot and active, i.e. the
    /// press started and ended on it. A press dragged off the button before
    /// release never fires.
    ///
    /// The face is drawn over a drop shadow; hot and hot-and-active states
    /// get distinct treatments (the pressed face shifts toward the shadow).
    pub fn button(&mut self, id: WidgetId, x: i32, y: i32) -> bool {
        let face = Rect::new(x, y, WIDTH, HEIGHT);
        self.interact(id, face);

        self.draw
            .fill_rect(face.offset(SHADOW_OFFSET, SHADOW_OFFSET), self.theme.button_shadow);
        if self.hot == id {
            if self.active == id {
                self.draw
                    .fill_rect(face.offset(PRESS_OFFSET, PRESS_OFFSET), self.theme.button_hot);
            } else {
                self.draw.fill_rect(face, self.theme.button_hot);
            }
        } else {
            self.draw.fill_rect(face, self.theme.button_idle);
        }

        self.released_over(id)
    }
}

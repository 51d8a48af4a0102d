//! The clickable Play button shown while no round is running.

use crate::collision::Rect;

pub const BUTTON_WIDTH: u16 = 20;
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
}

impl Button {
    /// A button centred on a `screen_width` × `screen_height` screen.
    pub fn new(screen_width: u16, screen_height: u16, label: &str) -> Self {
        let x = (screen_width as i32 - BUTTON_WIDTH as i32) / 2;
        let y = (screen_height as i32 - BUTTON_HEIGHT as i32) / 2;
        Button {
            rect: Rect::new(
                x.max(0),
                y.max(0),
                BUTTON_WIDTH as i32,
                BUTTON_HEIGHT as i32,
            ),
            label: label.to_string(),
        }
    }

    pub fn is_clicked(&self, column: u16, row: u16) -> bool {
        self.rect.contains(column as i32, row as i32)
    }
}

//! Common test utilities shared across integration tests

use hello_button::ui::Scene;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// A typical terminal size.
pub const AREA: Rect = Rect::new(0, 0, 80, 24);

/// Flatten a buffer into one line of text per row.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            let cell = &buf[(x, y)];
            result.push_str(cell.symbol());
        }
        result.push('\n');
    }
    result
}

/// Cell in the middle of the region with `test_id`.
pub fn center_of(scene: &Scene, test_id: &str) -> (u16, u16) {
    let rect = scene
        .get_by_test_id(test_id)
        .map(hello_button::ui::Node::rect)
        .unwrap();
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

//! Rectangle helpers shared by the adapters and the page.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height.min(area.height)),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Center a `width` x `height` box in `area`, clamped to it.
#[must_use]
pub const fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = if width < area.width {
        width
    } else {
        area.width
    };
    let height = if height < area.height {
        height
    } else {
        area.height
    };
    Rect {
        x: area.x.saturating_add((area.width - width) / 2),
        y: area.y.saturating_add((area.height - height) / 2),
        width,
        height,
    }
}

/// Shrink `area` by `horizontal` columns and `vertical` rows on each side.
#[must_use]
pub const fn inset(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(horizontal),
        y: area.y.saturating_add(vertical),
        width: area.width.saturating_sub(horizontal.saturating_mul(2)),
        height: area.height.saturating_sub(vertical.saturating_mul(2)),
    }
}

/// The one-row text line inside `panel`, inset by up to `horizontal`
/// columns and `vertical` rows.
///
/// Insets give way first on small panels: the line keeps one row for as
/// long as the panel has any height.
#[must_use]
pub fn text_row(panel: Rect, horizontal: u16, vertical: u16) -> Rect {
    let horizontal = horizontal.min(panel.width.saturating_sub(1) / 2);
    let vertical = vertical.min(panel.height.saturating_sub(1) / 2);
    let body = inset(panel, horizontal, vertical);
    Rect::new(body.x, body.y, body.width, body.height.min(1))
}

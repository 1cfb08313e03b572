//! Status bar widget

use super::colors;
use crate::ui::Variant;
use crate::widget::Visibility;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct Widget {
    variant: Variant,
    visibility: Visibility,
    hints: String,
}

impl Widget {
    /// Create a status bar for a widget in the given state
    #[must_use]
    pub fn new(variant: Variant, visibility: Visibility, hints: impl Into<String>) -> Self {
        Self {
            variant,
            visibility,
            hints: hints.into(),
        }
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let state_style = if self.visibility.is_open() {
            Style::default()
                .fg(colors::STATUS_OPEN)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::STATUS_TEXT)
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.variant),
                Style::default()
                    .fg(colors::STATUS_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("| {} ", self.visibility.label()), state_style),
            Span::styled(
                format!("| {} ", self.hints),
                Style::default().fg(colors::STATUS_TEXT),
            ),
        ]);

        Paragraph::new(line).style(Style::default().bg(colors::STATUS_BG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{
        buffer::{Buffer, Cell},
        layout::Rect,
        widgets::Widget as _,
    };

    fn line_text(buf: &Buffer) -> String {
        buf.content().iter().map(Cell::symbol).collect()
    }

    #[test]
    fn test_status_bar_shows_variant_and_state() {
        let widget = Widget::new(Variant::Flowbite, Visibility::Open, "[q]quit");
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        widget.to_paragraph().render(area, &mut buf);

        let text = line_text(&buf);
        assert!(text.contains("flowbite"));
        assert!(text.contains("| open"));
        assert!(text.contains("[q]quit"));
    }

    #[test]
    fn test_status_bar_closed() {
        let widget = Widget::new(Variant::Plain, Visibility::Closed, "");
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        widget.to_paragraph().render(area, &mut buf);

        assert!(line_text(&buf).contains("closed"));
    }
}

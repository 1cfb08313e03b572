//! Trigger button primitive.

use crate::ui::layout::{centered_rect, inset};
use crate::ui::scene::{Look, Node, NodeId, Role, Scene};
use crate::widget::{Intent, TRIGGER_TEST_ID};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::BorderType,
};

/// Visual flavour of a trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLook {
    /// Fill and caption style.
    pub style: Style,
    /// Outline, `None` for a flat one-row button.
    pub border: Option<BorderType>,
    /// Outline style.
    pub border_style: Style,
    /// Blank columns on each side of the caption.
    pub padding_x: u16,
    /// Smallest width, so an empty label still leaves a clickable target.
    pub min_width: u16,
    /// Paint the caption upper-cased.
    pub uppercase: bool,
}

impl ButtonLook {
    /// Outer size of a button showing `label`.
    #[must_use]
    pub fn size(&self, label: &str) -> (u16, u16) {
        let caption = u16::try_from(Line::from(label).width()).unwrap_or(u16::MAX);
        let frame = if self.border.is_some() { 2 } else { 0 };
        let width = caption
            .saturating_add(self.padding_x.saturating_mul(2))
            .saturating_add(frame)
            .max(self.min_width);
        (width, 1 + frame)
    }
}

/// Add a trigger showing `label`, centered in `host`, under `parent`.
pub fn trigger_button(
    scene: &mut Scene,
    parent: NodeId,
    host: Rect,
    look: &ButtonLook,
    label: &str,
) -> NodeId {
    let (width, height) = look.size(label);
    let rect = centered_rect(width, height, host);

    let mut outline = Look::default().style(look.style);
    if let Some(border) = look.border {
        outline = outline.border(border, look.border_style);
    }
    let trigger = scene.push(
        parent,
        Node::new(Role::Trigger, rect)
            .with_test_id(TRIGGER_TEST_ID)
            .on_click(Intent::ActivateTrigger)
            .focusable()
            .with_look(outline),
    );

    let frame = u16::from(look.border.is_some());
    scene.push(
        trigger,
        Node::new(Role::Text, inset(rect, frame, frame))
            .with_text(label)
            .with_look(
                Look::default()
                    .style(look.style)
                    .alignment(Alignment::Center)
                    .uppercase(look.uppercase),
            ),
    );
    trigger
}

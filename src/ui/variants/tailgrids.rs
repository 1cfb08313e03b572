//! Tailgrids flavour.
//!
//! No library modal here: the overlay is drawn by hand. The backdrop
//! dismisses on click, the panel stops propagation, and the close control
//! relies on bubbling into the panel to stop there.

use crate::ui::colors;
use crate::ui::layout::{centered_rect, text_row};
use crate::ui::primitives::{ButtonLook, CLOSE_GLYPH, trigger_button};
use crate::ui::scene::{Fill, Look, Node, NodeId, Role, Scene};
use crate::ui::{Adapter, Mount, Variant};
use crate::widget::{DismissReason, Intent, MESSAGE, SURFACE_TEST_ID, WidgetState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::BorderType,
};

/// Widest panel, in columns.
const PANEL_MAX_WIDTH: u16 = 44;
/// Border, two padding rows, the message, two padding rows, border.
const PANEL_HEIGHT: u16 = 7;

/// Tailgrids adapter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tailgrids;

impl Tailgrids {
    fn trigger() -> ButtonLook {
        let fill = Style::new()
            .fg(colors::ON_PRIMARY)
            .bg(colors::TAILGRIDS_PRIMARY);
        ButtonLook {
            style: fill.add_modifier(Modifier::BOLD),
            border: Some(BorderType::Rounded),
            border_style: fill.fg(colors::TAILGRIDS_PRIMARY),
            padding_x: 4,
            min_width: 10,
            uppercase: false,
        }
    }

    fn overlay(scene: &mut Scene, viewport: Rect) -> NodeId {
        let overlay = scene.push(
            NodeId::ROOT,
            Node::new(Role::Backdrop, viewport)
                .with_test_id(SURFACE_TEST_ID)
                .on_click(Intent::Dismiss(DismissReason::Backdrop))
                .with_look(Look::default().fill(Fill::Dim)),
        );
        scene.set_modal_root(overlay);

        let room = viewport.width.saturating_sub(2);
        let width = PANEL_MAX_WIDTH.min(room).max(1);
        let rect = centered_rect(width, PANEL_HEIGHT, viewport);
        let card = Style::new()
            .fg(colors::TAILGRIDS_DARK)
            .bg(colors::SURFACE_BG);
        let panel_look = Look::default()
            .style(card)
            .border(BorderType::Rounded, card.fg(colors::TAILGRIDS_BODY))
            .fill(Fill::Clear);
        let panel = scene.push(
            overlay,
            Node::new(Role::Surface, rect)
                .stop_propagation()
                .with_look(panel_look),
        );

        let message_look = Look::default()
            .style(card.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        scene.push(
            panel,
            Node::new(Role::Text, text_row(rect, 5, 3))
                .with_text(MESSAGE)
                .with_look(message_look),
        );

        scene.push(
            panel,
            Node::new(
                Role::CloseControl,
                Rect {
                    x: rect.right().saturating_sub(3),
                    y: rect.y.saturating_add(1),
                    width: 1,
                    height: 1,
                },
            )
            .with_glyph(CLOSE_GLYPH)
            .on_click(Intent::Dismiss(DismissReason::CloseControl))
            .focusable()
            .with_look(Look::default().style(card.fg(colors::TAILGRIDS_BODY))),
        );

        panel
    }
}

impl Adapter for Tailgrids {
    fn variant(&self) -> Variant {
        Variant::Tailgrids
    }

    fn dismiss_on_escape(&self) -> bool {
        false
    }

    fn build(&self, state: &WidgetState, mount: Mount) -> Scene {
        let mut scene = Scene::new(mount.viewport);
        trigger_button(
            &mut scene,
            NodeId::ROOT,
            mount.host,
            &Self::trigger(),
            state.label(),
        );
        if state.is_open() {
            Self::overlay(&mut scene, mount.viewport);
        }
        scene
    }
}

//! Material Tailwind flavour: filled button, centered dialog body.

use super::delegated_scene;
use crate::ui::colors;
use crate::ui::primitives::{
    ButtonLook, Modal, ModalLook, ModalOptions, SurfaceWidth, TestIdPlacement,
};
use crate::ui::scene::{Fill, Scene};
use crate::ui::{Adapter, Mount, Variant};
use crate::widget::WidgetState;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::BorderType,
};

/// Material Tailwind adapter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaterialTailwind;

impl MaterialTailwind {
    fn trigger() -> ButtonLook {
        ButtonLook {
            style: Style::new()
                .fg(colors::ON_PRIMARY)
                .bg(colors::MATERIAL_TAILWIND_BLUE)
                .add_modifier(Modifier::BOLD),
            border: None,
            border_style: Style::new(),
            padding_x: 3,
            min_width: 8,
            uppercase: true,
        }
    }

    fn modal() -> Modal {
        Modal {
            options: ModalOptions {
                dismiss_on_backdrop: true,
                dismiss_on_escape: true,
                close_control: false,
                test_id: TestIdPlacement::Surface,
                width: SurfaceWidth::Percent(40),
                padding_x: 2,
                padding_y: 1,
            },
            look: ModalLook {
                backdrop: Fill::Dim,
                surface: Style::new().fg(colors::SURFACE_TEXT).bg(colors::SURFACE_BG),
                border: Some(BorderType::Rounded),
                border_style: Style::new()
                    .fg(colors::MATERIAL_TAILWIND_BORDER)
                    .bg(colors::SURFACE_BG),
                message: Style::new()
                    .fg(colors::SURFACE_TEXT)
                    .add_modifier(Modifier::BOLD),
                alignment: Alignment::Center,
            },
        }
    }
}

impl Adapter for MaterialTailwind {
    fn variant(&self) -> Variant {
        Variant::MaterialTailwind
    }

    fn dismiss_on_escape(&self) -> bool {
        Self::modal().options.dismiss_on_escape
    }

    fn build(&self, state: &WidgetState, mount: Mount) -> Scene {
        delegated_scene(state, mount, &Self::trigger(), &Self::modal())
    }
}

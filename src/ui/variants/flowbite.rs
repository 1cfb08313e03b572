//! Flowbite flavour.
//!
//! The library modal is not dismissible by default: a backdrop click does
//! nothing and only Escape closes it.

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

/// Flowbite adapter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flowbite;

impl Flowbite {
    fn trigger() -> ButtonLook {
        ButtonLook {
            style: Style::new()
                .fg(colors::ON_PRIMARY)
                .bg(colors::FLOWBITE_CYAN),
            border: None,
            border_style: Style::new(),
            padding_x: 2,
            min_width: 6,
            uppercase: false,
        }
    }

    fn modal() -> Modal {
        Modal {
            options: ModalOptions {
                dismiss_on_backdrop: false,
                dismiss_on_escape: true,
                close_control: false,
                test_id: TestIdPlacement::Root,
                width: SurfaceWidth::Columns(64),
                padding_x: 3,
                padding_y: 2,
            },
            look: ModalLook {
                backdrop: Fill::Dim,
                surface: Style::new().fg(colors::SURFACE_TEXT).bg(colors::SURFACE_BG),
                border: Some(BorderType::Rounded),
                border_style: Style::new()
                    .fg(colors::FLOWBITE_BORDER)
                    .bg(colors::SURFACE_BG),
                message: Style::new()
                    .fg(colors::SURFACE_TEXT)
                    .add_modifier(Modifier::BOLD),
                alignment: Alignment::Center,
            },
        }
    }
}

impl Adapter for Flowbite {
    fn variant(&self) -> Variant {
        Variant::Flowbite
    }

    fn dismiss_on_escape(&self) -> bool {
        Self::modal().options.dismiss_on_escape
    }

    fn build(&self, state: &WidgetState, mount: Mount) -> Scene {
        delegated_scene(state, mount, &Self::trigger(), &Self::modal())
    }
}

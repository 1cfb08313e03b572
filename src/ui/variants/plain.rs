//! Monochrome flavour for terminals without colour support.

use super::delegated_scene;
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

/// Plain adapter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Plain;

impl Plain {
    fn trigger() -> ButtonLook {
        ButtonLook {
            style: Style::new(),
            border: Some(BorderType::Plain),
            border_style: Style::new(),
            padding_x: 1,
            min_width: 5,
            uppercase: false,
        }
    }

    fn modal() -> Modal {
        Modal {
            options: ModalOptions {
                dismiss_on_backdrop: true,
                dismiss_on_escape: true,
                close_control: true,
                test_id: TestIdPlacement::Surface,
                width: SurfaceWidth::Columns(36),
                padding_x: 2,
                padding_y: 1,
            },
            look: ModalLook {
                backdrop: Fill::Dim,
                surface: Style::new(),
                border: Some(BorderType::Plain),
                border_style: Style::new(),
                message: Style::new().add_modifier(Modifier::BOLD),
                alignment: Alignment::Center,
            },
        }
    }
}

impl Adapter for Plain {
    fn variant(&self) -> Variant {
        Variant::Plain
    }

    fn dismiss_on_escape(&self) -> bool {
        Self::modal().options.dismiss_on_escape
    }

    fn build(&self, state: &WidgetState, mount: Mount) -> Scene {
        delegated_scene(state, mount, &Self::trigger(), &Self::modal())
    }
}

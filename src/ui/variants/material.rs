//! Material flavour: contained primary button, boxed modal with a heading.

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

/// Material adapter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Material;

impl Material {
    fn trigger() -> ButtonLook {
        ButtonLook {
            style: Style::new()
                .fg(colors::ON_PRIMARY)
                .bg(colors::MATERIAL_PRIMARY)
                .add_modifier(Modifier::BOLD),
            border: None,
            border_style: Style::new(),
            padding_x: 2,
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
                test_id: TestIdPlacement::Root,
                width: SurfaceWidth::Columns(40),
                padding_x: 3,
                padding_y: 1,
            },
            look: ModalLook {
                backdrop: Fill::Dim,
                surface: Style::new().fg(colors::SURFACE_TEXT).bg(colors::SURFACE_BG),
                border: Some(BorderType::Thick),
                border_style: Style::new()
                    .fg(colors::MATERIAL_BORDER)
                    .bg(colors::SURFACE_BG),
                message: Style::new()
                    .fg(colors::SURFACE_TEXT)
                    .add_modifier(Modifier::BOLD),
                alignment: Alignment::Left,
            },
        }
    }
}

impl Adapter for Material {
    fn variant(&self) -> Variant {
        Variant::Material
    }

    fn dismiss_on_escape(&self) -> bool {
        Self::modal().options.dismiss_on_escape
    }

    fn build(&self, state: &WidgetState, mount: Mount) -> Scene {
        delegated_scene(state, mount, &Self::trigger(), &Self::modal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TRIGGER_TEST_ID;
    use ratatui::buffer::{Buffer, Cell};
    use ratatui::layout::Rect;

    #[test]
    fn test_caption_uppercase_only_when_painted() -> Result<(), Box<dyn std::error::Error>> {
        let area = Rect::new(0, 0, 40, 5);
        let scene = Material.build(&WidgetState::new("Click Me!"), Mount::fullscreen(area));
        let trigger = scene.get_by_test_id(TRIGGER_TEST_ID)?;
        assert_eq!(scene.text_content(trigger.id()), "Click Me!");

        let mut buf = Buffer::empty(area);
        scene.paint(&mut buf, None);
        let y = trigger.rect().y;
        let row: String = (0..area.width)
            .filter_map(|x| buf.cell((x, y)).map(Cell::symbol))
            .collect();
        assert!(row.contains("CLICK ME!"));
        Ok(())
    }
}

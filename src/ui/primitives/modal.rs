//! Modal primitive: backdrop, surface and the message.

use crate::ui::layout::{centered_rect, centered_rect_absolute, text_row};
use crate::ui::scene::{Fill, Look, Node, NodeId, Role, Scene};
use crate::widget::{DismissReason, Intent, MESSAGE, SURFACE_TEST_ID};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::BorderType,
};

/// Icon painted on close controls.
pub(crate) const CLOSE_GLYPH: &str = "\u{2715}";

/// Which region the library tags with the caller's test id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestIdPlacement {
    /// The full-viewport root, backdrop included.
    Root,
    /// The surface itself.
    Surface,
}

/// Surface width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceWidth {
    /// Fixed column count.
    Columns(u16),
    /// Share of the viewport width.
    Percent(u16),
}

/// Behaviour switches, matching the defaults of the library being imitated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalOptions {
    /// A click on the backdrop dismisses.
    pub dismiss_on_backdrop: bool,
    /// Escape dismisses.
    pub dismiss_on_escape: bool,
    /// Draw a close control in the surface's top-right corner.
    pub close_control: bool,
    /// Region carrying the caller's test id.
    pub test_id: TestIdPlacement,
    /// Surface width.
    pub width: SurfaceWidth,
    /// Blank columns inside the surface on each side.
    pub padding_x: u16,
    /// Blank rows inside the surface above and below the message.
    pub padding_y: u16,
}

/// Visual attributes of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLook {
    /// Treatment of the page below the backdrop.
    pub backdrop: Fill,
    /// Surface fill style.
    pub surface: Style,
    /// Surface outline.
    pub border: Option<BorderType>,
    /// Surface outline style.
    pub border_style: Style,
    /// Message style.
    pub message: Style,
    /// Message alignment.
    pub alignment: Alignment,
}

/// A library-provided modal showing [`MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modal {
    /// Behaviour.
    pub options: ModalOptions,
    /// Appearance.
    pub look: ModalLook,
}

impl Modal {
    /// Area of the surface inside `viewport`.
    #[must_use]
    pub fn surface_rect(&self, viewport: Rect) -> Rect {
        let frame = if self.look.border.is_some() { 2 } else { 0 };
        let height = 1u16
            .saturating_add(self.options.padding_y.saturating_mul(2))
            .saturating_add(frame);
        match self.options.width {
            SurfaceWidth::Columns(columns) => {
                let width = columns.min(viewport.width.saturating_sub(2)).max(1);
                centered_rect(width, height, viewport)
            }
            SurfaceWidth::Percent(percent) => centered_rect_absolute(percent, height, viewport),
        }
    }

    /// Add backdrop, surface and message to `scene`; returns the surface.
    ///
    /// The surface stops propagation, so clicks inside it never reach the
    /// backdrop.
    pub fn build(&self, scene: &mut Scene, viewport: Rect) -> NodeId {
        let mut backdrop = Node::new(Role::Backdrop, viewport)
            .with_look(Look::default().fill(self.look.backdrop));
        if self.options.dismiss_on_backdrop {
            backdrop = backdrop.on_click(Intent::Dismiss(DismissReason::Backdrop));
        }
        if self.options.test_id == TestIdPlacement::Root {
            backdrop = backdrop.with_test_id(SURFACE_TEST_ID);
        }
        let root = scene.push(NodeId::ROOT, backdrop);
        scene.set_modal_root(root);

        let rect = self.surface_rect(viewport);
        let mut surface_look = Look::default().style(self.look.surface).fill(Fill::Clear);
        if let Some(border) = self.look.border {
            surface_look = surface_look.border(border, self.look.border_style);
        }
        let mut surface = Node::new(Role::Surface, rect)
            .stop_propagation()
            .with_look(surface_look);
        if self.options.test_id == TestIdPlacement::Surface {
            surface = surface.with_test_id(SURFACE_TEST_ID);
        }
        let surface = scene.push(root, surface);

        let frame = u16::from(self.look.border.is_some());
        let row = text_row(
            rect,
            frame.saturating_add(self.options.padding_x),
            frame.saturating_add(self.options.padding_y),
        );
        let message_look = Look::default()
            .style(self.look.message)
            .alignment(self.look.alignment);
        scene.push(
            surface,
            Node::new(Role::Text, row)
                .with_text(MESSAGE)
                .with_look(message_look),
        );

        if self.options.close_control {
            let close = Rect {
                x: rect.right().saturating_sub(frame.saturating_add(2)),
                y: rect.y.saturating_add(frame),
                width: 1,
                height: 1,
            };
            scene.push(
                surface,
                Node::new(Role::CloseControl, close)
                    .with_glyph(CLOSE_GLYPH)
                    .on_click(Intent::Dismiss(DismissReason::CloseControl))
                    .stop_propagation()
                    .focusable()
                    .with_look(Look::default().style(self.look.message)),
            );
        }

        surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal(options: ModalOptions) -> Modal {
        Modal {
            options,
            look: ModalLook {
                backdrop: Fill::Dim,
                surface: Style::new(),
                border: Some(BorderType::Plain),
                border_style: Style::new(),
                message: Style::new(),
                alignment: Alignment::Center,
            },
        }
    }

    fn options() -> ModalOptions {
        ModalOptions {
            dismiss_on_backdrop: true,
            dismiss_on_escape: true,
            close_control: false,
            test_id: TestIdPlacement::Surface,
            width: SurfaceWidth::Columns(30),
            padding_x: 2,
            padding_y: 1,
        }
    }

    #[test]
    fn test_surface_rect_columns() {
        let rect = modal(options()).surface_rect(Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(25, 9, 30, 5));
    }

    #[test]
    fn test_surface_rect_percent_and_clamp() {
        let percent = modal(ModalOptions {
            width: SurfaceWidth::Percent(40),
            ..options()
        });
        assert_eq!(percent.surface_rect(Rect::new(0, 0, 100, 30)).width, 40);

        let wide = modal(ModalOptions {
            width: SurfaceWidth::Columns(500),
            ..options()
        });
        assert_eq!(wide.surface_rect(Rect::new(0, 0, 20, 10)).width, 18);
    }

    #[test]
    fn test_build_places_message_inside_surface() -> Result<(), Box<dyn std::error::Error>> {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut scene = Scene::new(viewport);
        let surface = modal(options()).build(&mut scene, viewport);

        let tagged = scene.get_by_test_id(SURFACE_TEST_ID)?;
        assert_eq!(tagged.id(), surface);
        assert_eq!(scene.text_content(surface), MESSAGE);
        let message = scene.get_by_text(MESSAGE)?;
        assert_eq!(message.rect(), Rect::new(28, 11, 24, 1));
        Ok(())
    }

    #[test]
    fn test_backdrop_without_dismissal() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut scene = Scene::new(viewport);
        modal(ModalOptions {
            dismiss_on_backdrop: false,
            ..options()
        })
        .build(&mut scene, viewport);

        assert!(scene.dispatch_click(0, 0).intents.is_empty());
    }

    #[test]
    fn test_message_keeps_a_row_on_short_viewports() -> Result<(), Box<dyn std::error::Error>> {
        for height in 1..=5 {
            let viewport = Rect::new(0, 0, 80, height);
            let mut scene = Scene::new(viewport);
            let surface = modal(options()).build(&mut scene, viewport);

            let message = scene.get_by_text(MESSAGE)?.rect();
            let surface = scene.node(surface).ok_or("no surface")?.rect();
            assert_eq!(message.height, 1, "height {height}");
            assert!(surface.contains(message.as_position()), "height {height}");
        }
        Ok(())
    }

    #[test]
    fn test_close_control_is_focusable_and_dismisses() {
        let viewport = Rect::new(0, 0, 80, 24);
        let mut scene = Scene::new(viewport);
        modal(ModalOptions {
            close_control: true,
            ..options()
        })
        .build(&mut scene, viewport);

        let focusables = scene.focusables();
        assert_eq!(focusables.len(), 1);
        let dispatch = scene.click_node(focusables[0]);
        assert_eq!(
            dispatch.intents,
            vec![Intent::Dismiss(DismissReason::CloseControl)]
        );
    }
}

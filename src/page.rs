//! Host page: background, a title line, the widget and a status bar.

use crate::stories::Story;
use crate::ui::{Mount, NodeId, Scene, SnapshotNode, StatusBarWidget, Variant, colors};
use crate::widget::{HelloButton, Interaction, Visibility};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use serde::Serialize;

/// Label used by the demo page.
pub const DEMO_LABEL: &str = "Click Me!";

/// Title of the demo page.
pub const DEMO_TITLE: &str = "/mytest";

/// Screen areas of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Title line.
    pub title: Rect,
    /// Area the trigger is centered in.
    pub body: Rect,
    /// Status bar line.
    pub status: Rect,
}

impl PageLayout {
    /// Split `area` into title, body and status rows.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [title, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            title,
            body,
            status,
        }
    }
}

/// Serializable view of a page at one size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    /// Page title.
    pub title: String,
    /// Presentation variant.
    pub variant: Variant,
    /// Surface visibility.
    pub visibility: Visibility,
    /// Widget scene.
    pub scene: SnapshotNode,
}

/// A page hosting one widget.
#[derive(Debug)]
pub struct Page {
    title: String,
    widget: HelloButton,
}

impl Page {
    /// Page with a custom title and widget.
    #[must_use]
    pub fn new(title: impl Into<String>, widget: HelloButton) -> Self {
        Self {
            title: title.into(),
            widget,
        }
    }

    /// The demo page: one centred button labelled [`DEMO_LABEL`].
    #[must_use]
    pub fn demo(variant: Variant) -> Self {
        Self::new(DEMO_TITLE, HelloButton::with_variant(DEMO_LABEL, variant))
    }

    /// A page rendering one story.
    #[must_use]
    pub fn from_story(story: Story, variant: Variant) -> Self {
        Self::new(
            story.path(),
            HelloButton::with_variant(story.label, variant),
        )
    }

    /// Page title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The hosted widget.
    #[must_use]
    pub const fn widget(&self) -> &HelloButton {
        &self.widget
    }

    /// Mutable access to the hosted widget.
    pub const fn widget_mut(&mut self) -> &mut HelloButton {
        &mut self.widget
    }

    /// Where the widget is mounted for a page of size `area`.
    ///
    /// The trigger sits in the body; overlays cover the whole page.
    #[must_use]
    pub fn mount(area: Rect) -> Mount {
        Mount::new(PageLayout::new(area).body, area)
    }

    /// Current scene of the widget on a page of size `area`.
    #[must_use]
    pub fn scene(&self, area: Rect) -> Scene {
        self.widget.scene(Self::mount(area))
    }

    /// Snapshot of the page at size `area`.
    #[must_use]
    pub fn snapshot(&self, area: Rect) -> PageSnapshot {
        PageSnapshot {
            title: self.title.clone(),
            variant: self.widget.variant(),
            visibility: self.widget.visibility(),
            scene: self.scene(area).snapshot(),
        }
    }

    /// Paint the page into `buf`, highlighting `focused`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: Option<NodeId>, hints: &str) {
        let layout = PageLayout::new(area);

        buf.set_style(
            area,
            Style::default().bg(colors::PAGE_BG).fg(colors::PAGE_TEXT),
        );

        Paragraph::new(Line::from(format!(" {}", self.title)))
            .style(
                Style::default()
                    .fg(colors::PAGE_TEXT)
                    .add_modifier(Modifier::BOLD),
            )
            .render(layout.title, buf);

        StatusBarWidget::new(self.widget.variant(), self.widget.visibility(), hints)
            .to_paragraph()
            .render(layout.status, buf);

        // Overlays go last so they cover the status bar too.
        self.scene(area).paint(buf, focused);
    }
}

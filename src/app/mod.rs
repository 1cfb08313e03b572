//! Application state and the actions that drive it.

mod event;

pub use event::{Event, Handler};

use crate::config::{Action, Config};
use crate::page::Page;
use crate::ui::{NodeId, Scene};
use crate::widget::{Interaction, Transition};
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Effective configuration
    pub config: Config,
    page: Page,
    focus: usize,
    should_quit: bool,
    needs_redraw: bool,
}

impl App {
    /// Create an app hosting `page`
    #[must_use]
    pub const fn new(config: Config, page: Page) -> Self {
        Self {
            config,
            page,
            focus: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// The hosted page
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable access to the hosted page
    pub const fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Whether the user asked to quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether state changed since the last draw
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Record that the current state is on screen
    pub const fn mark_drawn(&mut self) {
        self.needs_redraw = false;
    }

    /// Force a redraw on the next loop iteration (e.g. after a resize)
    pub const fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Focusable control that currently has focus, if any
    #[must_use]
    pub fn focused(&self, area: Rect) -> Option<NodeId> {
        focused_in(&self.page.scene(area), self.focus)
    }

    /// Key hints for the status bar
    #[must_use]
    pub fn status_hints(&self) -> String {
        self.config.keys.status_hints()
    }

    /// Perform a bound action against a page of size `area`
    pub fn handle_action(&mut self, action: Action, area: Rect) -> Transition {
        let transition = match action {
            Action::Activate => self.activate_focused(area),
            Action::Dismiss => self.page.widget_mut().escape(),
            Action::FocusNext | Action::FocusPrev => {
                self.move_focus(action == Action::FocusNext, area);
                self.unchanged()
            }
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                self.unchanged()
            }
        };
        self.settle(transition)
    }

    /// Left click at `(x, y)` on a page of size `area`
    pub fn handle_click(&mut self, x: u16, y: u16, area: Rect) -> Transition {
        let mount = Page::mount(area);
        let transition = self.page.widget_mut().click(mount, x, y);
        self.settle(transition)
    }

    fn activate_focused(&mut self, area: Rect) -> Transition {
        let scene = self.page.scene(area);
        let Some(target) = focused_in(&scene, self.focus) else {
            return self.unchanged();
        };
        let dispatch = scene.click_node(target);
        self.page.widget_mut().apply_all(&dispatch.intents)
    }

    fn move_focus(&mut self, forward: bool, area: Rect) {
        let count = self.page.scene(area).focusables().len();
        if count == 0 {
            return;
        }
        let current = self.focus % count;
        self.focus = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        debug!(focus = self.focus, count, "Moved focus");
        self.needs_redraw = true;
    }

    fn unchanged(&self) -> Transition {
        Transition::Unchanged(self.page.widget().visibility())
    }

    /// The focusable set changes with visibility, so focus restarts at the
    /// first control of the new set.
    fn settle(&mut self, transition: Transition) -> Transition {
        if transition.is_changed() {
            self.focus = 0;
            self.needs_redraw = true;
        }
        transition
    }
}

fn focused_in(scene: &Scene, focus: usize) -> Option<NodeId> {
    let focusables = scene.focusables();
    if focusables.is_empty() {
        None
    } else {
        focusables.get(focus % focusables.len()).copied()
    }
}

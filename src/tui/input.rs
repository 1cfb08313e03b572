//! Keyboard and mouse input.

use crate::app::{App, Event};
use crate::widget::{Interaction, Transition};
use ratatui::{
    crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};
use tracing::debug;

/// Route one event to the app.
pub fn handle_event(app: &mut App, event: Event, frame_area: Rect) -> Transition {
    match event {
        Event::Key(key) => handle_key_event(app, key.code, key.modifiers, frame_area),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse, frame_area),
        Event::Resize(..) => {
            app.request_redraw();
            current(app)
        }
        Event::Tick => current(app),
    }
}

/// Handle a key press.
///
/// Unbound keys are ignored.
pub fn handle_key_event(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    frame_area: Rect,
) -> Transition {
    match app.config.keys.get_action(code, modifiers) {
        Some(action) => app.handle_action(action, frame_area),
        None => {
            debug!(?code, ?modifiers, "Unbound key");
            current(app)
        }
    }
}

/// Handle a mouse event.
///
/// Only left presses are hit-tested; everything else is ignored.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) -> Transition {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.handle_click(mouse.column, mouse.row, frame_area)
    } else {
        current(app)
    }
}

fn current(app: &App) -> Transition {
    Transition::Unchanged(app.page().widget().visibility())
}

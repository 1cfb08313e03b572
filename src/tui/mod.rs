//! Terminal User Interface for hello-button

mod input;

pub use input::{handle_event, handle_key_event, handle_mouse_event};

use crate::app::{App, Handler};
use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use tracing::{debug, info};

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or restored
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!(
        variant = %app.page().widget().variant(),
        title = app.page().title(),
        "Starting TUI"
    );
    let handler = Handler::new(app.config.poll_interval());
    let result = run_loop(&mut terminal, &mut app, &handler);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    info!("TUI stopped");

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    handler: &Handler,
) -> Result<()> {
    loop {
        if app.needs_redraw() {
            draw(terminal, app)?;
        }

        let event = handler.next()?;
        let size = terminal.size().context("Failed to read terminal size")?;
        let area = Rect::new(0, 0, size.width, size.height);
        let transition = handle_event(app, event, area);
        if transition.is_changed() {
            debug!(?transition, "Widget changed");
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Draw the current state and clear the redraw flag
///
/// # Errors
///
/// Returns an error if the backend fails to draw
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal
        .draw(|frame| render(frame, app))
        .context("Failed to draw frame")?;
    app.mark_drawn();
    Ok(())
}

/// Render the app into a frame
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let focused = app.focused(area);
    let hints = app.status_hints();
    app.page().render(area, frame.buffer_mut(), focused, &hints);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Action, Config};
    use crate::page::Page;
    use crate::ui::Variant;
    use crate::widget::MESSAGE;
    use ratatui::{backend::TestBackend, buffer::Buffer};

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draw_clears_redraw_flag() -> Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(80, 20))?;
        let mut app = App::new(Config::default(), Page::demo(Variant::Plain));
        assert!(app.needs_redraw());

        draw(&mut terminal, &mut app)?;

        assert!(!app.needs_redraw());
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Click Me!"));
        assert!(text.contains("[q]quit"));
        Ok(())
    }

    #[test]
    fn test_draw_after_open_shows_message() -> Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
        let mut app = App::new(Config::default(), Page::demo(Variant::MaterialTailwind));

        app.handle_action(Action::Activate, Rect::new(0, 0, 80, 24));
        draw(&mut terminal, &mut app)?;

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(MESSAGE));
        assert!(text.contains("| open"));
        Ok(())
    }
}

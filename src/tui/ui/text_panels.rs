use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, Pane};
use crate::tui::theme::{theme, Theme};

fn panel_block<'a>(t: &'a Theme, title: &str, focused: bool) -> Block<'a> {
    Block::default()
        .title(t.panel_title(title, focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
}

pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Input;

    let block = panel_block(t, "INPUT TEXT", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input.is_empty() {
        let placeholder = Paragraph::new(Line::styled("Enter your text here...", t.text_muted()));
        frame.render_widget(placeholder, inner);
        return;
    }

    let mut lines: Vec<Line> = app
        .input
        .split('\n')
        .map(|l| Line::styled(l.to_string(), t.text_primary()))
        .collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", t.key_hint()));
        }
    }

    let input = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Keep the end of the text, where typing happens, in view. Long lines wrap
    // onto several rows, so count rendered rows rather than lines.
    let rows = input.line_count(inner.width);
    let offset = rows.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16;

    frame.render_widget(input.scroll((offset, 0)), inner);
}

pub fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Output;

    let block = panel_block(t, "OUTPUT TEXT", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.output.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No output yet. Pick a conversion to see the result here.",
            t.text_muted(),
        ))
        .wrap(Wrap { trim: false });
        frame.render_widget(empty, inner);
        return;
    }

    let style = if app.active.is_some_and(|s| s.is_morse()) {
        t.morse_text()
    } else {
        t.output_text()
    };
    let lines: Vec<Line> = app
        .output
        .split('\n')
        .map(|l| Line::styled(l.to_string(), style))
        .collect();

    let output = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(output, inner);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ratatui::backend::TestBackend;
    use ratatui::buffer;
    use recase_core::{Selector, Settings};

    use super::*;

    fn app() -> App {
        App::with_settings(Settings::new(), PathBuf::from("converted-text.txt"))
    }

    fn draw(app: &App, render: fn(&mut Frame, &App, Rect)) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, app, frame.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn cell(buffer: &Buffer, x: u16, y: u16) -> &buffer::Cell {
        &buffer.content()[buffer.index_of(x, y)]
    }

    #[test]
    fn test_input_cursor_stays_visible_after_wrapped_line() {
        let mut app = app();
        for _ in 0..7 {
            app.insert_char('x');
            app.insert_newline();
        }
        // one logical line that wraps over several rows of a 38-column panel
        for _ in 0..150 {
            app.insert_char('a');
        }

        let buffer = draw(&app, render_input);
        assert!(buffer.content().iter().any(|cell| cell.symbol() == "▏"));
    }

    #[test]
    fn test_short_input_is_not_scrolled() {
        let mut app = app();
        for c in "first\nsecond".chars() {
            app.insert_char(c);
        }

        let buffer = draw(&app, render_input);
        assert_eq!(cell(&buffer, 1, 1).symbol(), "f");
    }

    #[test]
    fn test_morse_output_uses_morse_style() {
        let mut app = app();
        app.insert_char('e');
        app.apply(Selector::Morse);

        let buffer = draw(&app, render_output);
        assert_eq!(cell(&buffer, 1, 1).symbol(), ".");
        assert_eq!(cell(&buffer, 1, 1).fg, theme().morse_text().fg.unwrap());

        app.apply(Selector::Upper);
        let buffer = draw(&app, render_output);
        assert_eq!(cell(&buffer, 1, 1).fg, theme().output_text().fg.unwrap());
    }
}

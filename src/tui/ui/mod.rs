mod conversions_panel;
mod footer;
mod header;
mod text_panels;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Compact header
            Constraint::Min(8),    // Input | Output
            Constraint::Length(3), // Statistics
            Constraint::Length(6), // Conversions grid (4 rows)
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);

    header::render(frame, app, root[0]);
    text_panels::render_input(frame, app, body[0]);
    text_panels::render_output(frame, app, body[1]);
    render_stats(frame, app, root[2]);
    conversions_panel::render(frame, app, root[3]);
    footer::render(frame, app, root[4]);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let block = Block::default()
        .title(t.panel_title("STATISTICS", false))
        .borders(Borders::ALL)
        .border_style(t.panel_border(false))
        .border_type(BorderType::Plain);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    let counts = [
        ("Characters", app.stats.character_count),
        ("Words", app.stats.word_count),
        ("Sentences", app.stats.sentence_count),
        ("Lines", app.stats.line_count),
    ];

    for ((label, value), cell) in counts.into_iter().zip(cells.iter()) {
        let line = Line::from(vec![
            Span::styled(format!("{} ", label), t.text_muted()),
            Span::styled(value.to_string(), t.stat_value()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), *cell);
    }
}

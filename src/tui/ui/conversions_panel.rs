use ratatui::prelude::*;
use ratatui::widgets::*;

use recase_core::Selector;

use crate::tui::app::{App, Pane, GRID_COLUMNS};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Conversions;

    let block = Block::default()
        .title(t.panel_title("CONVERSIONS", focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let col_width = (inner.width as usize / GRID_COLUMNS).max(1);

    // Row-first order, matching the grid navigation in App::move_selection
    let lines: Vec<Line> = Selector::ALL
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row, selectors)| {
            let spans: Vec<Span> = selectors
                .iter()
                .enumerate()
                .map(|(col, &selector)| {
                    let idx = row * GRID_COLUMNS + col;
                    let under_cursor = focused && idx == app.selector_index;
                    let active = app.active == Some(selector);
                    let marker = if under_cursor { ">" } else { " " };
                    let text = format!("{}{}", marker, selector.label());
                    Span::styled(pad_to_width(&text, col_width), t.selector_cell(under_cursor, active))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn pad_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

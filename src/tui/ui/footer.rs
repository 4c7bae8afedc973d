use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::{theme, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    if let Some(prompt) = &app.confirm_prompt {
        render_confirm_prompt(frame, app, area, prompt, t);
    } else {
        render_status_and_hints(frame, app, area, t);
    }
}

fn render_confirm_prompt(frame: &mut Frame, app: &App, area: Rect, prompt: &str, t: &Theme) {
    let lines = vec![
        Line::styled(format!("Status: {}", app.status), t.status_message()),
        Line::from(vec![
            Span::styled(format!("CONFIRM: {} ", prompt), t.confirm_prompt()),
            Span::styled("[", t.text_muted()),
            Span::styled("y", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Enter", t.key_hint()),
            Span::styled(":yes  ", t.text_muted()),
            Span::styled("[", t.text_muted()),
            Span::styled("n", t.key_hint()),
            Span::styled("/", t.text_muted()),
            Span::styled("Esc", t.key_hint()),
            Span::styled(":no]", t.text_muted()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_and_hints(frame: &mut Frame, app: &App, area: Rect, t: &Theme) {
    // Context-sensitive first line based on focused pane
    let line1 = match app.focused_pane {
        Pane::Input => Line::from(vec![
            Span::styled(format!("Status: {} ~ ", app.status), t.status_message()),
            Span::styled("Esc", t.key_hint()),
            Span::styled(" to pick a conversion", t.text_muted()),
        ]),
        Pane::Conversions => {
            let selector = app.selected();
            Line::from(vec![
                Span::styled(format!("{} ", selector.label()), t.text_primary().add_modifier(Modifier::BOLD)),
                Span::styled(format!("({}) ~ ", selector.name()), t.text_muted()),
                Span::styled("Enter", t.key_hint()),
                Span::styled(" to convert  ", t.text_muted()),
                Span::styled(format!("Status: {}", app.status), t.status_message()),
            ])
        }
        Pane::Output => Line::from(vec![
            Span::styled(format!("Output ~ {} lines  ", app.output_line_count()), t.text_muted()),
            Span::styled(format!("Status: {}", app.status), t.status_message()),
        ]),
    };

    let pane_style = |pane: Pane| {
        if app.focused_pane == pane {
            t.key_hint()
        } else {
            t.text_muted()
        }
    };

    let line2 = Line::from(vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":", t.text_muted()),
        Span::styled("Input", pane_style(Pane::Input)),
        Span::styled(" ", t.text_muted()),
        Span::styled("Conversions", pane_style(Pane::Conversions)),
        Span::styled(" ", t.text_muted()),
        Span::styled("Output", pane_style(Pane::Output)),
        Span::styled("  ", t.text_muted()),
        Span::styled("ctrl-s", t.key_hint()),
        Span::styled(":save  ", t.text_muted()),
        Span::styled("ctrl-y", t.key_hint()),
        Span::styled(":copy  ", t.text_muted()),
        Span::styled("ctrl-r", t.key_hint()),
        Span::styled(":reset  ", t.text_muted()),
        Span::styled("ctrl-q", t.key_hint()),
        Span::styled(":quit", t.text_muted()),
    ]);

    frame.render_widget(Paragraph::new(vec![line1, line2]), area);
}

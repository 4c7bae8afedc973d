use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let display_path = app.save_path.display().to_string();
    let path_display = if display_path.chars().count() > 45 {
        let tail: String = display_path
            .chars()
            .rev()
            .take(42)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    } else {
        display_path
    };

    let badge = match app.active {
        Some(selector) => selector.label().to_uppercase(),
        None => "NO CONVERSION".to_string(),
    };

    let mut spans = vec![
        // App name
        Span::styled("recase ", t.app_title()),
        // Active conversion badge
        Span::styled(format!("[{}] ", badge), t.active_badge(app.active.is_some())),
        // Export target
        Span::styled(format!("save: {}", path_display), t.text_muted()),
    ];
    if app.settings.live() {
        spans.push(Span::styled("  live", t.status_message()));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled("ctrl-q:quit", t.key_hint()));

    let header = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);

    frame.render_widget(header, area);
}

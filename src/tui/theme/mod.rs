mod palette;

use ratatui::prelude::*;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    // Panel border style
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    // App name in the header
    pub fn app_title(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    // Primary text
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Secondary/dimmed text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // Muted text (hints, labels)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Title style for focused panel
    pub fn title_focused(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Title style for unfocused panel
    pub fn title_unfocused(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Converted text
    pub fn output_text(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Dots and dashes read better in the secondary accent
    pub fn morse_text(&self) -> Style {
        Style::default().fg(self.palette.accent_secondary)
    }

    // Statistic numbers
    pub fn stat_value(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Conversion cell: cursor beats active, active beats plain
    pub fn selector_cell(&self, under_cursor: bool, active: bool) -> Style {
        if under_cursor {
            Style::default()
                .fg(self.palette.selection_fg)
                .bg(self.palette.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else if active {
            Style::default()
                .fg(self.palette.accent_secondary)
                .bg(self.palette.active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            self.text_secondary()
        }
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Confirm prompt style
    pub fn confirm_prompt(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_danger)
            .add_modifier(Modifier::BOLD)
    }

    // Status message style
    pub fn status_message(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }

    // Badge for the active conversion in the header
    pub fn active_badge(&self, active: bool) -> Style {
        let bg = if active {
            self.palette.accent_success
        } else {
            self.palette.accent_warning
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    // Panel title with optional focus indicator
    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        if focused {
            Line::styled(format!(" {} ", title), self.title_focused())
        } else {
            Line::styled(format!(" {} ", title), self.title_unfocused())
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}

use std::io;
use std::path::PathBuf;

use recase_core::{compute_stats, save_text_atomic, transform, Selector, Settings, TextStats};

use super::clipboard::{ClipboardProvider, SystemClipboard};

/// Number of columns in the conversions grid
pub const GRID_COLUMNS: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Input,
    Conversions,
    Output,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PendingAction {
    Reset,
}

pub struct App {
    pub focused_pane: Pane,
    pub input: String,
    pub output: String,
    pub stats: TextStats,
    pub selector_index: usize,
    /// Conversion that produced the current output
    pub active: Option<Selector>,
    pub settings: Settings,
    pub save_path: PathBuf,
    pub status: String,
    pub output_scroll: usize,
    pub confirm_prompt: Option<String>,
    pub pending_action: Option<PendingAction>,
    pub clipboard: Box<dyn ClipboardProvider>,
}

impl App {
    pub fn new() -> io::Result<Self> {
        let settings = Settings::load_default()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let save_path = PathBuf::from(settings.file_name());
        Ok(Self::with_settings(settings, save_path)
            .with_clipboard(Box::new(SystemClipboard::detect())))
    }

    pub fn with_settings(settings: Settings, save_path: PathBuf) -> Self {
        let selector_index = settings.default_selector().map(Selector::index).unwrap_or(0);

        Self {
            focused_pane: Pane::Input,
            input: String::new(),
            output: String::new(),
            stats: TextStats::default(),
            selector_index,
            active: None,
            settings,
            save_path,
            status: "Ready".to_string(),
            output_scroll: 0,
            confirm_prompt: None,
            pending_action: None,
            clipboard: Box::new(SystemClipboard::None),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardProvider>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn selected(&self) -> Selector {
        Selector::ALL[self.selector_index.min(Selector::ALL.len() - 1)]
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    pub fn start_confirm<S: Into<String>>(&mut self, prompt: S, action: PendingAction) {
        self.confirm_prompt = Some(prompt.into());
        self.pending_action = Some(action);
    }

    pub fn clear_confirm(&mut self) {
        self.confirm_prompt = None;
        self.pending_action = None;
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.input_changed();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.input_changed();
        }
    }

    fn input_changed(&mut self) {
        self.stats = compute_stats(&self.input);
        if self.settings.live() {
            if let Some(selector) = self.active {
                self.output = transform(&self.input, selector);
            }
        }
    }

    /// Apply the conversion under the grid cursor
    pub fn apply_selected(&mut self) {
        self.apply(self.selected());
    }

    pub fn apply(&mut self, selector: Selector) {
        self.output = transform(&self.input, selector);
        self.active = Some(selector);
        self.selector_index = selector.index();
        self.output_scroll = 0;
        self.set_status(format!("Converted to {}", selector.label()));
    }

    /// Clear input, output and the active conversion
    pub fn reset(&mut self) {
        self.input.clear();
        self.output.clear();
        self.active = None;
        self.stats = TextStats::default();
        self.output_scroll = 0;
        self.set_status("Reset");
    }

    pub fn save_output(&mut self) {
        if self.output.is_empty() {
            self.set_status("Nothing to save");
            return;
        }
        match save_text_atomic(&self.save_path, &self.output) {
            Ok(()) => self.set_status(format!("Saved {}", self.save_path.display())),
            Err(err) => {
                log::warn!("failed to save {}: {}", self.save_path.display(), err);
                self.set_status(format!("Save failed: {}", err));
            }
        }
    }

    pub fn copy_output(&mut self) {
        if self.output.is_empty() {
            self.set_status("Nothing to copy");
            return;
        }
        match self.clipboard.set_contents(&self.output) {
            Ok(()) => {
                let msg = format!("Copied to clipboard ({})", self.clipboard.name());
                self.set_status(msg);
            }
            Err(err) => {
                log::warn!("clipboard copy failed: {}", err);
                self.set_status(format!("Copy failed: {}", err));
            }
        }
    }

    pub fn move_selection(&mut self, d_col: isize, d_row: isize) {
        let len = Selector::ALL.len() as isize;
        let cols = GRID_COLUMNS as isize;
        let current = self.selector_index as isize;

        let next = if d_row != 0 {
            current + d_row * cols
        } else {
            let row_start = current - current % cols;
            let col = current % cols + d_col;
            if col < 0 || col >= cols {
                current
            } else {
                row_start + col
            }
        };

        if (0..len).contains(&next) {
            self.selector_index = next as usize;
        }
    }

    pub fn output_line_count(&self) -> usize {
        self.output.lines().count()
    }

    pub fn scroll_output(&mut self, delta: isize) {
        let max = self.output_line_count().saturating_sub(1);
        self.output_scroll = if delta < 0 {
            self.output_scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.output_scroll.saturating_add(delta as usize).min(max)
        };
    }

    pub fn cycle_pane_forward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Conversions,
            Pane::Conversions => Pane::Output,
            Pane::Output => Pane::Input,
        };
    }

    pub fn cycle_pane_backward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Output,
            Pane::Conversions => Pane::Input,
            Pane::Output => Pane::Conversions,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::clipboard::{self, ClipboardError};
    use std::borrow::Cow;
    use std::fs;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingClipboard(Arc<Mutex<Vec<String>>>);

    impl ClipboardProvider for RecordingClipboard {
        fn name(&self) -> Cow<'_, str> {
            Cow::Borrowed("recording")
        }

        fn set_contents(&self, content: &str) -> clipboard::Result<()> {
            self.0.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }

    fn app() -> App {
        App::with_settings(Settings::new(), PathBuf::from("converted-text.txt"))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn test_typing_updates_stats() {
        let mut app = app();
        type_text(&mut app, "Hello world. Bye!");
        assert_eq!(app.stats.word_count, 3);
        assert_eq!(app.stats.sentence_count, 2);

        app.backspace();
        assert_eq!(app.input, "Hello world. Bye");
        assert_eq!(app.stats.character_count, 16);
    }

    #[test]
    fn test_apply_sets_output_and_active() {
        let mut app = app();
        type_text(&mut app, "hello world");
        app.apply(Selector::Title);

        assert_eq!(app.output, "Hello World");
        assert_eq!(app.active, Some(Selector::Title));
        assert_eq!(app.selected(), Selector::Title);
    }

    #[test]
    fn test_output_is_stale_without_live_mode() {
        let mut app = app();
        type_text(&mut app, "abc");
        app.apply(Selector::Upper);
        app.insert_char('d');
        assert_eq!(app.output, "ABC");
    }

    #[test]
    fn test_live_mode_reapplies_active_conversion() {
        let mut settings = Settings::new();
        settings.set_live(true);
        let mut app = App::with_settings(settings, PathBuf::from("out.txt"));

        type_text(&mut app, "so");
        app.apply(Selector::Morse);
        app.insert_char('s');
        assert_eq!(app.output, "... --- ...");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = app();
        type_text(&mut app, "some text");
        app.apply(Selector::Snake);
        app.reset();

        assert!(app.input.is_empty());
        assert!(app.output.is_empty());
        assert_eq!(app.active, None);
        assert!(app.stats.is_empty());
    }

    #[test]
    fn test_default_selector_positions_cursor() {
        let mut settings = Settings::new();
        settings.set_default_selector(Some(Selector::Kebab));
        let app = App::with_settings(settings, PathBuf::from("out.txt"));
        assert_eq!(app.selected(), Selector::Kebab);
    }

    #[test]
    fn test_grid_navigation() {
        let mut app = app();
        assert_eq!(app.selected(), Selector::Upper);

        app.move_selection(1, 0);
        assert_eq!(app.selected(), Selector::Lower);
        app.move_selection(0, 1);
        assert_eq!(app.selected(), Selector::Snake);
        app.move_selection(-1, 0);
        assert_eq!(app.selected(), Selector::Camel);
        // left edge of a row stays put
        app.move_selection(-1, 0);
        assert_eq!(app.selected(), Selector::Camel);
    }

    #[test]
    fn test_grid_navigation_stays_in_bounds() {
        let mut app = app();
        app.move_selection(0, -1);
        assert_eq!(app.selector_index, 0);

        app.selector_index = Selector::ALL.len() - 1;
        app.move_selection(1, 0);
        assert_eq!(app.selected(), Selector::MorseDecode);
        app.move_selection(0, 1);
        assert_eq!(app.selected(), Selector::MorseDecode);
    }

    #[test]
    fn test_save_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("converted-text.txt");
        let mut app = App::with_settings(Settings::new(), path.clone());

        app.save_output();
        assert_eq!(app.status, "Nothing to save");
        assert!(!path.exists());

        type_text(&mut app, "sos");
        app.apply(Selector::Morse);
        app.save_output();
        assert_eq!(fs::read_to_string(&path).unwrap(), "... --- ...");
    }

    #[test]
    fn test_pane_cycling() {
        let mut app = app();
        assert_eq!(app.focused_pane, Pane::Input);
        app.cycle_pane_forward();
        assert_eq!(app.focused_pane, Pane::Conversions);
        app.cycle_pane_backward();
        app.cycle_pane_backward();
        assert_eq!(app.focused_pane, Pane::Output);
    }

    #[test]
    fn test_output_scroll_is_clamped() {
        let mut app = app();
        type_text(&mut app, "a");
        app.insert_newline();
        type_text(&mut app, "b");
        app.apply(Selector::Upper);

        app.scroll_output(5);
        assert_eq!(app.output_scroll, 1);
        app.scroll_output(-3);
        assert_eq!(app.output_scroll, 0);
    }

    #[test]
    fn test_copy_output_to_clipboard() {
        let recorded = RecordingClipboard::default();
        let mut app = app().with_clipboard(Box::new(recorded.clone()));

        app.copy_output();
        assert_eq!(app.status, "Nothing to copy");
        assert!(recorded.0.lock().unwrap().is_empty());

        type_text(&mut app, "hello world");
        app.apply(Selector::Kebab);
        app.copy_output();

        assert_eq!(*recorded.0.lock().unwrap(), vec!["hello-world".to_string()]);
        assert_eq!(app.status, "Copied to clipboard (recording)");
    }

    #[test]
    fn test_copy_without_clipboard_reports_failure() {
        let mut app = app();
        type_text(&mut app, "x");
        app.apply(Selector::Upper);
        app.copy_output();

        assert!(app.status.starts_with("Copy failed"));
        assert!(matches!(
            app.clipboard.set_contents("x"),
            Err(ClipboardError::Unavailable)
        ));
    }
}

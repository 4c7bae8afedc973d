use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Pane, PendingAction};

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if app.confirm_prompt.is_some() {
        return handle_confirmation(app, key.code);
    }

    // Control chords work in every pane, including while typing
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => return Ok(true),
            KeyCode::Char('s') => app.save_output(),
            KeyCode::Char('y') => app.copy_output(),
            KeyCode::Char('r') => request_reset(app),
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Tab => {
            app.cycle_pane_forward();
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.cycle_pane_backward();
            return Ok(false);
        }
        _ => {}
    }

    if app.focused_pane == Pane::Input {
        handle_input_pane(app, key.code);
        return Ok(false);
    }

    // Single-letter shortcuts outside the editor
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('1') => app.focused_pane = Pane::Input,
        KeyCode::Char('2') => app.focused_pane = Pane::Conversions,
        KeyCode::Char('3') => app.focused_pane = Pane::Output,
        KeyCode::Char('s') => app.save_output(),
        KeyCode::Char('y') => app.copy_output(),
        KeyCode::Char('r') => request_reset(app),
        _ => handle_pane_input(app, key.code),
    }

    Ok(false)
}

fn request_reset(app: &mut App) {
    app.start_confirm("Clear input and output?", PendingAction::Reset);
}

fn handle_confirmation(app: &mut App, key: KeyCode) -> io::Result<bool> {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(action) = app.pending_action.take() {
                app.clear_confirm();
                match action {
                    PendingAction::Reset => app.reset(),
                }
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.set_status("Cancelled");
            app.clear_confirm();
        }
        _ => {}
    }
    Ok(false)
}

fn handle_input_pane(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.insert_char(c),
        KeyCode::Enter => app.insert_newline(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Esc => app.focused_pane = Pane::Conversions,
        _ => {}
    }
}

fn handle_pane_input(app: &mut App, key: KeyCode) {
    match app.focused_pane {
        Pane::Input => {}
        Pane::Conversions => handle_conversions_input(app, key),
        Pane::Output => handle_output_input(app, key),
    }
}

fn handle_conversions_input(app: &mut App, key: KeyCode) {
    // Conversions are a grid, arrows move in both directions
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.apply_selected(),
        KeyCode::Esc => app.focused_pane = Pane::Input,
        _ => {}
    }
}

fn handle_output_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_output(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_output(1),
        KeyCode::PageUp => app.scroll_output(-10),
        KeyCode::PageDown => app.scroll_output(10),
        KeyCode::Esc => app.focused_pane = Pane::Input,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use recase_core::{Selector, Settings};

    use super::*;
    use crate::tui::clipboard::{self, ClipboardProvider};

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

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn ctrl(app: &mut App, c: char) -> bool {
        handle_input(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap()
    }

    #[test]
    fn test_letters_are_typed_in_input_pane() {
        let mut app = app();
        for c in "quit 123".chars() {
            assert!(!press(&mut app, KeyCode::Char(c)));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input, "quit 123\n");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "quit 123");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(ctrl(&mut app, 'q'));
        assert!(ctrl(&mut app, 'c'));

        app.focused_pane = Pane::Conversions;
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_apply_from_grid() {
        let mut app = app();
        for c in "hello world".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focused_pane, Pane::Conversions);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active, Some(Selector::Title));
        assert_eq!(app.output, "Hello World");
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        ctrl(&mut app, 'r');
        assert!(app.confirm_prompt.is_some());

        press(&mut app, KeyCode::Char('n'));
        assert!(app.confirm_prompt.is_none());
        assert_eq!(app.input, "x");

        ctrl(&mut app, 'r');
        press(&mut app, KeyCode::Char('y'));
        assert!(app.input.is_empty());
        assert_eq!(app.pending_action, None);
    }

    #[test]
    fn test_number_keys_jump_between_panes() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.focused_pane, Pane::Output);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.focused_pane, Pane::Input);
    }

    #[test]
    fn test_copy_keys() {
        let recorded = RecordingClipboard::default();
        let mut app = app().with_clipboard(Box::new(recorded.clone()));
        for c in "sos".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        app.apply(Selector::Morse);

        // plain 'y' is typed while editing, ctrl-y copies
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.input, "sosy");
        assert!(recorded.0.lock().unwrap().is_empty());
        ctrl(&mut app, 'y');
        assert_eq!(*recorded.0.lock().unwrap(), vec!["... --- ...".to_string()]);

        app.focused_pane = Pane::Output;
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(recorded.0.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_y_confirms_instead_of_copying_during_prompt() {
        let recorded = RecordingClipboard::default();
        let mut app = app().with_clipboard(Box::new(recorded.clone()));
        press(&mut app, KeyCode::Char('x'));
        app.apply(Selector::Upper);
        app.focused_pane = Pane::Conversions;

        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('y'));

        assert!(app.output.is_empty());
        assert!(recorded.0.lock().unwrap().is_empty());
    }
}

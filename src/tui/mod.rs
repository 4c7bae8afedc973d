mod app;
mod clipboard;
mod handlers;
mod theme;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use recase_core::Settings;

use app::App;
use handlers::handle_input;
use ui::draw_ui;

/// Environment variable that enables file logging (it holds the filter, e.g. `debug`)
const LOG_ENV: &str = "RECASE_LOG";

pub fn run() -> io::Result<()> {
    init_logging();

    let mut app = App::new()?;
    log::debug!("starting recase-tui, saving to {}", app.save_path.display());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = loop {
        if let Err(err) = terminal.draw(|f| draw_ui(f, &app)) {
            break Err(err);
        }

        if !event::poll(std::time::Duration::from_millis(200))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if handle_input(&mut app, key)? {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// The terminal belongs to the UI, so logs only go to a file, and only on request
fn init_logging() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }
    let Some(dir) = Settings::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("recase-tui.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter(LOG_ENV))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

// Recase TUI
// Interactive terminal front end for the text converter

#[path = "../tui/mod.rs"]
mod tui;

fn main() -> std::io::Result<()> {
    tui::run()
}

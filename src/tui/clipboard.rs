// Recase TUI Clipboard
// Copying output through the platform's clipboard command

use std::borrow::Cow;
use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("clipboard command `{0}` exited unsuccessfully")]
    CommandFailed(&'static str),
    #[error("failed to write to the stdin of `{0}`")]
    StdinWriteFailed(&'static str),
    #[error("no clipboard command found (install wl-copy, xclip, xsel or pbcopy)")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardProvider {
    fn name(&self) -> Cow<'_, str>;
    fn set_contents(&self, content: &str) -> Result<()>;
}

/// Program and arguments that read the new clipboard contents from stdin
struct CopyCommand {
    program: &'static str,
    args: &'static [&'static str],
}

const PASTEBOARD: CopyCommand = CopyCommand { program: "pbcopy", args: &[] };
const WL_CLIPBOARD: CopyCommand = CopyCommand {
    program: "wl-copy",
    args: &["--type", "text/plain"],
};
const XCLIP: CopyCommand = CopyCommand {
    program: "xclip",
    args: &["-i", "-selection", "clipboard"],
};
const XSEL: CopyCommand = CopyCommand { program: "xsel", args: &["-i", "-b"] };
const TERMUX: CopyCommand = CopyCommand {
    program: "termux-clipboard-set",
    args: &[],
};
const TMUX: CopyCommand = CopyCommand {
    program: "tmux",
    args: &["load-buffer", "-w", "-"],
};
const WIN32: CopyCommand = CopyCommand {
    program: "win32yank.exe",
    args: &["-i", "--crlf"],
};

/// Clipboard backed by whichever copy command the environment offers
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SystemClipboard {
    Pasteboard,
    Wayland,
    XClip,
    XSel,
    Termux,
    Tmux,
    Win32Yank,
    None,
}

impl SystemClipboard {
    pub fn detect() -> Self {
        let detected = Self::detect_with(|name| env::var_os(name).is_some(), binary_exists);
        log::debug!("clipboard provider: {}", detected.name());
        detected
    }

    fn detect_with(env_set: impl Fn(&str) -> bool, has_binary: impl Fn(&str) -> bool) -> Self {
        if cfg!(target_os = "macos") && has_binary("pbcopy") {
            Self::Pasteboard
        } else if env_set("WAYLAND_DISPLAY") && has_binary("wl-copy") {
            Self::Wayland
        } else if env_set("DISPLAY") && has_binary("xclip") {
            Self::XClip
        } else if env_set("DISPLAY") && has_binary("xsel") {
            Self::XSel
        } else if has_binary("termux-clipboard-set") {
            Self::Termux
        } else if env_set("TMUX") && has_binary("tmux") {
            Self::Tmux
        } else if has_binary("win32yank.exe") {
            Self::Win32Yank
        } else {
            Self::None
        }
    }

    fn command(self) -> Option<&'static CopyCommand> {
        match self {
            Self::Pasteboard => Some(&PASTEBOARD),
            Self::Wayland => Some(&WL_CLIPBOARD),
            Self::XClip => Some(&XCLIP),
            Self::XSel => Some(&XSEL),
            Self::Termux => Some(&TERMUX),
            Self::Tmux => Some(&TMUX),
            Self::Win32Yank => Some(&WIN32),
            Self::None => None,
        }
    }
}

impl ClipboardProvider for SystemClipboard {
    fn name(&self) -> Cow<'_, str> {
        match self.command() {
            Some(cmd) => Cow::Borrowed(cmd.program),
            None => Cow::Borrowed("none"),
        }
    }

    fn set_contents(&self, content: &str) -> Result<()> {
        let cmd = self.command().ok_or(ClipboardError::Unavailable)?;
        execute_command(cmd, content)
    }
}

fn binary_exists(name: &str) -> bool {
    which::which(name).is_ok()
}

fn execute_command(cmd: &CopyCommand, input: &str) -> Result<()> {
    let mut child = Command::new(cmd.program)
        .args(cmd.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or(ClipboardError::StdinWriteFailed(cmd.program))?;
    stdin
        .write_all(input.as_bytes())
        .map_err(|_| ClipboardError::StdinWriteFailed(cmd.program))?;
    // close stdin so the command sees end of input
    drop(stdin);

    let status = child.wait()?;
    if !status.success() {
        return Err(ClipboardError::CommandFailed(cmd.program));
    }
    Ok(())
}

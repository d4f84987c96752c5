//! Terminal detection.

use std::io::IsTerminal;

/// Check if stdout is a TTY.
#[must_use]
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if stderr is a TTY.
#[must_use]
pub fn stderr_is_tty() -> bool {
    std::io::stderr().is_terminal()
}

/// Whether stdout output should be colored.
///
/// `no_color` is the already-resolved setting (flag, `NO_COLOR`, config).
#[must_use]
pub fn should_use_color(no_color: bool) -> bool {
    if no_color {
        return false;
    }
    if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
        return false;
    }
    stdout_is_tty()
}

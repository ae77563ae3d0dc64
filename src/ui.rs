use std::io::IsTerminal;

/// ANSI color codes
pub struct Colors;

impl Colors {
    pub const RED: &'static str = "\x1b[31m";
    pub const RESET: &'static str = "\x1b[0m";
}

/// Wrap text in a color, or leave it plain when not writing to a terminal
#[must_use]
pub fn paint(text: &str, color: &str, is_terminal: bool) -> String {
    if is_terminal {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Print colored text to stderr
pub fn eprint_colored(text: &str, color: &str) {
    eprintln!("{}", paint(text, color, std::io::stderr().is_terminal()));
}

/// Print error message
pub fn print_error(text: &str) {
    eprint_colored(text, Colors::RED);
}

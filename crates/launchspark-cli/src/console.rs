//! Terminal output: ANSI styling and the console notifier.

use launchspark_core::Notifier;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Emits ANSI codes only when color is enabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(self, code: &'static str) -> &'static str {
        if self.color { code } else { "" }
    }
}

/// Prints success to stdout and failure to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    palette: Palette,
}

impl ConsoleNotifier {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        let p = self.palette;
        println!(
            "{}{}✓{} {message}",
            p.paint(GREEN),
            p.paint(BOLD),
            p.paint(RESET)
        );
    }

    fn failure(&self, message: &str) {
        let p = self.palette;
        eprintln!(
            "{}{}✗{} {message}",
            p.paint(RED),
            p.paint(BOLD),
            p.paint(RESET)
        );
    }
}

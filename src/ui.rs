/// User interface and status output utilities
///
/// This module handles:
/// - Colored error output on stderr
/// - The success confirmation line on stdout

use std::io::Write;
use std::path::Path;

/// Print colored text to stderr, with fallback to plain text
fn eprint_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

/// Print an error message with colored "error" prefix to stderr
pub fn print_error(msg: &str) {
    eprint_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}

/// Print the single confirmation line for a written report
pub fn print_generated(path: &Path) {
    println!("Markdown report generated at: {}", path.display());
}

//! Console output with a global quiet switch.
//!
//! Informational output and warnings are suppressed when quiet mode is
//! enabled (`--quiet`); errors always print.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use console::style;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable or disable quiet mode for the whole process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print an informational message to stdout unless quiet.
pub fn info(message: impl Display) {
    if !is_quiet() {
        println!("{}", message);
    }
}

/// Print a yellow warning to stderr unless quiet.
pub fn warn(message: impl Display) {
    if !is_quiet() {
        eprintln!("{}", style(format!("warning: {}", message)).yellow());
    }
}

/// Print a red error to stderr. Never suppressed.
pub fn error(message: impl Display) {
    eprintln!("{}", style(format!("error: {}", message)).red());
}

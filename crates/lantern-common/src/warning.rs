//! Container warnings with colored terminal output.
//!
//! Provides deduplication so that a problem hit on every paint pass (a
//! missing pixmap, an unsupported repeat mode) is reported once rather than
//! once per frame.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable problem (prints once per unique message).
///
/// Returns `true` if this call printed the warning, `false` if the same
/// component/message pair was already reported.
///
/// # Example
/// ```ignore
/// warn_once("background", "pixmap not loaded for 'https://x.test/a.png'");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Lantern {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Clear all recorded warnings (call when loading a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

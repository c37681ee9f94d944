//! Testing utilities for bolt
//!
//! Fixture directories for listing tests and a guard for the global color
//! override. Only compiled with `cfg(test)`.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Temporary directory holding `a.txt` (10 bytes), `.hidden` (5 bytes)
/// and `b.log` (20 bytes).
///
/// # Panics
/// Panics if the fixture cannot be created.
pub fn sample_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(dir.path(), "a.txt", 10);
    write_file(dir.path(), ".hidden", 5);
    write_file(dir.path(), "b.log", 20);
    dir
}

/// Create `name` in `dir` with `len` bytes of content.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, len: usize) {
    fs::write(dir.join(name), vec![b'x'; len]).expect("Failed to write fixture file");
}

/// Set the modification time of `path` to `secs` after the epoch.
///
/// # Panics
/// Panics if the file cannot be opened or updated.
pub fn set_modified(path: &Path, secs: u64) {
    let file = fs::File::options()
        .write(true)
        .open(path)
        .expect("Failed to open fixture file");
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("Failed to set modification time");
}

/// Tag identifier of `name` inside `dir`.
///
/// # Panics
/// Panics if `dir` cannot be canonicalized.
pub fn tag_id(dir: &Path, name: &str) -> String {
    crate::tags::identifier_for(&dir.join(name)).expect("Failed to resolve identifier")
}

static COLOR_OVERRIDE: Mutex<()> = Mutex::new(());

/// Serialize tests that change `colored`'s process-wide override.
///
/// The override is cleared when the guard is taken; callers unset it again
/// before dropping the guard.
pub fn color_override_guard() -> MutexGuard<'static, ()> {
    let guard = COLOR_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
    colored::control::unset_override();
    guard
}

//! Console sink contract and scoped display-state restoration.

use crate::toggles::{DisplayLevel, ErrorMode, WaitMode};

/// Line-oriented output sink with three mutable display modes.
///
/// The engine is single-threaded; implementations hold the modes with
/// interior mutability so a shared `&dyn Console` can travel through the
/// call chain. Implementations are expected to suppress output according to
/// the current modes: `Silent` drops all regular lines, `Compact` drops
/// title lines, and `NoErrors` drops error lines.
pub trait Console {
    fn display_level(&self) -> DisplayLevel;
    fn set_display_level(&self, level: DisplayLevel);

    fn error_mode(&self) -> ErrorMode;
    fn set_error_mode(&self, mode: ErrorMode);

    fn wait_mode(&self) -> WaitMode;
    fn set_wait_mode(&self, mode: WaitMode);

    fn write_title(&self, text: &str);
    fn write_success(&self, text: &str);
    fn write_info(&self, text: &str);
    fn write_error(&self, text: &str);
}

/// Restores display level and error mode when dropped.
///
/// Every scope that may override console state (a single command, a command
/// file, a nested file item) snapshots on entry and restores on exit, error
/// paths included, so a child's toggle override never outlives the child.
/// Wait mode is excluded: it governs post-process behavior and is allowed
/// to persist.
pub struct DisplayScope<'a> {
    console: &'a dyn Console,
    display_level: DisplayLevel,
    error_mode: ErrorMode,
}

impl<'a> DisplayScope<'a> {
    pub fn snapshot(console: &'a dyn Console) -> Self {
        Self {
            console,
            display_level: console.display_level(),
            error_mode: console.error_mode(),
        }
    }
}

impl Drop for DisplayScope<'_> {
    fn drop(&mut self) {
        self.console.set_display_level(self.display_level);
        self.console.set_error_mode(self.error_mode);
    }
}

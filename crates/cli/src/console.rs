//! Terminal implementation of the console sink.

use std::cell::Cell;

use crossterm::style::Stylize;
use paycmd_core::console::Console;
use paycmd_core::toggles::{DisplayLevel, ErrorMode, WaitMode};

/// Colored, mode-aware console writing to stdout/stderr.
///
/// Display modes live in `Cell`s: the engine is single-threaded and passes
/// the console by shared reference through every execution scope.
pub struct TermConsole {
    display_level: Cell<DisplayLevel>,
    error_mode: Cell<ErrorMode>,
    wait_mode: Cell<WaitMode>,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            display_level: Cell::new(DisplayLevel::Full),
            error_mode: Cell::new(ErrorMode::Errors),
            wait_mode: Cell::new(WaitMode::NoWait),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn display_level(&self) -> DisplayLevel {
        self.display_level.get()
    }

    fn set_display_level(&self, level: DisplayLevel) {
        self.display_level.set(level);
    }

    fn error_mode(&self) -> ErrorMode {
        self.error_mode.get()
    }

    fn set_error_mode(&self, mode: ErrorMode) {
        self.error_mode.set(mode);
    }

    fn wait_mode(&self) -> WaitMode {
        self.wait_mode.get()
    }

    fn set_wait_mode(&self, mode: WaitMode) {
        self.wait_mode.set(mode);
    }

    fn write_title(&self, text: &str) {
        if self.display_level.get() == DisplayLevel::Full {
            println!("{}", text.bold());
        }
    }

    fn write_success(&self, text: &str) {
        if self.display_level.get() != DisplayLevel::Silent {
            println!("{}", text.green());
        }
    }

    fn write_info(&self, text: &str) {
        if self.display_level.get() != DisplayLevel::Silent {
            println!("{text}");
        }
    }

    fn write_error(&self, text: &str) {
        if self.error_mode.get() == ErrorMode::Errors {
            eprintln!("{}", text.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes() {
        let console = TermConsole::new();
        assert_eq!(console.display_level(), DisplayLevel::Full);
        assert_eq!(console.error_mode(), ErrorMode::Errors);
        assert_eq!(console.wait_mode(), WaitMode::NoWait);
    }

    #[test]
    fn test_modes_are_mutable_through_shared_reference() {
        let console = TermConsole::new();
        let shared: &dyn Console = &console;

        shared.set_display_level(DisplayLevel::Silent);
        shared.set_error_mode(ErrorMode::NoErrors);
        shared.set_wait_mode(WaitMode::WaitError);

        assert_eq!(shared.display_level(), DisplayLevel::Silent);
        assert_eq!(shared.error_mode(), ErrorMode::NoErrors);
        assert_eq!(shared.wait_mode(), WaitMode::WaitError);
    }
}

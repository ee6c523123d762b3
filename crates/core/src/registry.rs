//! Case-insensitive command registry.

use indexmap::IndexMap;

use crate::command::Command;
use crate::error::{Error, Result};

/// Maps command names to implementations.
///
/// Commands are registered explicitly, once, at startup; lookups are
/// case-insensitive. Iteration preserves registration order so help output
/// stays stable.
#[derive(Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under its own name.
    ///
    /// # Errors
    ///
    /// Returns an error when another command already holds the same
    /// case-insensitive name.
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<()> {
        let key = command.name().to_lowercase();
        if self.commands.contains_key(&key) {
            return Err(Error::DuplicateCommand(command.name().to_string()));
        }
        self.commands.insert(key, command);
        Ok(())
    }

    /// Case-insensitive lookup; `None` on miss. Callers decide whether a
    /// missing command is fatal.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(&name.to_lowercase()).map(Box::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    /// All commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::ArgumentVector;
    use crate::command::{CommandParameters, ExecutionContext};
    use crate::console::Console;
    use crate::exit_codes;
    use std::any::Any;

    struct NoParameters;

    impl CommandParameters for NoParameters {
        fn validate(&self) -> Option<String> {
            None
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct NamedCommand {
        name: &'static str,
    }

    impl Command for NamedCommand {
        fn name(&self) -> &'static str {
            self.name
        }

        fn parameters(&self, _args: &ArgumentVector) -> Box<dyn CommandParameters> {
            Box::new(NoParameters)
        }

        fn execute(
            &self,
            _context: &ExecutionContext<'_>,
            _parameters: &dyn CommandParameters,
        ) -> Result<i32> {
            Ok(exit_codes::SUCCESS)
        }

        fn show_help(&self, _console: &dyn Console) {}
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Box::new(NamedCommand { name: "PayrollReport" }))
            .unwrap();

        assert!(registry.get("payrollreport").is_some());
        assert!(registry.get("PAYROLLREPORT").is_some());
        assert!(registry.get("payroll").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Box::new(NamedCommand { name: "Report" }))
            .unwrap();

        let result = registry.register(Box::new(NamedCommand { name: "report" }));
        assert!(matches!(result, Err(Error::DuplicateCommand(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_keeps_registration_order() {
        let mut registry = CommandRegistry::new();
        for name in ["Third", "First", "Second"] {
            registry.register(Box::new(NamedCommand { name })).unwrap();
        }

        let names: Vec<&str> = registry.commands().map(Command::name).collect();
        assert_eq!(names, vec!["Third", "First", "Second"]);
    }
}

//! Single-command execution: validate, apply toggles, invoke, restore.

use log::{debug, error};

use crate::arguments::ArgumentVector;
use crate::command::{Command, CommandParameters, ExecutionContext};
use crate::config::Connection;
use crate::console::{Console, DisplayScope};
use crate::error::innermost_message;
use crate::exit_codes;
use crate::registry::CommandRegistry;
use crate::toggles::{DisplayLevel, ErrorMode, Toggle, ToggleGroup, WaitMode};

/// Checks one invocation ahead of execution.
///
/// Argument order, unknown toggles (against the global console groups, the
/// bundle's own groups, and any `extra_groups` from the caller), ambiguous
/// toggles, and finally the bundle's own validation probe. Returns `None`
/// when the invocation is acceptable, a message otherwise. Validation
/// failures are a first-class outcome, not errors.
pub fn validate_arguments(
    parameters: &dyn CommandParameters,
    args: &ArgumentVector,
    extra_groups: &[&'static ToggleGroup],
) -> Option<String> {
    if !args.is_valid_order() {
        return Some("Toggles must follow all positional and named arguments".to_string());
    }

    let mut groups: Vec<&'static ToggleGroup> = vec![
        DisplayLevel::group(),
        ErrorMode::group(),
        WaitMode::group(),
    ];
    groups.extend(parameters.toggle_groups());
    groups.extend(extra_groups);

    if let Some(unknown) = args.test_unknown_toggles(&groups) {
        return Some(format!("Unknown toggle: `{unknown}`"));
    }
    if let Some(group) = args.test_multiple_toggles(&groups) {
        return Some(format!("Multiple {group} toggles"));
    }

    parameters.validate()
}

/// Runs registered commands one invocation at a time.
pub struct CommandExecutor<'a> {
    registry: &'a CommandRegistry,
    console: &'a dyn Console,
    connection: Option<&'a Connection>,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(
        registry: &'a CommandRegistry,
        console: &'a dyn Console,
        connection: Option<&'a Connection>,
    ) -> Self {
        Self {
            registry,
            console,
            connection,
        }
    }

    /// Executes one command against one argument vector.
    ///
    /// Never returns an error: validation failures and execution errors are
    /// reported and converted to their exit codes. Display level and error
    /// mode are restored afterwards on every path; wait mode persists.
    ///
    /// # Panics
    ///
    /// Panics when `command` is not present in the registry; executing an
    /// unregistered command is a caller bug.
    pub fn execute(&self, command: &dyn Command, args: &ArgumentVector) -> i32 {
        assert!(
            self.registry.contains(command.name()),
            "command `{}` is not registered",
            command.name()
        );

        let parameters = command.parameters(args);
        if let Some(message) = validate_arguments(parameters.as_ref(), args, &[]) {
            error!("Invalid invocation of `{}`: {message}", command.name());
            self.console.write_error(&message);
            return exit_codes::INVALID_OPTIONS;
        }

        let _scope = DisplayScope::snapshot(self.console);
        self.console
            .set_display_level(args.get_enum_toggle(self.console.display_level()));
        self.console
            .set_error_mode(args.get_enum_toggle(self.console.error_mode()));
        self.console
            .set_wait_mode(args.get_enum_toggle(self.console.wait_mode()));

        let context = ExecutionContext {
            registry: self.registry,
            console: self.console,
            connection: self.connection,
            display_level: self.console.display_level(),
        };

        debug!("Executing command `{}`", command.name());
        match command.execute(&context, parameters.as_ref()) {
            Ok(code) => code,
            Err(e) => {
                let message = innermost_message(&e);
                error!("Command `{}` failed: {message}", command.name());
                self.console.write_error(&message);
                exit_codes::FAILED_COMMAND
            }
        }
    }
}

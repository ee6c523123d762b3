//! Top-level dispatch: command name, command file, or implicit help.

use log::error;

use paycmd_core::arguments::ArgumentVector;
use paycmd_core::command_file::{self, CommandFileExecutor};
use paycmd_core::config::Connection;
use paycmd_core::console::Console;
use paycmd_core::error::Error;
use paycmd_core::executor::CommandExecutor;
use paycmd_core::exit_codes;
use paycmd_core::registry::CommandRegistry;

/// Dispatches one invocation and returns the process exit code.
///
/// Argument 1 picks the route: a known command name runs that command, a
/// `pecmd` path runs the command file, nothing at all runs the implicit
/// help command. All failures come back as exit codes; nothing panics for
/// user input.
pub fn run(
    registry: &CommandRegistry,
    console: &dyn Console,
    connection: Option<&Connection>,
    args: &ArgumentVector,
) -> i32 {
    let executor = CommandExecutor::new(registry, console, connection);

    let Some(first) = args.get(1) else {
        // Bare invocation: fall back to help.
        return match registry.get("help") {
            Some(help) => executor.execute(help, args),
            None => {
                console.write_error("No help command registered");
                exit_codes::UNKNOWN_COMMAND
            }
        };
    };

    if command_file::is_command_file(first) {
        let file_executor = CommandFileExecutor::new(registry, console, connection);
        return match file_executor.execute(args) {
            Ok(code) => code,
            Err(e) => {
                error!("{e}");
                console.write_error(&e.to_string());
                match e {
                    Error::WorkingDirectory { .. } => exit_codes::DIRECTORY_ERROR,
                    _ => exit_codes::FAILED_COMMAND,
                }
            }
        };
    }

    match registry.get(first) {
        Some(command) => executor.execute(command, args),
        None => {
            let message = Error::UnknownCommand(first.to_string()).to_string();
            error!("{message}");
            console.write_error(&message);
            exit_codes::UNKNOWN_COMMAND
        }
    }
}

//! The built-in help command, also the fallback when no command is given.

use std::any::Any;

use itertools::Itertools;
use paycmd_core::arguments::ArgumentVector;
use paycmd_core::command::{Command, CommandParameters, ExecutionContext};
use paycmd_core::console::Console;
use paycmd_core::error::Result;
use paycmd_core::exit_codes;
use paycmd_core::toggles::{DisplayLevel, ErrorMode, Toggle, WaitMode};

struct HelpParameters {
    /// Command to show detailed help for; absent lists everything.
    command: Option<String>,
}

impl CommandParameters for HelpParameters {
    fn validate(&self) -> Option<String> {
        None
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn parameters(&self, args: &ArgumentVector) -> Box<dyn CommandParameters> {
        Box::new(HelpParameters {
            command: args.get(2).map(str::to_string),
        })
    }

    fn execute(
        &self,
        context: &ExecutionContext<'_>,
        parameters: &dyn CommandParameters,
    ) -> Result<i32> {
        let parameters = parameters
            .as_any()
            .downcast_ref::<HelpParameters>()
            .expect("help parameters");

        if let Some(name) = &parameters.command {
            return match context.registry.get(name) {
                Some(command) => {
                    command.show_help(context.console);
                    Ok(exit_codes::SUCCESS)
                }
                None => {
                    context
                        .console
                        .write_error(&format!("Unknown command: `{name}`"));
                    Ok(exit_codes::UNKNOWN_COMMAND)
                }
            };
        }

        let console = context.console;
        console.write_title("Commands");
        for command in context.registry.commands() {
            command.show_help(console);
        }

        console.write_title("Toggles");
        console.write_info(&format!(
            "  display level: {}",
            toggle_list::<DisplayLevel>()
        ));
        console.write_info(&format!("  error mode: {}", toggle_list::<ErrorMode>()));
        console.write_info(&format!("  wait mode: {}", toggle_list::<WaitMode>()));

        Ok(exit_codes::SUCCESS)
    }

    fn show_help(&self, console: &dyn Console) {
        console.write_info("  help [command]");
        console.write_info("      Shows all commands, or one command's usage");
    }
}

fn toggle_list<T: Toggle>() -> String {
    T::group()
        .members
        .iter()
        .map(|member| format!("/{member}"))
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_list_renders_all_members() {
        assert_eq!(toggle_list::<ErrorMode>(), "/Errors, /NoErrors");
    }
}

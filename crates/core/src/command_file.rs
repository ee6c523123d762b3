//! Command-file interpretation: batch files of command invocations.
//!
//! A command file holds one command invocation per line. Blank lines and
//! `#` comments are skipped, `$name$` tokens are substituted from the
//! invoking vector's named parameters, and a line whose first token is
//! itself a command-file path nests recursively. The whole file is
//! validated before anything executes: any line-level problem discards the
//! item list rather than running a partial, ambiguous subset. Execution is
//! depth-first and stops at the first non-zero result.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::arguments::ArgumentVector;
use crate::config::Connection;
use crate::console::{Console, DisplayScope};
use crate::error::{Error, Result};
use crate::executor::{validate_arguments, CommandExecutor};
use crate::exit_codes;
use crate::registry::CommandRegistry;
use crate::toggles::{DisplayLevel, ErrorMode, PathChangeMode, Toggle, ToggleGroup, WaitMode};

/// File extension marking a command file.
pub const COMMAND_FILE_EXTENSION: &str = "pecmd";

/// True when the token looks like a command-file path.
pub fn is_command_file(token: &str) -> bool {
    Path::new(token)
        .extension()
        .map(|extension| extension.eq_ignore_ascii_case(COMMAND_FILE_EXTENSION))
        .unwrap_or(false)
}

/// One executable unit of a parsed command file.
///
/// Built once per file read, consumed once during execution.
pub enum CommandFileItem {
    /// A resolved command invocation.
    Command {
        name: String,
        args: ArgumentVector,
    },
    /// A nested command file with its parsed children.
    NestedFile {
        args: ArgumentVector,
        /// The nested file's containing directory, resolved at read time.
        directory: PathBuf,
        items: Vec<CommandFileItem>,
    },
}

/// Restores the process working directory when dropped.
///
/// The working directory is a process-wide resource; every scope that
/// changes it (a file read, a nested file item) restores it on exit,
/// error paths included.
pub struct WorkingDirectoryScope {
    original: PathBuf,
}

impl WorkingDirectoryScope {
    /// Changes into `directory`, remembering the current directory.
    ///
    /// # Errors
    ///
    /// Returns a working-directory error when the current directory cannot
    /// be determined or `directory` cannot be entered.
    pub fn change_to(directory: &Path) -> Result<Self> {
        let original = env::current_dir().map_err(|e| Error::WorkingDirectory {
            path: directory.display().to_string(),
            original: e,
        })?;
        env::set_current_dir(directory).map_err(|e| Error::WorkingDirectory {
            path: directory.display().to_string(),
            original: e,
        })?;
        Ok(Self { original })
    }
}

impl Drop for WorkingDirectoryScope {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.original) {
            warn!(
                "Could not restore working directory `{}`: {e}",
                self.original.display()
            );
        }
    }
}

/// Replaces `$name$` tokens with the invoking vector's named parameters.
///
/// A token whose name is unknown to the outer vector is left verbatim, as
/// is a lone `$`.
fn substitute_variables(line: &str, outer: &ArgumentVector) -> String {
    let mut result = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find('$') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('$') {
            Some(end) => {
                let name = &after[..end];
                match outer.get_by_name(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push('$');
                        result.push_str(name);
                        result.push('$');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push('$');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

/// Reads and executes command files.
pub struct CommandFileExecutor<'a> {
    registry: &'a CommandRegistry,
    console: &'a dyn Console,
    connection: Option<&'a Connection>,
}

impl<'a> CommandFileExecutor<'a> {
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

    /// Runs the command file named in the vector's first position.
    ///
    /// Read problems and line-level validation failures are reported and
    /// converted to exit codes; only working-directory errors surface as
    /// `Err` and abort the whole run.
    ///
    /// # Errors
    ///
    /// Returns an error when a working-directory change fails.
    pub fn execute(&self, args: &ArgumentVector) -> Result<i32> {
        let Some(path) = args.get(1).map(str::to_string) else {
            self.console.write_error("Missing command file path");
            return Ok(exit_codes::INVALID_COMMAND_FILE);
        };

        debug!("Reading command file `{path}`");
        let items = match self.read_items(&path, args) {
            Ok(items) => items,
            Err(e @ Error::WorkingDirectory { .. }) => return Err(e),
            Err(e @ Error::EmptyCommandFile { .. }) => {
                error!("{e}");
                self.console.write_error(&e.to_string());
                return Ok(exit_codes::EMPTY_COMMAND_FILE);
            }
            Err(e) => {
                error!("{e}");
                self.console.write_error(&e.to_string());
                return Ok(exit_codes::INVALID_COMMAND_FILE);
            }
        };

        let _scope = DisplayScope::snapshot(self.console);
        self.console
            .set_display_level(args.get_enum_toggle(self.console.display_level()));
        self.console
            .set_error_mode(args.get_enum_toggle(self.console.error_mode()));

        let code = self.execute_items(&items)?;

        if code == exit_codes::SUCCESS {
            // The file-level wait toggle governs what happens after the
            // whole run, not any individual line.
            self.console
                .set_wait_mode(args.get_enum_toggle(self.console.wait_mode()));
        }
        Ok(code)
    }

    /// Parses one command file into its item list, recursing into nested
    /// files. Fails closed: the first bad line discards everything.
    fn read_items(&self, path: &str, outer: &ArgumentVector) -> Result<Vec<CommandFileItem>> {
        let file_path = Path::new(path);
        let directory = file_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty());

        // Relative paths inside the file resolve against its directory.
        let _directory_scope = match directory {
            Some(directory) => Some(WorkingDirectoryScope::change_to(directory)?),
            None => None,
        };
        let file_name = file_path.file_name().unwrap_or(file_path.as_os_str());

        let content = fs::read_to_string(file_name)
            .map_err(|e| Error::io_error("command", path, e))?;

        let mut items = Vec::new();
        for (line_index, raw_line) in content.lines().enumerate() {
            let line_number = line_index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = substitute_variables(line, outer);
            let line_args = ArgumentVector::from_command(&line);
            let Some(first) = line_args.get(1).map(str::to_string) else {
                return Err(Error::command_file_line(
                    path,
                    line_number,
                    "missing command".to_string(),
                ));
            };

            if is_command_file(&first) {
                self.validate_nested_line(&line_args)
                    .map_err(|message| Error::command_file_line(path, line_number, message))?;
                let directory = nested_file_directory(&first)?;
                let nested_items = self.read_items(&first, &line_args)?;
                items.push(CommandFileItem::NestedFile {
                    args: line_args,
                    directory,
                    items: nested_items,
                });
            } else {
                let Some(command) = self.registry.get(&first) else {
                    return Err(Error::command_file_line(
                        path,
                        line_number,
                        format!("unknown command `{first}`"),
                    ));
                };
                let parameters = command.parameters(&line_args);
                if let Some(message) = validate_arguments(parameters.as_ref(), &line_args, &[]) {
                    return Err(Error::command_file_line(path, line_number, message));
                }
                items.push(CommandFileItem::Command {
                    name: first,
                    args: line_args,
                });
            }
        }

        if items.is_empty() {
            return Err(Error::EmptyCommandFile {
                path: path.to_string(),
            });
        }
        Ok(items)
    }

    fn validate_nested_line(&self, args: &ArgumentVector) -> std::result::Result<(), String> {
        if !args.is_valid_order() {
            return Err("Toggles must follow all positional and named arguments".to_string());
        }

        let groups: &[&'static ToggleGroup] = &[
            DisplayLevel::group(),
            ErrorMode::group(),
            WaitMode::group(),
            PathChangeMode::group(),
        ];
        if let Some(unknown) = args.test_unknown_toggles(groups) {
            return Err(format!("Unknown toggle: `{unknown}`"));
        }
        if let Some(group) = args.test_multiple_toggles(groups) {
            return Err(format!("Multiple {group} toggles"));
        }
        Ok(())
    }

    /// Executes items in order, depth-first, stopping at the first
    /// non-zero result.
    fn execute_items(&self, items: &[CommandFileItem]) -> Result<i32> {
        let executor = CommandExecutor::new(self.registry, self.console, self.connection);

        for item in items {
            let code = match item {
                CommandFileItem::Command { name, args } => {
                    let command = self
                        .registry
                        .get(name)
                        .expect("command resolved during file read");
                    executor.execute(command, args)
                }
                CommandFileItem::NestedFile {
                    args,
                    directory,
                    items,
                } => self.execute_nested(args, directory, items)?,
            };

            if code != exit_codes::SUCCESS {
                return Ok(code);
            }
        }
        Ok(exit_codes::SUCCESS)
    }

    fn execute_nested(
        &self,
        args: &ArgumentVector,
        directory: &Path,
        items: &[CommandFileItem],
    ) -> Result<i32> {
        let _display_scope = DisplayScope::snapshot(self.console);
        self.console
            .set_display_level(args.get_enum_toggle(self.console.display_level()));
        self.console
            .set_error_mode(args.get_enum_toggle(self.console.error_mode()));

        let change_path =
            args.get_enum_toggle(PathChangeMode::ChangePath) == PathChangeMode::ChangePath;
        let _directory_scope = if change_path {
            Some(WorkingDirectoryScope::change_to(directory)?)
        } else {
            None
        };

        self.execute_items(items)
    }
}

/// Absolute directory of a nested file path, resolved while the parent
/// file's directory is current.
fn nested_file_directory(path: &str) -> Result<PathBuf> {
    let current = env::current_dir().map_err(|e| Error::WorkingDirectory {
        path: path.to_string(),
        original: e,
    })?;
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(current.join(parent)),
        _ => Ok(current),
    }
}

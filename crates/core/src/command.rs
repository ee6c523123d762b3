//! Command contract consumed by the dispatch engine.
//!
//! The engine never looks inside a command: it resolves a name through the
//! registry, asks the command for a parameter bundle, validates that bundle,
//! and invokes `execute` with a per-call context. Commands return an integer
//! exit code; everything else is their own business.

use std::any::Any;

use crate::arguments::ArgumentVector;
use crate::config::Connection;
use crate::console::Console;
use crate::error::Result;
use crate::registry::CommandRegistry;
use crate::toggles::{DisplayLevel, ToggleGroup};

/// Self-validating value bundle produced by a command from an argument
/// vector.
pub trait CommandParameters {
    /// Validation probe: `None` when the inputs are acceptable, a
    /// descriptive message otherwise.
    fn validate(&self) -> Option<String>;

    /// Toggle groups this command recognizes beyond the global console
    /// toggles, enabling upstream unknown-toggle rejection.
    fn toggle_groups(&self) -> &'static [&'static ToggleGroup] {
        &[]
    }

    /// Downcast hook for the owning command's `execute`.
    fn as_any(&self) -> &dyn Any;
}

/// A dispatchable command.
///
/// Instantiated once at registration and reused across invocations: any
/// per-call state belongs in the context or the parameter bundle, not in
/// the command instance.
pub trait Command {
    /// Unique name, compared case-insensitively.
    fn name(&self) -> &'static str;

    /// Builds the parameter bundle for one invocation.
    fn parameters(&self, args: &ArgumentVector) -> Box<dyn CommandParameters>;

    /// Runs the command. An `Err` is caught at the executor boundary and
    /// converted to a failure exit code.
    fn execute(
        &self,
        context: &ExecutionContext<'_>,
        parameters: &dyn CommandParameters,
    ) -> Result<i32>;

    /// Renders usage help to the console.
    fn show_help(&self, console: &dyn Console);
}

/// Everything a command may touch during one execution; built per call and
/// never persisted.
pub struct ExecutionContext<'a> {
    pub registry: &'a CommandRegistry,
    pub console: &'a dyn Console,
    /// Backend connection, absent when the engine runs without one.
    pub connection: Option<&'a Connection>,
    /// Display level resolved for this invocation, toggles applied.
    pub display_level: DisplayLevel,
}

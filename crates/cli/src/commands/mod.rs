//! Built-in commands shipped with the console binary.

pub mod help;

pub use help::HelpCommand;

use paycmd_core::error::Result;
use paycmd_core::registry::CommandRegistry;

/// Registers the built-in command set.
///
/// # Errors
///
/// Returns an error if two commands end up sharing a name; that is a
/// packaging bug and fatal at startup.
pub fn register_defaults(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(Box::new(HelpCommand))?;
    Ok(())
}

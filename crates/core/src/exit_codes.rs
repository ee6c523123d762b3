//! Process exit codes for scripting callers.
//!
//! Zero is success; each failure class gets its own negative value so batch
//! callers can tell them apart.

pub const SUCCESS: i32 = 0;
/// A command's own execution failed.
pub const FAILED_COMMAND: i32 = -1;
/// Parameter validation or toggle checks rejected the invocation.
pub const INVALID_OPTIONS: i32 = -2;
/// No registered command matches the requested name.
pub const UNKNOWN_COMMAND: i32 = -3;
/// A command file could not be read or failed line validation.
pub const INVALID_COMMAND_FILE: i32 = -4;
/// A command file parsed cleanly but produced no items.
pub const EMPTY_COMMAND_FILE: i32 = -5;
/// A working-directory change failed.
pub const DIRECTORY_ERROR: i32 = -6;

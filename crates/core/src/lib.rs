//! Paycmd Core Library
//!
//! This crate provides the command dispatch engine for the paycmd payroll
//! console: argument parsing, command registration, single-command
//! execution, and command-file interpretation. Commands themselves are
//! external collaborators implementing the [`command::Command`] trait; the
//! engine resolves names, validates parameters, scopes console toggles,
//! and turns every outcome into an integer exit code.
//!
//! # Key Features
//!
//! - **Argument Vectors**: positional, `name:value`, and `/Toggle` argument
//!   parsing with quote-aware command-string splitting
//! - **Command Registry**: case-insensitive name resolution over explicitly
//!   registered commands
//! - **Scoped Console State**: display level, error mode, and wait mode
//!   with guaranteed save/restore around every execution scope
//! - **Command Files**: `pecmd` batch files with comments, nesting, and
//!   `$variable$` substitution, validated fully before anything executes
//!
//! # Examples
//!
//! Resolving and running a command:
//!
//! ```no_run
//! use paycmd_core::arguments::ArgumentVector;
//! use paycmd_core::executor::CommandExecutor;
//! use paycmd_core::registry::CommandRegistry;
//! # fn run(registry: &CommandRegistry, console: &dyn paycmd_core::console::Console) {
//! let args = ArgumentVector::from_env();
//! if let Some(name) = args.get(1) {
//!     if let Some(command) = registry.get(name) {
//!         let executor = CommandExecutor::new(registry, console, None);
//!         let exit_code = executor.execute(command, &args);
//!     }
//! }
//! # }
//! ```

pub mod arguments;
pub mod command;
pub mod command_file;
pub mod config;
pub mod console;
pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod registry;
pub mod toggles;

//! Paycmd CLI Library
//!
//! This crate provides the `paycmd` console binary for the payroll
//! platform: a colored terminal console, the built-in command set, and the
//! top-level dispatch that routes an invocation to a command, a command
//! file, or the implicit help fallback.
//!
//! # Architecture
//!
//! - [`console`]: crossterm-backed implementation of the core console sink
//! - [`commands`]: built-in commands registered at startup
//! - [`program`]: dispatch from an argument vector to an exit code
//!
//! # Examples
//!
//! ```bash
//! # List commands and toggles
//! paycmd
//!
//! # Run one command with a named parameter and a toggle
//! paycmd report year:2024 /Compact
//!
//! # Run a command file, waiting for a key press afterwards
//! paycmd payday.pecmd /Wait
//! ```

pub mod commands;
pub mod console;
pub mod program;

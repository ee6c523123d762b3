//! Process argument vector with positional, named, and toggle lookups.
//!
//! A vector mirrors process argv conventions: index 0 is the invoking
//! program path and is never handed back to callers, so all consumer-facing
//! lookups are 1-based. Three argument shapes are recognized:
//!
//! - **positional**: any plain token, addressed by index
//! - **named**: `name:value`, addressed by case-insensitive name
//! - **toggle**: `/Name` or `-Name`, matched against [`Toggle`] enums

use crate::error::{Error, Result};
use crate::toggles::{Toggle, ToggleGroup};

/// Immutable ordered argument list.
#[derive(Debug, Clone)]
pub struct ArgumentVector {
    args: Vec<String>,
}

impl ArgumentVector {
    /// Wraps a full argument vector, index 0 being the program path.
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Captures the arguments of the running process.
    pub fn from_env() -> Self {
        Self::new(std::env::args().collect())
    }

    /// Tokenizes a single command string into an argument vector.
    ///
    /// Double and single quotes each toggle a protected region in which
    /// whitespace does not separate tokens; the quote characters themselves
    /// are delimiters and not part of the token. The real process's argument
    /// 0 is prepended so index arithmetic matches environment-sourced
    /// vectors.
    pub fn from_command(command: &str) -> Self {
        let mut args = vec![std::env::args().next().unwrap_or_default()];
        args.extend(split_command(command));
        Self::new(args)
    }

    /// Number of consumer-facing arguments (argument 0 excluded).
    pub fn count(&self) -> usize {
        self.args.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// True for `/Name` or `-Name` shaped arguments.
    pub fn is_toggle(argument: &str) -> bool {
        argument.starts_with('/') || argument.starts_with('-')
    }

    /// True for `name:value` shaped arguments (toggles excluded).
    pub fn is_named(argument: &str) -> bool {
        if Self::is_toggle(argument) {
            return false;
        }
        matches!(argument.find(':'), Some(position) if position > 0)
    }

    /// Positional argument at `index`, 1-based.
    ///
    /// Returns `None` when the index exceeds the vector length or the token
    /// at that position is a named parameter or a toggle.
    ///
    /// # Panics
    ///
    /// Panics when `index` is 0; argument 0 is the program path and not a
    /// consumer-facing argument.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.get_positional(index, false)
    }

    /// Like [`get`](Self::get), but toggle tokens are returnable.
    pub fn get_with_toggle(&self, index: usize) -> Option<&str> {
        self.get_positional(index, true)
    }

    fn get_positional(&self, index: usize, allow_toggle: bool) -> Option<&str> {
        assert!(index > 0, "argument index must be 1-based, got 0");

        let argument = self.args.get(index)?.as_str();
        if Self::is_named(argument) {
            return None;
        }
        if !allow_toggle && Self::is_toggle(argument) {
            return None;
        }
        Some(argument)
    }

    /// Value of the named parameter `name`, scanning the whole vector.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }
        self.args.iter().skip(1).map(String::as_str).find_map(|argument| {
            let (key, value) = argument.split_once(':')?;
            if !Self::is_toggle(argument) && key.eq_ignore_ascii_case(name) {
                Some(value)
            } else {
                None
            }
        })
    }

    /// Named lookup first, positional fallback at `index` otherwise.
    pub fn get_or_named(&self, index: usize, name: &str) -> Option<&str> {
        self.get_by_name(name).or_else(|| self.get(index))
    }

    /// Integer at `index`, silently falling back to `default` when the
    /// argument is absent or not a number.
    pub fn get_int(&self, index: usize, default: i32) -> i32 {
        self.get(index)
            .and_then(|argument| argument.parse().ok())
            .unwrap_or(default)
    }

    /// Mandatory integer at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error when the argument is absent or not a number.
    pub fn get_required_int(&self, index: usize) -> Result<i32> {
        let argument = self.get(index).ok_or(Error::MissingArgument(index))?;
        argument.parse().map_err(|_| Error::InvalidArgument {
            kind: "number".to_string(),
            value: argument.to_string(),
        })
    }

    /// Enum member at `index`, silently falling back to `default` when the
    /// argument is absent or matches no member name.
    pub fn get_enum<T: Toggle>(&self, index: usize, default: T) -> T {
        self.get(index)
            .and_then(T::from_name)
            .unwrap_or(default)
    }

    /// Mandatory enum member at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error when the argument is absent or matches no member
    /// name of `T` (case-insensitive).
    pub fn get_required_enum<T: Toggle>(&self, index: usize) -> Result<T> {
        let argument = self.get(index).ok_or(Error::MissingArgument(index))?;
        T::from_name(argument).ok_or_else(|| Error::InvalidArgument {
            kind: T::group().name.to_string(),
            value: argument.to_string(),
        })
    }

    /// Positional and named arguments must precede all toggles.
    ///
    /// Returns false iff any non-toggle argument appears after the first
    /// toggle. Empty, all-positional, and all-toggle vectors are valid.
    pub fn is_valid_order(&self) -> bool {
        let mut toggle_seen = false;
        for argument in self.args.iter().skip(1) {
            if Self::is_toggle(argument) {
                toggle_seen = true;
            } else if toggle_seen {
                return false;
            }
        }
        true
    }

    /// Resolves a toggle of type `T`, first declared member wins.
    ///
    /// Scans the member names of `T` in declaration order; the first one
    /// present as a toggle argument (prefix stripped, case-insensitive)
    /// wins. Returns `default` when none match. Ambiguity between several
    /// present members is not an error here; use
    /// [`test_multiple_toggles`](Self::test_multiple_toggles) to reject it.
    pub fn get_enum_toggle<T: Toggle>(&self, default: T) -> T {
        T::variants()
            .iter()
            .copied()
            .find(|variant| {
                self.toggle_names()
                    .any(|name| name.eq_ignore_ascii_case(variant.name()))
            })
            .unwrap_or(default)
    }

    /// First toggle argument not recognized by any of the given groups.
    pub fn test_unknown_toggles(&self, groups: &[&'static ToggleGroup]) -> Option<&str> {
        self.args
            .iter()
            .skip(1)
            .map(String::as_str)
            .filter(|argument| Self::is_toggle(argument))
            .find(|argument| {
                let name = strip_toggle_prefix(argument);
                !groups.iter().any(|group| group.contains(name))
            })
    }

    /// Name of the first group with more than one member present as a
    /// toggle, used to reject ambiguous switches.
    pub fn test_multiple_toggles(&self, groups: &[&'static ToggleGroup]) -> Option<&'static str> {
        groups
            .iter()
            .find(|group| {
                let present = self
                    .toggle_names()
                    .filter(|name| group.contains(name))
                    .count();
                present > 1
            })
            .map(|group| group.name)
    }

    fn toggle_names(&self) -> impl Iterator<Item = &str> {
        self.args
            .iter()
            .skip(1)
            .map(String::as_str)
            .filter(|argument| Self::is_toggle(argument))
            .map(strip_toggle_prefix)
    }
}

fn strip_toggle_prefix(argument: &str) -> &str {
    argument
        .strip_prefix('/')
        .or_else(|| argument.strip_prefix('-'))
        .unwrap_or(argument)
}

fn split_command(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut protection: Option<char> = None;

    for character in command.chars() {
        match character {
            '"' | '\'' => match protection {
                None => protection = Some(character),
                Some(quote) if quote == character => protection = None,
                Some(_) => current.push(character),
            },
            _ if character.is_whitespace() && protection.is_none() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(character),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

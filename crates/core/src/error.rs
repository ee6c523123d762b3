use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: `{}`", _0)]
    UnknownCommand(String),

    #[error("A command named `{}` is already registered", _0)]
    DuplicateCommand(String),

    #[error("Missing argument at position {}", _0)]
    MissingArgument(usize),

    #[error("Invalid {} value: `{}`", .kind, .value)]
    InvalidArgument { kind: String, value: String },

    #[error("Command file `{}` contains no commands", .path)]
    EmptyCommandFile { path: String },

    #[error("Error in command file `{}` line {}: {}", .path, .line, .message)]
    CommandFileLine {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Invalid working directory `{}`: {}", .path, .original)]
    WorkingDirectory {
        path: String,
        #[source]
        original: std::io::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        #[source]
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        #[source]
        original: serde_yaml::Error,
    },

    #[error("Command failed: {}", _0)]
    Execution(String),
}

impl Error {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn yaml_error(
        action: &str,
        file_description: &str,
        path: &str,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action: action.to_string(),
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn command_file_line(path: &str, line: usize, message: String) -> Self {
        Self::CommandFileLine {
            path: path.to_string(),
            line,
            message,
        }
    }
}

/// Walks the error source chain and returns the innermost message.
pub fn innermost_message(error: &dyn std::error::Error) -> String {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

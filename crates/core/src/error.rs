use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {}", .0)]
    InvalidInput(String),

    #[error("No dataset for {} at `{}`", .city, .path)]
    NotFound { city: String, path: String },

    #[error("Bad data in dataset at `{}`: {}", .path, .message)]
    InvalidData { path: String, message: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(city: impl Into<String>, path: impl Into<String>) -> Self {
        Self::NotFound {
            city: city.into(),
            path: path.into(),
        }
    }

    pub fn invalid_data(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidData {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(
        file_description: impl Into<String>,
        path: impl Into<String>,
        original: std::io::Error,
    ) -> Self {
        Self::Io {
            file_description: file_description.into(),
            path: path.into(),
            original,
        }
    }

    /// Whether the error abandons only the current session iteration,
    /// leaving the outer restart loop intact.
    pub fn is_recoverable_load_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidData { .. })
    }
}

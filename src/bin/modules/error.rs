use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core chemxplore library, such as loading constants.
    #[error("Calculation error: {0}")]
    Calculation(#[from] chemxplore::CalcError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// Errors serializing a result as JSON.
    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

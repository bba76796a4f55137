use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `chemxplore` library.
///
/// The user-facing variants render exactly the message shown in a calculator's result area
/// after the `Error:` label, so a calculator failure can be presented without further
/// formatting. The remaining variants cover loading custom constants from disk.
#[derive(Error, Debug)]
pub enum CalcError {
    /// One or more numeric inputs were blank, non-numeric, zero or negative.
    ///
    /// The payload is the calculator-specific message naming the offending quantities.
    #[error("{0}")]
    InvalidInput(String),

    /// A multi-variable solver was given a number of blank fields other than one.
    #[error("Please leave exactly one field empty to solve for that variable.")]
    WrongBlankCount,

    /// The element and mass lists of the empirical formula calculator differ in length.
    #[error("Please enter equal number of elements and masses.")]
    MismatchedLists,

    /// A required field of the limiting reagent calculator was left empty.
    #[error("Please fill in all fields.")]
    MissingFields,

    /// The limiting reagent comparison could not be carried out on the given input.
    #[error("Error parsing equation. Please check your input format.")]
    EquationParse,

    /// A calculator name did not match any known calculator.
    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),

    /// An I/O error that occurred while attempting to read a constants file.
    #[error("I/O error at path '{path}': {source}")]
    IoError {
        /// The path of the file that caused the I/O error.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An error that occurred while parsing a constants file.
    #[error("Failed to deserialize TOML constants: {0}")]
    DeserializationError(#[from] toml::de::Error),
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown capitalization scheme '{name}'. Valid values: {}", .valid.join(", "))]
pub struct UnsupportedScheme {
    /// The name that failed to resolve, as given by the caller.
    pub name: String,
    /// Every supported scheme name, sorted.
    pub valid: Vec<&'static str>,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Provide input using only one of --file or positional text.")]
    ConflictingSources,
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read input file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output file: {0}")]
    Write(#[from] std::io::Error),
}

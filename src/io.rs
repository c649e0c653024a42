use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::errors::{InputError, OutputError};

/// Where the text to transform comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Text(String),
    Stdin,
}

impl InputSource {
    /// Pick the single input source out of the optional file and positional text.
    ///
    /// Standard input is used when neither is given.
    pub fn resolve(file: Option<PathBuf>, text: Option<String>) -> Result<Self, InputError> {
        match (file, text) {
            (Some(_), Some(_)) => Err(InputError::ConflictingSources),
            (Some(path), None) => Ok(InputSource::File(path)),
            (None, Some(text)) => Ok(InputSource::Text(text)),
            (None, None) => Ok(InputSource::Stdin),
        }
    }
}

/// Read the whole input, taking standard input from the process.
pub fn read_input(source: InputSource) -> Result<String, InputError> {
    read_input_from(source, io::stdin())
}

/// Read the whole input, taking standard input from `stdin`.
///
/// Files must be valid UTF-8.
pub fn read_input_from<R: Read>(source: InputSource, mut stdin: R) -> Result<String, InputError> {
    match source {
        InputSource::File(path) => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(&path).map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => InputError::NotFound(path),
                _ => InputError::Read(err),
            })
        }
        InputSource::Text(text) => {
            trace!(bytes = text.len(), "using positional text");
            Ok(text)
        }
        InputSource::Stdin => {
            debug!("reading standard input");
            let mut text = String::new();
            stdin.read_to_string(&mut text).map_err(InputError::Stdin)?;
            Ok(text)
        }
    }
}

/// Write `text` into the file at `path`, or to standard output if there is none.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), bytes = text.len(), "writing output file");
            write_output_to(text, File::create(path)?)
        }
        None => write_output_to(text, io::stdout()),
    }
}

pub fn write_output_to<W: Write>(text: &str, mut output: W) -> Result<(), OutputError> {
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}

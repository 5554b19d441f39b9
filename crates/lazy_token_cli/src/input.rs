use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use token_logging::token_debug;

use crate::decode::{decode_text, DecodeError};

/// Where a document to count comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` names standard input; anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Source::Stdin
        } else {
            Source::File(arg.to_path_buf())
        }
    }

    /// Sources for the given arguments, defaulting to stdin when there are none.
    ///
    /// Stdin can only be drained once, so repeated `-` arguments after the
    /// first are dropped.
    pub fn from_args(args: &[PathBuf]) -> Vec<Self> {
        if args.is_empty() {
            return vec![Source::Stdin];
        }
        let mut seen_stdin = false;
        args.iter()
            .map(|arg| Source::from_arg(arg))
            .filter(|source| match source {
                Source::Stdin => !std::mem::replace(&mut seen_stdin, true),
                Source::File(_) => true,
            })
            .collect()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("-"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source: Source,
    pub text: String,
    pub encoding_label: String,
    pub byte_len: usize,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: io::Error,
    },
    #[error("failed to decode {source_name}: {error}")]
    Decode {
        source_name: String,
        #[source]
        error: DecodeError,
    },
}

/// Read and decode one source. `stdin` is only touched for [`Source::Stdin`].
pub fn read_document(source: &Source, stdin: &mut dyn Read) -> Result<Document, InputError> {
    let bytes = match source {
        Source::Stdin => {
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf).map(|_| buf)
        }
        Source::File(path) => fs::read(path),
    }
    .map_err(|error| InputError::Io {
        source_name: source.to_string(),
        error,
    })?;

    let decoded = decode_text(&bytes).map_err(|error| InputError::Decode {
        source_name: source.to_string(),
        error,
    })?;
    token_debug!(
        "Read {} bytes from {} as {}",
        bytes.len(),
        source,
        decoded.encoding_label
    );

    Ok(Document {
        source: source.clone(),
        text: decoded.text,
        encoding_label: decoded.encoding_label,
        byte_len: bytes.len(),
    })
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for malformed netrc content. Lines are 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token appeared where a keyword was expected.
    #[error("line {line}: unexpected token `{token}`")]
    UnexpectedToken { line: usize, token: String },

    /// A keyword was the last token of the file.
    #[error("line {line}: missing value after `{keyword}`")]
    MissingValue { line: usize, keyword: String },

    #[error("line {line}: `{keyword}` given twice for machine `{machine}`")]
    DuplicateField {
        line: usize,
        keyword: String,
        machine: String,
    },

    #[error("line {line}: multiple default entries")]
    MultipleDefault { line: usize },

    #[error("line {line}: machine `{name}` follows the default entry")]
    MachineAfterDefault { line: usize, name: String },
}

/// Error type for loading a netrc file.
#[derive(Error, Debug)]
pub enum NetrcError {
    /// No path was given and no default netrc file exists.
    #[error("no netrc file configured")]
    NoPath,

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl NetrcError {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::InvalidNetrc
    }
}

/// Process exit statuses for failed invocations. Success is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command line was rejected.
    InvalidCommand = 1,
    /// The netrc file is missing, unreadable or malformed.
    InvalidNetrc = 2,
    /// Reserved. Filtering to zero machines is not an error, so nothing
    /// currently exits with this status.
    MachineNotFound = 3,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

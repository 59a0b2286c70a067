use std::fs;
use std::path::Path;

use crate::error::{NetrcError, ParseError};
use crate::parser;

/// One entry of a netrc file.
///
/// The `default` entry is represented with an empty name and, when present,
/// is always the last machine of a parsed file.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Machine {
    pub name: String,
    pub login: String,
    pub password: String,
    pub account: String,
}

impl Machine {
    pub fn new(name: &str, login: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            login: login.to_string(),
            password: password.to_string(),
            account: String::new(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }
}

/// A `macdef` definition. The body keeps its line endings.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Macro {
    pub name: String,
    pub body: String,
}

/// A parsed netrc file, in file order.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Netrc {
    pub machines: Vec<Machine>,
    pub macros: Vec<Macro>,
}

impl Netrc {
    pub fn parse(data: &str) -> Result<Self, ParseError> {
        parser::parse(data)
    }

    /// Reads and parses the file at `path`.
    ///
    /// An empty path means no netrc file was configured and is reported as
    /// [`NetrcError::NoPath`] rather than an I/O error.
    pub fn load(path: &Path) -> Result<Self, NetrcError> {
        if path.as_os_str().is_empty() {
            return Err(NetrcError::NoPath);
        }

        let data = fs::read_to_string(path).map_err(|source| NetrcError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let netrc = Self::parse(&data).map_err(|source| NetrcError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            "Parsed {} machines and {} macros from {}",
            netrc.machines.len(),
            netrc.macros.len(),
            path.display()
        );

        Ok(netrc)
    }
}

//! Reading and listing the machines of a netrc file.
//!
//! [`Netrc::parse`] turns netrc text into [`Machine`]s, [`filter_machines`]
//! narrows them to one host and [`format_machines`] renders the selected
//! fields, one line per machine.

pub mod cli;
pub mod error;
pub mod filter;
pub mod format;
pub mod machine;
pub mod parser;
pub mod path;

pub use error::{ExitStatus, NetrcError, ParseError};
pub use filter::filter_machines;
pub use format::{format_machine, format_machines, DisplayConfig};
pub use machine::{Machine, Macro, Netrc};
pub use path::default_netrc_path;

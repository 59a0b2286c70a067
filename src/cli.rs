use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::NetrcError;
use crate::filter::filter_machines;
use crate::format::{format_machines, DisplayConfig};
use crate::machine::Netrc;
use crate::path::default_netrc_path;

#[derive(Parser, Debug)]
#[command(name = "netrc", version, about = "Inspect the machines in your netrc file")]
pub struct Cli {
    /// Path to the netrc file [default: ~/.netrc]
    #[arg(long, global = true, value_name = "PATH")]
    pub netrc_path: Option<OsString>,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Only show entries for this machine
    pub machine: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug)]
pub struct DisplayArgs {
    /// Disable display of machine values
    #[arg(short = 'n', long, global = true)]
    pub no_machine: bool,

    /// Toggle display of login values
    #[arg(short, long, global = true)]
    pub login: bool,

    /// Toggle display of password values
    #[arg(short, long, global = true)]
    pub password: bool,
}

impl DisplayArgs {
    pub fn config(&self) -> DisplayConfig {
        DisplayConfig::listing(self.no_machine, self.login, self.password)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List machines (the default when no command is given)
    List {
        /// Only show entries for this machine
        machine: Option<String>,
    },
    /// Print machine names for shell completion, ignoring display flags
    Complete {
        /// Only show entries for this machine
        machine: Option<String>,
    },
}

impl Cli {
    /// The host filter and display settings this invocation asks for.
    pub fn selection(&self) -> (&str, DisplayConfig) {
        let top = self.machine.as_deref();

        let (query, config) = match &self.command {
            None => (top, self.display.config()),
            Some(Command::List { machine }) => (machine.as_deref().or(top), self.display.config()),
            Some(Command::Complete { machine }) => {
                (machine.as_deref().or(top), DisplayConfig::COMPLETION)
            }
        };

        (query.unwrap_or_default(), config)
    }

    /// The configured netrc path, falling back to `~/.netrc`. An empty path
    /// means no file is configured.
    pub fn netrc_path(&self) -> PathBuf {
        if let Some(path) = &self.netrc_path {
            return PathBuf::from(path);
        }

        default_netrc_path(dirs::home_dir().as_deref(), Path::is_file).unwrap_or_else(|| {
            tracing::warn!("No netrc file found in the home directory");
            PathBuf::new()
        })
    }
}

/// Runs the invocation and returns what should be written to stdout.
pub fn run(cli: &Cli) -> Result<String, NetrcError> {
    let path = cli.netrc_path();
    let (query, config) = cli.selection();

    tracing::debug!("Listing '{}' from {}", query, path.display());
    list(&path, query, &config)
}

pub fn list(path: &Path, query: &str, config: &DisplayConfig) -> Result<String, NetrcError> {
    let netrc = Netrc::load(path)?;
    let machines = filter_machines(&netrc.machines, query);

    Ok(format_machines(machines, config))
}

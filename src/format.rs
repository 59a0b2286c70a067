use crate::machine::Machine;

/// Which fields of a machine are rendered.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub show_machine: bool,
    pub show_login: bool,
    pub show_password: bool,
}

impl DisplayConfig {
    /// Machine names only, as offered to shell completion.
    pub const COMPLETION: Self = Self {
        show_machine: true,
        show_login: false,
        show_password: false,
    };

    pub fn listing(no_machine: bool, login: bool, password: bool) -> Self {
        Self {
            show_machine: !no_machine,
            show_login: login,
            show_password: password,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::listing(false, false, false)
    }
}

/// Renders the enabled fields of `machine`, in name, login, password order,
/// separated by single spaces. Empty fields still take their slot.
pub fn format_machine(machine: &Machine, config: &DisplayConfig) -> String {
    let mut values = Vec::new();

    if config.show_machine {
        values.push(machine.name.as_str());
    }
    if config.show_login {
        values.push(machine.login.as_str());
    }
    if config.show_password {
        values.push(machine.password.as_str());
    }

    values.join(" ")
}

/// Renders one line per machine, separated by `\n` with no trailing newline.
pub fn format_machines<'a, I>(machines: I, config: &DisplayConfig) -> String
where
    I: IntoIterator<Item = &'a Machine>,
{
    machines
        .into_iter()
        .map(|m| format_machine(m, config))
        .collect::<Vec<_>>()
        .join("\n")
}

use super::{TerminalCommand, ssh_invocation};
use crate::menu::HostItem;
use crate::shell::quote;

const PROGRAM: &str = "xterm";

/// Plain X terminal: one window per host, no profiles or tabs.
///
/// ```text
/// [env]xterm -T "<title>" [-geometry <geometry>] -e sh -c "<ssh> <params>" &
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Xterm;

impl TerminalCommand for Xterm {
    fn name(&self) -> &'static str {
        PROGRAM
    }

    fn build_window_command(&self, host: &HostItem) -> String {
        let mut command = format!("{}{PROGRAM} -T {}", host.env_settings(), quote(&host.title));
        if !host.geometry().is_empty() {
            command.push_str(" -geometry ");
            command.push_str(host.geometry());
        }
        command.push_str(" -e sh -c ");
        command.push_str(&quote(&ssh_invocation(host)));
        command.push_str(" &");
        command
    }
}

#[cfg(test)]
#[path = "../test/command/xterm.rs"]
mod tests;

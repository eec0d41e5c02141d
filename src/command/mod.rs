//! Terminal command line synthesis
//!
//! Each supported terminal family turns a host entry into a single shell
//! command line that opens a window running the SSH client. The command is
//! returned as text; running it is up to the caller.

mod gnome;
mod xterm;

pub use gnome::GnomeTerminal;
pub use xterm::Xterm;

use crate::menu::{HostItem, Item};

pub const SSH_PROGRAM: &str = "ssh";
/// Wrapper invoked in place of `ssh` when a host enables the alternate transport.
pub const ALT_TRANSPORT_PROGRAM: &str = "bcvi";
const ALT_TRANSPORT_COMMAND: &str = "bcvi --wrap-ssh --";

pub trait TerminalCommand {
    fn name(&self) -> &'static str;

    fn build_window_command(&self, host: &HostItem) -> String;

    /// Command opening one window with a tab per direct host child, or `None`
    /// when the terminal has no tab support.
    fn build_tabbed_command(&self, _items: &[Item]) -> Option<String> {
        None
    }

    fn supports_tabs(&self) -> bool {
        false
    }
}

/// Client invocation for `host`, without its connection parameters.
pub fn ssh_command(host: &HostItem) -> &'static str {
    if host.enable_alt_transport { ALT_TRANSPORT_COMMAND } else { SSH_PROGRAM }
}

/// `ssh_command` followed by the host's parameters with the env prefix removed.
pub fn ssh_invocation(host: &HostItem) -> String {
    format!("{} {}", ssh_command(host), host.sshparams_noenv())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    Xterm,
    GnomeTerminal,
}

impl TerminalKind {
    pub const NAMES: [&'static str; 2] = ["xterm", "gnome-terminal"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "xterm" => Some(TerminalKind::Xterm),
            "gnome-terminal" => Some(TerminalKind::GnomeTerminal),
            _ => None,
        }
    }

    pub fn build(self) -> Box<dyn TerminalCommand> {
        match self {
            TerminalKind::Xterm => Box::new(Xterm),
            TerminalKind::GnomeTerminal => Box::new(GnomeTerminal),
        }
    }
}

#[cfg(test)]
#[path = "../test/command/mod.rs"]
mod tests;

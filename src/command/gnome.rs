//! GNOME terminal command lines
//!
//! Environment assignments need a fresh terminal server, so any host with an
//! env prefix also gets `--disable-factory`. The inner `sh -c` argument is
//! quoted and then quoted again as the value of `-e`.

use super::{TerminalCommand, ssh_invocation};
use crate::menu::{HostItem, Item};
use crate::shell::quote;

const PROGRAM: &str = "gnome-terminal";
const DEFAULT_TAB_PROFILE: &str = "Default";

#[derive(Debug, Default, Clone, Copy)]
pub struct GnomeTerminal;

impl GnomeTerminal {
    fn push_window_options(command: &mut String, host: &HostItem) {
        let env = host.env_settings();
        if !env.is_empty() {
            command.insert_str(0, env);
            command.push_str(" --disable-factory");
        }
        if !host.geometry().is_empty() {
            command.push_str(" --geometry=");
            command.push_str(host.geometry());
        }
    }

    fn push_session(command: &mut String, host: &HostItem) {
        command.push_str(" --title=");
        command.push_str(&quote(&host.title));
        command.push_str(" -e ");
        command.push_str(&quote(&format!("sh -c {}", quote(&ssh_invocation(host)))));
    }
}

impl TerminalCommand for GnomeTerminal {
    fn name(&self) -> &'static str {
        PROGRAM
    }

    fn build_window_command(&self, host: &HostItem) -> String {
        let mut command = PROGRAM.to_string();
        Self::push_window_options(&mut command, host);
        if let Some(profile) = host.profile().filter(|profile| !profile.is_empty()) {
            command.push_str(" --window-with-profile=");
            command.push_str(&quote(profile));
        }
        Self::push_session(&mut command, host);
        command.push_str(" &");
        command
    }

    /// Window options come from the first host child only. Separators and
    /// nested menus are skipped.
    fn build_tabbed_command(&self, items: &[Item]) -> Option<String> {
        let mut command = PROGRAM.to_string();
        for (index, host) in items.iter().filter_map(Item::as_host).enumerate() {
            if index == 0 {
                Self::push_window_options(&mut command, host);
            }
            command.push_str(" --tab-with-profile=");
            match host.profile().filter(|profile| !profile.is_empty()) {
                Some(profile) => command.push_str(&quote(profile)),
                None => command.push_str(DEFAULT_TAB_PROFILE),
            }
            Self::push_session(&mut command, host);
        }
        command.push_str(" &");
        Some(command)
    }

    fn supports_tabs(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "../test/command/gnome.rs"]
mod tests;

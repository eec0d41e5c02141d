//! Application wiring
//!
//! [`Components`] holds the swappable collaborators (terminal family, launcher
//! and hostname resolver). [`App`] ties them to the config and history stores
//! and implements the user-facing actions.

use crate::command::{TerminalCommand, TerminalKind};
use crate::command_path;
use crate::completion::{self, EntryAction};
use crate::config::{ConfigError, ConfigStore};
use crate::history::{HistoryError, HistoryStore};
use crate::known_hosts::{HostResolver, SystemResolver, default_known_hosts_path, import_hosts};
use crate::menu::{HostItem, Item, MenuItem, find_item};
use crate::{log_debug, log_info, log_warn};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Receives the command lines built for the user's selections.
pub trait Launcher {
    fn open_window(&mut self, host: &HostItem, command: &str);
    fn open_tabs(&mut self, hosts: &[&HostItem], command: &str);
}

/// Writes each command line to stdout for the calling shell to run.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintLauncher;

impl Launcher for PrintLauncher {
    fn open_window(&mut self, _host: &HostItem, command: &str) {
        println!("{}", command);
    }

    fn open_tabs(&mut self, _hosts: &[&HostItem], command: &str) {
        println!("{}", command);
    }
}

pub struct Components {
    pub terminal: Box<dyn TerminalCommand>,
    pub launcher: Box<dyn Launcher>,
    pub resolver: Box<dyn HostResolver>,
    /// Source for the first-run import, `None` to skip it.
    pub known_hosts_path: Option<PathBuf>,
}

impl Components {
    pub fn new(terminal: TerminalKind) -> Self {
        Self {
            terminal: terminal.build(),
            launcher: Box::new(PrintLauncher),
            resolver: Box::new(SystemResolver),
            known_hosts_path: default_known_hosts_path(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    MenuNotFound(String),
    TabsNotSupported(&'static str),
    Config(ConfigError),
    History(HistoryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MenuNotFound(title) => write!(f, "No sub-menu titled '{}'", title),
            AppError::TabsNotSupported(terminal) => write!(f, "{} cannot open tabs", terminal),
            AppError::Config(err) => write!(f, "{}", err),
            AppError::History(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::History(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<HistoryError> for AppError {
    fn from(err: HistoryError) -> Self {
        AppError::History(err)
    }
}

pub struct App {
    config: ConfigStore,
    history: HistoryStore,
    components: Components,
}

impl App {
    pub fn new(config: ConfigStore, history: HistoryStore, components: Components) -> Self {
        Self { config, history, components }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut self.config
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn terminal(&self) -> &dyn TerminalCommand {
        self.components.terminal.as_ref()
    }

    /// Whether host entries may offer the alternate transport.
    pub fn have_alt_transport(&self) -> bool {
        command_path::have_alt_transport()
    }

    /// Loads (or reloads) the config, seeding a brand new one from known_hosts.
    pub fn refresh_config(&mut self) -> Result<(), AppError> {
        if self.config.not_configured() {
            self.import_known_hosts();
        }
        self.config.load()?;
        Ok(())
    }

    fn import_known_hosts(&mut self) {
        let Some(path) = self.components.known_hosts_path.as_ref() else {
            return;
        };
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log_debug!("Skipping known hosts import from {:?}: {}", path, err);
                return;
            }
        };
        let resolver = self.components.resolver.as_ref();
        self.config.autoconfigure(|| Some(import_hosts(&text, resolver).records));
    }

    pub fn open_host(&mut self, host: &HostItem) {
        launch_window(&mut self.components, host);
    }

    /// Opens the first menu entry titled `name`, or `name` as a hostname.
    pub fn open_name(&mut self, name: &str) {
        let host = self.config.host_by_name(name);
        launch_window(&mut self.components, &host);
    }

    /// Opens text typed into the quick-connect entry and remembers it.
    pub fn open_text(&mut self, text: &str) -> Result<(), AppError> {
        self.history.add_line(text)?;
        let host = ConfigStore::host_from_text(text);
        launch_window(&mut self.components, &host);
        Ok(())
    }

    /// Opens a window for each direct host child of the sub-menu. Returns the
    /// number of windows.
    pub fn open_all(&mut self, menu_title: &str) -> Result<usize, AppError> {
        let menu = find_menu(self.config.items(), menu_title)?;
        let mut opened = 0;
        for host in menu.hosts() {
            launch_window(&mut self.components, host);
            opened += 1;
        }
        Ok(opened)
    }

    /// Opens the direct host children of the sub-menu as tabs of one window.
    /// A menu without hosts opens nothing and returns false.
    pub fn open_tabs(&mut self, menu_title: &str) -> Result<bool, AppError> {
        let menu = find_menu(self.config.items(), menu_title)?;
        let hosts: Vec<&HostItem> = menu.hosts().collect();
        if hosts.is_empty() {
            log_warn!("Sub-menu '{}' has no hosts to open as tabs", menu_title);
            return Ok(false);
        }

        let terminal = self.components.terminal.as_ref();
        let command = terminal.build_tabbed_command(&menu.items).ok_or(AppError::TabsNotSupported(terminal.name()))?;
        log_info!("Opening {} tabs: {}", hosts.len(), command);
        self.components.launcher.open_tabs(&hosts, &command);
        Ok(true)
    }

    pub fn entry_completions(&mut self, text: &str) -> Vec<String> {
        self.history.freshen();
        completion::entry_completions(&self.history, text).into_iter().map(str::to_string).collect()
    }

    pub fn entry_actions(&self, text: &str) -> Vec<EntryAction<'_>> {
        completion::entry_actions(self.config.items(), text)
    }

    /// Runs the `index`th entry action for `text`: opens the host, or adds
    /// `text` to the menu. Returns false when there is no such action.
    pub fn activate_entry_action(&mut self, text: &str, index: usize) -> Result<bool, AppError> {
        let action = completion::entry_actions(self.config.items(), text).into_iter().nth(index);
        match action {
            Some(EntryAction::Host(host)) => {
                launch_window(&mut self.components, host);
                Ok(true)
            }
            Some(EntryAction::AddHost(text)) => {
                self.config.append_host(ConfigStore::host_from_text(&text))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn list_completions(&mut self, prefix: &str) -> Vec<String> {
        self.history.freshen();
        completion::list_completions(self.config.items(), &self.history, prefix)
    }
}

fn launch_window(components: &mut Components, host: &HostItem) {
    let command = components.terminal.build_window_command(host);
    log_info!("Opening '{}': {}", host.title, command);
    components.launcher.open_window(host, &command);
}

fn find_menu<'a>(items: &'a [Item], title: &str) -> Result<&'a MenuItem, AppError> {
    find_item(items, |_, item| item.as_menu().is_some_and(|menu| menu.title == title))
        .and_then(Item::as_menu)
        .ok_or_else(|| AppError::MenuNotFound(title.to_string()))
}

#[cfg(test)]
#[path = "test/app.rs"]
mod tests;

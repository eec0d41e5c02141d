use crate::command::TerminalKind;
use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MainArgs {
    pub debug: bool,
    pub config_file: Option<PathBuf>,
    pub list_completions: bool,
    pub terminal: TerminalKind,
    pub tabs: Option<String>,
    pub open_all: Option<String>,
    /// Host titles or raw hostnames. With `--list-completions` the first one is
    /// the prefix to complete.
    pub hosts: Vec<String>,
}

impl MainArgs {
    pub fn completion_prefix(&self) -> Option<&str> {
        self.hosts.first().map(String::as_str)
    }
}

pub fn build_cli_command() -> Command {
    Command::new("sshmenu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Menu of SSH connections that open in new terminal windows.")
        .arg(
            Arg::new("config_file")
                .short('c')
                .long("config-file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Read the menu from FILE instead of ~/.sshmenu"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging to ~/.sshmenu.d/logs/sshmenu.log")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list_completions")
                .short('l')
                .long("list-completions")
                .help("List host titles and history entries starting with the given prefix")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("terminal")
                .short('t')
                .long("terminal")
                .value_name("TERMINAL")
                .value_parser(TerminalKind::NAMES)
                .default_value("xterm")
                .help("Terminal family used to build commands"),
        )
        .arg(
            Arg::new("tabs")
                .long("tabs")
                .value_name("MENU")
                .help("Open the hosts of sub-menu MENU as tabs in one window"),
        )
        .arg(
            Arg::new("open_all")
                .long("open-all")
                .value_name("MENU")
                .help("Open every host of sub-menu MENU in its own window"),
        )
        .arg(Arg::new("hosts").value_name("HOST").help("Menu titles or hostnames to connect to").num_args(0..))
}

pub fn parse_main_args_from<I, T>(cmd: &Command, args: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().get_matches_from(args);
    let terminal = matches
        .get_one::<String>("terminal")
        .and_then(|name| TerminalKind::from_name(name))
        .unwrap_or(TerminalKind::Xterm);

    MainArgs {
        debug: matches.get_flag("debug"),
        config_file: matches.get_one::<PathBuf>("config_file").cloned(),
        list_completions: matches.get_flag("list_completions"),
        terminal,
        tabs: matches.get_one::<String>("tabs").cloned(),
        open_all: matches.get_one::<String>("open_all").cloned(),
        hosts: matches.get_many::<String>("hosts").map(|vals| vals.cloned().collect()).unwrap_or_default(),
    }
}

/// Parses the process command line.
pub fn main_args() -> MainArgs {
    parse_main_args_from(&build_cli_command(), std::env::args_os())
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;

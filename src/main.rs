use sshmenu::{
    Result,
    app::{App, Components},
    args::{self, MainArgs},
    command_path,
    config::ConfigStore,
    history::HistoryStore,
    log::LOGGER,
    log_debug, log_error, log_warn,
    menu::{Item, each_item},
};

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = args::main_args();

    if args.debug {
        LOGGER.enable_debug();
        if let Err(err) = LOGGER.log_debug("Debug mode enabled") {
            eprintln!("Failed to initialize debug logging: {}", err);
            return ExitCode::FAILURE;
        }
    }

    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            log_error!("{}", err);
            eprintln!("sshmenu: {}", err);
            ExitCode::FAILURE
        }
    };
    let _ = LOGGER.flush();
    code
}

fn run(args: &MainArgs) -> Result<ExitCode> {
    let config_path = match &args.config_file {
        Some(path) => path.clone(),
        None => ConfigStore::default_path()?,
    };
    log_debug!("Using config file {:?}", config_path);

    let components = Components::new(args.terminal);
    if let Err(err) = command_path::resolve_path_from_env(components.terminal.name()) {
        log_warn!("{}", err);
    }

    let history = HistoryStore::load(HistoryStore::default_path()?);
    let mut app = App::new(ConfigStore::new(config_path), history, components);
    app.refresh_config()?;

    if args.list_completions {
        if let Some(prefix) = args.completion_prefix() {
            for name in app.list_completions(prefix) {
                println!("{}", name);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut acted = false;
    if let Some(menu) = &args.open_all {
        app.open_all(menu)?;
        acted = true;
    }
    if let Some(menu) = &args.tabs {
        app.open_tabs(menu)?;
        acted = true;
    }
    for name in &args.hosts {
        app.open_name(name);
        acted = true;
    }

    if !acted {
        print_menu(app.config().items());
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the menu as an indented outline.
fn print_menu(items: &[Item]) {
    each_item(items, |ancestors, item| {
        let indent = "  ".repeat(ancestors.len());
        match item {
            Item::Separator => println!("{}--", indent),
            Item::Host(host) => println!("{}{}", indent, host.title),
            Item::Menu(menu) => println!("{}{}/", indent, menu.title),
        }
    });
}

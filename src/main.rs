use clap::Parser;
use colored::Colorize;

use dawdle::cli::args::{Cli, Commands, StartArgs};
use dawdle::cli::commands;
use dawdle::config::{Config, Paths};
use dawdle::error::DawdleError;
use dawdle::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<(), DawdleError> {
    let cli = Cli::parse();
    let format = cli.output;

    let mut paths = Paths::default();
    if let Some(path) = &cli.config {
        paths = paths.with_config_file(path);
    }
    let config = Config::load(&paths)?;
    config.general.color.apply();

    let command = cli.command.unwrap_or(Commands::Tui);
    if matches!(command, Commands::Tui) {
        paths.ensure_dirs()?;
        logging::init(LogTarget::File(paths.log_file.clone()))?;
    } else {
        logging::init(LogTarget::Stderr)?;
    }

    let output = match command {
        Commands::Tui => {
            runtime()?.block_on(dawdle::tui::run(&config))?;
            String::new()
        }
        Commands::Start(args) => start(&config, &args)?,
        Commands::Excuses => commands::excuses(format)?,
        Commands::Config(args) => commands::config(&paths, &config, args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn start(config: &Config, args: &StartArgs) -> Result<String, DawdleError> {
    runtime()?.block_on(commands::start(config, args))
}

/// The session runs on one thread; timers and input share it.
fn runtime() -> Result<tokio::runtime::Runtime, DawdleError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

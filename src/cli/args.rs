use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "dawdle")]
#[command(about = "A countdown timer that procrastinates before it starts")]
#[command(long_about = "dawdle - a countdown timer with excuses

Pick a number of minutes and press start. Before counting down, the timer
comes up with two to five excuses and waits a few seconds after each one.
Beg, and it starts right away.

QUICK START:
  dawdle                    Open the interactive timer
  dawdle start 25           Count down 25 minutes in this terminal
  dawdle start 5 --beg      Skip the excuses
  dawdle excuses            See what you're in for

For more information on a specific command, run:
  dawdle <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Use this config file instead of ~/.dawdle/config.yaml
    #[arg(long, global = true, env = "DAWDLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   0-9, Backspace   Edit minutes
    ///   Enter, s         Start (with excuses)
    ///   b                Beg to start (no excuses)
    ///   z                Snooze while counting
    ///   r                Reset
    ///   n                Restart from the completion screen
    ///   ?                Toggle help
    ///   q, Esc           Quit
    #[command(alias = "t")]
    Tui,

    /// Run a countdown in this terminal, line by line
    ///
    /// While it runs, type a command and press Enter:
    ///   snooze (z), reset (r), restart (n),
    ///   start [min] (s), beg [min] (b), quit (q)
    ///
    /// # Examples
    ///
    ///   dawdle start              Use the configured default minutes
    ///   dawdle start 25           25 minutes, after some excuses
    ///   dawdle start 2 --beg      2 minutes, right now
    #[command(alias = "s")]
    Start(StartArgs),

    /// List the built-in excuses
    Excuses,

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: dawdle completions zsh > ~/.zsh/completions/_dawdle
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for line-mode countdowns.
#[derive(Args, Debug, Clone, Default)]
pub struct StartArgs {
    /// Minutes to count down (anything non-numeric means 1)
    pub minutes: Option<String>,

    /// Beg: skip the excuses
    #[arg(long, short = 'b')]
    pub beg: bool,

    /// Keep accepting commands after time is up
    #[arg(long)]
    pub stay: bool,
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["dawdle"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_cli_tui_alias() {
        let cli = Cli::try_parse_from(["dawdle", "t"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui)));
    }

    #[test]
    fn test_cli_start_defaults() {
        let cli = Cli::try_parse_from(["dawdle", "start"]).unwrap();
        if let Some(Commands::Start(args)) = cli.command {
            assert!(args.minutes.is_none());
            assert!(!args.beg);
            assert!(!args.stay);
        } else {
            panic!("Expected Start command");
        }
    }

    #[test]
    fn test_cli_start_beg() {
        let cli = Cli::try_parse_from(["dawdle", "start", "25", "--beg"]).unwrap();
        if let Some(Commands::Start(args)) = cli.command {
            assert_eq!(args.minutes.as_deref(), Some("25"));
            assert!(args.beg);
        } else {
            panic!("Expected Start command");
        }
    }

    #[test]
    fn test_cli_start_accepts_garbage_minutes() {
        let cli = Cli::try_parse_from(["dawdle", "s", "soon"]).unwrap();
        if let Some(Commands::Start(args)) = cli.command {
            assert_eq!(args.minutes.as_deref(), Some("soon"));
        } else {
            panic!("Expected Start command");
        }
    }

    #[test]
    fn test_cli_excuses_json() {
        let cli = Cli::try_parse_from(["dawdle", "excuses", "-o", "json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Excuses)));
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_cli_config_init_force() {
        let cli = Cli::try_parse_from(["dawdle", "config", "init", "--force"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Init { force: true }));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_global_config_path() {
        let cli = Cli::try_parse_from(["dawdle", "excuses", "--config", "/tmp/d.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/d.yaml")));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["dawdle", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["dawdle", "completions", "cmd.exe"]).is_err());
    }
}

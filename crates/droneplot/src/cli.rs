use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::session::{self, Settings};

#[derive(Parser)]
#[command(name = "droneplot")]
#[command(author, version, about)]
#[command(long_about = "Plot drone routes on a 12x12 grid.\n\n\
    A route file holds the starting x and y on the first two lines, then one\n\
    move per line: N, S, E or W.\n\n\
    Examples:\n  \
    droneplot                    Prompt for route files until STOP\n  \
    droneplot route1.txt r2.txt  Plot the given files and exit\n  \
    droneplot config show        Print the current configuration")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Route instruction files to plot without prompting
    pub files: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. markers.path, display.color, session.stop_word)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Log level implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::commands::version::run();
                Ok(())
            }
            None => {
                let config = Config::load_or_default();
                let settings = Settings {
                    markers: config.markers(),
                    colorize: !self.no_color && config.color(),
                    stop_word: config.stop_word().to_string(),
                };
                let mut out = std::io::stdout().lock();
                if self.files.is_empty() {
                    session::run_interactive(&settings, &mut out)
                } else {
                    session::run_batch(&self.files, &settings, &mut out)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["droneplot"]).unwrap();
        assert!(cli.files.is_empty());
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_files_are_positional() {
        let cli = Cli::try_parse_from(["droneplot", "a.txt", "b.txt", "--no-color"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["droneplot", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
        let cli = Cli::try_parse_from(["droneplot", "-v", "-q"]).unwrap();
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_config_set() {
        let cli =
            Cli::try_parse_from(["droneplot", "config", "set", "markers.path", "#"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "markers.path");
                assert_eq!(value, "#");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

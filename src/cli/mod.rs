//! CLI 模块

pub mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::theme::Theme;

#[derive(Parser)]
#[command(name = "taskman")]
#[command(version)]
#[command(about = "Single-screen to-do list with expiring tasks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path (defaults to ~/.taskman/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Theme for this session (Auto, Dark, Light, Paper, Nord)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the task list TUI (default)
    Tui,
    /// Print the config file path and the effective config
    Config,
}

fn parse_theme(name: &str) -> Result<Theme, String> {
    Theme::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.label()).collect();
        format!("unknown theme '{}', expected one of: {}", name, names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_tui() {
        let cli = Cli::try_parse_from(["taskman"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::try_parse_from(["taskman", "--theme", "nord"]).unwrap();
        assert_eq!(cli.theme, Some(Theme::Nord));

        assert!(Cli::try_parse_from(["taskman", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_config_subcommand_with_path() {
        let cli = Cli::try_parse_from(["taskman", "config", "--config", "/tmp/t.toml"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Config));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
    }
}

//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// vta - scaffold new projects from a template repository
#[derive(Parser, Debug)]
#[command(name = "vta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Additional config file layered over ~/.vta/config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from the template
    Create(CreateArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name; also the directory created under the current directory
    pub name: String,

    /// Overwrite the target directory if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Template repository to clone instead of the configured one
    #[arg(long)]
    pub template: Option<String>,

    /// Template branch or tag
    #[arg(long)]
    pub branch: Option<String>,

    /// Package registry used when installing dependencies
    #[arg(long)]
    pub registry: Option<String>,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_force() {
        let cli = Cli::parse_from(["vta", "create", "demo", "-f"]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name, "demo");
                assert!(args.force);
                assert!(args.branch.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_create_overrides() {
        let cli = Cli::parse_from([
            "vta",
            "-vv",
            "create",
            "demo",
            "--template",
            "git@example.com:org/t.git",
            "--branch",
            "next",
            "--registry",
            "https://registry.npmjs.org",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Create(args) => {
                assert!(!args.force);
                assert_eq!(args.template.as_deref(), Some("git@example.com:org/t.git"));
                assert_eq!(args.branch.as_deref(), Some("next"));
                assert_eq!(args.registry.as_deref(), Some("https://registry.npmjs.org"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_version_flag_reports_package_version() {
        let err = Cli::try_parse_from(["vta", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(
            err.to_string().trim(),
            format!("vta {}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_create_requires_name() {
        assert!(Cli::try_parse_from(["vta", "create"]).is_err());
    }

    #[test]
    fn test_parse_config_show_json() {
        let cli = Cli::parse_from(["vta", "--config", "/tmp/vta.yaml", "config", "show", "--json"]);
        assert_eq!(cli.config, Some(Utf8PathBuf::from("/tmp/vta.yaml")));
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Show(ConfigShowArgs { json: true }))
        ));
    }
}

//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigFormat;

/// Documentation site configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path; `.json` files are read as JSON, anything else as TOML
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Treat unknown config fields as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a content directory and a starter config
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the starter config instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config, then summarize it
    #[command(visible_alias = "c")]
    Check,

    /// Validate the config and write it in the renderer's shape
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ConfigFormat::Json)]
    pub format: ConfigFormat,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag_not_shadowed() {
        let err = Cli::try_parse_from(["docsite", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from(["docsite", "-C", "site.json", "export", "-f", "toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("site.json"));
        let Commands::Export { args } = &cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, ConfigFormat::Toml);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_export_defaults_to_json() {
        let cli = Cli::try_parse_from(["docsite", "export"]).unwrap();
        let Commands::Export { args } = &cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, ConfigFormat::Json);
        assert_eq!(cli.config, PathBuf::from("docsite.toml"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docsite", "check", "--strict", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
        assert!(cli.strict);
        assert!(cli.verbose);
    }

    #[test]
    fn test_init_alias() {
        let cli = Cli::try_parse_from(["docsite", "i", "my-docs", "--dry"]).unwrap();
        let Commands::Init { name, dry } = &cli.command else {
            panic!("expected init");
        };
        assert_eq!(name.as_deref(), Some(std::path::Path::new("my-docs")));
        assert!(*dry);
    }
}

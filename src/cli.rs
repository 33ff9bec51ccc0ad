//! Command line arguments

use crate::controller::{SubmitBinding, Variant};
use clap::Parser;
use std::path::PathBuf;

/// Terminal registration form with manual and schema-driven validation
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "signup-tui", version, about)]
pub struct Cli {
    /// Form implementation to start with (F2 switches at runtime)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// How the schema form enables its submit button
    #[arg(long, value_enum)]
    pub submit_binding: Option<SubmitBinding>,

    /// Log submitted passwords instead of redacting them
    #[arg(long)]
    pub show_passwords: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write log output to this file instead of the default log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    pub write_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_leaves_everything_unset() {
        let cli = Cli::try_parse_from(["signup-tui"]).unwrap();
        assert!(cli.variant.is_none());
        assert!(cli.submit_binding.is_none());
        assert!(!cli.show_passwords);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parses_value_enums() {
        let cli = Cli::try_parse_from([
            "signup-tui",
            "--variant",
            "schema",
            "--submit-binding",
            "validity",
            "--show-passwords",
        ])
        .unwrap();
        assert_eq!(cli.variant, Some(Variant::Schema));
        assert_eq!(cli.submit_binding, Some(SubmitBinding::Validity));
        assert!(cli.show_passwords);
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["signup-tui", "--variant", "yup"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

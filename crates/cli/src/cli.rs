use clap::Parser;
use std::fmt;
use std::str::FromStr;

/// Command-line interface for the `extsync` application.
#[derive(Debug, Parser)]
#[command(
    name = "extsync",
    about = "Sync editor extensions, settings and keybindings through plain files",
    disable_version_flag = true
)]
pub struct Cli {
    /// One of: export, import, status, help.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}

/// The four terminal commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncCommand {
    /// Editor → project: extension list, settings, keybindings.
    Export,
    /// Project → editor: install missing extensions, copy config files.
    Import,
    /// Read-only summary of both sides.
    Status,
    Help,
}

/// A command word that is not one of the four known commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl FromStr for SyncCommand {
    type Err = UnknownCommand;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "export" => Ok(Self::Export),
            "import" => Ok(Self::Import),
            "status" => Ok(Self::Status),
            "help" => Ok(Self::Help),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!("EXPORT".parse::<SyncCommand>(), Ok(SyncCommand::Export));
        assert_eq!("Import".parse::<SyncCommand>(), Ok(SyncCommand::Import));
        assert_eq!("status".parse::<SyncCommand>(), Ok(SyncCommand::Status));
        assert_eq!("help".parse::<SyncCommand>(), Ok(SyncCommand::Help));
    }

    #[test]
    fn unknown_command_is_lowercased_in_message() {
        let err = "Frobnicate".parse::<SyncCommand>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn positional_command_is_optional() {
        let cli = Cli::try_parse_from(["extsync"]).unwrap();
        assert!(cli.command.is_none());
        let cli = Cli::try_parse_from(["extsync", "status"]).unwrap();
        assert_eq!(cli.command.as_deref(), Some("status"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

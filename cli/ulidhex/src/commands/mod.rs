//! CLI commands.

mod decode;
mod encode;
mod inspect;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::output::OutputFormat;

/// ulidhex - Convert ULIDs between Crockford Base32 and hex.
#[derive(Debug, Parser)]
#[command(name = "ulidhex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "ULIDHEX_FORMAT", default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode hex (up to 32 digits, optional 0x) as a 26-character ULID.
    Encode(encode::EncodeCommand),

    /// Decode a ULID to hex.
    Decode(decode::DecodeCommand),

    /// Show a ULID's timestamp and hex.
    Inspect(inspect::InspectCommand),

    /// Find ULIDs in text.
    Scan(scan::ScanCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
        };
        debug!(command = self.command.name(), format = ?ctx.format, "dispatching");

        match self.command {
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Inspect(cmd) => cmd.run(ctx),
            Commands::Scan(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("ulidhex {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Encode(_) => "encode",
            Commands::Decode(_) => "decode",
            Commands::Inspect(_) => "inspect",
            Commands::Scan(_) => "scan",
            Commands::Version => "version",
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from(["ulidhex", "encode", "0xff"]).unwrap();
        assert!(matches!(cli.command, Commands::Encode(_)));
        assert_eq!(cli.format, "table");
    }

    #[test]
    fn test_parse_global_format_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ulidhex",
            "inspect",
            "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        assert_eq!(cli.command.name(), "inspect");
    }

    #[test]
    fn test_parse_decode_radix_requires_display() {
        let result = Cli::try_parse_from([
            "ulidhex",
            "decode",
            "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "--radix",
            "10",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "ulidhex",
            "decode",
            "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "--display",
            "--radix",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.command.name(), "decode");
    }

    #[test]
    fn test_parse_rejects_unknown_radix() {
        let result = Cli::try_parse_from([
            "ulidhex",
            "decode",
            "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "--display",
            "--radix",
            "8",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_scan_without_file() {
        let cli = Cli::try_parse_from(["ulidhex", "scan"]).unwrap();
        assert_eq!(cli.command.name(), "scan");
    }
}

//! Decode command (ULID to hex).

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;
use ulidhex_codec::Radix;

use crate::input;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Decode a ULID.
///
/// Prints the canonical 32-digit hex form unless `--display` is given.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// ULID (26 characters). Read from stdin when omitted.
    #[arg(value_name = "ULID")]
    ulid: Option<String>,

    /// Render the timestamp and random part separately, dropping a zero
    /// timestamp and all padding.
    #[arg(long)]
    display: bool,

    /// Radix for --display output (10 or 16, default 16).
    #[arg(long, requires = "display")]
    radix: Option<Radix>,
}

#[derive(Debug, Serialize)]
struct DecodeView {
    ulid: String,
    timestamp_ms: u64,
    random: String,
    hex: Option<String>,
    display: Option<String>,
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let ulid = input::value(self.ulid)?;

        let radix = self.radix.unwrap_or_default();
        let decoded = if self.display {
            ulidhex_codec::decode_display(&ulid, radix)?
        } else {
            ulidhex_codec::decode(&ulid)?
        };
        debug!(display = self.display, radix = %radix, "decoded");

        match ctx.format {
            OutputFormat::Table => println!("{}", decoded),
            OutputFormat::Json => {
                let (timestamp_ms, random) = ulidhex_codec::decode_parts(&ulid)?;
                let (hex, display) = if self.display {
                    (None, Some(decoded))
                } else {
                    (Some(decoded), None)
                };
                let view = DecodeView {
                    ulid,
                    timestamp_ms,
                    random: format!("{random:020x}"),
                    hex,
                    display,
                };
                print_single(&view);
            }
        }

        Ok(())
    }
}

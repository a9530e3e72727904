//! Encode command (hex to ULID).

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::input;
use crate::output::print_value;

use super::CommandContext;

/// Encode hex as a ULID.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Hex value, up to 32 digits, optionally prefixed with 0x. Read from
    /// stdin when omitted.
    #[arg(value_name = "HEX")]
    hex: Option<String>,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let hex = input::value(self.hex)?;
        let ulid = ulidhex_codec::encode(&hex)?;
        debug!(input_len = hex.len(), "encoded");

        print_value("ulid", &ulid, ctx.format);
        Ok(())
    }
}

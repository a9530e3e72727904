//! Inspect command: the timestamp and hex behind a ULID.

use anyhow::Result;
use clap::Args;
use ulidhex_codec::Inspection;

use crate::input;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Show what a ULID decodes to.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// ULID (26 characters). Read from stdin when omitted.
    #[arg(value_name = "ULID")]
    ulid: Option<String>,
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let ulid = input::value(self.ulid)?;
        let inspection = Inspection::new(&ulid)?;

        match ctx.format {
            OutputFormat::Table => println!("{}", inspection.render_markdown()),
            OutputFormat::Json => print_single(&inspection),
        }

        Ok(())
    }
}

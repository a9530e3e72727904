//! Scan command: find ULID-shaped tokens in text.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;
use ulidhex_codec::{scan, Inspection};

use crate::input;
use crate::output::{print_info, print_output, OutputFormat};

use super::CommandContext;

/// Find ULIDs in a file or stdin.
#[derive(Debug, Args)]
pub struct ScanCommand {
    /// File to scan. Reads stdin when omitted.
    #[arg(value_name = "PATH")]
    file: Option<PathBuf>,

    /// Only report the ULID covering this byte offset.
    #[arg(long, value_name = "OFFSET")]
    at: Option<usize>,
}

#[derive(Debug, Serialize, Tabled)]
struct ScanRow {
    #[tabled(rename = "OFFSET")]
    offset: usize,
    #[tabled(rename = "ULID")]
    ulid: String,
    #[tabled(rename = "TIME")]
    time: String,
    #[tabled(rename = "HEX")]
    hex: String,
}

impl ScanRow {
    fn new(offset: usize, ulid: &str) -> Result<Self> {
        let inspection = Inspection::new(ulid)?;
        Ok(Self {
            offset,
            ulid: inspection.ulid.clone(),
            time: inspection.iso_time(),
            hex: inspection.hex,
        })
    }
}

impl ScanCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let text = input::text(self.file.as_deref())?;

        let matches: Vec<_> = match self.at {
            Some(offset) => scan::find_at(&text, offset).into_iter().collect(),
            None => scan::find_all(&text),
        };
        debug!(bytes = text.len(), found = matches.len(), "scanned");

        let rows = matches
            .iter()
            .map(|m| ScanRow::new(m.start(), m.as_str()))
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        if ctx.format == OutputFormat::Table && rows.len() > 1 {
            print_info(&format!("{} ULIDs found", rows.len()));
        }

        Ok(())
    }
}

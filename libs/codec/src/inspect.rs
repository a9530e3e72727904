//! Human-readable breakdown of a ULID: its timestamp and display hex.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::codec::{self, Radix};
use crate::CodecError;

/// What a ULID string decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// The ULID as given.
    pub ulid: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// The timestamp as a UTC date.
    pub time: DateTime<Utc>,
    /// The display hex form (see [`codec::decode_display`]).
    pub hex: String,
}

impl Inspection {
    /// Inspects a 26-symbol Base32 string.
    pub fn new(ulid: &str) -> Result<Self, CodecError> {
        let (timestamp_ms, _) = codec::decode_parts(ulid)?;
        let time = i64::try_from(timestamp_ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or(CodecError::TimestampOutOfRange(timestamp_ms))?;
        let hex = codec::decode_display(ulid, Radix::Hex)?;

        Ok(Self {
            ulid: ulid.to_string(),
            timestamp_ms,
            time,
            hex,
        })
    }

    /// The timestamp in ISO-8601 with millisecond precision, e.g.
    /// `2016-07-30T23:54:10.259Z`.
    #[must_use]
    pub fn iso_time(&self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Renders the breakdown as a markdown panel.
    #[must_use]
    pub fn render_markdown(&self) -> String {
        format!(
            "ULID: `{}`\n\ntime: {}\n\nhex: `{}`",
            self.ulid,
            self.iso_time(),
            self.hex
        )
    }
}

//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use ulidhex_codec::CodecError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No input given. Pass a value as an argument or pipe it on stdin.")]
    EmptyInput,

    #[error("Failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Codec(#[from] CodecError),
}

impl CliError {
    /// Create a read error for a named input.
    pub fn read(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            source_name: source_name.into(),
            source,
        }
    }
}

/// Hint shown under a codec error, if any.
fn codec_hint(err: &CodecError) -> Option<&'static str> {
    match err {
        CodecError::InvalidLength { expected: 32, .. } => {
            Some("Hint: hex input holds at most 32 digits, optionally prefixed with 0x.")
        }
        CodecError::InvalidLength { .. } => Some("Hint: a ULID is exactly 26 characters."),
        CodecError::InvalidCharacter { .. } => Some(
            "Hint: hex uses 0-9 and a-f; ULIDs use 0-9 and A-Z without I, L, O and U.",
        ),
        CodecError::Overflow { .. } => {
            Some("Hint: the first ULID character must be between 0 and 7.")
        }
        CodecError::UnsupportedRadix(_) => Some("Hint: use --radix 10 or --radix 16."),
        CodecError::TimestampOutOfRange(_) => None,
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let codec_err = err.downcast_ref::<CodecError>().or_else(|| {
        err.downcast_ref::<CliError>().and_then(|cli_err| match cli_err {
            CliError::Codec(codec_err) => Some(codec_err),
            _ => None,
        })
    });

    if let Some(hint) = codec_err.and_then(codec_hint) {
        eprintln!("\n{}", hint.yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_long_hex() {
        let err = CodecError::InvalidLength {
            expected: 32,
            actual: 40,
        };
        assert!(codec_hint(&err).unwrap().contains("32 digits"));
    }

    #[test]
    fn test_hint_for_short_ulid() {
        let err = CodecError::InvalidLength {
            expected: 26,
            actual: 10,
        };
        assert!(codec_hint(&err).unwrap().contains("26 characters"));
    }

    #[test]
    fn test_codec_error_message_passes_through() {
        let err = CliError::from(CodecError::Overflow { symbol: '8' });
        assert_eq!(
            err.to_string(),
            CodecError::Overflow { symbol: '8' }.to_string()
        );
    }
}

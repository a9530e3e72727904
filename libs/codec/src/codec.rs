//! Conversion between the hex and Crockford Base32 forms of a 128-bit value.
//!
//! The Base32 form is 26 symbols: 10 for the 48-bit timestamp followed by 16
//! for the 80 random bits. 26 symbols carry 130 bits, so the leading symbol
//! only ever uses its low 3 bits.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::CodecError;

/// Length of the canonical hex form.
pub const HEX_LEN: usize = 32;

/// Length of the Base32 form.
pub const BASE32_LEN: usize = 26;

/// Number of Base32 symbols holding the timestamp.
pub const TIME_LEN: usize = 10;

/// Number of Base32 symbols holding the random part.
pub const RANDOM_LEN: usize = 16;

/// Bits in the random part.
pub const RANDOM_BITS: u32 = 80;

/// Largest timestamp a ULID can carry.
pub const MAX_TIMESTAMP_MS: u64 = (1 << 48) - 1;

/// Largest value of the leading Base32 symbol.
const MAX_LEADING_VALUE: u8 = 7;

/// Output radix for [`decode_display`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 10.
    Decimal,
    /// Base 16, lowercase digits.
    #[default]
    Hex,
}

impl Radix {
    /// Returns the numeric radix.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Renders `value` in this radix without padding.
    #[must_use]
    pub fn render(self, value: u128) -> String {
        match self {
            Radix::Decimal => value.to_string(),
            Radix::Hex => format!("{value:x}"),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u32> for Radix {
    type Error = CodecError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hex),
            other => Err(CodecError::UnsupportedRadix(other.to_string())),
        }
    }
}

impl FromStr for Radix {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "10" | "dec" | "decimal" => Ok(Radix::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(Radix::Hex),
            _ => Err(CodecError::UnsupportedRadix(s.to_string())),
        }
    }
}

/// Encodes a hex string as a 26-symbol Crockford Base32 string.
///
/// The input may carry a `0x` prefix, may use either case, and may be shorter
/// than 32 digits, in which case it is zero-padded on the left.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] if more than 32 digits remain after
/// the prefix is removed, and [`CodecError::InvalidCharacter`] for anything
/// that is not a hex digit.
///
/// # Example
///
/// ```
/// use ulidhex_codec::encode;
///
/// assert_eq!(
///     encode("0x01563e3ab5d3d6764c61efb99302bd5b").unwrap(),
///     "01ARZ3NDEKTSV4RRFFQ69G5FAV"
/// );
/// ```
pub fn encode(hex: &str) -> Result<String, CodecError> {
    parse_hex(hex).map(to_base32)
}

/// Parses a hex string into a 128-bit value.
///
/// Accepts the same input as [`encode`]. Reported character positions count
/// from the start of `hex`, including any prefix.
pub fn parse_hex(hex: &str) -> Result<u128, CodecError> {
    let (prefix_len, digits) = match hex.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => (2, &hex[2..]),
        _ => (0, hex),
    };

    let len = digits.chars().count();
    if len > HEX_LEN {
        return Err(CodecError::InvalidLength {
            expected: HEX_LEN,
            actual: len,
        });
    }

    let mut value = 0u128;
    for (index, character) in digits.chars().enumerate() {
        let digit = u8::try_from(character)
            .ok()
            .and_then(alphabet::hex_value)
            .ok_or(CodecError::InvalidCharacter {
                character,
                index: prefix_len + index,
            })?;
        value = (value << 4) | u128::from(digit);
    }

    Ok(value)
}

/// Renders a 128-bit value as 26 Crockford Base32 symbols.
#[must_use]
pub fn to_base32(value: u128) -> String {
    let mut symbols = [b'0'; BASE32_LEN];
    let mut rest = value;
    for slot in symbols.iter_mut().rev() {
        *slot = alphabet::symbol((rest & 0x1f) as u8);
        rest >>= 5;
    }
    symbols.iter().copied().map(char::from).collect()
}

/// Renders a 128-bit value as 32 lowercase hex digits.
#[must_use]
pub fn to_hex(value: u128) -> String {
    format!("{value:032x}")
}

/// Looks up the value of every symbol of a Base32 string.
fn symbol_values(id: &str) -> Result<[u8; BASE32_LEN], CodecError> {
    let len = id.chars().count();
    if len != BASE32_LEN {
        return Err(CodecError::InvalidLength {
            expected: BASE32_LEN,
            actual: len,
        });
    }

    let mut values = [0u8; BASE32_LEN];
    for ((index, character), slot) in id.chars().enumerate().zip(values.iter_mut()) {
        *slot = u8::try_from(character)
            .ok()
            .and_then(alphabet::symbol_value)
            .ok_or(CodecError::InvalidCharacter { character, index })?;
    }

    if values[0] > MAX_LEADING_VALUE {
        let symbol = id.chars().next().unwrap_or_default();
        return Err(CodecError::Overflow { symbol });
    }

    Ok(values)
}

/// Parses a 26-symbol Base32 string into a 128-bit value.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] unless the input is exactly 26
/// symbols, [`CodecError::InvalidCharacter`] for symbols outside the
/// alphabet, and [`CodecError::Overflow`] when the leading symbol is above
/// `7`.
pub fn parse_base32(id: &str) -> Result<u128, CodecError> {
    let values = symbol_values(id)?;
    Ok(values
        .iter()
        .fold(0u128, |acc, &value| (acc << 5) | u128::from(value)))
}

/// Decodes a Base32 string into its canonical 32-digit lowercase hex form.
///
/// Inverse of [`encode`] for canonical hex input.
///
/// # Example
///
/// ```
/// use ulidhex_codec::decode;
///
/// assert_eq!(
///     decode("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap(),
///     "01563e3ab5d3d6764c61efb99302bd5b"
/// );
/// ```
pub fn decode(id: &str) -> Result<String, CodecError> {
    parse_base32(id).map(to_hex)
}

/// Decodes a Base32 string into its timestamp and random parts.
///
/// The timestamp is the first 10 symbols read most-significant first. The
/// random part is accumulated from the last symbol backwards, each symbol
/// weighted by `32^position`.
pub fn decode_parts(id: &str) -> Result<(u64, u128), CodecError> {
    let values = symbol_values(id)?;
    let (time, random) = values.split_at(TIME_LEN);

    let timestamp_ms = time
        .iter()
        .fold(0u64, |acc, &value| (acc << 5) | u64::from(value));

    let mut random_part = 0u128;
    let mut weight = 1u128;
    for &value in random.iter().rev() {
        random_part += u128::from(value) * weight;
        weight *= 32;
    }

    Ok((timestamp_ms, random_part))
}

/// Decodes a Base32 string for display.
///
/// The timestamp and the random part are rendered separately in `radix`
/// without padding and concatenated. A zero timestamp renders as nothing, so
/// the result is not a fixed-width or reversible form; use [`decode`] for
/// that.
///
/// # Example
///
/// ```
/// use ulidhex_codec::{decode_display, Radix};
///
/// let hex = decode_display("01ARZ3NDEKTSV4RRFFQ69G5FAV", Radix::Hex).unwrap();
/// assert_eq!(hex, "1563e3ab5d3d6764c61efb99302bd5b");
///
/// let dec = decode_display("00000000000000000000000010", Radix::Decimal).unwrap();
/// assert_eq!(dec, "32");
/// ```
pub fn decode_display(id: &str, radix: Radix) -> Result<String, CodecError> {
    let (timestamp_ms, random) = decode_parts(id)?;

    let time = match timestamp_ms {
        0 => String::new(),
        ms => radix.render(u128::from(ms)),
    };

    Ok(time + &radix.render(random))
}

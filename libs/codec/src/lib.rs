//! # ulidhex-codec
//!
//! Conversion between the two textual forms of a 128-bit ULID value.
//!
//! ## Forms
//!
//! - Base32: 26 Crockford symbols, e.g. `01ARZ3NDEKTSV4RRFFQ69G5FAV`. The
//!   first 10 symbols hold a 48-bit millisecond timestamp, the last 16 hold
//!   80 random bits.
//! - Hex: 32 lowercase digits, e.g. `01563e3ab5d3d6764c61efb99302bd5b`.
//!
//! ## Decoding
//!
//! [`decode`] gives the canonical, fixed-width hex form and is the inverse of
//! [`encode`]. [`decode_display`] renders the timestamp and random part
//! separately and drops a zero timestamp; it is meant for showing a ULID to a
//! person, not for storage.
//!
//! All conversions are pure and never log.

mod alphabet;
mod codec;
mod error;
mod identifier;
mod inspect;
pub mod scan;

pub use alphabet::ALPHABET;
pub use codec::{
    decode, decode_display, decode_parts, encode, parse_base32, parse_hex, to_base32, to_hex,
    Radix, BASE32_LEN, HEX_LEN, MAX_TIMESTAMP_MS, RANDOM_BITS, RANDOM_LEN, TIME_LEN,
};
pub use error::CodecError;
pub use identifier::Identifier;
pub use inspect::Inspection;

/// Re-export ulid for consumers that convert to and from `ulid::Ulid`
pub use ulid::Ulid;

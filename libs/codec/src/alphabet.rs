//! Symbol tables for Crockford Base32 and hexadecimal digits.

/// Crockford Base32 symbols, indexed by value.
pub const ALPHABET: [u8; 32] = *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Marker for bytes that are not part of an alphabet.
const NONE: u8 = u8::MAX;

const BASE32_VALUES: [u8; 256] = {
    let mut table = [NONE; 256];
    let mut value = 0;
    while value < ALPHABET.len() {
        let symbol = ALPHABET[value];
        table[symbol as usize] = value as u8;
        table[symbol.to_ascii_lowercase() as usize] = value as u8;
        value += 1;
    }
    table
};

const HEX_VALUES: [u8; 256] = {
    let mut table = [NONE; 256];
    let mut byte = 0;
    while byte < 256 {
        table[byte] = match byte as u8 {
            b @ b'0'..=b'9' => b - b'0',
            b @ b'a'..=b'f' => b - b'a' + 10,
            b @ b'A'..=b'F' => b - b'A' + 10,
            _ => NONE,
        };
        byte += 1;
    }
    table
};

/// Returns the Base32 symbol for a 5-bit value.
#[inline]
#[must_use]
pub const fn symbol(value: u8) -> u8 {
    ALPHABET[(value & 0x1f) as usize]
}

/// Returns the 5-bit value of a Base32 symbol.
///
/// Lowercase letters decode like their uppercase forms. The excluded letters
/// `I`, `L`, `O` and `U` have no value.
#[inline]
#[must_use]
pub const fn symbol_value(byte: u8) -> Option<u8> {
    match BASE32_VALUES[byte as usize] {
        NONE => None,
        value => Some(value),
    }
}

/// Returns the 4-bit value of a hex digit, in either case.
#[inline]
#[must_use]
pub const fn hex_value(byte: u8) -> Option<u8> {
    match HEX_VALUES[byte as usize] {
        NONE => None,
        value => Some(value),
    }
}

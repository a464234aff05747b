//! Base-32 geohash alphabet and lookup tables.
//!
//! Both directions are derived from [`ALPHABET`] so they cannot drift apart.

/// The 32 geohash symbols, indexed by their 5-bit value.
///
/// `a`, `i`, `l` and `o` are excluded.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Marker for bytes that are not geohash symbols.
const NOT_A_SYMBOL: u8 = u8::MAX;

/// Inverse of [`ALPHABET`] over ASCII.
static DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [NOT_A_SYMBOL; 128];
    let mut value = 0;
    while value < 32 {
        table[ALPHABET[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// Maps a 5-bit value to its symbol. Bits above the lowest five are ignored.
#[inline]
pub fn symbol(value: u8) -> char {
    ALPHABET[(value & 0x1f) as usize] as char
}

/// Maps a symbol to its 5-bit value, or `None` if it is not in the alphabet.
#[inline]
pub fn value_of(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match DECODE_TABLE[symbol as usize] {
        NOT_A_SYMBOL => None,
        value => Some(value),
    }
}

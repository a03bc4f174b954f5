//! Runtime value representation
//!
//! Every stack slot and every grid cell holds a [`Value`]: a signed 64-bit
//! integer. Characters enter and leave the machine through exactly one pair of
//! conversions, [`char_to_value`] and [`value_to_char`], which all instructions
//! that mix characters and numbers (`g`, `p`, `,`, `~`, string mode) go through.

/// A stack slot or grid cell
pub type Value = i64;

/// Code of the space character, the content of every blank cell
pub const SPACE: Value = b' ' as Value;

/// Convert a character into its numeric code
pub fn char_to_value(c: char) -> Value {
    u32::from(c) as Value
}

/// Convert a numeric code back into a character
///
/// Returns `None` for negative codes, codes above the Unicode range, and
/// surrogates.
pub fn value_to_char(v: Value) -> Option<char> {
    u32::try_from(v).ok().and_then(char::from_u32)
}

/// Convert a numeric code into a character for output or display
///
/// Codes that are not Unicode scalar values become U+FFFD.
pub fn value_to_char_lossy(v: Value) -> char {
    value_to_char(v).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Whether a value renders as a visible character (used by diagnostics and the UI)
pub fn is_printable(v: Value) -> bool {
    value_to_char(v).is_some_and(|c| !c.is_control())
}

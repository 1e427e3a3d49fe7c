//! DNA hash: a per-character hex expansion that companion scripts use to
//! compare string identity.
//!
//! This is an identity encoding, not a digest. Output length grows with the
//! input and the input can be read straight back out of it.
//!
//! "Character" means a UTF-16 code unit, which is what the host scripting
//! runtime indexes strings by. Each unit becomes its lowercase hex value
//! padded to at least two digits. Units above `0xFF` are not truncated and
//! produce wider groups, so the output is only fixed-width (`2 × len`) for
//! single-byte input. [`dna_hash_strict`] rejects everything else.

use std::fmt::Write;

/// Hex-expands `input`, one group per UTF-16 code unit. Never fails.
///
/// ```
/// assert_eq!(mdt_utils::dna_hash("A"), "41");
/// assert_eq!(mdt_utils::dna_hash("\n"), "0a");
/// assert_eq!(mdt_utils::dna_hash(""), "");
/// ```
#[must_use]
pub fn dna_hash(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for unit in input.encode_utf16() {
        write!(out, "{unit:02x}").ok();
    }
    out
}

/// Same output as [`dna_hash`], but only for input whose every unit fits a byte.
///
/// # Errors
/// `InvalidArgument` naming the first character above `U+00FF` and its
/// position in the input.
pub fn dna_hash_strict(input: &str) -> Result<String, crate::Error> {
    if let Some((index, ch)) = input.chars().enumerate().find(|(_, c)| u32::from(*c) > 0xFF) {
        return Err(crate::Error::InvalidArgument(format!(
            "character {ch:?} (U+{:04X}) at index {index} does not fit in one byte",
            u32::from(ch)
        )));
    }
    Ok(dna_hash(input))
}

/// True when [`dna_hash`] yields exactly two hex digits per character.
#[must_use]
pub fn is_single_byte(input: &str) -> bool {
    input.chars().all(|c| u32::from(c) <= 0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_low_units_to_two_digits() {
        assert_eq!(dna_hash("\u{1}"), "01");
        assert_eq!(dna_hash("\t"), "09");
    }

    #[test]
    fn latin1_stays_two_wide() {
        assert_eq!(dna_hash("é"), "e9");
        assert_eq!(dna_hash("\u{ff}"), "ff");
    }

    #[test]
    fn astral_chars_expand_to_surrogate_pairs() {
        // U+1F600 is d83d de00 in UTF-16.
        assert_eq!(dna_hash("😀"), "d83dde00");
    }
}

use super::{invcp, Error};

/// Most significant hex digits that can still name a scalar value (`10ffff`)
const MAX_HEX_DIGITS: usize = 6;

/// Interpret a bare hexadecimal string (no `0x` or `\u` prefix, any case) as a
/// Unicode scalar value and return the corresponding character.
///
/// Leading zeros are accepted; after them at most six digits may follow.
pub fn decode_code_point(hex: &str) -> Result<char, Error> {
    if hex.is_empty() {
        return Err(invcp(hex, "empty input"));
    }
    // from_str_radix would otherwise accept a leading sign
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invcp(hex, format!("{c:?} is not a hexadecimal digit")));
    }
    let significant = hex.trim_start_matches('0');
    if significant.len() > MAX_HEX_DIGITS {
        return Err(invcp(
            hex,
            format!("more than {MAX_HEX_DIGITS} significant hexadecimal digits"),
        ));
    }
    if significant.is_empty() {
        return Ok('\0');
    }
    let value = u32::from_str_radix(significant, 16).map_err(|err| invcp(hex, err))?;
    char::from_u32(value).ok_or_else(|| invcp(hex, format!("{value:#x} is not a scalar value")))
}

/// Lowercase hexadecimal representation of a code point, without prefix
pub fn to_hex(code_point: u32) -> String {
    format!("{code_point:x}")
}

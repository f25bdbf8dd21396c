//! Alphabet resolution.
//!
//! Alphabets are ordered uppercase, lowercase, digits, then symbols, and
//! never contain duplicates.

use crate::domain::Style;

const HEX: &[u8] = b"0123456789ABCDEFabcdef";
const HEX_LOWER: &[u8] = b"0123456789abcdef";

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ALPHANUMERIC_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const EXTENDED_URL_SAFE: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
const EXTENDED_URL_SAFE_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~";

const EXTENDED: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~!$()*+,;=:";
const EXTENDED_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-._~!$()*+,;=:";

/// Symbols that only appear when `url_safe` is off.
pub const URL_UNSAFE_SYMBOLS: &str = "!$()*+,;=:";

/// Resolve the alphabet for a style.
///
/// `url_safe` only affects [`Style::Extended`]; the other styles contain no
/// symbols.
#[must_use]
pub const fn resolve(style: Style, only_lower_case: bool, url_safe: bool) -> &'static [u8] {
    match (style, only_lower_case, url_safe) {
        (Style::Hex, false, _) => HEX,
        (Style::Hex, true, _) => HEX_LOWER,
        (Style::Alphanumeric, false, _) => ALPHANUMERIC,
        (Style::Alphanumeric, true, _) => ALPHANUMERIC_LOWER,
        (Style::Extended, false, true) => EXTENDED_URL_SAFE,
        (Style::Extended, true, true) => EXTENDED_URL_SAFE_LOWER,
        (Style::Extended, false, false) => EXTENDED,
        (Style::Extended, true, false) => EXTENDED_LOWER,
    }
}

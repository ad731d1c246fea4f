//! Compiled validation patterns for the three address representations.
//!
//! Patterns come in two scopes: address patterns bound the input to what an
//! IPv4 value can hold (digit counts chosen so the parsed value stays near
//! the 32-bit range), while the general patterns only constrain the alphabet
//! and are used by the codec's defensive parses.

use std::sync::OnceLock;

use regex::Regex;

use crate::repr::AddressKind;

static DECIMAL_ADDR: OnceLock<Regex> = OnceLock::new();
static HEX_ADDR: OnceLock<Regex> = OnceLock::new();
static DOTTED_QUAD: OnceLock<Regex> = OnceLock::new();
static DOTTED_QUAD_STRICT: OnceLock<Regex> = OnceLock::new();
static DECIMAL_GENERAL: OnceLock<Regex> = OnceLock::new();
static HEX_GENERAL: OnceLock<Regex> = OnceLock::new();

/// One octet group: 0-255 without sign or whitespace.
const OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

/// Decimal address form: 1-10 ASCII digits.
pub fn decimal_addr() -> &'static Regex {
    DECIMAL_ADDR.get_or_init(|| {
        Regex::new(r"^[0-9]{1,10}$").expect("invalid decimal address pattern")
    })
}

/// Hexadecimal address form: optional `0x`/`0X` prefix, 1-8 hex digits.
pub fn hex_addr() -> &'static Regex {
    HEX_ADDR.get_or_init(|| {
        Regex::new(r"^(0[xX])?[0-9a-fA-F]{1,8}$").expect("invalid hex address pattern")
    })
}

/// Lenient dotted-quad form: 1-4 octet groups separated by periods.
pub fn dotted_quad() -> &'static Regex {
    DOTTED_QUAD.get_or_init(|| {
        Regex::new(&format!("^(?:{OCTET}\\.){{0,3}}{OCTET}$"))
            .expect("invalid dotted-quad pattern")
    })
}

/// Strict dotted-quad form: exactly 4 octet groups.
pub fn dotted_quad_strict() -> &'static Regex {
    DOTTED_QUAD_STRICT.get_or_init(|| {
        Regex::new(&format!("^(?:{OCTET}\\.){{3}}{OCTET}$"))
            .expect("invalid strict dotted-quad pattern")
    })
}

/// Any run of ASCII digits, regardless of length.
pub fn decimal_general() -> &'static Regex {
    DECIMAL_GENERAL
        .get_or_init(|| Regex::new(r"^[0-9]+$").expect("invalid general decimal pattern"))
}

/// Any optionally prefixed run of hex digits, regardless of length.
pub fn hex_general() -> &'static Regex {
    HEX_GENERAL.get_or_init(|| {
        Regex::new(r"^(0[xX])?[0-9a-fA-F]+$").expect("invalid general hex pattern")
    })
}

/// Address-scoped pattern for a representation, keyed by tag.
pub fn address_pattern(kind: AddressKind) -> &'static Regex {
    match kind {
        AddressKind::Decimal => decimal_addr(),
        AddressKind::Hexadecimal => hex_addr(),
        AddressKind::DottedQuad => dotted_quad(),
    }
}

/// Alphabet-only pattern for a representation. Dotted-quad has no general
/// form; its grammar is the address pattern itself.
pub fn general_pattern(kind: AddressKind) -> Option<&'static Regex> {
    match kind {
        AddressKind::Decimal => Some(decimal_general()),
        AddressKind::Hexadecimal => Some(hex_general()),
        AddressKind::DottedQuad => None,
    }
}

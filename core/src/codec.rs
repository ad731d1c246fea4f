//! # Address Codec
//!
//! Stateless parsing, validation and re-rendering of IPv4 address
//! representations.
//!
//! Validation and conversion are deliberately separate concerns: only
//! [`is_valid_ipv4`] enforces the 32-bit range, while [`convert`] trusts its
//! input to have been validated and performs format math alone. Keeping the
//! two apart lets a UI convert partial input (a dotted-quad still missing
//! octets) without tripping range checks it has not asked for.

use crate::error::CodecError;
use crate::patterns;
use crate::repr::AddressKind;

/// Largest value an IPv4 address can hold, 255.255.255.255.
pub const V4_MAX: u64 = 0xffff_ffff;

/// Longest dotted-quad string: `255.255.255.255`.
const MAX_DOTTED_LEN: usize = 15;

/// Input accepted by [`is_valid_ipv4`]: either address text or an
/// already-parsed non-negative integer.
#[derive(Clone, Copy, Debug)]
pub enum ValidationInput<'a> {
    Text(&'a str),
    Value(u64),
}

impl<'a> From<&'a str> for ValidationInput<'a> {
    fn from(text: &'a str) -> Self {
        ValidationInput::Text(text)
    }
}

impl From<u64> for ValidationInput<'static> {
    fn from(value: u64) -> Self {
        ValidationInput::Value(value)
    }
}

/// Checks whether `input` holds a value in the IPv4 range, under the given
/// representation (`None` accepts any representation).
///
/// For text input the cascade mirrors the field grammar: a string containing
/// a period is only ever considered as a dotted-quad, a plain digit run as
/// decimal before hexadecimal. `strict` additionally requires dotted-quad
/// input to carry all four octet groups.
///
/// Range and pattern failures are data (`Ok(false)`); pairing integer input
/// with a non-decimal representation is a caller error and is reported.
pub fn is_valid_ipv4<'a>(
    input: impl Into<ValidationInput<'a>>,
    kind: Option<AddressKind>,
    strict: bool,
) -> Result<bool, CodecError> {
    match input.into() {
        ValidationInput::Text(text) => Ok(validate_text(text, kind, strict)),
        ValidationInput::Value(value) => match kind {
            None | Some(AddressKind::Decimal) => Ok(value <= V4_MAX),
            Some(other) => Err(CodecError::IntegerWithNonDecimal(other)),
        },
    }
}

fn validate_text(text: &str, kind: Option<AddressKind>, strict: bool) -> bool {
    let accepts = |candidate| kind.is_none() || kind == Some(candidate);

    if text.contains('.') && accepts(AddressKind::DottedQuad) {
        return text.len() <= MAX_DOTTED_LEN
            && patterns::dotted_quad().is_match(text)
            && (!strict || patterns::dotted_quad_strict().is_match(text));
    }
    if accepts(AddressKind::Decimal) && patterns::decimal_addr().is_match(text) {
        return text.parse::<u64>().is_ok_and(|value| value <= V4_MAX);
    }
    if accepts(AddressKind::Hexadecimal) && patterns::hex_addr().is_match(text) {
        let digits = strip_hex_prefix(text);
        return u64::from_str_radix(digits, 16).is_ok_and(|value| value <= V4_MAX);
    }
    false
}

/// Classifies free text into the representation the validation cascade would
/// accept it as, if any. Ambiguous digit runs resolve to decimal, matching
/// the cascade ordering.
pub fn detect_kind(text: &str) -> Option<AddressKind> {
    AddressKind::ALL
        .into_iter()
        .find(|kind| validate_text(text, Some(*kind), false))
}

/// Re-renders `value` from one representation into another, reversing the
/// octet order when `reverse` is set.
///
/// Callers are expected to have validated `value` with [`is_valid_ipv4`]
/// first; the dotted-quad and hexadecimal paths still parse defensively. An
/// empty result is the "no rendering" sentinel, distinct from an error.
/// When `safe` is set, malformed-value errors also collapse to the empty
/// sentinel; invalid arguments (equal source and destination) propagate
/// regardless.
///
/// Decimal input is treated as an arbitrary-width integer and rendered to
/// the minimal byte count rather than a fixed four bytes, so small values
/// produce short hex strings. The other directions always carry the octet
/// groups they were given. This asymmetry is intentional, inherited
/// behavior; see DESIGN.md.
pub fn convert(
    value: &str,
    from: AddressKind,
    to: AddressKind,
    reverse: bool,
    safe: bool,
) -> Result<String, CodecError> {
    use AddressKind::{Decimal, DottedQuad, Hexadecimal};

    let result = match (from, to) {
        (Decimal, DottedQuad) => dec_to_dotted_quad(value, reverse),
        (Decimal, Hexadecimal) => dec_to_hex(value, reverse),
        (DottedQuad, Decimal) => dotted_quad_to_dec(value, reverse),
        (DottedQuad, Hexadecimal) => dotted_quad_to_hex(value, reverse),
        (Hexadecimal, Decimal) => hex_to_dec(value, reverse),
        // Reversal happens once, in the second stage.
        (Hexadecimal, DottedQuad) => {
            hex_to_dec(value, false).and_then(|dec| dec_to_dotted_quad(&dec, reverse))
        }
        // Remaining pairs are the identity conversions.
        _ => Err(CodecError::SameRepresentation(from)),
    };

    match result {
        Err(err) if safe && err.is_value_error() => Ok(String::new()),
        other => other,
    }
}

fn dec_to_dotted_quad(value: &str, reverse: bool) -> Result<String, CodecError> {
    if !patterns::decimal_general().is_match(value) {
        return Ok(String::new());
    }
    let parsed = value
        .parse::<u128>()
        .map_err(|_| CodecError::OutOfRange(value.to_string()))?;
    let octets = quad_octets(parsed, reverse)?;
    let rendered: Vec<String> = octets.iter().map(u8::to_string).collect();
    Ok(rendered.join("."))
}

fn dec_to_hex(value: &str, reverse: bool) -> Result<String, CodecError> {
    if value.is_empty() {
        return Ok(String::new());
    }
    let parsed = value.parse::<u128>().map_err(|_| CodecError::Malformed {
        kind: AddressKind::Decimal,
        value: value.to_string(),
    })?;
    Ok(render_hex(&minimal_bytes(parsed, reverse)))
}

fn dotted_quad_to_dec(value: &str, reverse: bool) -> Result<String, CodecError> {
    let octets = split_octets(value)?;
    Ok(sequence_value(&octets, reverse, value)?.to_string())
}

fn dotted_quad_to_hex(value: &str, reverse: bool) -> Result<String, CodecError> {
    let mut octets = split_octets(value)?;
    if reverse {
        octets.reverse();
    }
    Ok(render_hex(&octets))
}

fn hex_to_dec(value: &str, reverse: bool) -> Result<String, CodecError> {
    if !patterns::hex_general().is_match(value) {
        return Ok(String::new());
    }
    // Only the prefix is stripped; leading zero digits stay and take part
    // in the byte grouping, which keeps reversal self-inverse.
    let trimmed = strip_hex_prefix(value);
    let padded;
    let digits = if trimmed.len() % 2 == 1 {
        padded = format!("0{trimmed}");
        padded.as_str()
    } else {
        trimmed
    };
    let bytes = decode_hex(digits, value)?;
    Ok(sequence_value(&bytes, reverse, value)?.to_string())
}

/// Expands a 32-bit value into its four octets, most significant first, or
/// least significant first when `reverse` is set.
fn quad_octets(value: u128, reverse: bool) -> Result<[u8; 4], CodecError> {
    if value > V4_MAX as u128 {
        return Err(CodecError::OutOfRange(value.to_string()));
    }
    let mut octets = (value as u32).to_be_bytes();
    if reverse {
        octets.reverse();
    }
    Ok(octets)
}

/// Minimal-width big-endian byte rendering of an unsigned integer. Zero
/// needs no bytes at all and renders empty.
fn minimal_bytes(value: u128, reverse: bool) -> Vec<u8> {
    let width = ((128 - value.leading_zeros()) as usize + 7) / 8;
    let mut bytes = value.to_be_bytes()[16 - width..].to_vec();
    if reverse {
        bytes.reverse();
    }
    bytes
}

/// Octet groups are parsed as bytes but the group count is not re-validated;
/// callers run `is_valid_ipv4` first.
fn split_octets(value: &str) -> Result<Vec<u8>, CodecError> {
    value
        .split('.')
        .map(|group| {
            group.parse::<u8>().map_err(|_| CodecError::Malformed {
                kind: AddressKind::DottedQuad,
                value: value.to_string(),
            })
        })
        .collect()
}

fn decode_hex(digits: &str, source: &str) -> Result<Vec<u8>, CodecError> {
    debug_assert_eq!(digits.len() % 2, 0);
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| CodecError::Malformed {
                kind: AddressKind::Hexadecimal,
                value: source.to_string(),
            })
        })
        .collect()
}

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Interprets a byte sequence as an unsigned integer, most significant byte
/// first, or least significant first when `reverse` is set. The accumulator
/// caps the defensive path at 16 bytes.
fn sequence_value(bytes: &[u8], reverse: bool, source: &str) -> Result<u128, CodecError> {
    if bytes.len() > 16 {
        return Err(CodecError::OutOfRange(source.to_string()));
    }
    let mut value: u128 = 0;
    if reverse {
        for byte in bytes.iter().rev() {
            value = (value << 8) | u128::from(*byte);
        }
    } else {
        for byte in bytes {
            value = (value << 8) | u128::from(*byte);
        }
    }
    Ok(value)
}

fn render_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

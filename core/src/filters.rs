//! Per-representation character filters, used by input layers to sanitize
//! typed or pasted text before it reaches validation.

use crate::repr::AddressKind;

/// Whether an input field bound to `kind` accepts the character at all.
pub fn is_allowed_char(c: char, kind: AddressKind) -> bool {
    match kind {
        AddressKind::Decimal => c.is_ascii_digit(),
        AddressKind::Hexadecimal => c.is_ascii_hexdigit() || c == 'x' || c == 'X',
        AddressKind::DottedQuad => c.is_ascii_digit() || c == '.',
    }
}

/// Drops every character the representation's field would not accept.
pub fn filter_chars(input: &str, kind: AddressKind) -> String {
    input.chars().filter(|c| is_allowed_char(*c, kind)).collect()
}

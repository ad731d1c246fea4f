use std::fmt;
use std::str::FromStr;

/// Textual representation of an IPv4 address.
///
/// Validation functions take `Option<AddressKind>` where `None` means
/// "accept whichever representation matches".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Plain base-10 integer, e.g. `3232235777`.
    Decimal,
    /// Optionally `0x`-prefixed base-16 string, e.g. `c0a80101`.
    Hexadecimal,
    /// Four decimal octets separated by periods, e.g. `192.168.1.1`.
    DottedQuad,
}

impl AddressKind {
    pub const ALL: [AddressKind; 3] = [
        AddressKind::Decimal,
        AddressKind::Hexadecimal,
        AddressKind::DottedQuad,
    ];

    /// The two representations other than `self`, in `ALL` order.
    pub fn others(self) -> impl Iterator<Item = AddressKind> {
        Self::ALL.into_iter().filter(move |kind| *kind != self)
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressKind::Decimal => "decimal",
            AddressKind::Hexadecimal => "hexadecimal",
            AddressKind::DottedQuad => "dotted-quad",
        };
        write!(f, "{name}")
    }
}

impl FromStr for AddressKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dec" | "decimal" => Ok(AddressKind::Decimal),
            "hex" | "hexadecimal" => Ok(AddressKind::Hexadecimal),
            "dotted" | "quad" | "dotted-quad" => Ok(AddressKind::DottedQuad),
            _ => Err(format!("unknown representation: {s}")),
        }
    }
}

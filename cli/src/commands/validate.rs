use anyhow::bail;
use ipconv_core::{AddressKind, codec};

use crate::terminal::print;

pub fn validate(value: &str, kind: Option<AddressKind>, strict: bool) -> anyhow::Result<()> {
    let trimmed = value.trim();

    if !codec::is_valid_ipv4(trimmed, kind, strict)? {
        match kind {
            Some(kind) => bail!("not a valid IPv4 {kind} value: {trimmed}"),
            None => bail!("not a valid IPv4 value in any representation: {trimmed}"),
        }
    }

    match kind.or_else(|| codec::detect_kind(trimmed)) {
        Some(kind) => print::print_status(format!("valid IPv4 {kind} value: {trimmed}")),
        None => print::print_status(format!("valid IPv4 value: {trimmed}")),
    }

    Ok(())
}

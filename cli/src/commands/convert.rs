use anyhow::{Context, bail};
use ipconv_core::{AddressKind, codec, filters};

use crate::terminal::print;

pub fn convert(
    value: &str,
    from: Option<AddressKind>,
    to: Option<AddressKind>,
    reverse: bool,
) -> anyhow::Result<()> {
    let trimmed = value.trim();

    // An explicit --from behaves like pasting into that field: characters
    // the field would not accept are dropped before validation.
    let cleaned;
    let (input, source) = match from {
        Some(kind) => {
            cleaned = filters::filter_chars(trimmed, kind);
            (cleaned.as_str(), kind)
        }
        None => {
            let kind = codec::detect_kind(trimmed)
                .with_context(|| format!("unrecognized value: {trimmed}"))?;
            (trimmed, kind)
        }
    };

    if !codec::is_valid_ipv4(input, Some(source), false)? {
        bail!("not a valid IPv4 {source} value: {input}");
    }

    let targets: Vec<AddressKind> = match to {
        Some(kind) if kind == source => {
            bail!("--to must differ from the source representation ({source})")
        }
        Some(kind) => vec![kind],
        None => source.others().collect(),
    };

    print::aligned_line(&source.to_string(), input);
    for target in targets {
        let rendered = codec::convert(input, source, target, reverse, false)?;
        print::aligned_line(&target.to_string(), &rendered);
    }

    Ok(())
}

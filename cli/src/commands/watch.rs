use std::io::{self, BufRead};

use ipconv_core::{AddressKind, Converter, codec};
use tracing::warn;

use crate::terminal::print;

/// Interactive stand-in for the three linked GUI fields: every entered line
/// is classified, then fanned out to the other representations through the
/// coordinator.
pub fn watch(reverse: bool) -> anyhow::Result<()> {
    let mut converter = Converter::new();
    converter.set_reverse(reverse);

    for kind in AddressKind::ALL {
        let label = kind.to_string();
        converter.register_sink(
            kind,
            Box::new(move |rendered: &str| print::aligned_line(&label, rendered)),
        );
    }

    print::header("watching for addresses");
    print::print_status("enter a value in any notation, 'r' toggles byte order, 'q' quits");

    let mut last: Option<(String, AddressKind)> = None;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            "q" | "quit" => break,
            "r" | "reverse" => {
                let reverse = !converter.reverse();
                converter.set_reverse(reverse);
                print::print_status(format!(
                    "byte order reversal: {}",
                    if reverse { "on" } else { "off" }
                ));
                // The toggle never re-dispatches on its own; replay the
                // last value to refresh the other representations.
                if let Some((value, source)) = &last {
                    dispatch(&mut converter, value, *source);
                }
                continue;
            }
            _ => {}
        }

        match codec::detect_kind(trimmed) {
            Some(source) => {
                dispatch(&mut converter, trimmed, source);
                last = Some((trimmed.to_string(), source));
            }
            None => warn!("unrecognized value: {trimmed}"),
        }
    }

    Ok(())
}

fn dispatch(converter: &mut Converter, value: &str, source: AddressKind) {
    print::aligned_line(&source.to_string(), value);
    converter.set_value(value, source);
}

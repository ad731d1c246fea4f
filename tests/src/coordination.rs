#![cfg(test)]
use std::cell::RefCell;
use std::rc::Rc;

use ipconv_core::AddressKind::{Decimal, DottedQuad, Hexadecimal};
use ipconv_core::{AddressKind, Converter, ValueSink, codec};

/// Simulated display field: remembers the last value the coordinator
/// pushed into it, like a text control's change handler would.
#[derive(Clone, Default)]
struct Field(Rc<RefCell<String>>);

impl Field {
    fn sink(&self) -> Box<dyn ValueSink> {
        let cell = Rc::clone(&self.0);
        Box::new(move |rendered: &str| *cell.borrow_mut() = rendered.to_string())
    }

    fn value(&self) -> String {
        self.0.borrow().clone()
    }
}

fn linked_fields() -> (Converter, Field, Field, Field) {
    let dec = Field::default();
    let hex = Field::default();
    let quad = Field::default();

    let mut converter = Converter::new();
    converter.register_sink(Decimal, dec.sink());
    converter.register_sink(Hexadecimal, hex.sink());
    converter.register_sink(DottedQuad, quad.sink());

    (converter, dec, hex, quad)
}

#[test]
fn editing_one_field_updates_the_other_two() {
    let (mut converter, dec, hex, quad) = linked_fields();

    converter.set_value("10", Decimal);

    assert_eq!(quad.value(), "0.0.0.10");
    // Minimal-width hex, not zero-padded to four bytes.
    assert_eq!(hex.value(), "0a");
    assert_eq!(dec.value(), "");
}

/// Types a dotted-quad one character at a time, the way the GUI would see
/// it. Partial states must never error out of the dispatch path, and fields
/// fed from partial values hold the value of those partial bytes.
#[test]
fn incremental_typing_never_fails() {
    let (mut converter, dec, hex, _quad) = linked_fields();

    let full = "192.168.1.1";
    for end in 1..=full.len() {
        converter.set_value(&full[..end], DottedQuad);
    }

    assert_eq!(dec.value(), "3232235777");
    assert_eq!(hex.value(), "c0a80101");
}

/// Trailing-period states ("192.") fail octet parsing and leave the linked
/// fields at their previous contents.
#[test]
fn malformed_intermediate_states_leave_fields_untouched() {
    let (mut converter, dec, _hex, _quad) = linked_fields();

    converter.set_value("192", DottedQuad);
    assert_eq!(dec.value(), "192");

    converter.set_value("192.", DottedQuad);
    assert_eq!(dec.value(), "192");
}

/// The reverse-checkbox contract: toggling alone changes nothing, replaying
/// the last edited field refreshes the other two under the new order.
#[test]
fn reverse_toggle_with_replay() {
    let (mut converter, dec, hex, _quad) = linked_fields();

    let last_edited = "192.168.1.1";
    converter.set_value(last_edited, DottedQuad);
    assert_eq!(hex.value(), "c0a80101");

    converter.set_reverse(true);
    assert_eq!(hex.value(), "c0a80101");

    converter.set_value(last_edited, DottedQuad);
    assert_eq!(hex.value(), "0101a8c0");
    assert_eq!(dec.value(), "16885952");
}

/// Clipboard-style flow: classify free text first, then dispatch it as the
/// representation it was recognized as.
#[test]
fn detect_then_dispatch() {
    let (mut converter, dec, _hex, quad) = linked_fields();

    for pasted in ["deadbeef", "  3232235777  ", "10.0.0.1"] {
        let trimmed = pasted.trim();
        if let Some(kind) = codec::detect_kind(trimmed) {
            converter.set_value(trimmed, kind);
        }
    }

    // Last paste was a dotted-quad; the decimal field reflects it.
    assert_eq!(dec.value(), "167772161");
    // The paste before it was decimal; the quad field was last written then.
    assert_eq!(quad.value(), "192.168.1.1");
}

#[test]
fn sinks_are_optional_during_partial_initialization() {
    let mut converter = Converter::new();
    let hex = Field::default();
    converter.register_sink(AddressKind::Hexadecimal, hex.sink());

    converter.set_value("255", Decimal);

    assert_eq!(hex.value(), "ff");
}

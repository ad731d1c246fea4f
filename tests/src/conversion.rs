#![cfg(test)]
use ipconv_core::AddressKind::{Decimal, DottedQuad, Hexadecimal};
use ipconv_core::{CodecError, codec};

/// Converting out and back again restores the original decimal string,
/// under both byte orders: reversing twice is the identity.
#[test]
fn pairwise_round_trips() {
    for value in ["1", "255", "65536", "3232235777", "4294967295"] {
        for reverse in [false, true] {
            let quad = codec::convert(value, Decimal, DottedQuad, reverse, false).unwrap();
            assert_eq!(
                codec::convert(&quad, DottedQuad, Decimal, reverse, false).unwrap(),
                value,
                "dotted-quad round-trip failed for {value} reverse={reverse}"
            );

            let hex = codec::convert(value, Decimal, Hexadecimal, reverse, false).unwrap();
            assert_eq!(
                codec::convert(&hex, Hexadecimal, Decimal, reverse, false).unwrap(),
                value,
                "hex round-trip failed for {value} reverse={reverse}"
            );
        }
    }
}

/// A chain through all three representations lands back on the original
/// value when no reversal is in play.
#[test]
fn chained_round_trip() {
    for value in ["16909060", "3232235777"] {
        let quad = codec::convert(value, Decimal, DottedQuad, false, false).unwrap();
        let hex = codec::convert(&quad, DottedQuad, Hexadecimal, false, false).unwrap();
        let back = codec::convert(&hex, Hexadecimal, Decimal, false, false).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn strict_acceptance_implies_four_groups() {
    let accepted = ["192.168.1.1", "0.0.0.0", "255.255.255.255", "1.2.3.4"];
    for value in accepted {
        assert_eq!(codec::is_valid_ipv4(value, Some(DottedQuad), true), Ok(true));
        assert_eq!(value.matches('.').count(), 3);
        assert!(
            value
                .split('.')
                .all(|group| group.parse::<u16>().is_ok_and(|octet| octet <= 255))
        );
    }
}

#[test]
fn lenient_only_acceptance_implies_partial_quad() {
    let partial = ["1.2", "192.168.1", "10.0"];
    for value in partial {
        assert_eq!(codec::is_valid_ipv4(value, Some(DottedQuad), false), Ok(true));
        assert_eq!(codec::is_valid_ipv4(value, Some(DottedQuad), true), Ok(false));
        assert!(value.matches('.').count() < 3);
    }
}

#[test]
fn boundary_values_across_representations() {
    assert_eq!(codec::is_valid_ipv4("4294967295", None, false), Ok(true));
    assert_eq!(codec::is_valid_ipv4("4294967296", None, false), Ok(false));
    assert_eq!(codec::is_valid_ipv4("0xffffffff", None, false), Ok(true));
    assert_eq!(codec::is_valid_ipv4("0x100000000", None, false), Ok(false));
    assert_eq!(codec::is_valid_ipv4("255.255.255.255", None, false), Ok(true));
    assert_eq!(codec::is_valid_ipv4("256.0.0.0", None, false), Ok(false));
}

#[test]
fn identity_conversion_is_an_argument_error() {
    for kind in [Decimal, Hexadecimal, DottedQuad] {
        let result = codec::convert("10", kind, kind, false, true);
        assert_eq!(result, Err(CodecError::SameRepresentation(kind)));
        assert!(!result.unwrap_err().is_value_error());
    }
}

/// Known-value conversions, checked byte for byte.
#[test]
fn reference_conversions() {
    assert_eq!(
        codec::convert("3232235777", Decimal, DottedQuad, false, false).unwrap(),
        "192.168.1.1"
    );
    assert_eq!(
        codec::convert("192.168.1.1", DottedQuad, Hexadecimal, true, false).unwrap(),
        "0101a8c0"
    );
    assert_eq!(
        codec::convert("deadbeef", Hexadecimal, Decimal, false, false).unwrap(),
        "3735928559"
    );
}

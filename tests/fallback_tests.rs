mod common;

use thermo_codec::{encode_text, CodecError, Decoder, SymbolTableBuilder};

use crate::common::*;

#[test]
fn tables_know_when_a_codeword_contains_the_delimiter() {
    init_logger();
    let tables = SymbolTableBuilder::from_text("aaaabbbccd").build_with(FixedGenerator::new(&["0", "1", "00", "01"]));

    assert!(!tables.is_delimiter_safe());
    assert_eq!("01", tables.encoding().get('d').unwrap().to_string());
}

#[test]
fn prefix_fallback_can_return_the_wrong_symbols() {
    init_logger();
    // a -> 0, b -> 1, c -> 00, d -> 1000100
    let tables = SymbolTableBuilder::from_text("aaaabbbccd")
        .build_with(FixedGenerator::new(&["0", "1", "00", "1000100"]));
    let output = encode_text(&tables, "d").unwrap();
    assert_eq!("011000100", output.bitstream.to_string());

    let report = Decoder::new(tables.decoding()).decode(&output.bitstream).unwrap();

    // "100" only matches "1" as a prefix, then "00" matches exactly: "d" comes back as "bc"
    assert_eq!("bc", report.symbols);
    assert_eq!(1, report.degraded.len());
    assert_eq!(2, report.degraded[0].position);
    assert_eq!("100", report.degraded[0].fragment);
    assert_eq!("1", report.degraded[0].codeword.to_string());
    assert_eq!('b', report.degraded[0].symbol);
}

#[test]
fn delimiter_inside_codewords_can_go_unnoticed() {
    // a -> 0, b -> 1, c -> 1010: the record of "c" splits into the exact codewords of "b" and "a"
    let tables = SymbolTableBuilder::from_text("aaabbc").build_with(FixedGenerator::new(&["0", "1", "1010"]));
    let output = encode_text(&tables, "c").unwrap();

    let report = Decoder::new(tables.decoding()).decode(&output.bitstream).unwrap();
    assert!(report.is_exact());
    assert_eq!("ba", report.symbols);
}

#[test]
fn fragments_matching_nothing_are_reported() {
    // a -> 0, b -> 1, c -> 00, d -> 01: the record of "d" leaves an empty fragment behind
    let tables = SymbolTableBuilder::from_text("aaaabbbccd").build_with(FixedGenerator::new(&["0", "1", "00", "01"]));
    let output = encode_text(&tables, "ad").unwrap();
    assert_eq!("0100101", output.bitstream.to_string());

    match Decoder::new(tables.decoding()).decode(&output.bitstream) {
        Err(CodecError::FramingAmbiguity { fragment, position }) => {
            assert!(fragment.is_empty());
            assert_eq!(5, position);
        }
        other => panic!("expected a framing ambiguity, got {:?}", other),
    }
}

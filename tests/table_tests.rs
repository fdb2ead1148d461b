mod common;

use rstest::*;
use tempfile::Builder;
use thermo_codec::{SymbolTableBuilder, SymbolTables, ThermometerGenerator};

use crate::common::*;

#[rstest]
fn more_frequent_symbols_get_smaller_ranks(#[values(0, 1, 2)] seed: u64) {
    let text = get_zipfian_text(seed, 1.0);
    let tables = SymbolTableBuilder::from_text(&text).build();
    let order = tables.order();

    for (i, first) in order.iter().enumerate() {
        for second in &order[i + 1..] {
            let (f1, f2) = (tables.frequency(*first).unwrap(), tables.frequency(*second).unwrap());
            assert!(f1 >= f2, "{:?} ({}) ranked before {:?} ({})", first, f1, second, f2);
            if f1 > f2 {
                assert!(tables.rank(*first) < tables.rank(*second));
            }
        }
    }
}

#[test]
fn tables_are_exact_inverses() {
    let text = get_zipfian_text(7, 1.2);
    let tables = SymbolTableBuilder::from_text(&text).build();

    assert_eq!(tables.len(), tables.encoding().len());
    assert_eq!(tables.len(), tables.decoding().len());

    for (rank, (symbol, codeword)) in tables.encoding().iter().enumerate() {
        assert_eq!(Some(symbol), tables.decoding().get(codeword));
        assert_eq!(ThermometerGenerator::codeword_at(rank), *codeword);
    }
}

#[test]
fn most_frequent_symbol_gets_the_shortest_codeword() {
    let tables = SymbolTableBuilder::from_text("aabbbc").build();

    assert_eq!(vec!['b', 'a', 'c'], tables.order());
    assert_eq!(Some(0), tables.rank('b'));
    assert_eq!("0", tables.encoding().get('b').unwrap().to_string());
    assert_eq!("1", tables.encoding().get('a').unwrap().to_string());
    assert_eq!("00", tables.encoding().get('c').unwrap().to_string());
}

#[test]
fn stored_tables_reproduce_the_same_codewords() -> anyhow::Result<()> {
    init_logger();
    let text = get_zipfian_text(3, 1.0);
    let tables = SymbolTableBuilder::from_text(&text).build();

    let file = Builder::new().prefix("tables").tempfile()?;
    tables.store(file.path())?;
    let loaded = SymbolTables::load(file.path())?;

    assert_eq!(tables.order(), loaded.order());
    for (symbol, codeword) in tables.encoding().iter() {
        assert_eq!(Some(codeword), loaded.encoding().get(symbol));
        assert_eq!(tables.frequency(symbol), loaded.frequency(symbol));
    }
    Ok(())
}

#[test]
fn empty_tables_can_be_stored() -> anyhow::Result<()> {
    let tables = SymbolTableBuilder::new().build();

    let file = Builder::new().prefix("tables").tempfile()?;
    tables.store(file.path())?;

    assert!(SymbolTables::load(file.path())?.is_empty());
    Ok(())
}

#[test]
fn tables_from_other_generators_are_not_stored() -> anyhow::Result<()> {
    let tables = SymbolTableBuilder::from_text("aabbbc").build_with(FixedGenerator::new(&["1", "0", "11"]));

    let file = Builder::new().prefix("tables").tempfile()?;
    assert!(!tables.is_canonical());
    assert!(tables.store(file.path()).is_err());
    Ok(())
}

#[test]
fn loading_a_missing_file_fails() {
    assert!(SymbolTables::load("/this/path/does/not/exist.tables").is_err());
}

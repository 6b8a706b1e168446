//! End-to-end TAB reading against tables produced by the builder
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use arcnames_formats::tab::{
    EntryDetails, RecordRead, TabBuilder, TabEntry, TabError, TabFile, TabFormat, TabReader,
};
use arcnames_hash::NameHash;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Cursor;

fn car_table() -> Vec<u8> {
    TabBuilder::new(TabFormat::Legacy)
        .add_entry(TabEntry::new(
            NameHash::from_path("textures/car.dds"),
            0x100,
            0x40,
        ))
        .build()
        .unwrap()
}

#[test]
fn legacy_single_record() {
    let table = TabFile::parse(&car_table(), TabFormat::Legacy).unwrap();

    assert_eq!(
        table.entries,
        vec![TabEntry::new(NameHash::new(0x204f_79bf), 0x100, 0x40)]
    );
}

#[test]
fn extended_records_keep_details() {
    let entry = TabEntry::new(NameHash::from_path("textures/car_dif.ddsc"), 0x8000, 0x123)
        .with_details(EntryDetails::Extended {
            uncompressed_size: 0x400,
            compressed_block_index: 0,
            compression_type: 1,
            flags: 0,
        });
    let data = TabBuilder::new(TabFormat::Extended)
        .add_entry(entry)
        .build()
        .unwrap();

    let table = TabFile::parse(&data, TabFormat::Extended).unwrap();
    assert_eq!(table.entries, vec![entry]);
    assert_eq!(table.entries[0].hash.get(), 0x9338_a6cf);
}

#[test]
fn magic_mismatch_is_fatal_for_both_layouts() {
    let mut data = car_table();
    data[0..4].copy_from_slice(&0x0043_5241u32.to_le_bytes());

    for format in [TabFormat::Legacy, TabFormat::Extended] {
        let err = TabFile::parse(&data, format).unwrap_err();
        assert!(matches!(err, TabError::InvalidMagic { .. }), "{format}");
    }
}

#[test]
fn end_is_a_value_not_an_error() {
    let data = car_table();
    let mut reader = TabReader::new(Cursor::new(&data[..data.len() - 1]), TabFormat::Legacy)
        .unwrap();

    match reader.next_record() {
        Ok(RecordRead::End { trailing }) => assert_eq!(trailing, 11),
        other => panic!("expected end of table, got {other:?}"),
    }
}

#[test]
fn header_cut_short_is_an_empty_table() {
    let data = car_table();
    for end in [0, 4, 8] {
        let table = TabFile::parse(&data[..end], TabFormat::Legacy).unwrap();
        assert!(table.header.is_none());
        assert!(table.entries.is_empty());
        assert_eq!(table.format(), TabFormat::Legacy);
    }
}

fn layout() -> impl Strategy<Value = TabFormat> {
    prop_oneof![Just(TabFormat::Legacy), Just(TabFormat::Extended)]
}

proptest! {
    #[test]
    fn truncation_keeps_complete_records(
        format in layout(),
        hashes in prop::collection::vec(any::<u32>(), 0..32),
        cut in 0usize..4096,
    ) {
        let data = TabBuilder::new(format)
            .add_entries(hashes.iter().map(|&h| TabEntry::new(NameHash::new(h), h, 1)))
            .build()
            .unwrap();

        let records_start = format.header_size() + if format == TabFormat::Extended { 4 } else { 0 };
        let end = records_start + cut.min(data.len() - records_start);
        let complete = (end - records_start) / format.entry_size();

        let parsed = TabFile::parse(&data[..end], format).unwrap();
        prop_assert_eq!(parsed.entries.len(), complete);
        for (entry, &h) in parsed.entries.iter().zip(&hashes) {
            prop_assert_eq!(entry.hash.get(), h);
        }
    }
}

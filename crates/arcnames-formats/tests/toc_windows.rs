//! TOC windows embedded in larger payload files
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use arcnames_formats::toc::{TocBuilder, TocEntry, TocFile, TocReader, TocResult};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Seek, SeekFrom};

#[test]
fn only_sentinel_offsets_are_patched() {
    let data = TocBuilder::new()
        .add_entry(TocEntry::new("patched_file.bin", 0, 128))
        .add_entry(TocEntry::new("inherited_file.bin", 0x1000, 128))
        .build()
        .unwrap();

    let toc = TocFile::parse(&data).unwrap();
    assert_eq!(toc.entries.len(), 2);
    assert_eq!(toc.patched().collect::<Vec<_>>(), vec!["patched_file.bin"]);
}

#[test]
fn window_inside_archive() {
    let toc = TocBuilder::new()
        .add_entry(TocEntry::new("a.ee", 0x40, 1))
        .add_entry(TocEntry::new("b.ee", 0, 2))
        .build()
        .unwrap();

    let mut arc = vec![0xaa; 0x40];
    arc.extend_from_slice(&toc);
    arc.extend_from_slice(&[0xbb; 0x40]);

    let mut cursor = Cursor::new(arc);
    cursor.seek(SeekFrom::Start(0x40)).unwrap();
    let entries = TocReader::new(cursor, toc.len() as u64)
        .collect::<TocResult<Vec<_>>>()
        .unwrap();

    assert_eq!(
        entries,
        vec![TocEntry::new("a.ee", 0x40, 1), TocEntry::new("b.ee", 0, 2)]
    );
}

#[test]
fn truncated_window_keeps_complete_records() {
    let data = TocBuilder::new()
        .add_entry(TocEntry::new("first.bin", 0, 1))
        .add_entry(TocEntry::new("second.bin", 0, 1))
        .build()
        .unwrap();

    let toc = TocFile::parse(&data[..data.len() - 6]).unwrap();
    assert_eq!(toc.entries, vec![TocEntry::new("first.bin", 0, 1)]);
}

//! File format parsers and builders for hash-addressed TAB/ARC archives
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::doc_markdown)] // Format names don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::similar_names)] // Domain-specific naming patterns
#![allow(clippy::return_self_not_must_use)] // Builder patterns
//! Game content ships as TAB/ARC pairs: the TAB is a directory of fixed-width
//! records keyed by the lookup3 hash of each file's path, the ARC holds the
//! payload bytes at the recorded offsets. Some payloads are themselves TOC
//! record streams that list files by name.
//!
//! # Supported Formats
//!
//! - **TAB (legacy)**: 12-byte header, 12-byte `{hash, offset, size}` records
//! - **TAB (extended)**: 24-byte header, compressed-block index, 20-byte records
//! - **TOC**: length-prefixed name records embedded in ARC payloads
//!
//! # Design Principles
//!
//! - **Symmetric Operations**: every parser has a matching builder
//! - **Streaming Reads**: records are read one stride at a time; a short read
//!   at the end of a stream is a normal end, reported as a tagged value rather
//!   than an error
//! - **Fixed Strides**: the record size comes from the caller's layout tag,
//!   never from file content

#![warn(missing_docs)]

/// Archive table (TAB) directory files
///
/// TAB files map name hashes to `{offset, size}` windows in the companion
/// ARC file. Two on-disk generations exist and are selected with
/// [`tab::TabFormat`].
///
/// See the [`tab`] module for layouts and reader usage.
pub mod tab;
/// TOC record streams embedded in ARC payloads
///
/// A TOC lists archive entries by name. Entries whose offset is zero are
/// supplied by a patch rather than the base archive.
pub mod toc;

pub(crate) mod io_util;

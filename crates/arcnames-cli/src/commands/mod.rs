//! Subcommand handlers

pub mod dictionary;
pub mod filelist;
pub mod namehash;
pub mod patched;

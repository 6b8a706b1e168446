//! Name hashing for hash-addressed game archives
//!
//! Archive tables never store the path of a contained file, only a 32-bit
//! hash of it. This crate provides that hash and a small value type around
//! it.
//!
//! # Components
//!
//! - **lookup3**: Bob Jenkins' `hashlittle()`, bit-exact with the hashes
//!   stored in shipped TAB files
//! - **NameHash**: typed 32-bit hash value with hex formatting and serde
//!   support
//!
//! # Examples
//!
//! ```
//! use arcnames_hash::NameHash;
//!
//! let hash = NameHash::from_path("textures/car.dds");
//! assert_eq!(hash.get(), 0x204f_79bf);
//! assert_eq!(hash.to_string(), "204f79bf");
//! ```

#![warn(missing_docs)]

pub mod lookup3;
pub mod name_hash;

pub use lookup3::hashlittle;
pub use name_hash::{NameHash, ParseNameHashError};

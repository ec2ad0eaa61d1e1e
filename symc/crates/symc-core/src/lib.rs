//! symc-core - Fixed-Width Identifier Symbols
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate turns identifiers over `[0-9A-Za-z_]` into 64-bit symbols and
//! provides a small sorted map keyed by them.
//!
//! - [`letter`]: the 6-bit alphabet and identifier validation
//! - [`symbol`]: exact and lossy encoding, decoding, lossy-format detection
//! - [`space`]: `Space<V>`, a sorted singly linked map keyed by symbol
//! - [`index_vec`]: the typed arena the space stores its nodes in
//! - [`error`]: the single invalid-character error
//!
//! # Example
//!
//! ```
//! use symc_core::{encode, Space};
//!
//! let mut scope = Space::new();
//! scope.set(encode("counter")?, 0u32);
//! scope.set(encode("an_extremely_descriptive_name")?, 1);
//!
//! assert_eq!(scope.get(encode("counter")?), Some(&0));
//! # Ok::<(), symc_core::SymbolError>(())
//! ```
//
// ============================================================================
// SYMBOL LAYOUT
// ============================================================================
//
// Exact (identifier of 10 characters or fewer):
// ```
//  63 62    60 59                                         6 5      0
// ┌──┬────────┬─────────────────────────────────────────┬──────────┐
// │0 │ 0 0 0  │ letter 9 | letter 8 | ... | letter 1    │ letter 0 │
// └──┴────────┴─────────────────────────────────────────┴──────────┘
// ```
//
// Lossy (longer identifiers):
// ```
//  63 62 61         50 49              32 31                       0
// ┌──┬──┬─────────────┬──────────────────┬──────────────────────────┐
// │1 │0 │ last two    │ first three      │ fingerprint of the rest  │
// └──┴──┴─────────────┴──────────────────┴──────────────────────────┘
// ```
//
// The fingerprint is a fast non-cryptographic hash. Two long identifiers with
// the same edges and colliding middles map to the same symbol; that is the
// price of a fixed width.

pub mod error;
pub mod index_vec;
pub mod letter;
pub mod space;
pub mod symbol;

pub use error::{SymbolError, SymbolResult};
pub use space::Space;
pub use symbol::{decode, encode, validate, Symbol};

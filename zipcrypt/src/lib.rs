//! Precomputed keystream table for the traditional PKWARE (ZipCrypto)
//! stream cipher, plus a generator that emits it as source literals.

mod emit;
mod error;
mod table;

pub use {emit::*, error::*, table::*};

/// Number of table entries, one per free 14-bit index.
pub const TABLE_LEN: usize = 1 << 14;

/// Source flavor for the emitted table.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    /// Bare value rows, eight literals per line
    #[default]
    Plain,
    /// Complete C array declaration
    C,
    /// Complete Rust `static` declaration
    Rust,
}

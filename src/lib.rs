//! Library entrypoint for `fynotek-morph`.
//!
//! The crate exposes the Fynotek lexicon, phonology contracts, affix grammar,
//! and the morpheme analyzer built on them.

pub mod analysis;
pub mod analyzer;
pub mod driver;
pub mod grammar;
pub mod lexicon;
pub mod numeral;
pub mod phonology;

//! Deterministic normalization for Arabic and Quranic text
//!
//! Normalizes Uthmani Quranic orthography, modern standard Arabic and
//! LLM-generated Arabic into a common form so they can be compared.
//!
//! # Pipeline
//!
//! Seven stages run in a fixed order, each switched by a flag in
//! [`NormalizeOptions`]:
//!
//! 1. **diacritics**: drop harakat, fold alif/yeh/kaf variants
//! 2. **markers** (or **small letters**): drop the Quranic annotation block
//! 3. **verse numbers**: drop ornate brackets and Arabic-Indic digits
//! 4. **tatweel**: drop kashida
//! 5. **punctuation**: drop ASCII and Arabic sentence punctuation
//! 6. **strip hamza** (off by default): drop hamza carriers, fold Uthmani spellings
//! 7. **whitespace**: collapse runs to one space and trim
//!
//! Each stage is an ordered list of [`Rule`]s; see [`Stage::rules`].
//!
//! # Example
//!
//! ```rust
//! use harf_core::{normalize, normalize_default, NormalizeOptions};
//!
//! assert_eq!(
//!     normalize_default("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ"),
//!     "بسم الله الرحمان الرحيم"
//! );
//!
//! let options = NormalizeOptions {
//!     strip_hamza: true,
//!     ..Default::default()
//! };
//! assert_eq!(normalize("يسألونك", &options), "يسلونك");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod normalizer;
pub mod options;
pub mod rules;
pub mod stage;
pub mod tables;

pub use error::{NormalizeError, Result};
pub use normalizer::{normalize, normalize_batch, normalize_default, Normalizer};
pub use options::{Flag, NormalizeOptions, OptionsBuilder};
pub use rules::{Atom, Pattern, Rule};
pub use stage::Stage;

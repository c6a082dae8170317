//! Lingo - machine translation and Swift accessors for Xcode string catalogs
//!
//! Lingo fills in missing translations of an `.xcstrings` catalog through an
//! external translation service, touching only entries that need work, and
//! generates a Swift enum with one typed accessor per catalog key.
//!
//! ## Module Structure
//!
//! - `catalog`: String catalog model, loading and Xcode-style saving
//! - `translate`: Planning, rate limiting and merging of translations
//! - `codegen`: Identifier and parameter derivation, Swift emitter
//! - `coverage`: Per-language translation coverage
//! - `issues`: Per-entry warnings and failures
//! - `error`: Fatal error taxonomy
//! - `config`: Configuration file loading and parsing
//! - `cli`: Command-line interface layer
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod coverage;
pub mod error;
pub mod issues;
pub mod translate;
pub mod utils;

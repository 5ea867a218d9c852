//! Namecraft - invent brand names for apps and SaaS products.
//!
//! Names are sampled from static word lists and shaped by simple
//! randomized transforms:
//! - `names` holds the word lists and the generator
//! - `models` holds the request and the printable record
//! - `cli` parses arguments, validates input and prints results

pub mod cli;
pub mod error;
pub mod models;
pub mod names;

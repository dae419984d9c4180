#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Various datastructures.
pub mod datastructures;
/// Error type of the crate.
pub mod errors;
/// Types and datastructures to represent and manage formulas effectively.
pub mod formulas;
/// Handlers for more control during some calculations.
pub mod handlers;
/// Functions, Predicates, and Transformations for formulas.
pub mod operations;
mod parser;
/// Analysis of problems given as formulas or simple sentences.
pub mod reasoner;
/// Additional utility.
pub mod util;

pub use errors::ReasonError;
pub use reasoner::{reason, AnalysisResult, Reasoner, ReasonerConfig};

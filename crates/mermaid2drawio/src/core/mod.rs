//! Core abstractions for diagram conversion
//!
//! The traits every dialect implements (database, detector, parser,
//! generator), the closed [`Diagram`] model, layout configuration and the
//! draw.io document serializer.

pub mod chumsky_utils;
mod config;
mod database;
mod detector;
mod diagram;
mod document;
mod error;
mod generator;
pub mod logging;
mod parser;

pub use config::*;
pub use database::*;
pub use detector::*;
pub use diagram::*;
pub use document::*;
pub use error::*;
pub use generator::*;
pub use logging::*;
pub use parser::*;

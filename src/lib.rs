//! # cardmark
//!
//! A classifier and card-carousel parser for the cardmark answer format.
//!
//! Cardmark is the lightweight markup AI answers use to embed card carousels,
//! topic sections, and citations in otherwise free-form text.
//!
//! ## Testing
//!
//! For comprehensive testing guidelines, see the [testing module](cardmark::testing).
//! All parser tests must follow strict rules using verified answer sources and
//! card assertions.

pub mod cardmark;

/// A simple function to demonstrate the library works
pub fn hello() -> &'static str {
    "Hello from cardmark!"
}

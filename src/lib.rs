//! A small parser-combinator engine.
//!
//! Parsers implement [`Parser`]: given an [`Input`] they either return the
//! remaining input with a typed value or fail with [`ParseError`]. Two
//! primitives (`character`, `tag`) and two combinators (`sequence`, `repeat`)
//! compose into larger parsers:
//!
//! ```
//! use kumi::prelude::*;
//!
//! let parser = sequence(repeat(tag("it")), character());
//! let (rest, (its, next)) = apply(&parser, "itititititworks!").unwrap();
//! assert_eq!(its.len(), 5);
//! assert_eq!(next, 'w');
//! assert_eq!(rest.rest(), "orks!");
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod grammar;
pub mod parser;

pub use parser::prelude;

// Re-exports
pub use error::*;
pub use parser::{Input, ParseError, ParseResult, Parser, Span};

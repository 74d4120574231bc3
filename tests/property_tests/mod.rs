//! Property-based tests for the primitives, combinators and grammars.

mod combinators;
mod grammar;
mod primitives;

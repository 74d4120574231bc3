pub mod combinators;
pub mod core;
pub mod growable;
pub mod input;
pub mod prelude;
pub mod primitives;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
pub use input::{Input, Span};

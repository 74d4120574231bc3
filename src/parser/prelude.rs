pub use super::combinators::{Repeat, Sequence};
pub use super::core::{ParseError, ParseResult, Parser};
pub use super::input::{Input, Span};
pub use super::primitives::{Character, Tag};

pub fn character() -> Character {
    Character::new()
}

pub fn tag(literal: impl Into<String>) -> Tag {
    Tag::new(literal)
}

pub fn sequence<'a, P1, P2, O1, O2>(parser1: P1, parser2: P2) -> Sequence<P1, P2>
where
    P1: Parser<'a, O1>,
    P2: Parser<'a, O2>,
{
    Sequence::new(parser1, parser2)
}

pub fn repeat<'a, P, O>(parser: P) -> Repeat<P>
where
    P: Parser<'a, O>,
{
    Repeat::new(parser)
}

/// Runs `parser` once against `input`.
#[tracing::instrument(level = "debug", skip_all, fields(len = tracing::field::Empty))]
pub fn apply<'a, P, O>(parser: &P, input: impl Into<Input<'a>>) -> ParseResult<'a, O>
where
    P: Parser<'a, O>,
{
    let input = input.into();
    tracing::Span::current().record("len", input.len());
    let result = parser.parse(input);
    tracing::debug!(matched = result.is_ok(), "apply");
    result
}

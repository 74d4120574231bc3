use super::core::{ParseError, ParseResult, Parser};
use super::input::{Input, Span};

// Character: 先頭の一文字を消費してそのまま返す
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Character;

impl Character {
    pub fn new() -> Self {
        Self
    }
}

impl<'a> Parser<'a, char> for Character {
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, char> {
        input
            .rest()
            .chars()
            .next()
            .map(|c| (input.advance(c.len_utf8()), c))
            .ok_or(ParseError)
    }
}

/// Matches a fixed literal and yields a [`Span`] over the matched source.
///
/// A tag built from an empty literal never matches; use [`Tag::try_new`] to
/// reject one up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    literal: String,
}

impl Tag {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// Returns `None` for an empty literal.
    pub fn try_new(literal: impl Into<String>) -> Option<Self> {
        let literal = literal.into();
        if literal.is_empty() {
            return None;
        }
        Some(Self { literal })
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl<'a> Parser<'a, Span<'a>> for Tag {
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, Span<'a>> {
        let expected = self.literal.as_bytes();
        let found = input.rest().as_bytes();

        if expected.is_empty() || found.len() < expected.len() {
            return Err(ParseError);
        }
        if !expected.iter().zip(found).all(|(e, f)| e == f) {
            return Err(ParseError);
        }

        Ok((input.advance(expected.len()), input.span(expected.len())))
    }
}

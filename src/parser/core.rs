use thiserror::Error;

use super::input::Input;

// パーサートレイト

/// A composable unit that tries to consume a prefix of its input.
///
/// On success it returns the remaining input together with a value of type
/// `O`; on failure it returns [`ParseError`] and the caller keeps using the
/// input it already holds. Implementations must not depend on anything but
/// the input, so the same input always gives the same result.
pub trait Parser<'a, O> {
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, O>;
}

pub type ParseResult<'a, O> = Result<(Input<'a>, O), ParseError>;

/// The input did not match.
///
/// Failure carries no position or cause. It is an ordinary outcome: `sequence`
/// propagates it and `repeat` treats it as the end of the repetition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("no match")]
pub struct ParseError;

// 関数・クロージャもパーサーとして使える
impl<'a, O, F> Parser<'a, O> for F
where
    F: Fn(Input<'a>) -> ParseResult<'a, O>,
{
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, O> {
        self(input)
    }
}

use super::core::{ParseResult, Parser};
use super::growable::Growable;
use super::input::Input;
use tracing::trace;

// Sequence: 2つのパーサーを順に適用し、両方成功した場合のみ結果の組を返す
#[derive(Debug, Clone)]
pub struct Sequence<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self { parser1, parser2 }
    }
}

impl<'a, P1, P2, O1, O2> Parser<'a, (O1, O2)> for Sequence<P1, P2>
where
    P1: Parser<'a, O1>,
    P2: Parser<'a, O2>,
{
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, (O1, O2)> {
        let (input, result1) = self.parser1.parse(input)?;
        let (input, result2) = self.parser2.parse(input)?;
        Ok((input, (result1, result2)))
    }
}

/// Applies a parser zero or more times, collecting every success in order.
///
/// Never fails. The returned input is the position after the last success,
/// or the original input when nothing matched. A success that does not move
/// the cursor ends the repetition without being recorded.
#[derive(Debug, Clone)]
pub struct Repeat<P> {
    parser: P,
}

impl<P> Repeat<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<'a, P, O> Parser<'a, Vec<O>> for Repeat<P>
where
    P: Parser<'a, O>,
{
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, Vec<O>> {
        let mut results = Growable::default();
        let mut current = input;

        while let Ok((next, value)) = self.parser.parse(current) {
            if next.offset() == current.offset() {
                trace!(offset = current.offset(), "repeat: child made no progress");
                break;
            }
            results.push(value);
            current = next;
        }

        trace!(
            count = results.len(),
            from = input.offset(),
            to = current.offset(),
            "repeat done"
        );
        Ok((current, results.finish()))
    }
}

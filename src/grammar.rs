//! Parser trees described as data.
//!
//! A [`Grammar`] is the serde form of a parser built from the four building
//! blocks. [`Grammar::compile`] validates it and turns it into a [`Compiled`]
//! parser that runs on the same combinators as hand-written code, producing a
//! dynamically shaped [`Value`].
//!
//! ```json
//! { "type": "sequence",
//!   "first": { "type": "repeat", "child": { "type": "tag", "literal": "it" } },
//!   "second": { "type": "character" } }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::parser::combinators::{Repeat, Sequence};
use crate::parser::primitives::{Character, Tag};
use crate::parser::{Input, ParseResult, Parser, Span};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("tag literal must not be empty")]
    EmptyTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Grammar {
    Character,
    Tag {
        literal: String,
    },
    Sequence {
        first: Box<Grammar>,
        second: Box<Grammar>,
    },
    Repeat {
        child: Box<Grammar>,
    },
}

impl Grammar {
    pub fn character() -> Self {
        Grammar::Character
    }

    pub fn tag(literal: impl Into<String>) -> Self {
        Grammar::Tag {
            literal: literal.into(),
        }
    }

    pub fn sequence(first: Grammar, second: Grammar) -> Self {
        Grammar::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn repeat(child: Grammar) -> Self {
        Grammar::Repeat {
            child: Box::new(child),
        }
    }

    pub fn compile(&self) -> Result<Compiled, GrammarError> {
        let compiled = match self {
            Grammar::Character => Compiled::Character(Character::new()),
            Grammar::Tag { literal } => {
                Compiled::Tag(Tag::try_new(literal.as_str()).ok_or(GrammarError::EmptyTag)?)
            }
            Grammar::Sequence { first, second } => Compiled::Sequence(Box::new(Sequence::new(
                first.compile()?,
                second.compile()?,
            ))),
            Grammar::Repeat { child } => {
                Compiled::Repeat(Box::new(Repeat::new(child.compile()?)))
            }
        };
        debug!(grammar = %self, "compiled");
        Ok(compiled)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Character => write!(f, "character()"),
            Grammar::Tag { literal } => write!(f, "tag({:?})", literal),
            Grammar::Sequence { first, second } => write!(f, "sequence({}, {})", first, second),
            Grammar::Repeat { child } => write!(f, "repeat({})", child),
        }
    }
}

/// A validated [`Grammar`], ready to run.
#[derive(Debug, Clone)]
pub enum Compiled {
    Character(Character),
    Tag(Tag),
    Sequence(Box<Sequence<Compiled, Compiled>>),
    Repeat(Box<Repeat<Compiled>>),
}

impl<'a> Parser<'a, Value<'a>> for Compiled {
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, Value<'a>> {
        match self {
            Compiled::Character(p) => p.parse(input).map(|(rest, c)| (rest, Value::Char(c))),
            Compiled::Tag(p) => p.parse(input).map(|(rest, s)| (rest, Value::Span(s))),
            Compiled::Sequence(p) => (**p)
                .parse(input)
                .map(|(rest, (a, b))| (rest, Value::Pair(Box::new(a), Box::new(b)))),
            Compiled::Repeat(p) => (**p)
                .parse(input)
                .map(|(rest, items)| (rest, Value::List(items))),
        }
    }
}

/// Result of running a [`Compiled`] parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Value<'a> {
    Char(char),
    Span(Span<'a>),
    Pair(Box<Value<'a>>, Box<Value<'a>>),
    List(Vec<Value<'a>>),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Span(s) => write!(f, "{:?}", s.fragment()),
            Value::Pair(a, b) => write!(f, "({}, {})", a, b),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A read-only cursor over a source text.
///
/// `Input` never changes the text it points into. Parsers produce new,
/// advanced copies of it, so the value a caller holds is always the position
/// before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Input<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// The whole source text, independent of the cursor.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the cursor into the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Text from the cursor onward.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn len(&self) -> usize {
        self.source.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the cursor `count` bytes forward.
    ///
    /// Callers only advance past text they have already matched, so the new
    /// cursor stays within the source and on a character boundary.
    pub(crate) fn advance(self, count: usize) -> Self {
        debug_assert!(count <= self.len());
        Self {
            source: self.source,
            offset: self.offset + count,
        }
    }

    /// A span of `len` bytes starting at the cursor.
    pub(crate) fn span(&self, len: usize) -> Span<'a> {
        debug_assert!(len <= self.len());
        Span {
            source: self.source,
            offset: self.offset,
            len,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

/// A matched region of the original source: offset plus length, no copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    source: &'a str,
    offset: usize,
    len: usize,
}

impl<'a> Span<'a> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The matched text, borrowed from the original source.
    pub fn fragment(&self) -> &'a str {
        &self.source[self.offset..self.offset + self.len]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

impl Serialize for Span<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Span", 3)?;
        state.serialize_field("offset", &self.offset)?;
        state.serialize_field("len", &self.len)?;
        state.serialize_field("text", self.fragment())?;
        state.end()
    }
}

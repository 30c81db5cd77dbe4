use thiserror::Error;

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input ended where more was required.
    UnexpectedEof,
    /// A value was expected but the input holds something else, or a literal
    /// is misspelled.
    InvalidValue,
    /// An unescaped control character inside a string.
    InvalidCharacter,
    /// Malformed number, or one too large to represent.
    InvalidNumber,
    InvalidStringEscape,
    /// `\u` not followed by four hex digits.
    InvalidUnicodeHex,
    /// Unpaired or misordered UTF-16 surrogate in a `\u` escape.
    InvalidUnicodeSurrogate,
    MissingKey,
    MissingColon,
    MissingCommaOrBracket,
    MissingCommaOrBrace,
    /// Something other than whitespace after the top-level value.
    TrailingCharacters,
    MaxDepthExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column} (offset {offset})")]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    offset: usize,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, message: String, input: &str, offset: usize) -> Self {
        let before = &input.as_bytes()[..offset.min(input.len())];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        Self {
            kind,
            message,
            offset,
            line,
            column: before.len() - line_start + 1,
        }
    }
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    /// Byte offset of the failure in the input.
    pub fn offset(&self) -> usize {
        self.offset
    }
    /// 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }
    /// 1-based column, counted in bytes.
    pub fn column(&self) -> usize {
        self.column
    }
}

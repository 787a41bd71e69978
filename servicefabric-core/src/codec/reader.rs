//! Streaming JSON token reader used by every DTO decoder.
//!
//! The reader walks the token structure itself and hands string and number
//! scalars to `serde_json` for decoding.

use crate::error::{FabricError, Result};

/// Default limit on nested objects and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Kind of the next token in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// A string scalar.
    String,
    /// A number scalar.
    Number,
    /// `true` or `false`.
    Bool,
    /// `null`.
    Null,
    /// End of input.
    Eof,
}

/// Pull-style access to a JSON token stream.
///
/// The trait is object safe; converters take `&mut dyn JsonRead` so that variant
/// tables can hold plain function pointers. Every structural problem is reported
/// as [`FabricError::MalformedInput`].
pub trait JsonRead {
    /// Returns the kind of the next value token without consuming it.
    fn peek(&mut self) -> Result<TokenKind>;

    /// Consumes `{`.
    fn read_begin_object(&mut self) -> Result<()>;

    /// Reads the next property name of the innermost open object.
    ///
    /// Returns `None` after consuming the closing `}`. The caller must read or skip
    /// exactly one value after every `Some`.
    fn next_property(&mut self) -> Result<Option<String>>;

    /// Consumes `[`.
    fn read_begin_array(&mut self) -> Result<()>;

    /// Returns `true` when another element follows in the innermost open array.
    ///
    /// Consumes the closing `]` when it returns `false`.
    fn has_next_element(&mut self) -> Result<bool>;

    /// Reads a string scalar.
    fn read_string(&mut self) -> Result<String>;

    /// Reads an integral number that fits in `i64`.
    fn read_i64(&mut self) -> Result<i64>;

    /// Reads a non-negative integral number that fits in `u64`.
    fn read_u64(&mut self) -> Result<u64>;

    /// Reads any number as `f64`.
    fn read_f64(&mut self) -> Result<f64>;

    /// Reads `true` or `false`.
    fn read_bool(&mut self) -> Result<bool>;

    /// Consumes `null`.
    fn read_null(&mut self) -> Result<()>;

    /// Skips one complete value of any shape.
    fn skip_value(&mut self) -> Result<()>;

    /// Reads one complete value and returns its exact source text.
    fn read_raw_value(&mut self) -> Result<String>;

    /// Current byte offset into the input.
    fn offset(&self) -> usize;

    /// Reads an integral number that fits in `i32`.
    fn read_i32(&mut self) -> Result<i32> {
        let offset = self.offset();
        let value = self.read_i64()?;
        i32::try_from(value)
            .map_err(|_| FabricError::malformed(offset, format!("{value} does not fit in i32")))
    }

    /// Reads an integral number in `0..=255`.
    fn read_u8(&mut self) -> Result<u8> {
        let offset = self.offset();
        let value = self.read_i64()?;
        u8::try_from(value)
            .map_err(|_| FabricError::malformed(offset, format!("{value} is not a byte value")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object { first: bool },
    Array { first: bool },
}

/// A single-pass [`JsonRead`] implementation over a byte slice.
#[derive(Debug)]
pub struct JsonReader<'a> {
    input: &'a [u8],
    pos: usize,
    stack: Vec<Container>,
    max_depth: usize,
}

impl<'a> JsonReader<'a> {
    /// Creates a reader over the given bytes.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            stack: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a reader over a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }

    /// Sets the maximum nesting depth of objects and arrays.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Verifies that every container was closed and only whitespace remains.
    pub fn finish(&mut self) -> Result<()> {
        if !self.stack.is_empty() {
            return Err(self.error(format!("{} unclosed container(s)", self.stack.len())));
        }
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error("trailing characters after value"));
        }
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> FabricError {
        FabricError::malformed(self.pos, message)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.input.get(self.pos) {
            self.pos += 1;
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Result<u8> {
        let byte = self
            .input
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += 1;
        Ok(byte)
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        match self.peek_byte() {
            Some(byte) if byte == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(byte) => Err(self.error(format!(
                "expected '{}', found '{}'",
                expected as char, byte as char
            ))),
            None => Err(self.error(format!(
                "expected '{}', found end of input",
                expected as char
            ))),
        }
    }

    fn expect_literal(&mut self, literal: &[u8]) -> Result<()> {
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error(format!(
                "expected `{}`",
                String::from_utf8_lossy(literal)
            )))
        }
    }

    fn push(&mut self, container: Container) -> Result<()> {
        if self.stack.len() >= self.max_depth {
            return Err(self.error(format!(
                "nesting exceeds maximum depth of {}",
                self.max_depth
            )));
        }
        self.stack.push(container);
        Ok(())
    }

    fn expect_kind(&mut self, expected: TokenKind) -> Result<()> {
        let found = self.peek()?;
        if found == expected {
            Ok(())
        } else {
            Err(self.error(format!("expected {expected:?}, found {found:?}")))
        }
    }

    /// Consumes a string token. Unescaping and UTF-8 validation are left to `serde_json`.
    fn parse_string(&mut self) -> Result<String> {
        self.skip_whitespace();
        let start = self.pos;
        self.expect_byte(b'"')?;
        loop {
            match self.input.get(self.pos) {
                None => return Err(FabricError::malformed(start, "unterminated string")),
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => self.pos = (self.pos + 2).min(self.input.len()),
                Some(_) => self.pos += 1,
            }
        }
        serde_json::from_slice(&self.input[start..self.pos])
            .map_err(|e| FabricError::malformed(start, format!("invalid string: {e}")))
    }

    /// Consumes the bytes of a number token and returns them unparsed.
    fn scan_number(&mut self) -> Result<&'a str> {
        self.expect_kind(TokenKind::Number)?;
        let input = self.input;
        let start = self.pos;
        while let Some(b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E') = input.get(self.pos) {
            self.pos += 1;
        }
        // Only ASCII bytes were consumed above.
        std::str::from_utf8(&input[start..self.pos])
            .map_err(|_| FabricError::malformed(start, "invalid number"))
    }

    /// Moves past the end of the current value and any containers it closed.
    ///
    /// Returns `true` once the stack is back at `base`, `false` when positioned on
    /// the next value inside a still-open container.
    fn close_finished(&mut self, base: usize) -> Result<bool> {
        while self.stack.len() > base {
            let more = match self.stack.last() {
                Some(Container::Object { .. }) => self.next_property()?.is_some(),
                Some(Container::Array { .. }) => self.has_next_element()?,
                None => false,
            };
            if more {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl JsonRead for JsonReader<'_> {
    fn peek(&mut self) -> Result<TokenKind> {
        let kind = match self.peek_byte() {
            None => TokenKind::Eof,
            Some(b'{') => TokenKind::BeginObject,
            Some(b'}') => TokenKind::EndObject,
            Some(b'[') => TokenKind::BeginArray,
            Some(b']') => TokenKind::EndArray,
            Some(b'"') => TokenKind::String,
            Some(b'-' | b'0'..=b'9') => TokenKind::Number,
            Some(b't' | b'f') => TokenKind::Bool,
            Some(b'n') => TokenKind::Null,
            Some(other) => {
                return Err(self.error(format!("unexpected character '{}'", other as char)));
            }
        };
        Ok(kind)
    }

    fn read_begin_object(&mut self) -> Result<()> {
        self.expect_byte(b'{')?;
        self.push(Container::Object { first: true })
    }

    fn next_property(&mut self) -> Result<Option<String>> {
        let first = match self.stack.last() {
            Some(Container::Object { first }) => *first,
            _ => return Err(self.error("not inside an object")),
        };

        if self.peek_byte() == Some(b'}') {
            self.pos += 1;
            self.stack.pop();
            return Ok(None);
        }
        if !first {
            self.expect_byte(b',')?;
        }
        if self.peek_byte() != Some(b'"') {
            return Err(self.error("expected property name"));
        }
        let name = self.parse_string()?;
        self.expect_byte(b':')?;
        if let Some(Container::Object { first }) = self.stack.last_mut() {
            *first = false;
        }
        Ok(Some(name))
    }

    fn read_begin_array(&mut self) -> Result<()> {
        self.expect_byte(b'[')?;
        self.push(Container::Array { first: true })
    }

    fn has_next_element(&mut self) -> Result<bool> {
        let first = match self.stack.last() {
            Some(Container::Array { first }) => *first,
            _ => return Err(self.error("not inside an array")),
        };

        if self.peek_byte() == Some(b']') {
            self.pos += 1;
            self.stack.pop();
            return Ok(false);
        }
        if !first {
            self.expect_byte(b',')?;
        }
        if let Some(Container::Array { first }) = self.stack.last_mut() {
            *first = false;
        }
        Ok(true)
    }

    fn read_string(&mut self) -> Result<String> {
        self.expect_kind(TokenKind::String)?;
        self.parse_string()
    }

    fn read_i64(&mut self) -> Result<i64> {
        let start = self.offset();
        let text = self.scan_number()?;
        serde_json::from_str(text)
            .map_err(|e| FabricError::malformed(start, format!("{text} is not an i64: {e}")))
    }

    fn read_u64(&mut self) -> Result<u64> {
        let start = self.offset();
        let text = self.scan_number()?;
        serde_json::from_str(text)
            .map_err(|e| FabricError::malformed(start, format!("{text} is not a u64: {e}")))
    }

    fn read_f64(&mut self) -> Result<f64> {
        let start = self.offset();
        let text = self.scan_number()?;
        serde_json::from_str(text)
            .map_err(|e| FabricError::malformed(start, format!("invalid number {text}: {e}")))
    }

    fn read_bool(&mut self) -> Result<bool> {
        self.expect_kind(TokenKind::Bool)?;
        if self.input[self.pos] == b't' {
            self.expect_literal(b"true")?;
            Ok(true)
        } else {
            self.expect_literal(b"false")?;
            Ok(false)
        }
    }

    fn read_null(&mut self) -> Result<()> {
        self.expect_kind(TokenKind::Null)?;
        self.expect_literal(b"null")
    }

    fn skip_value(&mut self) -> Result<()> {
        // Nesting lives on `self.stack` so deep input is bounded by `max_depth`
        // rather than by the call stack.
        let base = self.stack.len();
        loop {
            match self.peek()? {
                TokenKind::BeginObject => self.read_begin_object()?,
                TokenKind::BeginArray => self.read_begin_array()?,
                TokenKind::String => {
                    self.parse_string()?;
                }
                TokenKind::Number => {
                    let start = self.offset();
                    let text = self.scan_number()?;
                    serde_json::from_str::<serde_json::Number>(text).map_err(|e| {
                        FabricError::malformed(start, format!("invalid number {text}: {e}"))
                    })?;
                }
                TokenKind::Bool => {
                    self.read_bool()?;
                }
                TokenKind::Null => self.read_null()?,
                TokenKind::EndObject | TokenKind::EndArray => {
                    return Err(self.error("expected a value, found end of container"));
                }
                TokenKind::Eof => return Err(self.error("expected a value, found end of input")),
            }
            if self.close_finished(base)? {
                return Ok(());
            }
        }
    }

    fn read_raw_value(&mut self) -> Result<String> {
        self.skip_whitespace();
        let start = self.pos;
        self.skip_value()?;
        let raw = &self.input[start..self.pos];
        String::from_utf8(raw.to_vec())
            .map_err(|e| FabricError::malformed(start, format!("invalid UTF-8 value: {e}")))
    }

    fn offset(&self) -> usize {
        self.pos
    }
}

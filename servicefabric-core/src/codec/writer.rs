//! Streaming JSON writer used by every DTO encoder.
//!
//! Structure is checked here; the bytes themselves come from `serde_json`'s
//! compact or pretty [`Formatter`].

use std::io;

use bytes::{BufMut, BytesMut};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use crate::error::{FabricError, Result};

/// Push-style JSON output.
///
/// Object safe, mirroring [`JsonRead`](super::JsonRead). Separators are placed by the
/// implementation; callers only describe structure.
pub trait JsonWrite {
    /// Writes `{`.
    fn begin_object(&mut self) -> Result<()>;

    /// Writes `}`.
    fn end_object(&mut self) -> Result<()>;

    /// Writes a property name; exactly one value must follow.
    fn property(&mut self, name: &str) -> Result<()>;

    /// Writes `[`.
    fn begin_array(&mut self) -> Result<()>;

    /// Writes `]`.
    fn end_array(&mut self) -> Result<()>;

    /// Writes an escaped string scalar.
    fn write_string(&mut self, v: &str) -> Result<()>;

    /// Writes a signed integer.
    fn write_i64(&mut self, v: i64) -> Result<()>;

    /// Writes an unsigned integer.
    fn write_u64(&mut self, v: u64) -> Result<()>;

    /// Writes a finite floating point number.
    fn write_f64(&mut self, v: f64) -> Result<()>;

    /// Writes `true` or `false`.
    fn write_bool(&mut self, v: bool) -> Result<()>;

    /// Writes `null`.
    fn write_null(&mut self) -> Result<()>;

    /// Writes pre-encoded JSON text as one value, verbatim.
    fn write_raw(&mut self, json: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object { count: usize, awaiting_value: bool },
    Array { count: usize },
}

#[derive(Debug, Clone)]
enum Style {
    Compact(CompactFormatter),
    Pretty(PrettyFormatter<'static>),
}

impl Style {
    fn new(pretty: bool) -> Self {
        if pretty {
            Style::Pretty(PrettyFormatter::with_indent(b"  "))
        } else {
            Style::Compact(CompactFormatter)
        }
    }
}

/// Runs one formatter call against the output buffer, whichever style is active.
macro_rules! emit {
    ($writer:expr, |$f:ident, $out:ident| $body:expr) => {{
        let mut $out = (&mut $writer.buffer).writer();
        let result: io::Result<()> = match &mut $writer.style {
            Style::Compact($f) => $body,
            Style::Pretty($f) => $body,
        };
        result.map_err(FabricError::from)
    }};
}

/// A [`JsonWrite`] implementation that accumulates output in a `BytesMut` buffer.
#[derive(Debug)]
pub struct JsonWriter {
    buffer: BytesMut,
    stack: Vec<Frame>,
    style: Style,
    root_written: bool,
}

impl JsonWriter {
    /// Creates a writer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a writer with the specified buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            stack: Vec::new(),
            style: Style::new(false),
            root_written: false,
        }
    }

    /// Enables or disables two-space indented output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.style = Style::new(pretty);
        self
    }

    /// Returns the written bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the writer and returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    /// Consumes the writer and returns the output as a string.
    pub fn into_string(self) -> Result<String> {
        let len = self.buffer.len();
        String::from_utf8(self.buffer.to_vec())
            .map_err(|e| FabricError::malformed(len, format!("invalid UTF-8 output: {e}")))
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns true once a root value has been written and every container closed.
    pub fn is_complete(&self) -> bool {
        self.root_written && self.stack.is_empty()
    }

    /// Clears the buffer and structural state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.stack.clear();
        self.root_written = false;
        self.style = Style::new(matches!(self.style, Style::Pretty(_)));
    }

    fn error(&self, message: impl Into<String>) -> FabricError {
        FabricError::malformed(self.buffer.len(), message)
    }

    /// Checks that a value may go here and emits its leading separator.
    fn before_value(&mut self) -> Result<()> {
        match self.stack.last_mut() {
            None => {
                if self.root_written {
                    return Err(self.error("only one root value may be written"));
                }
                self.root_written = true;
                Ok(())
            }
            Some(Frame::Object { awaiting_value, .. }) => {
                if !*awaiting_value {
                    return Err(self.error("object value written without a property name"));
                }
                *awaiting_value = false;
                emit!(self, |f, out| f.begin_object_value(&mut out))
            }
            Some(Frame::Array { count }) => {
                let first = *count == 0;
                *count += 1;
                emit!(self, |f, out| f.begin_array_value(&mut out, first))
            }
        }
    }

    /// Closes the value just written inside its parent container.
    fn after_value(&mut self) -> Result<()> {
        match self.stack.last() {
            None => Ok(()),
            Some(Frame::Object { .. }) => emit!(self, |f, out| f.end_object_value(&mut out)),
            Some(Frame::Array { .. }) => emit!(self, |f, out| f.end_array_value(&mut out)),
        }
    }

    fn put_string(&mut self, v: &str) -> Result<()> {
        let offset = self.buffer.len();
        serde_json::to_writer((&mut self.buffer).writer(), v)
            .map_err(|e| FabricError::malformed(offset, format!("cannot write string: {e}")))
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWrite for JsonWriter {
    fn begin_object(&mut self) -> Result<()> {
        self.before_value()?;
        emit!(self, |f, out| f.begin_object(&mut out))?;
        self.stack.push(Frame::Object {
            count: 0,
            awaiting_value: false,
        });
        Ok(())
    }

    fn end_object(&mut self) -> Result<()> {
        match self.stack.last() {
            Some(Frame::Object {
                awaiting_value: false,
                ..
            }) => {
                self.stack.pop();
                emit!(self, |f, out| f.end_object(&mut out))?;
                self.after_value()
            }
            Some(Frame::Object { .. }) => Err(self.error("property name without a value")),
            _ => Err(self.error("end_object without a matching begin_object")),
        }
    }

    fn property(&mut self, name: &str) -> Result<()> {
        let first = match self.stack.last_mut() {
            Some(Frame::Object {
                count,
                awaiting_value,
            }) if !*awaiting_value => {
                let first = *count == 0;
                *count += 1;
                *awaiting_value = true;
                first
            }
            Some(Frame::Object { .. }) => {
                return Err(self.error("property name written twice without a value"));
            }
            _ => return Err(self.error("property name written outside an object")),
        };
        emit!(self, |f, out| f.begin_object_key(&mut out, first))?;
        self.put_string(name)?;
        emit!(self, |f, out| f.end_object_key(&mut out))
    }

    fn begin_array(&mut self) -> Result<()> {
        self.before_value()?;
        emit!(self, |f, out| f.begin_array(&mut out))?;
        self.stack.push(Frame::Array { count: 0 });
        Ok(())
    }

    fn end_array(&mut self) -> Result<()> {
        match self.stack.last() {
            Some(Frame::Array { .. }) => {
                self.stack.pop();
                emit!(self, |f, out| f.end_array(&mut out))?;
                self.after_value()
            }
            _ => Err(self.error("end_array without a matching begin_array")),
        }
    }

    fn write_string(&mut self, v: &str) -> Result<()> {
        self.before_value()?;
        self.put_string(v)?;
        self.after_value()
    }

    fn write_i64(&mut self, v: i64) -> Result<()> {
        self.before_value()?;
        emit!(self, |f, out| f.write_i64(&mut out, v))?;
        self.after_value()
    }

    fn write_u64(&mut self, v: u64) -> Result<()> {
        self.before_value()?;
        emit!(self, |f, out| f.write_u64(&mut out, v))?;
        self.after_value()
    }

    fn write_f64(&mut self, v: f64) -> Result<()> {
        if !v.is_finite() {
            return Err(self.error(format!("{v} cannot be represented in JSON")));
        }
        self.before_value()?;
        emit!(self, |f, out| f.write_f64(&mut out, v))?;
        self.after_value()
    }

    fn write_bool(&mut self, v: bool) -> Result<()> {
        self.before_value()?;
        emit!(self, |f, out| f.write_bool(&mut out, v))?;
        self.after_value()
    }

    fn write_null(&mut self) -> Result<()> {
        self.before_value()?;
        emit!(self, |f, out| f.write_null(&mut out))?;
        self.after_value()
    }

    fn write_raw(&mut self, json: &str) -> Result<()> {
        self.before_value()?;
        emit!(self, |f, out| f.write_raw_fragment(&mut out, json.trim()))?;
        self.after_value()
    }
}

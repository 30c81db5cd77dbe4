use crate::number::Number;
use crate::value::{Json, Node, Object};
use std::fmt::{self, Write};

/// Renders values as compact JSON text with `, ` and `: ` separators.
pub(crate) struct Formatter<'w, W> {
    out: &'w mut W,
}

impl<'w, W: Write> Formatter<'w, W> {
    pub(crate) fn new(out: &'w mut W) -> Self {
        Self { out }
    }
    fn format_number(&mut self, n: Number) -> fmt::Result {
        match n {
            // lossy: JSON has no spelling for NaN or the infinities
            _ if !n.is_finite() => self.out.write_str("null"),
            Number::Int(i) => write!(self.out, "{}", i),
            Number::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => write!(self.out, "{}", f),
            Number::Float(f) => write!(self.out, "{:?}", f),
        }
    }
    fn format_string(&mut self, s: &str) -> fmt::Result {
        self.out.write_char('"')?;
        for ch in s.chars() {
            match ch {
                '"' => self.out.write_str("\\\"")?,
                '\\' => self.out.write_str("\\\\")?,
                '\u{8}' => self.out.write_str("\\b")?,
                '\u{c}' => self.out.write_str("\\f")?,
                '\n' => self.out.write_str("\\n")?,
                '\r' => self.out.write_str("\\r")?,
                '\t' => self.out.write_str("\\t")?,
                c if (c as u32) < 0x20 => write!(self.out, "\\u{:04X}", c as u32)?,
                c => self.out.write_char(c)?,
            }
        }
        self.out.write_char('"')
    }
    fn format_array(&mut self, items: &[Json]) -> fmt::Result {
        self.out.write_char('[')?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            self.format(item)?;
        }
        self.out.write_char(']')
    }
    fn format_object(&mut self, entries: &Object) -> fmt::Result {
        self.out.write_char('{')?;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            self.format_string(key)?;
            self.out.write_str(": ")?;
            self.format(value)?;
        }
        self.out.write_char('}')
    }
    pub(crate) fn format(&mut self, v: &Json) -> fmt::Result {
        match v.node() {
            Node::Null => self.out.write_str("null"),
            Node::Bool(b) => self.out.write_str(if *b { "true" } else { "false" }),
            Node::Number(n) => self.format_number(*n),
            Node::String(s) => self.format_string(s),
            Node::Array(items) => self.format_array(items),
            Node::Object(entries) => self.format_object(entries),
        }
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Formatter::new(f).format(self)
    }
}

impl Json {
    /// Serializes to canonical JSON text.
    ///
    /// Non-finite numbers become `null`, so the output of `dump` only parses
    /// back to an equal value when every number in the tree is finite.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

use crate::error::{ErrorKind, ParseError};
use crate::value::{Array, Json, Object};
use std::str::FromStr;

type Result<T> = std::result::Result<T, ParseError>;

/// Default limit on nested arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of arrays and objects open at once.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursive-descent JSON parser over a borrowed input.
///
/// Every grammar routine returns a `Result`, so the first failure stops the
/// scan and is the one reported. Lookahead goes through `peek_token`, which
/// skips whitespace and never consumes; tokens are consumed by `bump`.
pub struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
            options,
        }
    }
    /// Parses a single value followed by nothing but whitespace.
    pub fn parse(mut self) -> Result<Json> {
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.bytes.len() {
            return Err(self.fail(
                ErrorKind::TrailingCharacters,
                format!("unexpected trailing {}", self.found()),
            ));
        }
        Ok(value)
    }
    fn fail(&self, kind: ErrorKind, message: String) -> ParseError {
        self.fail_at(self.pos, kind, message)
    }
    fn fail_at(&self, offset: usize, kind: ErrorKind, message: String) -> ParseError {
        ParseError::new(kind, message, self.input, offset)
    }
    // describes the character under the cursor for error messages
    fn found(&self) -> String {
        match self.input.get(self.pos..).and_then(|s| s.chars().next()) {
            Some(c) if c.is_control() => format!("U+{:04X}", c as u32),
            Some(c) => format!("`{}`", c),
            None => "end of input".to_string(),
        }
    }
    fn cur(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }
    fn bump(&mut self) {
        self.pos += 1;
    }
    fn skip_whitespace(&mut self) {
        while let Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') = self.cur() {
            self.bump();
        }
    }
    fn peek_token(&mut self) -> Result<u8> {
        self.skip_whitespace();
        self.cur().ok_or_else(|| {
            self.fail(
                ErrorKind::UnexpectedEof,
                "unexpected end of input".to_string(),
            )
        })
    }
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.fail(
                ErrorKind::MaxDepthExceeded,
                format!(
                    "exceeded maximum nesting depth of {}",
                    self.options.max_depth
                ),
            ));
        }
        Ok(())
    }
    fn leave(&mut self) {
        self.depth -= 1;
    }
    fn parse_value(&mut self) -> Result<Json> {
        match self.peek_token()? {
            b'n' => self.parse_literal("null", Json::null()),
            b't' => self.parse_literal("true", Json::from(true)),
            b'f' => self.parse_literal("false", Json::from(false)),
            b'"' => self.parse_string().map(Json::from),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            b'-' | b'0'..=b'9' => self.parse_number(),
            _ => Err(self.fail(
                ErrorKind::InvalidValue,
                format!("expected value, found {}", self.found()),
            )),
        }
    }
    fn parse_literal(&mut self, literal: &str, value: Json) -> Result<Json> {
        if !self.bytes[self.pos..].starts_with(literal.as_bytes()) {
            return Err(self.fail(
                ErrorKind::InvalidValue,
                format!("invalid literal, expected `{}`", literal),
            ));
        }
        self.pos += literal.len();
        Ok(value)
    }
    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.cur() {
            self.bump();
        }
        self.pos - start
    }
    fn expect_digits(&mut self, after: &str) -> Result<()> {
        if self.skip_digits() == 0 {
            return Err(self.fail(
                ErrorKind::InvalidNumber,
                format!("expected digit after {}, found {}", after, self.found()),
            ));
        }
        Ok(())
    }
    fn parse_number(&mut self) -> Result<Json> {
        let start = self.pos;
        if self.cur() == Some(b'-') {
            self.bump();
        }
        match self.cur() {
            Some(b'0') => {
                self.bump();
                if let Some(b'0'..=b'9') = self.cur() {
                    return Err(self.fail(
                        ErrorKind::InvalidNumber,
                        "leading zeros are not allowed".to_string(),
                    ));
                }
            }
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => {
                return Err(self.fail(
                    ErrorKind::InvalidNumber,
                    format!("expected digit, found {}", self.found()),
                ))
            }
        }
        let mut integral = true;
        if self.cur() == Some(b'.') {
            integral = false;
            self.bump();
            self.expect_digits("`.`")?;
        }
        if let Some(b'e') | Some(b'E') = self.cur() {
            integral = false;
            self.bump();
            if let Some(b'+') | Some(b'-') = self.cur() {
                self.bump();
            }
            self.expect_digits("exponent")?;
        }
        let text = &self.input[start..self.pos];
        // plain integers that fit i64 are kept exact
        if integral && text != "-0" {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Json::from(i));
            }
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Json::from(f)),
            _ => Err(self.fail_at(
                start,
                ErrorKind::InvalidNumber,
                format!("number `{}` is out of range", text),
            )),
        }
    }
    fn parse_hex4(&mut self) -> Result<u32> {
        let mut code = 0;
        for _ in 0..4 {
            let digit = self
                .cur()
                .and_then(|b| (b as char).to_digit(16))
                .ok_or_else(|| {
                    self.fail(
                        ErrorKind::InvalidUnicodeHex,
                        format!("expected hex digit in \\u escape, found {}", self.found()),
                    )
                })?;
            code = code << 4 | digit;
            self.bump();
        }
        Ok(code)
    }
    // cursor is just past `\u`
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let start = self.pos - 2;
        let unit = self.parse_hex4()?;
        let code = match unit {
            0xD800..=0xDBFF => {
                if !self.bytes[self.pos..].starts_with(b"\\u") {
                    return Err(self.fail_at(
                        start,
                        ErrorKind::InvalidUnicodeSurrogate,
                        format!("high surrogate \\u{:04X} is not followed by a low surrogate", unit),
                    ));
                }
                self.pos += 2;
                let low = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.fail_at(
                        start,
                        ErrorKind::InvalidUnicodeSurrogate,
                        format!("\\u{:04X} is not a low surrogate", low),
                    ));
                }
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }
            _ => unit,
        };
        std::char::from_u32(code).ok_or_else(|| {
            self.fail_at(
                start,
                ErrorKind::InvalidUnicodeSurrogate,
                format!("unpaired low surrogate \\u{:04X}", code),
            )
        })
    }
    // cursor is just past the backslash
    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        let ch = match self.cur() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{8}',
            Some(b'f') => '\u{c}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.bump();
                out.push(self.parse_unicode_escape()?);
                return Ok(());
            }
            Some(_) => {
                return Err(self.fail(
                    ErrorKind::InvalidStringEscape,
                    format!("invalid escape character {} after `\\`", self.found()),
                ))
            }
            None => {
                return Err(self.fail(
                    ErrorKind::UnexpectedEof,
                    "unexpected end of input in string".to_string(),
                ))
            }
        };
        self.bump();
        out.push(ch);
        Ok(())
    }
    // cursor is on the opening quote
    fn parse_string(&mut self) -> Result<String> {
        self.bump();
        let mut out = String::new();
        // unescaped run; only ever split at ASCII bytes
        let mut start = self.pos;
        loop {
            match self.cur() {
                Some(b'"') => {
                    out.push_str(&self.input[start..self.pos]);
                    self.bump();
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[start..self.pos]);
                    self.bump();
                    self.parse_escape(&mut out)?;
                    start = self.pos;
                }
                Some(0x00..=0x1f) => {
                    return Err(self.fail(
                        ErrorKind::InvalidCharacter,
                        format!("unescaped control character {} in string", self.found()),
                    ))
                }
                Some(_) => self.bump(),
                None => {
                    return Err(self.fail(
                        ErrorKind::UnexpectedEof,
                        "unexpected end of input in string".to_string(),
                    ))
                }
            }
        }
    }
    fn parse_array(&mut self) -> Result<Json> {
        self.enter()?;
        self.bump(); // `[`
        let mut items = Array::new();
        if self.peek_token()? == b']' {
            self.bump();
            self.leave();
            return Ok(Json::from(items));
        }
        loop {
            items.push(self.parse_value()?);
            match self.peek_token()? {
                b',' => self.bump(),
                b']' => {
                    self.bump();
                    break;
                }
                _ => {
                    return Err(self.fail(
                        ErrorKind::MissingCommaOrBracket,
                        format!("expected `,` or `]`, found {}", self.found()),
                    ))
                }
            }
        }
        self.leave();
        Ok(Json::from(items))
    }
    fn parse_object(&mut self) -> Result<Json> {
        self.enter()?;
        self.bump(); // `{`
        let mut entries = Object::new();
        if self.peek_token()? == b'}' {
            self.bump();
            self.leave();
            return Ok(Json::from(entries));
        }
        loop {
            if self.peek_token()? != b'"' {
                return Err(self.fail(
                    ErrorKind::MissingKey,
                    format!("expected string key, found {}", self.found()),
                ));
            }
            let key = self.parse_string()?;
            if self.peek_token()? != b':' {
                return Err(self.fail(
                    ErrorKind::MissingColon,
                    format!("expected `:`, found {}", self.found()),
                ));
            }
            self.bump();
            let value = self.parse_value()?;
            entries.insert(key, value);
            match self.peek_token()? {
                b',' => self.bump(),
                b'}' => {
                    self.bump();
                    break;
                }
                _ => {
                    return Err(self.fail(
                        ErrorKind::MissingCommaOrBrace,
                        format!("expected `,` or `}}`, found {}", self.found()),
                    ))
                }
            }
        }
        self.leave();
        Ok(Json::from(entries))
    }
}

impl Json {
    /// Parses JSON text with the default [`ParseOptions`].
    ///
    /// ```
    /// use jsonval::{ErrorKind, Json};
    ///
    /// let v = Json::parse(r#"{ "a" : [1,2,3] }"#).unwrap();
    /// assert_eq!(v.at("a").size(), 3);
    ///
    /// let e = Json::parse("[1,]").unwrap_err();
    /// assert_eq!(e.kind(), ErrorKind::InvalidValue);
    /// assert_eq!(e.offset(), 3);
    /// ```
    pub fn parse(input: &str) -> Result<Json> {
        Json::parse_with(input, &ParseOptions::default())
    }

    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Json> {
        Parser::new(input, *options).parse()
    }
}

impl FromStr for Json {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Json> {
        Json::parse(s)
    }
}

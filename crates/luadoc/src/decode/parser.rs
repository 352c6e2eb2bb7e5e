use std::sync::LazyLock;

use regex::Regex;

use crate::decode::cursor::Cursor;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::value::{Number, Value};

/// Malformation absorbed during a lenient parse. Never fatal on its own;
/// strict mode promotes the first one to [`Error::Syntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A quoted string reached end-of-input before its closing quote.
    UnterminatedString,
    /// A map-shaped table held a fragment that did not match `bareword =`.
    MalformedMapEntry,
    /// A list-shaped table held a byte no value can start with.
    StrayCharacter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub offset: usize,
    pub kind: DiagnosticKind,
}

impl core::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            DiagnosticKind::UnterminatedString => "unterminated string",
            DiagnosticKind::MalformedMapEntry => "malformed map entry",
            DiagnosticKind::StrayCharacter => "stray character",
        })
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}

/// Result of one parse call: the value tree, the byte offset where the
/// scan stopped (callers detect trailing unconsumed content from it),
/// and the malformations absorbed along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub value: Value,
    pub end: usize,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Parser<'a> {
    cur: Cursor<'a>,
    max_depth: usize,
    depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, offset: usize, options: &Options) -> Result<Self> {
        Ok(Self {
            cur: Cursor::new(input, offset)?,
            max_depth: options.max_depth,
            depth: 0,
            diagnostics: Vec::new(),
        })
    }

    fn diag(&mut self, kind: DiagnosticKind, offset: usize) {
        self.diagnostics.push(Diagnostic { offset, kind });
    }

    fn into_parsed(self, value: Value) -> Parsed {
        Parsed {
            value,
            end: self.cur.pos(),
            diagnostics: self.diagnostics,
        }
    }

    /// Parse exactly one value at the cursor. Returns `Value::Null`
    /// without advancing when nothing value-shaped is present; enclosing
    /// collection parsers must check for progress before looping.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.cur.skip_trivia();
        let Some(ch) = self.cur.peek() else {
            return Ok(Value::Null);
        };
        match ch {
            b'"' | b'\'' => {
                let text = self.scan_quoted(ch)?;
                Ok(Value::String(text.to_string()))
            }
            b'{' => {
                self.cur.advance(1)?;
                self.parse_table()
            }
            _ => Ok(classify_word(self.cur.scan_word())),
        }
    }

    /// Quoted-string scan. Backslash escapes the following byte; the
    /// pair stays in the output verbatim. Only the delimiting quotes
    /// are stripped.
    fn scan_quoted(&mut self, quote: u8) -> Result<&'a str> {
        let open = self.cur.pos();
        self.cur.advance(1)?;
        let start = self.cur.pos();
        loop {
            match self.cur.peek() {
                None => {
                    self.diag(DiagnosticKind::UnterminatedString, open);
                    return Ok(self.cur.tail(start));
                }
                Some(b'\\') => {
                    self.cur.bump();
                    self.cur.bump();
                }
                Some(b) if b == quote => {
                    let text = self.cur.slice(start, self.cur.pos());
                    self.cur.advance(1)?;
                    return Ok(text);
                }
                Some(_) => self.cur.bump(),
            }
        }
    }

    /// Cursor sits just past the opening `{`. Shape comes from a
    /// non-destructive `bareword =` lookahead; an empty table `{}` is a
    /// list by convention, since the grammar gives no signal either way.
    pub fn parse_table(&mut self) -> Result<Value> {
        if self.depth >= self.max_depth {
            return Err(Error::TooDeeplyNested {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        self.cur.skip_trivia();
        let value = if self.cur.peek_map_key().is_some() {
            self.parse_map()?
        } else {
            self.parse_list()?
        };
        self.depth -= 1;
        Ok(value)
    }

    fn parse_list(&mut self) -> Result<Value> {
        let mut items = Vec::new();
        loop {
            self.cur.skip_trivia();
            match self.cur.peek() {
                // unterminated table: return what was collected
                None => break,
                Some(b'}') => {
                    self.cur.advance(1)?;
                    break;
                }
                Some(b'{') => {
                    self.cur.advance(1)?;
                    items.push(self.parse_table()?);
                }
                Some(_) => {
                    let start = self.cur.pos();
                    let value = self.parse_value()?;
                    if self.cur.pos() == start {
                        // nothing value-shaped here; skip one byte so
                        // the loop keeps moving
                        self.diag(DiagnosticKind::StrayCharacter, start);
                        self.cur.bump();
                        continue;
                    }
                    // explicit `nil` is a real element, keep it
                    items.push(value);
                }
            }
            self.cur.skip_trivia();
            if self.cur.peek() == Some(b',') {
                self.cur.advance(1)?;
            }
        }
        Ok(Value::Array(items))
    }

    fn parse_map(&mut self) -> Result<Value> {
        let mut entries: Vec<(String, Value)> = Vec::new();
        loop {
            self.cur.skip_trivia();
            match self.cur.peek() {
                None => break,
                Some(b'}') => {
                    self.cur.advance(1)?;
                    break;
                }
                Some(_) => {
                    let start = self.cur.pos();
                    let Some(key) = self.cur.take_map_key() else {
                        // malformed fragment: skip one byte and retry so
                        // the rest of the document still parses
                        self.diag(DiagnosticKind::MalformedMapEntry, start);
                        self.cur.bump();
                        continue;
                    };
                    let value = self.parse_value()?;
                    bind(&mut entries, key, value);
                    self.cur.skip_trivia();
                    if self.cur.peek() == Some(b',') {
                        self.cur.advance(1)?;
                    }
                }
            }
        }
        Ok(Value::Table(entries))
    }
}

/// Last write wins, first insertion keeps its slot.
fn bind(entries: &mut Vec<(String, Value)>, key: &str, value: Value) {
    match entries.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key.to_string(), value)),
    }
}

/// Bareword interpretation: literal keywords first, then numeric forms,
/// then opaque symbolic reference (`Enum.HousingResult` and friends).
/// Failed numeric conversion falls back to the raw text on purpose; the
/// corpus carries tokens like `2.5.1` that look numeric but are not.
fn classify_word(word: &str) -> Value {
    match word {
        "" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "nil" => Value::Null,
        _ => {
            if word.contains('.') {
                if let Ok(f) = word.parse::<f64>() {
                    return Value::Number(Number::F64(f));
                }
            } else if word.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(i) = word.parse::<i64>() {
                    return Value::Number(Number::I64(i));
                }
            }
            Value::String(word.to_string())
        }
    }
}

fn finish(parser: Parser<'_>, value: Value, options: &Options) -> Result<Parsed> {
    let parsed = parser.into_parsed(value);
    if options.strict {
        if let Some(d) = parsed.diagnostics.first() {
            return Err(Error::Syntax {
                offset: d.offset,
                message: d.kind.to_string(),
            });
        }
    }
    Ok(parsed)
}

/// The `(text, offset) -> (value, new offset)` entry point. Fatal errors
/// are contract violations and the depth guard; merely-malformed input
/// degrades to partial structures plus diagnostics.
pub fn parse_value_at(input: &str, offset: usize, options: &Options) -> Result<Parsed> {
    let mut parser = Parser::new(input, offset, options)?;
    let value = parser.parse_value()?;
    finish(parser, value, options)
}

/// Convenience for offset 0, for inputs that are one table expression.
pub fn parse_table_str(input: &str, options: &Options) -> Result<Parsed> {
    parse_value_at(input, 0, options)
}

static MAIN_TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"local\s+[A-Za-z_]\w*\s*=\s*\{").expect("main-table pattern"));

/// Find the `local Name = {` assignment prefix and parse the table
/// content after it. A source without the prefix yields an empty Table,
/// matching the lenient contract of the surrounding pipeline.
pub fn parse_source(input: &str, options: &Options) -> Result<Parsed> {
    let Some(m) = MAIN_TABLE.find(input) else {
        return Ok(Parsed {
            value: Value::Table(Vec::new()),
            end: 0,
            diagnostics: Vec::new(),
        });
    };
    let mut parser = Parser::new(input, m.end(), options)?;
    let value = parser.parse_table()?;
    finish(parser, value, options)
}

/*
 * token.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Streaming tokenizer for template markup.
//!
//! The tokenizer turns a flat message string into a sequence of text runs
//! and tag tokens. Tag names are `[A-Za-z0-9_]+`. A `<` that does not begin
//! a well-formed tag is ordinary text: `<Hello World>` tokenizes as one text
//! run, not an error. Malformed-tag errors are reserved for sequences with
//! unambiguous tag intent, i.e. a `</` close marker or a `name/` self-close
//! marker followed by stray characters.

use memchr::memchr;

use crate::error::{FormatError, FormatResult};

/// A token produced by the tokenizer.
///
/// Tag tokens carry the bare identifier, without brackets or slashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A literal run of text (may contain `%(name)s` references and
    /// non-tag `<` characters).
    Text(&'a str),

    /// An opening tag: `<name>`.
    Open(&'a str),

    /// A closing tag: `</name>`.
    Close(&'a str),

    /// A self-closing tag: `<name/>` or `<name />`.
    SelfClosing(&'a str),
}

/// Whether a byte may appear in a tag name.
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A cursor over a message string, yielding one token at a time.
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    /// A classified tag waiting to be emitted after a pending text flush.
    pending: Option<(Token<'a>, usize)>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a message string.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            pending: None,
        }
    }

    /// The unconsumed remainder of the input.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Produce the next token, or `None` at end of input.
    ///
    /// Text runs are maximal: consecutive literal characters, including
    /// brackets that fail to parse as tags, are merged into one token.
    pub fn next_token(&mut self) -> FormatResult<Option<Token<'a>>> {
        if let Some((token, end)) = self.pending.take() {
            self.pos = end;
            return Ok(Some(token));
        }

        let bytes = self.source.as_bytes();
        let mut scan = self.pos;
        loop {
            let Some(offset) = memchr(b'<', &bytes[scan..]) else {
                return Ok(self.flush_text(self.source.len()));
            };
            let at = scan + offset;

            match self.classify(at)? {
                Some((token, end)) => {
                    if at > self.pos {
                        // Emit the text run first; hold the tag for the
                        // next call.
                        self.pending = Some((token, end));
                        let text = &self.source[self.pos..at];
                        self.pos = at;
                        return Ok(Some(Token::Text(text)));
                    }
                    self.pos = end;
                    return Ok(Some(token));
                }
                // Literal `<`; keep scanning inside the same text run.
                None => scan = at + 1,
            }
        }
    }

    /// Emit any text between the cursor and `end`.
    fn flush_text(&mut self, end: usize) -> Option<Token<'a>> {
        let start = self.pos;
        self.pos = end;
        if start < end {
            Some(Token::Text(&self.source[start..end]))
        } else {
            None
        }
    }

    /// Classify the bracket sequence starting at `at` (which holds `<`).
    ///
    /// Returns the token and its end offset, `None` if the sequence is not
    /// a tag (literal text), or an error for malformed tag intent.
    fn classify(&self, at: usize) -> FormatResult<Option<(Token<'a>, usize)>> {
        let bytes = self.source.as_bytes();
        let len = bytes.len();

        let mut start = at + 1;
        let closing = bytes.get(start) == Some(&b'/');
        if closing {
            start += 1;
        }

        let mut end = start;
        while end < len && is_name_byte(bytes[end]) {
            end += 1;
        }
        let name = &self.source[start..end];

        if closing {
            // `</` is unambiguous intent; anything but `</name>` is an error.
            if name.is_empty() || bytes.get(end) != Some(&b'>') {
                return Err(self.malformed(at));
            }
            return Ok(Some((Token::Close(name), end + 1)));
        }

        if name.is_empty() {
            return Ok(None);
        }

        match bytes.get(end).copied() {
            Some(b'>') => Ok(Some((Token::Open(name), end + 1))),
            Some(b'/') => {
                if bytes.get(end + 1) == Some(&b'>') {
                    Ok(Some((Token::SelfClosing(name), end + 2)))
                } else {
                    Err(self.malformed(at))
                }
            }
            Some(b) if b.is_ascii_whitespace() => {
                // Trailing whitespace is permitted only before `/>`.
                let mut ws = end;
                while ws < len && bytes[ws].is_ascii_whitespace() {
                    ws += 1;
                }
                if bytes.get(ws) == Some(&b'/') && bytes.get(ws + 1) == Some(&b'>') {
                    Ok(Some((Token::SelfClosing(name), ws + 2)))
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    }

    /// Build a malformed-tag error for the sequence starting at `at`,
    /// capturing up to and including the next `>` for diagnostics.
    fn malformed(&self, at: usize) -> FormatError {
        let rest = &self.source[at..];
        let end = memchr(b'>', rest.as_bytes())
            .map(|i| i + 1)
            .unwrap_or(rest.len());
        FormatError::MalformedTag {
            fragment: rest[..end].to_string(),
            template: self.source.to_string(),
        }
    }
}

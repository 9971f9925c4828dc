/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template parsing and substitution.
//!
//! Every variant carries the original template string so that callers see
//! the full message the error applies to, not just the offending fragment.

use thiserror::Error;
use weft_sprintf::SprintfError;

/// Errors that can occur while formatting a template.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A bracket sequence with unambiguous tag intent contains stray
    /// characters (e.g. `</span oops>` or `<br/x>`).
    #[error(
        "malformed tag `{fragment}` in \"{template}\"; tag names may only contain letters, digits, and underscores"
    )]
    MalformedTag { fragment: String, template: String },

    /// Input ended while a tag was still open.
    #[error("missing closing tag </{name}> in \"{template}\"")]
    UnclosedTag { name: String, template: String },

    /// A closing tag does not match the innermost open tag.
    #[error("missing closing tag </{expected}> (found </{found}>) in \"{template}\"")]
    MismatchedClose {
        found: String,
        expected: String,
        template: String,
    },

    /// A closing tag appeared with no tag open at all.
    #[error("closing tag </{name}> has no matching opening tag in \"{template}\"")]
    UnexpectedClose { name: String, template: String },

    /// A structurally parsed tag has no entry in the placeholder map.
    #[error("missing placeholder value <{name}> in \"{template}\"")]
    MissingPlaceholder { name: String, template: String },

    /// The placeholder bound to a tag name is not a renderable node.
    #[error("placeholder value <{name}> is not a valid node in \"{template}\"")]
    InvalidNode { name: String, template: String },

    /// Scalar interpolation failed inside a text run.
    #[error(transparent)]
    Sprintf(#[from] SprintfError),
}

/// Result type for template operations.
pub type FormatResult<T> = Result<T, FormatError>;

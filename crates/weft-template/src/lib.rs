/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tag and placeholder substitution engine for component trees.
//!
//! This crate formats a localized message string containing inline
//! markup-like tags and named value placeholders into an ordered sequence of
//! text fragments and substituted nodes, suitable for embedding in a
//! component-based UI tree. It supports:
//!
//! - Named value substitution: `%(someVariable)s` (via [`weft_sprintf`])
//! - Tag substitution: `<span>foo</span>`, `<br/>`, `<myComponent />`
//! - Arbitrary tag nesting with sibling order preserved
//! - Deterministic identity keys for repeated uses of the same tag
//!
//! # Architecture
//!
//! The engine is **independent of any UI framework**. It never constructs
//! nodes itself; callers supply prototype nodes in the placeholder map and a
//! [`NodeAdapter`] that knows how to clone a prototype with a new key and
//! children. Bracket sequences that do not form a well-formed tag are passed
//! through as literal text.
//!
//! # Example
//!
//! ```ignore
//! use weft_template::{format, Placeholders};
//!
//! let mut placeholders = Placeholders::new();
//! placeholders.insert_node("link", anchor_prototype);
//! placeholders.insert_scalar("name", "World");
//!
//! let output = format(&adapter, "Hello, <link>%(name)s</link>!", &placeholders)?;
//! ```

pub mod ast;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod node;
pub mod parser;
pub mod token;

// Re-export main types at crate root
pub use ast::{Node, TagNode};
pub use context::{Placeholder, Placeholders};
pub use error::{FormatError, FormatResult};
pub use evaluator::format;
pub use node::{Formatted, NodeAdapter, Segment};
pub use parser::Template;
pub use token::{Token, Tokenizer};
pub use weft_sprintf::ScalarValue;

/*
 * evaluator.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Substitution engine.
//!
//! Walks the parsed node forest and produces the final output: text runs are
//! interpolated against the scalar placeholders, tags resolve to prototype
//! nodes which are cloned through the adapter with a deterministic identity
//! key and recursively substituted children.

use std::collections::HashMap;

use weft_sprintf::{sprintf, ScalarValue};

use crate::ast::{Node, TagNode};
use crate::context::{Placeholder, Placeholders};
use crate::error::{FormatError, FormatResult};
use crate::node::{Formatted, NodeAdapter, Segment};
use crate::parser::Template;

/// Format a message against a placeholder map.
///
/// Compiles the message and substitutes in one call. When the same message
/// is formatted repeatedly, compile once with [`Template::compile`] and call
/// [`Template::substitute`] per placeholder map instead.
///
/// # Arguments
/// * `adapter` - The host framework's node adapter
/// * `message` - The raw template string
/// * `placeholders` - Caller-owned map of scalar values and prototype nodes
///
/// # Returns
/// The ordered output, collapsed to a single element when there is only one.
pub fn format<A: NodeAdapter>(
    adapter: &A,
    message: &str,
    placeholders: &Placeholders<A::Node>,
) -> FormatResult<Formatted<A::Node>> {
    Template::compile(message)?.substitute(adapter, placeholders)
}

impl Template {
    /// Substitute placeholders into this compiled template.
    pub fn substitute<A: NodeAdapter>(
        &self,
        adapter: &A,
        placeholders: &Placeholders<A::Node>,
    ) -> FormatResult<Formatted<A::Node>> {
        let walker = Walker {
            adapter,
            placeholders,
            scalars: placeholders.scalar_values(),
            source: &self.source,
        };
        let segments = walker.substitute_nodes(&self.nodes, &mut Vec::new())?;
        tracing::trace!(segments = segments.len(), "substituted template");
        Ok(Formatted::from_segments(segments))
    }
}

/// One substitution pass over a node forest.
struct Walker<'a, A: NodeAdapter> {
    adapter: &'a A,
    placeholders: &'a Placeholders<A::Node>,
    /// Scalar projection of the placeholder map, built once per pass.
    scalars: HashMap<String, ScalarValue>,
    source: &'a str,
}

impl<A: NodeAdapter> Walker<'_, A> {
    /// Substitute a sibling list. `path` is the chain of sibling indices
    /// from the root down to (and excluding) this list.
    fn substitute_nodes(
        &self,
        nodes: &[Node],
        path: &mut Vec<usize>,
    ) -> FormatResult<Vec<Segment<A::Node>>> {
        let mut segments = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            match node {
                Node::Text(text) => {
                    segments.push(Segment::Text(sprintf(text, &self.scalars)?));
                }
                Node::Tag(tag) => {
                    path.push(index);
                    let segment = self.substitute_tag(tag, path)?;
                    path.pop();
                    segments.push(segment);
                }
            }
        }
        Ok(segments)
    }

    /// Substitute one tag occurrence. `path` ends with this tag's own
    /// sibling index.
    fn substitute_tag(
        &self,
        tag: &TagNode,
        path: &mut Vec<usize>,
    ) -> FormatResult<Segment<A::Node>> {
        let prototype = match self.placeholders.get(&tag.name) {
            Some(Placeholder::Node(prototype)) => prototype,
            Some(Placeholder::Scalar(_)) => {
                return Err(FormatError::InvalidNode {
                    name: tag.name.clone(),
                    template: self.source.to_string(),
                });
            }
            None => {
                return Err(FormatError::MissingPlaceholder {
                    name: tag.name.clone(),
                    template: self.source.to_string(),
                });
            }
        };

        if !self.adapter.is_valid_node(prototype) {
            return Err(FormatError::InvalidNode {
                name: tag.name.clone(),
                template: self.source.to_string(),
            });
        }

        let key = dedupe_key(&tag.name, path);
        let children = match &tag.children {
            None => None,
            Some(nodes) => Some(Formatted::from_segments(
                self.substitute_nodes(nodes, path)?,
            )),
        };

        Ok(Segment::Node(self.adapter.clone_node(prototype, &key, children)))
    }
}

/// The identity key for a tag occurrence: the tag name plus the dot-joined
/// chain of sibling indices from the root (`span-0`, `span-1.2`). Two uses
/// of the same tag name always occupy distinct positions, so keys are
/// unique across the whole output, not merely within one sibling list.
fn dedupe_key(name: &str, path: &[usize]) -> String {
    let mut key = String::with_capacity(name.len() + 2 * path.len() + 1);
    key.push_str(name);
    key.push('-');
    for (i, index) in path.iter().enumerate() {
        if i > 0 {
            key.push('.');
        }
        key.push_str(&index.to_string());
    }
    key
}

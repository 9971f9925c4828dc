/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The renderable-node adapter and output types.
//!
//! The engine is independent of any UI framework. It never constructs nodes;
//! it only clones caller-supplied prototypes through a [`NodeAdapter`]
//! implemented by the integration layer.

/// One element of formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<N> {
    /// Interpolated literal text.
    Text(String),

    /// A cloned prototype node.
    Node(N),
}

/// Formatted output, collapsed to a single element when there is only one.
///
/// The collapsing rule applies at every level: the top-level return of
/// [`format`](crate::format) and the children handed to
/// [`NodeAdapter::clone_node`] both use this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted<N> {
    /// Exactly one output element.
    One(Segment<N>),

    /// Zero, or two or more, output elements in source order.
    Many(Vec<Segment<N>>),
}

impl<N> Formatted<N> {
    /// Collapse a segment list: a single element stands alone.
    pub fn from_segments(mut segments: Vec<Segment<N>>) -> Self {
        if segments.len() == 1 {
            Formatted::One(segments.remove(0))
        } else {
            Formatted::Many(segments)
        }
    }

    /// Flatten back into a segment list.
    pub fn into_segments(self) -> Vec<Segment<N>> {
        match self {
            Formatted::One(segment) => vec![segment],
            Formatted::Many(segments) => segments,
        }
    }

    /// Number of output elements.
    pub fn len(&self) -> usize {
        match self {
            Formatted::One(_) => 1,
            Formatted::Many(segments) => segments.len(),
        }
    }

    /// Whether there is no output at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text content, when the output is a single text segment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Formatted::One(Segment::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// Capability interface onto the host framework's node model.
///
/// Implementations supply the "is renderable" predicate and the
/// clone-with-key-and-children operation; prototypes are never mutated.
pub trait NodeAdapter {
    /// The host framework's node type.
    type Node: Clone;

    /// Whether `candidate` is acceptable as a renderable node.
    ///
    /// Returning `false` fails the substitution with an invalid-node error.
    fn is_valid_node(&self, candidate: &Self::Node) -> bool;

    /// Clone `prototype` with the given identity key and substituted
    /// children. `children` is `None` for a self-closing tag and
    /// `Some(Formatted::Many(vec![]))` for an explicitly empty pair.
    fn clone_node(
        &self,
        prototype: &Self::Node,
        key: &str,
        children: Option<Formatted<Self::Node>>,
    ) -> Self::Node;
}

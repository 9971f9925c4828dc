/*
 * ast.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Parsed template AST types.
//!
//! A template parses into an ordered forest of nodes: literal text runs and
//! tags with nested children. Self-closing tags are distinguished from
//! explicitly empty pairs: `<span/>` has no children slot at all, while
//! `<span></span>` has an empty children list.

/// A node in the parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A literal substring, not yet interpolated.
    Text(String),

    /// A tag with an optional body.
    Tag(TagNode),
}

impl Node {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }
}

/// A tag occurrence in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    /// The bare tag identifier.
    pub name: String,

    /// Nested children in source order, or `None` for a self-closing tag.
    pub children: Option<Vec<Node>>,
}

impl TagNode {
    /// Create a self-closing tag node (`<name/>`).
    pub fn self_closing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: None,
        }
    }

    /// Create a tag node with a (possibly empty) body.
    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }

    /// Whether this tag was written in self-closing form.
    pub fn is_self_closing(&self) -> bool {
        self.children.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_has_no_children_slot() {
        let tag = TagNode::self_closing("br");
        assert_eq!(tag.name, "br");
        assert!(tag.is_self_closing());
        assert_eq!(tag.children, None);
    }

    #[test]
    fn test_empty_pair_differs_from_self_closing() {
        let pair = TagNode::with_children("span", vec![]);
        let solo = TagNode::self_closing("span");
        assert!(!pair.is_self_closing());
        assert_ne!(pair, solo);
    }

    #[test]
    fn test_nested_children_order() {
        let tag = TagNode::with_children(
            "span",
            vec![Node::text("a"), Node::Tag(TagNode::self_closing("br")), Node::text("b")],
        );
        let children = tag.children.unwrap();
        assert_eq!(children[0], Node::text("a"));
        assert_eq!(children[2], Node::text("b"));
    }
}

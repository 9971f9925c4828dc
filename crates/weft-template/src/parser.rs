/*
 * parser.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Nesting-aware tree builder.
//!
//! Consumes the token stream and produces the node forest using an explicit
//! stack, so memory use is bounded by the tag nesting depth of the input and
//! adversarially deep templates cannot exhaust the call stack.

use crate::ast::{Node, TagNode};
use crate::error::{FormatError, FormatResult};
use crate::token::{Token, Tokenizer};

/// A compiled template ready for substitution.
#[derive(Debug, Clone)]
pub struct Template {
    /// The parsed node forest.
    pub(crate) nodes: Vec<Node>,

    /// Original source (for error reporting).
    pub(crate) source: String,
}

/// One open tag awaiting its closing counterpart.
struct Frame {
    name: String,
    /// The parent's accumulated children, restored when this tag closes.
    parent: Vec<Node>,
}

impl Template {
    /// Compile a template from source text.
    ///
    /// # Arguments
    /// * `source` - The template source text
    ///
    /// # Returns
    /// A compiled template, or an error if the tag structure is invalid.
    pub fn compile(source: &str) -> FormatResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let mut frames: Vec<Frame> = Vec::new();
        let mut current: Vec<Node> = Vec::new();

        while let Some(token) = tokenizer.next_token()? {
            match token {
                Token::Text(text) => current.push(Node::Text(text.to_string())),

                Token::SelfClosing(name) => {
                    current.push(Node::Tag(TagNode::self_closing(name)));
                }

                Token::Open(name) => {
                    frames.push(Frame {
                        name: name.to_string(),
                        parent: std::mem::take(&mut current),
                    });
                }

                Token::Close(name) => {
                    let Some(frame) = frames.pop() else {
                        return Err(FormatError::UnexpectedClose {
                            name: name.to_string(),
                            template: source.to_string(),
                        });
                    };
                    if frame.name != name {
                        return Err(FormatError::MismatchedClose {
                            found: name.to_string(),
                            expected: frame.name,
                            template: source.to_string(),
                        });
                    }
                    let children = std::mem::replace(&mut current, frame.parent);
                    current.push(Node::Tag(TagNode::with_children(name, children)));
                }
            }
        }

        if let Some(frame) = frames.pop() {
            // The last frame pushed is the innermost unmatched tag.
            return Err(FormatError::UnclosedTag {
                name: frame.name,
                template: source.to_string(),
            });
        }

        tracing::trace!(nodes = current.len(), "compiled template");

        Ok(Template {
            nodes: current,
            source: source.to_string(),
        })
    }

    /// Get the parsed nodes of this template.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The original template source.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(source: &str) -> Vec<Node> {
        Template::compile(source).unwrap().nodes.clone()
    }

    #[test]
    fn test_text_only() {
        assert_eq!(compile("Hello!"), vec![Node::text("Hello!")]);
    }

    #[test]
    fn test_flat_tag() {
        assert_eq!(
            compile("Hello, <span>World</span>!"),
            vec![
                Node::text("Hello, "),
                Node::Tag(TagNode::with_children("span", vec![Node::text("World")])),
                Node::text("!"),
            ]
        );
    }

    #[test]
    fn test_self_closing_vs_empty_pair() {
        assert_eq!(
            compile("<span/>"),
            vec![Node::Tag(TagNode::self_closing("span"))]
        );
        assert_eq!(
            compile("<span></span>"),
            vec![Node::Tag(TagNode::with_children("span", vec![]))]
        );
    }

    #[test]
    fn test_nested_tags() {
        assert_eq!(
            compile("<span><span>Hello</span>, World!</span>"),
            vec![Node::Tag(TagNode::with_children(
                "span",
                vec![
                    Node::Tag(TagNode::with_children("span", vec![Node::text("Hello")])),
                    Node::text(", World!"),
                ]
            ))]
        );
    }

    #[test]
    fn test_self_closing_inside_pair() {
        assert_eq!(
            compile("<span><br/>World!</span>"),
            vec![Node::Tag(TagNode::with_children(
                "span",
                vec![
                    Node::Tag(TagNode::self_closing("br")),
                    Node::text("World!"),
                ]
            ))]
        );
    }

    #[test]
    fn test_sibling_order_preserved() {
        assert_eq!(
            compile("<a>1</a><b>2</b>"),
            vec![
                Node::Tag(TagNode::with_children("a", vec![Node::text("1")])),
                Node::Tag(TagNode::with_children("b", vec![Node::text("2")])),
            ]
        );
    }

    #[test]
    fn test_unclosed_tag() {
        let err = Template::compile("<div>Hello World!").unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnclosedTag { ref name, .. } if name == "div"
        ));
    }

    #[test]
    fn test_unclosed_names_innermost_tag() {
        let err = Template::compile("<outer><inner>x").unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnclosedTag { ref name, .. } if name == "inner"
        ));
    }

    #[test]
    fn test_mismatched_close() {
        let err = Template::compile("<span>Hello</div>, World!").unwrap_err();
        match err {
            FormatError::MismatchedClose {
                found, expected, ..
            } => {
                assert_eq!(found, "div");
                assert_eq!(expected, "span");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_close() {
        let err = Template::compile("Hello</span>").unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnexpectedClose { ref name, .. } if name == "span"
        ));
    }

    #[test]
    fn test_trailing_text_flushed() {
        assert_eq!(
            compile("<br/>tail"),
            vec![Node::Tag(TagNode::self_closing("br")), Node::text("tail")]
        );
    }

    #[test]
    fn test_deeply_nested_does_not_recurse() {
        // The builder is iterative; a pathological depth parses fine.
        let depth = 2_000;
        let source = format!("{}x{}", "<t>".repeat(depth), "</t>".repeat(depth));
        let template = Template::compile(&source).unwrap();
        assert_eq!(template.nodes().len(), 1);
    }

    #[test]
    fn test_source_retained() {
        let template = Template::compile("Hello, <b>you</b>").unwrap();
        assert_eq!(template.source(), "Hello, <b>you</b>");
    }
}

/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder map types.
//!
//! A single map services both substitution namespaces: names referenced as
//! `%(name)s` resolve to scalar values, and names used as tags resolve to
//! prototype nodes. Which namespace applies is determined by how the name
//! appears in the template, not by the map itself.

use std::collections::HashMap;

use weft_sprintf::ScalarValue;

/// A caller-supplied value bound to a placeholder name.
#[derive(Debug, Clone)]
pub enum Placeholder<N> {
    /// A scalar, consumed by `%(name)s` interpolation in text runs.
    Scalar(ScalarValue),

    /// A prototype node, cloned once per tag occurrence.
    Node(N),
}

/// The placeholder map for one `format` call.
///
/// The map is owned by the caller and read-only to the engine.
#[derive(Debug, Clone, Default)]
pub struct Placeholders<N> {
    entries: HashMap<String, Placeholder<N>>,
}

impl<N> Placeholders<N> {
    /// Create an empty placeholder map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Bind a name to a scalar value.
    pub fn insert_scalar(&mut self, name: impl Into<String>, value: impl Into<ScalarValue>) {
        self.entries
            .insert(name.into(), Placeholder::Scalar(value.into()));
    }

    /// Bind a name to a prototype node.
    pub fn insert_node(&mut self, name: impl Into<String>, prototype: N) {
        self.entries
            .insert(name.into(), Placeholder::Node(prototype));
    }

    /// Look up a placeholder by name.
    pub fn get(&self, name: &str) -> Option<&Placeholder<N>> {
        self.entries.get(name)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project the scalar entries into the map shape the interpolator takes.
    pub(crate) fn scalar_values(&self) -> HashMap<String, ScalarValue> {
        self.entries
            .iter()
            .filter_map(|(name, placeholder)| match placeholder {
                Placeholder::Scalar(value) => Some((name.clone(), value.clone())),
                Placeholder::Node(_) => None,
            })
            .collect()
    }
}

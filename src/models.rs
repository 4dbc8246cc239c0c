//! Data models for the graph viewer.
//!
//! RDF terms and triples as loaded from Turtle, and the node/link structures
//! handed to the 3D force-graph renderer.

use serde::{Deserialize, Serialize};

// ============================================================================
// RDF Terms
// ============================================================================

/// A term in object position. Subjects and predicates are always resources,
/// so they are stored as plain URI strings on [`Triple`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Resource(String),
    Literal(String),
}

impl Term {
    pub fn resource(uri: impl Into<String>) -> Self {
        Term::Resource(uri.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    /// Returns the URI if this term is a resource.
    pub fn as_resource(&self) -> Option<&str> {
        match self {
            Term::Resource(uri) => Some(uri),
            Term::Literal(_) => None,
        }
    }

    /// The string form of the term: the URI of a resource or the lexical
    /// value of a literal.
    pub fn as_str(&self) -> &str {
        match self {
            Term::Resource(uri) => uri,
            Term::Literal(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

// ============================================================================
// Force-Graph Data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub uri: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    /// Color-coding key for the renderer. Always equal to `node_type`.
    pub group: String,
    pub val: u32,
}

/// A relationship between two nodes. `source` and `target` are positions in
/// [`GraphData::nodes`] once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
    #[serde(rename = "type")]
    pub link_type: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphData {
    /// Distinct groups in order of first appearance among the nodes.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for node in &self.nodes {
            if !groups.contains(&node.group.as_str()) {
                groups.push(&node.group);
            }
        }
        groups
    }
}

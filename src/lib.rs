//! Triplegraph library - RDF triples to 3D force-graph data.
//!
//! This module wires the application's modules together and holds the shared
//! server state. Everything is public for testing and library use.

use axum::{routing::get, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod graph;
pub mod models;
pub mod store;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

pub const DATA_PATH: &str = "data/jaguars.ttl";
pub const BIND_ADDR: &str = "127.0.0.1:5000";

/// Namespace of entity identifiers in the bundled dataset.
pub const RESOURCE_NS: &str = "http://example.org/resource/";
/// Namespace of classes and relationship predicates.
pub const ONTOLOGY_NS: &str = "http://example.org/ontology#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub data_path: PathBuf,
    pub builder: GraphBuilder,
    /// Reject sources with more triples than this. None = no limit.
    pub max_triples: Option<usize>,
}

impl AppState {
    pub fn new(data_path: PathBuf, builder: GraphBuilder, max_triples: Option<usize>) -> Self {
        Self {
            data_path,
            builder,
            max_triples,
        }
    }

    /// Reloads the Turtle source and builds graph data from it. Blocking.
    pub fn load_graph(&self) -> Result<GraphData> {
        let store = TripleStore::from_path(&self.data_path, self.max_triples)?;
        Ok(self.builder.build(&store))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PathBuf::from(DATA_PATH), GraphBuilder::default(), None)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(graph::graph_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use error::{GraphError, Result};
pub use graph::{short_name, GraphBuilder, GraphConfig, WeightTable, DEFAULT_TYPE};
pub use models::{GraphData, GraphLink, GraphNode, Term, Triple};
pub use store::{TripleSource, TripleStore};

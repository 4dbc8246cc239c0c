//! Knowledge graph building and visualization.
//!
//! This module turns a triple store into the node/link structure consumed by
//! the 3D force-graph page, and serves that page.

use crate::models::{GraphData, GraphLink, GraphNode, Term};
use crate::store::TripleSource;
use crate::templates::{base_html, graph_css, html_escape, render_graph_js, GraphRendererConfig};
use crate::{AppState, ONTOLOGY_NS, RDFS_LABEL, RDF_TYPE};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, trace};

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

/// Type given to resources with no type in the ontology namespace.
pub const DEFAULT_TYPE: &str = "Entity";

// ============================================================================
// Configuration
// ============================================================================

/// Maps node types to the size weight the renderer draws them with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    weights: HashMap<String, u32>,
    default_weight: u32,
}

impl WeightTable {
    /// An empty table where every type gets `default_weight`.
    pub fn new(default_weight: u32) -> Self {
        Self {
            weights: HashMap::new(),
            default_weight,
        }
    }

    pub fn with(mut self, node_type: impl Into<String>, weight: u32) -> Self {
        self.weights.insert(node_type.into(), weight);
        self
    }

    pub fn weight_for(&self, node_type: &str) -> u32 {
        self.weights
            .get(node_type)
            .copied()
            .unwrap_or(self.default_weight)
    }
}

impl Default for WeightTable {
    /// Jaguars largest, then places, then organizations.
    fn default() -> Self {
        Self::new(5)
            .with("Jaguar", 10)
            .with("Country", 8)
            .with("State", 8)
            .with("Region", 8)
            .with("NGO", 7)
            .with("GovernmentAgency", 7)
    }
}

#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Marker a type URI must contain to count as an ontology type.
    pub ontology_namespace: String,
    pub label_predicate: String,
    pub type_predicate: String,
    pub weights: WeightTable,
    /// Register the classes named by type assertions as nodes of their own.
    pub class_nodes: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ontology_namespace: ONTOLOGY_NS.to_string(),
            label_predicate: RDFS_LABEL.to_string(),
            type_predicate: RDF_TYPE.to_string(),
            weights: WeightTable::default(),
            class_nodes: false,
        }
    }
}

// ============================================================================
// Graph Building
// ============================================================================

/// Extracts a display name from a URI: the part after the last `#`, else
/// after the last `/`, else the whole URI.
pub fn short_name(uri: &str) -> &str {
    if let Some(pos) = uri.rfind('#') {
        &uri[pos + 1..]
    } else if let Some(pos) = uri.rfind('/') {
        &uri[pos + 1..]
    } else {
        uri
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Builds force-graph data from every triple in `store`.
    ///
    /// Nodes get ids in first-seen order (subject before object). Objects of
    /// type assertions only become nodes when `class_nodes` is set. Links are
    /// unique per (source, target, predicate short name) and reference nodes
    /// by their position in the returned `nodes`.
    pub fn build<S: TripleSource>(&self, store: &S) -> GraphData {
        let mut nodes: Vec<GraphNode> = Vec::new();
        let mut node_ids: HashMap<String, usize> = HashMap::new();

        for triple in store.triples() {
            self.register(store, &triple.subject, &mut nodes, &mut node_ids);
            if let Term::Resource(uri) = &triple.object {
                if self.config.class_nodes || triple.predicate != self.config.type_predicate {
                    self.register(store, uri, &mut nodes, &mut node_ids);
                }
            }
        }

        let mut links: Vec<GraphLink> = Vec::new();
        let mut seen: HashSet<(usize, usize, String)> = HashSet::new();

        for triple in store.triples() {
            let object = match &triple.object {
                Term::Resource(uri) => uri,
                Term::Literal(_) => continue,
            };
            if triple.predicate == self.config.type_predicate {
                continue;
            }

            let (Some(&source), Some(&target)) =
                (node_ids.get(&triple.subject), node_ids.get(object))
            else {
                trace!(subject = %triple.subject, object = %object, "dropping unresolved link");
                continue;
            };

            let name = short_name(&triple.predicate);
            if !seen.insert((source, target, name.to_string())) {
                continue;
            }
            links.push(GraphLink {
                source,
                target,
                link_type: name.to_string(),
                label: name.to_string(),
            });
        }

        let graph = densify(nodes, links);
        debug!(nodes = graph.nodes.len(), links = graph.links.len(), "built graph");
        graph
    }

    fn register<S: TripleSource>(
        &self,
        store: &S,
        uri: &str,
        nodes: &mut Vec<GraphNode>,
        node_ids: &mut HashMap<String, usize>,
    ) {
        if node_ids.contains_key(uri) {
            return;
        }

        let node_type = self.node_type(store, uri);
        let id = nodes.len();
        nodes.push(GraphNode {
            id,
            uri: uri.to_string(),
            name: self.node_label(store, uri),
            val: self.config.weights.weight_for(&node_type),
            group: node_type.clone(),
            node_type,
        });
        node_ids.insert(uri.to_string(), id);
    }

    /// First label in store order, or the URI's short name.
    fn node_label<S: TripleSource>(&self, store: &S, uri: &str) -> String {
        store
            .objects(uri, &self.config.label_predicate)
            .first()
            .map(|term| term.as_str().to_string())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| short_name(uri).to_string())
    }

    /// Local name of the first type inside the ontology namespace.
    fn node_type<S: TripleSource>(&self, store: &S, uri: &str) -> String {
        store
            .objects(uri, &self.config.type_predicate)
            .into_iter()
            .filter_map(Term::as_resource)
            .find(|type_uri| type_uri.contains(&self.config.ontology_namespace))
            .map(|type_uri| match type_uri.rfind('#') {
                Some(pos) => type_uri[pos + 1..].to_string(),
                None => type_uri.to_string(),
            })
            .unwrap_or_else(|| DEFAULT_TYPE.to_string())
    }
}

/// Orders nodes by id and rewrites link endpoints from node ids to array
/// positions. Links with an endpoint missing from `nodes` are dropped.
fn densify(mut nodes: Vec<GraphNode>, links: Vec<GraphLink>) -> GraphData {
    nodes.sort_by_key(|n| n.id);
    let positions: HashMap<usize, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id, i))
        .collect();

    let links = links
        .into_iter()
        .filter_map(|link| {
            let source = *positions.get(&link.source)?;
            let target = *positions.get(&link.target)?;
            Some(GraphLink {
                source,
                target,
                ..link
            })
        })
        .collect();

    GraphData { nodes, links }
}

// ============================================================================
// Route Handlers
// ============================================================================

pub async fn graph_page(State(state): State<Arc<AppState>>) -> Response {
    let loader = Arc::clone(&state);
    let graph = match tokio::task::spawn_blocking(move || loader.load_graph()).await {
        Ok(Ok(graph)) => graph,
        Ok(Err(e)) => {
            error!(error = %e, "failed to build graph");
            return error_page(&e.to_string());
        }
        Err(e) => {
            error!(error = %e, "graph task failed");
            return error_page("graph task failed");
        }
    };

    let config = GraphRendererConfig {
        container_selector: "#graph-container".into(),
        show_arrows: true,
        show_link_labels: true,
        focus_on_click: true,
    };

    let graph_script = match render_graph_js(&config, &graph) {
        Ok(script) => script,
        Err(e) => {
            error!(error = %e, "failed to serialize graph");
            return error_page("failed to serialize graph");
        }
    };

    let legend: String = graph
        .groups()
        .iter()
        .map(|g| format!(r#"<span class="kg-legend-item" data-group="{0}">{0}</span>"#, html_escape(g)))
        .collect();

    let html = format!(
        r##"
        <style>{graph_styles}</style>
        <h1>Knowledge Graph</h1>

        <div class="graph-stats">
            <span><strong>{nodes}</strong> nodes</span>
            <span><strong>{links}</strong> links</span>
        </div>

        <div class="kg-legend">{legend}</div>

        <div class="graph-container" id="graph-container"></div>

        {graph_script}
        "##,
        graph_styles = graph_css(),
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        legend = legend,
        graph_script = graph_script,
    );

    Html(base_html("Knowledge Graph", &html)).into_response()
}

fn error_page(message: &str) -> Response {
    let html = format!(
        r#"<h1>Graph unavailable</h1><p class="error">{}</p>"#,
        html_escape(message)
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Html(base_html("Error", &html))).into_response()
}

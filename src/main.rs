//! Triplegraph server - renders an RDF knowledge graph as a 3D force graph.
//!
//! The Turtle source is reloaded on every request to `/`, so edits to the
//! data file show up on the next page load.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use triplegraph::{
    router, AppState, GraphBuilder, GraphConfig, BIND_ADDR, DATA_PATH, ONTOLOGY_NS,
};

#[derive(Parser)]
#[command(name = "triplegraph", version, about = "Serve an RDF graph as a 3D force graph")]
struct Args {
    /// Turtle file to visualize
    #[arg(long, env = "GRAPH_DATA", default_value = DATA_PATH)]
    data: PathBuf,

    /// Address to listen on
    #[arg(long, env = "GRAPH_BIND", default_value = BIND_ADDR)]
    bind: String,

    /// Namespace a type URI must contain to classify a node
    #[arg(long, env = "GRAPH_ONTOLOGY_NS", default_value = ONTOLOGY_NS)]
    ontology_ns: String,

    /// Reject data files with more triples than this
    #[arg(long, env = "GRAPH_MAX_TRIPLES")]
    max_triples: Option<usize>,
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let builder = GraphBuilder::new(GraphConfig {
        ontology_namespace: args.ontology_ns,
        ..GraphConfig::default()
    });
    let state = Arc::new(AppState::new(args.data, builder, args.max_triples));

    if !state.data_path.is_file() {
        tracing::warn!(path = %state.data_path.display(), "data file not found, requests will fail until it exists");
    }

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", args.bind, e));

    tracing::info!(addr = %args.bind, data = %state.data_path.display(), "graph server running");

    axum::serve(listener, router(state)).await.expect("Server error");
}

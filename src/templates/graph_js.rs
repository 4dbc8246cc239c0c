//! 3D force-graph rendering.
//!
//! Generates the `<script>` and `<style>` blocks for the graph page. Graph data
//! is embedded inline; links reference nodes by array position, which
//! 3d-force-graph accepts once `nodeId` is pointed at the position field.

use super::components::script_json;
use crate::models::GraphData;

const FORCE_GRAPH_SRC: &str = "https://unpkg.com/3d-force-graph";

/// Configuration for the graph renderer.
pub struct GraphRendererConfig {
    /// CSS selector for the container element (e.g. "#graph-container").
    pub container_selector: String,
    /// Draw arrowheads on directed links.
    pub show_arrows: bool,
    /// Show the predicate name when hovering a link.
    pub show_link_labels: bool,
    /// Move the camera to a node when it is clicked.
    pub focus_on_click: bool,
}

/// Returns the `<style>` block with `.kg-` prefixed classes.
pub fn graph_css() -> String {
    r#"
        .graph-container {
            position: relative;
            border: 1px solid var(--border);
            border-radius: 4px;
            height: calc(100vh - 180px);
            min-height: 400px;
            overflow: hidden;
        }
        .graph-stats {
            display: flex;
            gap: 1.5rem;
            font-size: 0.85rem;
            color: var(--muted);
            margin-bottom: 0.5rem;
        }
        .kg-legend {
            display: flex;
            flex-wrap: wrap;
            gap: 0.75rem;
            font-size: 0.8rem;
            margin-bottom: 0.75rem;
        }
        .kg-legend-item::before {
            content: "";
            display: inline-block;
            width: 0.7em;
            height: 0.7em;
            margin-right: 0.3em;
            border-radius: 50%;
            background: var(--kg-color, var(--muted));
        }
        .kg-tooltip { font-size: 12px; }
        .kg-tooltip .kg-type { color: var(--muted); }
    "#
    .to_string()
}

/// Returns the loader `<script>` tag plus an IIFE that draws `graph`.
pub fn render_graph_js(config: &GraphRendererConfig, graph: &GraphData) -> serde_json::Result<String> {
    // Each node's `index` is its array position; links use the same numbers.
    let graph_json = script_json(&serde_json::to_string(graph)?);
    let container_sel = &config.container_selector;
    let show_arrows = config.show_arrows;
    let show_link_labels = config.show_link_labels;
    let focus_on_click = config.focus_on_click;

    Ok(format!(
        r##"<script src="{FORCE_GRAPH_SRC}"></script>
        <script>
        (function() {{
            const container = document.querySelector('{container_sel}');
            if (!container) return;

            const showArrows = {show_arrows};
            const showLinkLabels = {show_link_labels};
            const focusOnClick = {focus_on_click};

            const data = {graph_json};
            data.nodes.forEach((n, i) => {{ n.index = i; }});

            const esc = s => String(s).replace(/[&<>"']/g, c => ({{
                '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
            }})[c]);

            const Graph = ForceGraph3D()(container)
                .width(container.clientWidth)
                .height(container.clientHeight)
                .graphData(data)
                .nodeId('index')
                .nodeVal('val')
                .nodeAutoColorBy('group')
                .nodeLabel(n => `<div class="kg-tooltip">${{esc(n.name)}} <span class="kg-type">(${{esc(n.type)}})</span></div>`)
                .linkLabel(l => showLinkLabels ? esc(l.label) : '')
                .linkDirectionalArrowLength(showArrows ? 3.5 : 0)
                .linkDirectionalArrowRelPos(1)
                .linkOpacity(0.5);

            if (focusOnClick) {{
                Graph.onNodeClick(node => {{
                    const distance = 80;
                    const ratio = 1 + distance / Math.hypot(node.x, node.y, node.z);
                    Graph.cameraPosition(
                        {{ x: node.x * ratio, y: node.y * ratio, z: node.z * ratio }},
                        node,
                        1500
                    );
                }});
            }}

            // Legend swatches pick up the colors assigned by nodeAutoColorBy.
            setTimeout(() => {{
                const colors = {{}};
                data.nodes.forEach(n => {{ if (n.color && !colors[n.group]) colors[n.group] = n.color; }});
                document.querySelectorAll('.kg-legend-item').forEach(el => {{
                    const c = colors[el.dataset.group];
                    if (c) el.style.setProperty('--kg-color', c);
                }});
            }}, 500);

            window.addEventListener('resize', () => {{
                Graph.width(container.clientWidth).height(container.clientHeight);
            }});
        }})();
        </script>"##
    ))
}

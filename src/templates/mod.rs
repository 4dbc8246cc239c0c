//! HTML templates and styling for the graph viewer.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Base page template and escaping helpers
//! - `graph_js` - 3d-force-graph loader script and graph styles

mod components;
mod graph_js;
mod styles;

pub use components::{base_html, html_escape, script_json};
pub use graph_js::{graph_css, render_graph_js, GraphRendererConfig};
pub use styles::STYLE;

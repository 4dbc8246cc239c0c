//! CSS styles for the graph viewer.
//!
//! Contains the main STYLE constant shared by every page.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Dark Theme */
:root {
    --base03: #002b36;
    --base02: #073642;
    --base01: #586e75;
    --base00: #657b83;
    --base0: #839496;
    --base1: #93a1a1;
    --base2: #eee8d5;

    --yellow: #b58900;
    --orange: #cb4b16;
    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base03);
    --fg: var(--base0);
    --muted: var(--base01);
    --border: var(--base02);
    --link: var(--blue);
    --accent: var(--base02);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    margin: 0 auto;
    padding: 1rem;
}

h1 { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.5em; color: var(--base1); }

.error {
    color: var(--red);
    font-family: monospace;
    padding: 0.75rem;
    background: var(--accent);
    border-radius: 4px;
}
"#;

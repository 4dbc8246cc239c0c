//! Shared HTML components for the graph viewer.
//!
//! Contains the base page template and escaping helpers.

use super::styles::STYLE;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Makes serialized JSON safe to inline in a `<script>` element.
pub fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_script_json_closes_no_tags() {
        let json = r#"{"name":"</script><script>alert(1)</script>"}"#;
        let safe = script_json(json);
        assert!(!safe.contains("</script>"));
        let back: serde_json::Value = serde_json::from_str(&safe).unwrap();
        assert_eq!(back["name"], "</script><script>alert(1)</script>");
    }

    #[test]
    fn test_base_html_escapes_title() {
        let page = base_html("A <b> title", "<p>body</p>");
        assert!(page.contains("<title>A &lt;b&gt; title</title>"));
        assert!(page.contains("<p>body</p>"));
    }
}

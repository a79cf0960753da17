//! Markup rendering: components → canvas markup, and the standalone HTML
//! export document.
//!
//! Rendering is a pure function of a component's current field values.
//! Canvas output carries the editor affordances (drop zones, removable
//! child wrappers); export output is the same markup minus the chrome,
//! wrapped in a full page with the embedded stylesheet.

use crate::model::{Component, ComponentKind};
use std::fmt::Write;

/// Escape text for interpolation into markup, attribute values included.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a component to its canvas markup.
#[must_use]
pub fn render(component: &Component) -> String {
    let mut out = String::with_capacity(64);
    match &component.kind {
        ComponentKind::Heading { level, text } => {
            write!(
                out,
                "<div class=\"comp-heading\"><h{level}>{}</h{level}></div>",
                escape(text)
            )
            .unwrap();
        }
        ComponentKind::Text { content } => {
            write!(out, "<div class=\"comp-text\"><p>{}</p></div>", escape(content)).unwrap();
        }
        ComponentKind::Button { label } => {
            write!(
                out,
                "<div class=\"comp-button\"><button>{}</button></div>",
                escape(label)
            )
            .unwrap();
        }
        ComponentKind::Input { placeholder } => {
            write!(
                out,
                "<div class=\"comp-input\"><input type=\"text\" placeholder=\"{}\"></div>",
                escape(placeholder)
            )
            .unwrap();
        }
        ComponentKind::Checkbox { label } => {
            write!(
                out,
                "<div class=\"comp-checkbox\"><label><input type=\"checkbox\"> {}</label></div>",
                escape(label)
            )
            .unwrap();
        }
        ComponentKind::Link { text, url } => {
            write!(
                out,
                "<div class=\"comp-link\"><a href=\"{}\">{}</a></div>",
                escape(url),
                escape(text)
            )
            .unwrap();
        }
        ComponentKind::Code { content } => {
            write!(
                out,
                "<div class=\"comp-code\"><pre><code>{}</code></pre></div>",
                escape(content)
            )
            .unwrap();
        }
        ComponentKind::Container { children } => {
            write!(
                out,
                "<div class=\"comp-container drop-zone\" data-container-id=\"{}\">",
                component.id
            )
            .unwrap();
            if children.is_empty() {
                out.push_str("<div class=\"container-placeholder\">Drop components here</div>");
            } else {
                for child in children {
                    out.push_str(&render_child(child));
                }
            }
            out.push_str("</div>");
        }
    }
    out
}

/// A container child wrapped in its removable-child decoration.
#[must_use]
pub fn render_child(child: &Component) -> String {
    format!(
        "<div class=\"container-child\" data-child-id=\"{}\">{}<button class=\"delete-child-btn\">✕</button></div>",
        child.id,
        render(child)
    )
}

/// Render a component for export: no drop zones, no delete buttons.
#[must_use]
pub fn render_export(component: &Component) -> String {
    match &component.kind {
        ComponentKind::Container { children } => {
            if children.is_empty() {
                return "<div class=\"comp-container\"></div>".to_string();
            }
            let mut out = String::from("<div class=\"comp-container\">\n");
            for child in children {
                let _ = writeln!(out, "        {}", render_export(child));
            }
            out.push_str("</div>");
            out
        }
        _ => render(component),
    }
}

/// Stylesheet embedded in exported pages.
const EXPORT_STYLE: &str = r#"        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        .comp-button button {
            padding: 0.5rem 1rem;
            background: #667eea;
            color: white;
            border: none;
            border-radius: 4px;
            font-size: 1rem;
            cursor: pointer;
        }
        .comp-button button:hover {
            background: #5568d3;
        }
        .comp-input input {
            width: 100%;
            padding: 0.5rem;
            border: 1px solid #e1e4e8;
            border-radius: 4px;
            font-size: 1rem;
        }
        .comp-checkbox label {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            cursor: pointer;
        }
        .comp-link a {
            color: #667eea;
            text-decoration: none;
        }
        .comp-link a:hover {
            text-decoration: underline;
        }
        .comp-code {
            background: #1e1e1e;
            color: #d4d4d4;
            padding: 1rem;
            border-radius: 4px;
            font-family: Monaco, Menlo, monospace;
            font-size: 0.9rem;
            overflow-x: auto;
        }
        .comp-container {
            padding: 1rem;
            border: 1px solid #e1e4e8;
            border-radius: 4px;
            background: #f9fafb;
        }
        .container-child {
            margin-bottom: 0.5rem;
        }
        .container-child:last-child {
            margin-bottom: 0;
        }"#;

/// Assemble the standalone export page for the whole root sequence. The
/// clipboard write belongs to the export collaborator; this only builds
/// the document text.
#[must_use]
pub fn export_document(roots: &[Component]) -> String {
    let body = roots
        .iter()
        .map(render_export)
        .collect::<Vec<_>>()
        .join("\n    ");

    let mut out = String::with_capacity(2048 + body.len());
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("    <title>Playground</title>\n");
    out.push_str("    <style>\n");
    out.push_str(EXPORT_STYLE);
    out.push_str("\n    </style>\n</head>\n<body>\n");
    out.push_str(&body);
    out.push_str("\n</body>\n</html>");
    out
}

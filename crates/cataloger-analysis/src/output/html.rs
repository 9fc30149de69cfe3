//! Self-contained HTML page for browsing a catalog.

use std::fmt::{self, Write};

use crate::catalog::{Catalog, CatalogEntry, Endpoint};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; background: #f6f7f9; color: #1d2330; }
header { margin-bottom: 1.5rem; }
.stats span { display: inline-block; margin-right: 1.5rem; }
#filter { width: 100%; padding: .5rem; font-size: 1rem; margin-bottom: 1.5rem; }
.entry { background: #fff; border-radius: 6px; padding: 1rem 1.25rem; margin-bottom: 1rem; box-shadow: 0 1px 2px rgba(0,0,0,.08); }
.entry h2 { margin: 0 0 .25rem; font-size: 1.15rem; }
.meta { color: #5b6475; font-size: .85rem; margin-bottom: .5rem; }
.endpoint { padding: .35rem 0; border-top: 1px solid #eceef2; }
.method, .status, .tag { display: inline-block; border-radius: 3px; padding: 0 .4rem; font-size: .75rem; font-weight: 600; }
.method { min-width: 4rem; text-align: center; color: #fff; background: #6b7280; }
.method-get { background: #2563eb; }
.method-post { background: #16a34a; }
.method-put { background: #d97706; }
.method-patch { background: #7c3aed; }
.method-delete { background: #dc2626; }
.status-deprecated { background: #fee2e2; color: #991b1b; }
.status-beta { background: #fef3c7; color: #92400e; }
.status-internal { background: #e0e7ff; color: #3730a3; }
.tag { background: #eef2f7; color: #374151; font-weight: 400; }
.path { font-family: ui-monospace, monospace; }
.summary { color: #5b6475; }
"#;

const FILTER_SCRIPT: &str = r#"
document.getElementById('filter').addEventListener('input', function (e) {
  var q = e.target.value.toLowerCase();
  document.querySelectorAll('.endpoint').forEach(function (row) {
    row.style.display = row.dataset.search.indexOf(q) === -1 ? 'none' : '';
  });
  document.querySelectorAll('.entry').forEach(function (card) {
    var visible = card.querySelectorAll('.endpoint:not([style*="none"])').length;
    card.style.display = visible === 0 ? 'none' : '';
  });
});
"#;

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Render the whole catalog as one HTML document.
pub fn render_html(catalog: &Catalog) -> Result<String, fmt::Error> {
    let stats = catalog.stats();
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>API Catalog</title>\n<style>");
    page.push_str(STYLE);
    page.push_str("</style>\n</head>\n<body>\n<header>\n<h1>API Catalog</h1>\n<div class=\"stats\">");
    write!(
        page,
        "<span>Generated {}</span><span>{} sources</span><span>{} endpoints</span>",
        escape(&catalog.generated_at.to_rfc3339()),
        stats.sources,
        stats.endpoints
    )?;
    for (status, count) in &stats.by_status {
        write!(page, "<span>{} {}</span>", count, escape(status))?;
    }
    page.push_str("</div>\n</header>\n");
    page.push_str("<input id=\"filter\" type=\"search\" placeholder=\"Filter by path, summary or tag\">\n<main>\n");

    for entry in &catalog.entries {
        render_entry(&mut page, entry)?;
    }

    page.push_str("</main>\n<script>");
    page.push_str(FILTER_SCRIPT);
    page.push_str("</script>\n</body>\n</html>\n");
    Ok(page)
}

fn render_entry(page: &mut String, entry: &CatalogEntry) -> fmt::Result {
    let meta = &entry.metadata;
    let title = meta.title.as_deref().unwrap_or(&meta.source_file);

    write!(page, "<section class=\"entry\" id=\"{}\">\n<h2>{}", escape(&entry.id), escape(title))?;
    if let Some(version) = &meta.version {
        write!(page, " <small>v{}</small>", escape(version))?;
    }
    page.push_str("</h2>\n<div class=\"meta\">");
    write!(page, "<span>{}</span>", escape(&meta.source_file))?;
    if let Some(owner) = &meta.team_owner {
        write!(page, " &middot; <span>{}</span>", escape(owner))?;
    }
    if let Some(base_url) = &meta.base_url {
        write!(page, " &middot; <span>{}</span>", escape(base_url))?;
    }
    page.push_str("</div>\n");
    if let Some(description) = &meta.description {
        writeln!(page, "<p>{}</p>", escape(description))?;
    }

    for endpoint in &entry.endpoints {
        render_endpoint(page, endpoint)?;
    }
    page.push_str("</section>\n");
    Ok(())
}

fn render_endpoint(page: &mut String, endpoint: &Endpoint) -> fmt::Result {
    let search = format!(
        "{} {} {} {}",
        endpoint.method,
        endpoint.path,
        endpoint.summary.as_deref().unwrap_or(""),
        endpoint.tags.join(" ")
    )
    .to_lowercase();

    write!(
        page,
        "<div class=\"endpoint\" data-search=\"{}\"><span class=\"method method-{}\">{}</span> <span class=\"path\">{}</span>",
        escape(&search),
        escape(&endpoint.method.to_lowercase()),
        escape(&endpoint.method),
        escape(&endpoint.path)
    )?;
    let status = endpoint.status.as_str();
    if status != "active" {
        write!(page, " <span class=\"status status-{status}\">{status}</span>")?;
    }
    if let Some(text) = endpoint.summary.as_deref().or(endpoint.description.as_deref()) {
        write!(page, " <span class=\"summary\">{}</span>", escape(text))?;
    }
    for tag in &endpoint.tags {
        write!(page, " <span class=\"tag\">{}</span>", escape(tag))?;
    }
    page.push_str("</div>\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EndpointStatus, SourceMetadata};

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">Tom & 'Jerry'</a>"), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
        assert_eq!(escape("/users/{id}"), "/users/{id}");
    }

    #[test]
    fn test_render_escapes_and_badges() {
        let mut endpoint = Endpoint::new("DELETE", "/items/<id>");
        endpoint.status = EndpointStatus::Deprecated;
        endpoint.summary = Some("Remove <script>".to_string());
        endpoint.tags = vec!["admin".to_string()];

        let mut catalog = Catalog::new();
        catalog.add(CatalogEntry {
            id: "feedbeef0001".to_string(),
            metadata: SourceMetadata {
                title: Some("Items & Co".to_string()),
                team_owner: Some("Ops".to_string()),
                source_file: "items_controller.py".to_string(),
                ..SourceMetadata::default()
            },
            endpoints: vec![endpoint],
        });

        let page = render_html(&catalog).unwrap();
        assert!(page.contains("Items &amp; Co"));
        assert!(page.contains("/items/&lt;id&gt;"));
        assert!(page.contains("Remove &lt;script&gt;"));
        assert!(!page.contains("Remove <script>"));
        assert!(page.contains("method-delete"));
        assert!(page.contains("status-deprecated"));
        assert!(page.contains("<span class=\"tag\">admin</span>"));
        assert!(page.contains("1 sources"));
        assert!(page.contains("id=\"filter\""));
    }

    #[test]
    fn test_title_falls_back_to_source_file() {
        let mut catalog = Catalog::new();
        catalog.add(CatalogEntry {
            id: "1".to_string(),
            metadata: SourceMetadata {
                source_file: "spec.yaml".to_string(),
                ..SourceMetadata::default()
            },
            endpoints: vec![Endpoint::new("GET", "/")],
        });
        assert!(render_html(&catalog).unwrap().contains("<h2>spec.yaml</h2>"));
    }

    #[test]
    fn test_empty_catalog_renders_complete_page() {
        let page = render_html(&Catalog::new()).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("0 endpoints"));
        assert!(page.ends_with("</html>\n"));
        assert!(!page.contains("class=\"entry\""));
    }
}

//! HTML rendering of listing pages and error bodies.
//!
//! Output is a pure function of its inputs: the same page and request always
//! yield the same bytes. Styles are inline so the document has no external
//! dependencies.

use bucketview_core::{EntryKind, ListingEntry, ListingRequest, SortOrder};

use crate::href::{build_href, proxy_href};
use crate::presenter::ListingPage;

/// Entry count above which the page-size selector is shown.
const LIMIT_SELECTOR_THRESHOLD: usize = 25;

/// Page sizes offered by the selector.
const LIMIT_CHOICES: [usize; 4] = [25, 50, 75, 100];

const STYLE: &str = ":root{color-scheme:light dark}\
body{font-family:system-ui,sans-serif;padding:2rem;margin:auto;max-width:800px;background:white;color:black}\
@media(prefers-color-scheme:dark){body{background:#111;color:#eee}}\
h1{font-size:1.4rem;margin-bottom:1rem}\
ul{list-style:none;padding:0}\
li{margin:0.5rem 0}\
.icon{margin-right:0.4rem}\
.pagination a,.sort-toggle,.limit-toggle a{margin-right:0.5rem;text-decoration:none}\
.pagination a.active,.limit-toggle a.active{font-weight:bold;text-decoration:underline}";

/// Render the listing document for `page`.
#[must_use]
pub fn render_listing(request: &ListingRequest, page: &ListingPage) -> String {
    let title = if request.prefix.is_empty() {
        String::from("/")
    } else {
        escape_html(&request.prefix)
    };

    let mut html = String::with_capacity(2048 + page.items.len() * 128);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str(&format!("<title>Index of {title}</title><style>{STYLE}</style></head>"));
    html.push_str(&format!("<body><h1>Index of {title}</h1>"));
    html.push_str(&format!("<div class=\"sort-toggle\">{}</div>", sort_toggle(request)));

    if page.total_entries > LIMIT_SELECTOR_THRESHOLD {
        html.push_str(&limit_selector(request));
    }

    if let Some(parent) = &page.parent_prefix {
        html.push_str(&format!(
            "<p><a href=\"{}\">⬅️ Parent folder</a></p>",
            build_href(parent, 1, request.sort, request.limit),
        ));
    }

    html.push_str("<ul>");
    for entry in &page.items {
        html.push_str(&entry_item(entry, request));
    }
    html.push_str("</ul>");

    if page.total_pages > 1 {
        html.push_str(&pagination(request, page.total_pages));
    }

    html.push_str("</body></html>");
    html
}

/// Render the minimal error fragment returned with `502 Bad Gateway`.
#[must_use]
pub fn render_error(message: &str) -> String {
    format!("<h1>Error</h1><p>{message}</p>")
}

/// Escape text for an HTML text or attribute context.
///
/// The prefix comes from the query string, so it never reaches the page raw.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn sort_toggle(request: &ListingRequest) -> String {
    let arrow = match request.sort {
        SortOrder::Asc => "⬆️",
        SortOrder::Desc => "⬇️",
    };
    format!(
        "<a href=\"{}\" class=\"sort-toggle\">Sort: {arrow}</a>",
        build_href(&request.prefix, 1, request.sort.toggled(), request.limit),
    )
}

fn limit_selector(request: &ListingRequest) -> String {
    let links: Vec<String> = LIMIT_CHOICES
        .iter()
        .map(|&choice| {
            format!(
                "<a href=\"{}\"{}>{choice}</a>",
                build_href(&request.prefix, 1, request.sort, choice),
                active_class(choice == request.limit),
            )
        })
        .collect();
    format!("<div class=\"limit-toggle\">Show: {}</div>", links.join(" "))
}

fn entry_item(entry: &ListingEntry, request: &ListingRequest) -> String {
    let href = match entry.kind {
        EntryKind::Folder => build_href(&entry.name, 1, request.sort, request.limit),
        EntryKind::File => proxy_href(&entry.name),
    };
    format!(
        "<li><a href=\"{href}\"><span class=\"icon\">{}</span>{}</a></li>",
        entry.kind.icon(),
        entry.name,
    )
}

fn pagination(request: &ListingRequest, total_pages: usize) -> String {
    let href = |page: usize| build_href(&request.prefix, page, request.sort, request.limit);

    let mut html = String::from("<div class=\"pagination\">");
    if request.page > 1 {
        html.push_str(&format!("<a href=\"{}\">⬅️ Prev</a>", href(request.page - 1)));
    }
    for i in 1..=total_pages {
        html.push_str(&format!(
            "<a href=\"{}\"{}>{i}</a>",
            href(i),
            active_class(i == request.page),
        ));
    }
    if request.page < total_pages {
        html.push_str(&format!("<a href=\"{}\">Next ➡️</a>", href(request.page + 1)));
    }
    html.push_str("</div>");
    html
}

fn active_class(active: bool) -> &'static str {
    if active { " class=\"active\"" } else { "" }
}

//! Server-rendering helpers for component tests.

use leptos::*;

/// Renders `view` to an HTML string.
pub(crate) fn render<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}

/// Opening tag of the first element whose attributes contain `marker`.
pub(crate) fn opening_tag<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    let at = html.find(marker)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

/// Text content of the first element carrying `marker`, with hydration comments removed.
pub(crate) fn element_text(html: &str, marker: &str) -> Option<String> {
    let tag = opening_tag(html, marker)?;
    let name: String = tag[1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    let body_start = html.find(tag)? + tag.len();
    let body_end = body_start + html[body_start..].find(&format!("</{name}>"))?;
    Some(strip_comments(&html[body_start..body_end]))
}

fn strip_comments(fragment: &str) -> String {
    let mut out = String::new();
    let mut rest = fragment;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

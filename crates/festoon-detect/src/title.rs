use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

// Opening tags carrying a given class token, matched the way a CSS class
// selector would (whole token, not substring).
fn root_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<[A-Za-z][^>]*\bclass="(?:[^"]*\s)?swagger-ui(?:\s[^"]*)?"[^>]*>"#)
            .expect("root selector regex")
    })
}

fn info_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<([A-Za-z][A-Za-z0-9]*)\b[^>]*\bclass="(?:[^"]*\s)?info(?:\s[^"]*)?"[^>]*>"#)
            .expect("info selector regex")
    })
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<([A-Za-z][A-Za-z0-9]*)\b[^>]*\bclass="(?:[^"]*\s)?title(?:\s[^"]*)?"[^>]*>"#)
            .expect("title selector regex")
    })
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag strip regex"))
}

fn starts_open_tag(rest: &str) -> bool {
    matches!(rest.chars().next(), None | Some(' ' | '\t' | '\n' | '>' | '/'))
}

// Byte offset of the element's closing tag within `scope`, where `scope`
// starts just after the element's opening tag. Counts nested same-name
// tags so `<div class="info">` is not closed by a child `</div>`.
fn subtree_end(scope: &str, tag: &str) -> Option<usize> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);
    let mut depth = 1usize;
    let mut pos = 0usize;
    loop {
        let next_close = scope[pos..].find(&close)?;
        let next_open = scope[pos..].find(&open);
        match next_open {
            Some(o)
                if o < next_close && starts_open_tag(&scope[pos + o + open.len()..]) =>
            {
                depth += 1;
                pos += o + open.len();
            }
            _ => {
                depth -= 1;
                let end = pos + next_close;
                if depth == 0 {
                    return Some(end);
                }
                pos = end + close.len();
            }
        }
    }
}

/// Text content of the element matching `.swagger-ui .info .title`, with
/// nested markup stripped and surrounding whitespace trimmed.
///
/// Returns `None` while the renderer has not produced the element yet;
/// callers decide whether absence means "keep waiting" or "give up".
pub fn extract_title(html: &str) -> Option<String> {
    let root = match root_re().find(html) {
        Some(m) => m,
        None => {
            debug!("no swagger-ui root container in document");
            return None;
        }
    };

    let scope = &html[root.end()..];
    let info = match info_re().captures(scope) {
        Some(c) => c,
        None => {
            debug!("no info container under swagger-ui root");
            return None;
        }
    };

    // only the info element's subtree counts; a title-classed heading in a
    // later sibling must not satisfy the selector
    let info_open = info.get(0)?;
    let info_tag = info.get(1)?.as_str();
    let after_info = &scope[info_open.end()..];
    let scope = match subtree_end(after_info, info_tag) {
        Some(end) => &after_info[..end],
        None => after_info,
    };

    let caps = match title_re().captures(scope) {
        Some(c) => c,
        None => {
            debug!("no title element under info container");
            return None;
        }
    };

    let open = caps.get(0)?;
    let tag = caps.get(1)?.as_str();
    let rest = &scope[open.end()..];
    let close = format!("</{}>", tag);
    let inner = match rest.find(&close) {
        Some(pos) => &rest[..pos],
        None => return None,
    };

    let text = tag_re().replace_all(inner, "");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title_markup: &str) -> String {
        format!(
            concat!(
                "<html><head><title>docs</title></head><body>",
                "<section class=\"swagger-ui\">",
                "<div class=\"information-container wrapper\">",
                "<div class=\"info\"><hgroup>{}</hgroup></div>",
                "</div>",
                "</section></body></html>"
            ),
            title_markup
        )
    }

    #[test]
    fn extracts_plain_title() {
        let html = page("<h2 class=\"title\">Training API - PRODUCTION</h2>");
        assert_eq!(
            extract_title(&html).as_deref(),
            Some("Training API - PRODUCTION")
        );
    }

    #[test]
    fn strips_nested_version_markup() {
        // Swagger-UI nests the version stamp inside the title heading.
        let html = page(
            "<h2 class=\"title\">Training API - TEST<span><small><pre class=\"version\">1.0.0</pre></small></span></h2>",
        );
        assert_eq!(
            extract_title(&html).as_deref(),
            Some("Training API - TEST1.0.0")
        );
    }

    #[test]
    fn missing_title_is_none() {
        let html = page("<p>still rendering</p>");
        assert_eq!(extract_title(&html), None);
    }

    #[test]
    fn title_outside_info_container_is_ignored() {
        let html = concat!(
            "<html><body>",
            "<h2 class=\"title\">Decoy</h2>",
            "<section class=\"swagger-ui\"><div class=\"info\"></div></section>",
            "</body></html>"
        );
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn title_in_sibling_after_info_close_is_ignored() {
        let html = concat!(
            "<section class=\"swagger-ui\">",
            "<div class=\"info\"><p>still rendering</p></div>",
            "<div class=\"description\"><h2 class=\"title\">Decoy</h2></div>",
            "</section>"
        );
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn nested_containers_inside_info_still_resolve() {
        let html = concat!(
            "<section class=\"swagger-ui\">",
            "<div class=\"info\"><div class=\"main\">",
            "<h2 class=\"title\">API - LOCAL</h2>",
            "</div></div>",
            "</section>"
        );
        assert_eq!(extract_title(html).as_deref(), Some("API - LOCAL"));
    }

    #[test]
    fn class_tokens_match_whole_words() {
        // "information-container" must not satisfy the .info selector on
        // its own, and "swagger-ui-wrap" must not satisfy .swagger-ui.
        let html = concat!(
            "<div class=\"swagger-ui-wrap\">",
            "<div class=\"information-container\">",
            "<h2 class=\"title\">Decoy</h2>",
            "</div></div>"
        );
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn multi_class_attributes_match() {
        let html = concat!(
            "<section class=\"swagger-ui loaded\">",
            "<div class=\"info api-info\">",
            "<h2 class=\"title main-title\">  Padded API  </h2>",
            "</div></section>"
        );
        assert_eq!(extract_title(html).as_deref(), Some("Padded API"));
    }

    #[test]
    fn empty_title_is_none() {
        let html = page("<h2 class=\"title\">   </h2>");
        assert_eq!(extract_title(&html), None);
    }
}

use regex::Regex;
use std::sync::OnceLock;

fn root_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<[A-Za-z][^>]*\bclass="(?:[^"]*\s)?swagger-ui(?:\s[^"]*)?"[^>]*>"#)
            .expect("root open tag regex")
    })
}

fn body_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<body\b[^>]*>").expect("body open tag regex"))
}

fn body_env_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<body\b[^>]*\bdata-environment="([^"]*)""#)
            .expect("body environment attribute regex")
    })
}

fn splice(html: &str, pos: usize, payload: &str) -> String {
    let mut result = String::with_capacity(html.len() + payload.len());
    result.push_str(&html[..pos]);
    result.push_str(payload);
    result.push_str(&html[pos..]);
    result
}

/// Insert a block as the first child of the documentation UI root
/// container. `None` when the page has no such container.
pub fn insert_banner(html: &str, banner: &str) -> Option<String> {
    let open = root_open_re().find(html)?;
    Some(splice(html, open.end(), banner))
}

/// Append a `<style>` block to the document head, or to the end of the
/// document when no `</head>` exists.
pub fn append_stylesheet(html: &str, css: &str) -> String {
    let block = format!("<style>{}</style>", css);
    if let Some(pos) = html.find("</head>") {
        splice(html, pos, &block)
    } else {
        format!("{}{}", html, block)
    }
}

/// Stamp `data-environment` onto the `<body>` open tag. `None` when the
/// document has no body element.
pub fn set_body_attribute(html: &str, environment: &str) -> Option<String> {
    let open = body_open_re().find(html)?;
    let attr = format!(" data-environment=\"{}\"", environment);
    // before the closing `>` of the open tag
    Some(splice(html, open.end() - 1, &attr))
}

/// Existing `data-environment` stamp on `<body>`, if any. Doubles as the
/// applied-marker for the idempotency guard.
pub fn body_attribute(html: &str) -> Option<String> {
    body_env_re()
        .captures(html)
        .map(|c| c[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = concat!(
        "<html><head><title>docs</title></head>",
        "<body class=\"swagger-section\">",
        "<section class=\"swagger-ui\"><div class=\"info\"></div></section>",
        "</body></html>"
    );

    #[test]
    fn banner_becomes_first_child_of_root() {
        let out = insert_banner(PAGE, "<div>warn</div>").unwrap();
        assert!(out.contains("<section class=\"swagger-ui\"><div>warn</div><div class=\"info\">"));
    }

    #[test]
    fn banner_needs_a_root_container() {
        assert!(insert_banner("<html><body></body></html>", "<div></div>").is_none());
    }

    #[test]
    fn stylesheet_lands_in_head() {
        let out = append_stylesheet(PAGE, ".a { color: red; }");
        assert!(out.contains("<style>.a { color: red; }</style></head>"));
    }

    #[test]
    fn stylesheet_appended_without_head() {
        let out = append_stylesheet("<body></body>", ".a {}");
        assert!(out.ends_with("<style>.a {}</style>"));
    }

    #[test]
    fn body_attribute_round_trips() {
        assert_eq!(body_attribute(PAGE), None);
        let out = set_body_attribute(PAGE, "local").unwrap();
        assert!(out.contains("<body class=\"swagger-section\" data-environment=\"local\">"));
        assert_eq!(body_attribute(&out).as_deref(), Some("local"));
    }

    #[test]
    fn body_attribute_needs_a_body() {
        assert!(set_body_attribute("<div></div>", "test").is_none());
    }
}

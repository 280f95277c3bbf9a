/// Stylesheet body applied to every decorated page, parameterized by the
/// resolved environment color: topbar recolor, a 5px accent border under
/// the header, and relative positioning on the title element.
///
/// The `.favicon-badge` rule has no element on stock pages; it is kept so
/// host pages that attach their own badge element keep rendering it.
pub fn environment_stylesheet(color: &str) -> String {
    format!(
        r#"
.swagger-ui .topbar {{
    background-color: {color} !important;
}}

.swagger-ui .information-container {{
    border-bottom: 5px solid {color};
    padding-bottom: 20px;
}}

.swagger-ui .info .title {{
    position: relative;
}}

.favicon-badge {{
    position: absolute;
    bottom: -5px;
    right: -5px;
    width: 15px;
    height: 15px;
    background-color: {color};
    border-radius: 50%;
    border: 2px solid white;
}}
"#,
        color = color
    )
}

use festoon_core::Environment;

/// Literal warning shown on production pages. Downstream checks match on
/// this exact text; do not reword it.
pub const PRODUCTION_WARNING: &str =
    "⚠️ PRODUCTION ENVIRONMENT - Be careful with any API calls you make here! ⚠️";

/// Full-width warning block inserted as the first child of the
/// documentation UI root on production pages.
pub fn production_banner() -> String {
    format!(
        concat!(
            "<div style=\"background-color:{};color:white;padding:10px;",
            "text-align:center;font-weight:bold;font-size:14px;\">{}</div>"
        ),
        Environment::Production.color(),
        PRODUCTION_WARNING
    )
}

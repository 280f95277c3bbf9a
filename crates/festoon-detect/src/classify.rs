use festoon_core::Environment;

/// Ordered classification rules. Evaluated top to bottom, first match
/// wins, so a title that pathologically carries several tags resolves to
/// the earliest entry. Matching is case-sensitive: backends embed the tag
/// in upper case.
pub const CLASS_RULES: &[(&str, Environment)] = &[
    ("PRODUCTION", Environment::Production),
    ("DEVELOPMENT", Environment::Development),
    ("TEST", Environment::Test),
    ("LOCAL", Environment::Local),
];

/// Resolve the environment tag embedded in a page title, e.g.
/// `"Training API - PRODUCTION"`. Unrecognized titles fall back to
/// `Environment::Default`; that is not an error.
pub fn classify(title: &str) -> Environment {
    for (tag, env) in CLASS_RULES {
        if title.contains(tag) {
            return *env;
        }
    }
    Environment::Default
}

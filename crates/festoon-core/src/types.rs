use serde::{Deserialize, Serialize};

/// Deployment environment a documentation page represents, resolved from
/// the page title. `Default` is the fallback when no tag is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
    Test,
    Local,
    Default,
}

impl Environment {
    /// Lowercase attribute form, written to `data-environment` on `<body>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Local => "local",
            Environment::Default => "default",
        }
    }

    /// Accent color for the environment. Values are fixed for
    /// compatibility with pages styled by earlier releases.
    pub fn color(&self) -> &'static str {
        match self {
            Environment::Production => "#e74c3c",
            Environment::Development => "#2ecc71",
            Environment::Test => "#f39c12",
            Environment::Local => "#3498db",
            Environment::Default => "#1b1b1b",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Environment::Production),
            "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "local" => Ok(Environment::Local),
            "default" => Ok(Environment::Default),
            _ => Err(()),
        }
    }
}

/// Record of the mutations a decoration pass applied to a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorationReport {
    pub environment: Environment,
    pub color: String,
    pub banner_inserted: bool,
    pub stylesheet_inserted: bool,
    pub body_attr_set: bool,
    pub already_decorated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_table_is_fixed() {
        assert_eq!(Environment::Default.color(), "#1b1b1b");
        assert_eq!(Environment::Production.color(), "#e74c3c");
        assert_eq!(Environment::Development.color(), "#2ecc71");
        assert_eq!(Environment::Test.color(), "#f39c12");
        assert_eq!(Environment::Local.color(), "#3498db");
    }

    #[test]
    fn attribute_form_round_trips() {
        for env in [
            Environment::Production,
            Environment::Development,
            Environment::Test,
            Environment::Local,
            Environment::Default,
        ] {
            assert_eq!(env.as_str().parse::<Environment>(), Ok(env));
        }
        assert!("PRODUCTION".parse::<Environment>().is_err());
    }
}

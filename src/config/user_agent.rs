use std::{fmt::Display, ops::Deref, str::FromStr};

use anyhow::Result;

const VERSION_PLACEHOLDER: &str = "<version>";

/// Value of the `User-Agent` header. A `<version>` placeholder is filled in with this tool's version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserAgent(String);

impl UserAgent {
    fn from_template(template: &str) -> Self {
        Self(template.replace(VERSION_PLACEHOLDER, env!("CARGO_PKG_VERSION")))
    }
}

impl Default for UserAgent {
    fn default() -> Self {
        Self::from_template(concat!(env!("CARGO_PKG_NAME"), "/<version>"))
    }
}

impl FromStr for UserAgent {
    type Err = anyhow::Error;

    fn from_str(template: &str) -> Result<Self> {
        Ok(Self::from_template(template))
    }
}

impl Deref for UserAgent {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for UserAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_placeholder_is_filled_in() {
        let agent: UserAgent = "indexer/<version> (+bot)".parse().expect("any string is valid");
        assert_eq!(&*agent, format!("indexer/{} (+bot)", env!("CARGO_PKG_VERSION")));
        assert_eq!(
            UserAgent::default().to_string(),
            format!("trait-oracle/{}", env!("CARGO_PKG_VERSION"))
        );
    }
}

use std::{fmt::Display, ops::Deref, str::FromStr};

use anyhow::{Context, Result};

use super::parse_non_zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueryCount(usize);

impl Default for QueryCount {
    fn default() -> Self {
        QueryCount(5)
    }
}

impl FromStr for QueryCount {
    type Err = anyhow::Error;

    fn from_str(query_count: &str) -> Result<Self> {
        let query_count = parse_non_zero(query_count)?;
        usize::try_from(query_count)
            .map(Self)
            .context(format!("`{}` queries is more than can be counted", query_count))
    }
}

impl Deref for QueryCount {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for QueryCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

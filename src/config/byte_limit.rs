use std::{fmt::Display, ops::Deref, str::FromStr};

use anyhow::{Context, Result};

use super::parse_non_zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ByteLimit(usize);

impl ByteLimit {
    pub(crate) const fn new(bytes: usize) -> Self {
        Self(bytes)
    }
}

impl FromStr for ByteLimit {
    type Err = anyhow::Error;

    fn from_str(bytes: &str) -> Result<Self> {
        let bytes = parse_non_zero(bytes)?;
        usize::try_from(bytes)
            .map(Self)
            .context(format!("{} bytes can't be addressed on this platform", bytes))
    }
}

impl Deref for ByteLimit {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ByteLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

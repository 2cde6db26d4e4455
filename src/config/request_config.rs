use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::return_type::ReturnType;

/// On-disk description of a request: its arguments and how to read the result.
///
/// ```json
/// {
///   "args": ["ipfs://bafybeieokkbwo2hp3eqkfa5chypmevxjii275icwxnuc7dmuexi3qsuvu4/5", "Color"],
///   "expectedReturnType": "string"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RequestConfig {
    #[serde(default)]
    pub(crate) args: Vec<String>,
    #[serde(default)]
    pub(crate) expected_return_type: ReturnType,
}

impl RequestConfig {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).context(format!(
            "Request config `{}` could not be read",
            path.display()
        ))?;
        Self::from_json(&raw).context(format!(
            "Request config `{}` is invalid",
            path.display()
        ))
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Request config de-serialization failed")
    }
}

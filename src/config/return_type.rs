use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReturnType {
    String,
    Bytes,
}

impl ReturnType {
    fn variants() -> &'static [Self] {
        &[Self::String, Self::Bytes]
    }
}

impl Default for ReturnType {
    fn default() -> Self {
        ReturnType::String
    }
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnType::String => write!(f, "string"),
            ReturnType::Bytes => write!(f, "bytes"),
        }
    }
}

impl FromStr for ReturnType {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.to_lowercase();

        Self::variants()
            .iter()
            .find(|variant| variant.to_string() == input)
            .copied()
            .ok_or_else(|| {
                anyhow!(
                    "`{}` is not a supported return type. Expected one of: [{}]",
                    input,
                    Self::variants()
                        .iter()
                        .map(|variant| variant.to_string())
                        .join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("STRING".parse::<ReturnType>().unwrap(), ReturnType::String);
        assert_eq!("bytes".parse::<ReturnType>().unwrap(), ReturnType::Bytes);
    }

    #[test]
    fn unknown_type_lists_options() {
        let e = "uint256".parse::<ReturnType>().unwrap_err();
        assert!(e.to_string().contains("[string, bytes]"));
    }
}

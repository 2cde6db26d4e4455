use std::fmt::Display;

use anyhow::{Context, Result};

use crate::config::return_type::ReturnType;

const HEX_PREFIX: &str = "0x";

pub(crate) fn to_hexstring(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DecodedResult {
    String(String),
    Bytes(Vec<u8>),
}

impl Display for DecodedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodedResult::String(text) => write!(f, "{}", text),
            DecodedResult::Bytes(bytes) => write!(f, "{}", to_hexstring(bytes)),
        }
    }
}

/// Interpret a hex payload (prefix optional) as the given return type.
pub(crate) fn decode_result(hexstring: &str, return_type: ReturnType) -> Result<DecodedResult> {
    let trimmed = hexstring.trim();
    let digits = trimmed.strip_prefix(HEX_PREFIX).unwrap_or(trimmed);
    let bytes = hex::decode(digits).context(format!("`{}` is not valid hex", hexstring))?;

    match return_type {
        ReturnType::String => String::from_utf8(bytes)
            .map(DecodedResult::String)
            .context("Response bytes are not valid UTF-8"),
        ReturnType::Bytes => Ok(DecodedResult::Bytes(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hexstring_is_prefixed() {
        assert_eq!(to_hexstring(b"Blue"), "0x426c7565");
        assert_eq!(to_hexstring(&[]), "0x");
    }

    #[test]
    fn decodes_strings_with_or_without_prefix() {
        assert_eq!(
            decode_result("0x426c7565", ReturnType::String).unwrap(),
            DecodedResult::String("Blue".to_owned())
        );
        assert_eq!(
            decode_result("426C7565", ReturnType::String).unwrap(),
            DecodedResult::String("Blue".to_owned())
        );
        assert_eq!(
            decode_result("0x", ReturnType::String).unwrap(),
            DecodedResult::String(String::new())
        );
    }

    #[test]
    fn bytes_display_as_hex() {
        let decoded = decode_result("0x00ff", ReturnType::Bytes).unwrap();
        assert_eq!(decoded, DecodedResult::Bytes(vec![0x00, 0xff]));
        assert_eq!(decoded.to_string(), "0x00ff");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(decode_result("0xzz", ReturnType::Bytes).is_err());
        assert!(decode_result("0xabc", ReturnType::Bytes).is_err());
        assert!(decode_result("0xff", ReturnType::String).is_err());
    }
}

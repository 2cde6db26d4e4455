use serde_json::Value;

use super::error::FetchError;

const ATTRIBUTES: &str = "attributes";
const TRAIT_TYPE: &str = "trait_type";
const TRAIT_VALUE: &str = "value";

static NULL: Value = Value::Null;

// `None` when no response made it this far
pub(crate) struct Metadata<'a>(Option<&'a Value>);

impl<'a> Metadata<'a> {
    pub(crate) fn new(data: Option<&'a Value>) -> Self {
        Self(data)
    }

    /// Value of the last attribute whose `trait_type` matches.
    pub(crate) fn trait_value(&self, trait_type: &str) -> Result<String, FetchError> {
        let attributes = self.attributes()?;

        let mut trait_value = &NULL;
        for attribute in attributes.as_array().into_iter().flatten() {
            if attribute
                .get(TRAIT_TYPE)
                .map_or(false, |candidate| trait_type_matches(candidate, trait_type))
            {
                // a `null` or missing value overwrites earlier matches too
                trait_value = attribute.get(TRAIT_VALUE).unwrap_or(&NULL);
            }
        }

        match trait_value {
            Value::Null => Err(FetchError::TraitNotFound(trait_type.to_owned())),
            Value::String(value) => Ok(value.clone()),
            other => Ok(other.to_string()),
        }
    }

    fn attributes(&self) -> Result<&'a Value, FetchError> {
        self.0
            .and_then(|data| data.get(ATTRIBUTES))
            // `null`, `false`, `0` and `""` count as absent, empty arrays and other values don't
            .filter(|attributes| !is_falsy(attributes))
            .ok_or(FetchError::NoAttributes)
    }
}

fn trait_type_matches(candidate: &Value, trait_type: &str) -> bool {
    match candidate {
        Value::String(candidate) => candidate == trait_type,
        // a number in the document is compared like a loose `==` would: the requested type is coerced to a number
        Value::Number(candidate) => loose_number(trait_type)
            .map_or(false, |requested| candidate.as_f64() == Some(requested)),
        _ => false,
    }
}

/// Numeric reading of `text` under loose equality: blank is `0`, `0x`/`0o`/`0b` prefixes and `Infinity` are
/// understood. `None` where the coercion yields `NaN`.
fn loose_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0, |number: f64, digit| {
            digit
                .to_digit(radix)
                .map(|digit| number * f64::from(radix) + f64::from(digit))
        });
    }

    match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        // keeps out `inf`, `NaN` and friends, which only the float parser accepts
        _ if text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) =>
        {
            text.parse::<f64>().ok()
        }
        _ => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

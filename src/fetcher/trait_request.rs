use getset::CopyGetters;

use super::error::FetchError;

#[derive(Debug, CopyGetters)]
pub(crate) struct TraitRequest<'a> {
    #[getset(get_copy = "pub(crate)")]
    token_uri: &'a str,
    #[getset(get_copy = "pub(crate)")]
    trait_type: &'a str,
}

impl<'a> TraitRequest<'a> {
    /// `args[0]` is the token URI, `args[1]` the trait type. Anything after is ignored.
    pub(crate) fn from_args(args: &'a [String]) -> Result<Self, FetchError> {
        match args {
            [token_uri, trait_type, ..] if !token_uri.is_empty() && !trait_type.is_empty() => {
                Ok(Self {
                    token_uri,
                    trait_type,
                })
            }
            _ => Err(FetchError::InvalidInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn takes_first_two_arguments() {
        let args = args(&["ipfs://cid/1", "Color", "ignored"]);
        let request = TraitRequest::from_args(&args).expect("both present");
        assert_eq!(request.token_uri(), "ipfs://cid/1");
        assert_eq!(request.trait_type(), "Color");
    }

    #[test]
    fn missing_or_empty_arguments_are_invalid() {
        for input in [args(&[]), args(&["ipfs://cid/1"]), args(&["", "Color"]), args(&["ipfs://cid/1", ""])] {
            assert_eq!(
                TraitRequest::from_args(&input).unwrap_err(),
                FetchError::InvalidInput
            );
        }
    }
}

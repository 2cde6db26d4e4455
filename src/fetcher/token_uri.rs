use super::{error::FetchError, gateway::gateways_for};

const HTTPS_PREFIX: &str = "https://";
const SCHEME_SEPARATOR: &str = "://";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TokenUri<'a> {
    Https(&'a str),
    Gateway {
        protocol: &'a str,
        suburl: &'a str,
        gateways: &'static [&'static str],
    },
}

impl<'a> TokenUri<'a> {
    pub(crate) fn parse(token_uri: &'a str) -> Result<Self, FetchError> {
        if token_uri.starts_with(HTTPS_PREFIX) {
            return Ok(Self::Https(token_uri));
        }

        let (protocol, suburl) = token_uri
            .split_once(SCHEME_SEPARATOR)
            .ok_or_else(|| FetchError::UnsupportedProtocol(token_uri.to_owned()))?;
        let gateways = gateways_for(protocol)
            .ok_or_else(|| FetchError::UnsupportedProtocol(protocol.to_owned()))?;

        Ok(Self::Gateway {
            protocol,
            suburl,
            gateways,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_is_taken_verbatim() {
        let uri = "https://meta.example.org/token/5?format=json";
        assert_eq!(TokenUri::parse(uri), Ok(TokenUri::Https(uri)));
    }

    #[test]
    fn https_prefix_is_case_sensitive() {
        assert_eq!(
            TokenUri::parse("HTTPS://meta.example.org/5"),
            Err(FetchError::UnsupportedProtocol("HTTPS".to_owned()))
        );
    }

    #[test]
    fn splits_on_first_separator_only() {
        assert_eq!(
            TokenUri::parse("ipfs://bafy/5://x"),
            Ok(TokenUri::Gateway {
                protocol: "ipfs",
                suburl: "bafy/5://x",
                gateways: gateways_for("ipfs").unwrap(),
            })
        );
    }

    #[test]
    fn plain_http_has_no_gateways() {
        assert_eq!(
            TokenUri::parse("http://meta.example.org/5"),
            Err(FetchError::UnsupportedProtocol("http".to_owned()))
        );
    }

    #[test]
    fn missing_scheme_is_unsupported() {
        assert_eq!(
            TokenUri::parse("bafybeieokkbwo2hp3eqkfa5chypmevxjii275icwxnuc7dmuexi3qsuvu4/5"),
            Err(FetchError::UnsupportedProtocol(
                "bafybeieokkbwo2hp3eqkfa5chypmevxjii275icwxnuc7dmuexi3qsuvu4/5".to_owned()
            ))
        );
    }
}

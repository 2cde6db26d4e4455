pub(crate) mod error;
mod gateway;
mod metadata;
mod token_uri;
mod trait_request;

use log::{debug, error, warn};

use crate::{
    logging::LOG_TARGET,
    sandbox::{HttpRequest, HttpResponse, Sandbox, TransportFault},
};

use self::{
    error::FetchError, gateway::gateway_url, metadata::Metadata, token_uri::TokenUri,
    trait_request::TraitRequest,
};

enum GatewayAttempt {
    Success(HttpResponse),
    // unreachable, the next gateway may do better
    Transient(TransportFault),
    // the gateway answered with an error, no other one is asked
    Fatal(FetchError),
}

/// Resolve the token URI in `args[0]` to its metadata and return the value of trait `args[1]`, encoded by the sandbox.
pub(crate) fn fetch_trait<S: Sandbox + ?Sized>(
    sandbox: &S,
    args: &[String],
) -> Result<Vec<u8>, FetchError> {
    let request = TraitRequest::from_args(args)?;

    let api_response = match TokenUri::parse(request.token_uri())? {
        TokenUri::Https(url) => Some(fetch_direct(sandbox, url)?),
        TokenUri::Gateway {
            protocol,
            suburl,
            gateways,
        } => fetch_through_gateways(sandbox, protocol, suburl, gateways)?,
    };

    let trait_value = Metadata::new(api_response.as_ref().and_then(|response| response.data().as_ref()))
        .trait_value(request.trait_type())?;
    debug!(
        target: LOG_TARGET,
        "Trait `{}` has value `{}`",
        request.trait_type(),
        trait_value
    );

    Ok(sandbox.encode_string(&trait_value))
}

fn fetch_direct<S: Sandbox + ?Sized>(sandbox: &S, url: &str) -> Result<HttpResponse, FetchError> {
    match ask_gateway(sandbox, url) {
        GatewayAttempt::Success(response) => Ok(response),
        // nowhere to fall back to
        GatewayAttempt::Transient(fault) => {
            error!(target: LOG_TARGET, "{}: {}", url, fault);
            Err(FetchError::RequestFailed {
                url: url.to_owned(),
                reason: fault.to_string(),
            })
        }
        GatewayAttempt::Fatal(e) => Err(e),
    }
}

fn fetch_through_gateways<S: Sandbox + ?Sized>(
    sandbox: &S,
    protocol: &str,
    suburl: &str,
    gateways: &[&str],
) -> Result<Option<HttpResponse>, FetchError> {
    for (idx, gateway) in gateways.iter().enumerate() {
        let url = gateway_url(gateway, protocol, suburl);
        debug!(
            target: LOG_TARGET,
            "Gateway {}/{}: {}",
            idx + 1,
            gateways.len(),
            url
        );

        match ask_gateway(sandbox, &url) {
            GatewayAttempt::Success(response) => return Ok(Some(response)),
            GatewayAttempt::Transient(fault) => {
                warn!(target: LOG_TARGET, "{}: {}", url, fault);
            }
            GatewayAttempt::Fatal(e) => return Err(e),
        }
    }

    // running out of gateways is not an error here, extraction decides what a missing document means
    warn!(
        target: LOG_TARGET,
        "None of the {} gateways for `{}` could be reached",
        gateways.len(),
        protocol
    );
    Ok(None)
}

fn ask_gateway<S: Sandbox + ?Sized>(sandbox: &S, url: &str) -> GatewayAttempt {
    match sandbox.make_http_request(&HttpRequest::json(url)) {
        Ok(response) => match response.error() {
            None => GatewayAttempt::Success(response),
            Some(marker) => {
                error!(target: LOG_TARGET, "{}: {}", url, marker);
                GatewayAttempt::Fatal(FetchError::RequestFailed {
                    url: url.to_owned(),
                    reason: marker.to_string(),
                })
            }
        },
        Err(fault) => GatewayAttempt::Transient(fault),
    }
}

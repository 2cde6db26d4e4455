pub(crate) mod byte_limit;
pub(crate) mod milliseconds;
pub(crate) mod query_count;
pub(crate) mod request_config;
pub(crate) mod return_type;
pub(crate) mod sandbox_limits;
pub(crate) mod user_agent;
pub(crate) mod web_config;

use anyhow::{anyhow, Context, Result};
use getset::{CopyGetters, Getters};
use log::LevelFilter;

use crate::cli::SimulateCli;

use self::{
    request_config::RequestConfig, return_type::ReturnType, sandbox_limits::SandboxLimits,
    web_config::WebConfig,
};

#[derive(Debug, Getters, CopyGetters)]
pub(crate) struct SimulateConfig {
    #[getset(get = "pub(crate)")]
    args: Vec<String>,
    #[getset(get_copy = "pub(crate)")]
    return_type: ReturnType,
    #[getset(get = "pub(crate)")]
    limits: SandboxLimits,
    #[getset(get = "pub(crate)")]
    web_config: WebConfig,
}

impl TryFrom<&SimulateCli> for SimulateConfig {
    type Error = anyhow::Error;

    fn try_from(options: &SimulateCli) -> Result<Self> {
        // `clap` guarantees positional args and a request config file don't both occur
        let (args, config_return_type) = match options.request_config() {
            Some(path) => {
                let request_config = RequestConfig::load(path)?;
                (
                    request_config.args,
                    Some(request_config.expected_return_type),
                )
            }
            None => (options.args().clone(), None),
        };

        let limits = SandboxLimits::new(
            *options.max_on_chain_response_bytes(),
            *options.max_execution_time(),
            *options.allowed_queries(),
            *options.max_query_duration(),
            *options.max_query_url_length(),
            *options.max_query_response_bytes(),
        );

        let web_options = options.web_options();
        let web_config = WebConfig::new(
            web_options.user_agent().clone(),
            !web_options.no_redirect(),
            *web_options.no_cert_validation(),
        );

        Ok(Self {
            args,
            return_type: options
                .return_type()
                .or(config_return_type)
                .unwrap_or_default(),
            limits,
            web_config,
        })
    }
}

fn parse_non_zero(input: &str) -> Result<u64> {
    let value = input
        .parse::<u64>()
        .context(format!("`{}`. Expected a positive, non-zero integer", input))?;
    // a zero budget fails every request
    if value == 0 {
        return Err(anyhow!("`{}`. Expected a positive, non-zero integer", input));
    }
    Ok(value)
}

pub(crate) fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, SubCommand};

    fn simulate_config(argv: &[&str]) -> Result<SimulateConfig> {
        let cli = Cli::try_parse_from(argv)?;
        match cli.sub_command {
            SubCommand::Simulate(options) => SimulateConfig::try_from(&options),
            other => panic!("expected `simulate`, got {:?}", other),
        }
    }

    #[test]
    fn positional_args_and_defaults() {
        let config = simulate_config(&["trait-oracle", "simulate", "ipfs://cid/5", "Color"])
            .expect("valid invocation");

        assert_eq!(config.args(), &vec!["ipfs://cid/5".to_owned(), "Color".to_owned()]);
        assert_eq!(config.return_type(), ReturnType::String);
        assert_eq!(config.limits(), &SandboxLimits::default());
        assert!(config.web_config().redirect());
        assert!(!config.web_config().insecure());
    }

    #[test]
    fn limits_and_web_options_are_taken_over() {
        let config = simulate_config(&[
            "trait-oracle",
            "simulate",
            "ipfs://cid/5",
            "Color",
            "--queries",
            "2",
            "--timeout",
            "1500",
            "--max-response-bytes",
            "64",
            "--no-redirect",
            "-k",
            "-r",
            "bytes",
        ])
        .expect("valid invocation");

        assert_eq!(*config.limits().allowed_queries(), 2);
        assert_eq!(
            *config.limits().max_query_duration(),
            std::time::Duration::from_millis(1_500)
        );
        assert_eq!(*config.limits().max_on_chain_response_bytes(), 64);
        assert!(!config.web_config().redirect());
        assert!(config.web_config().insecure());
        assert_eq!(config.return_type(), ReturnType::Bytes);
    }

    #[test]
    fn zero_query_budget_is_rejected() {
        assert!(simulate_config(&["trait-oracle", "simulate", "ipfs://cid/5", "Color", "-q", "0"]).is_err());
    }

    #[test]
    fn args_conflict_with_request_config() {
        assert!(simulate_config(&[
            "trait-oracle",
            "simulate",
            "ipfs://cid/5",
            "Color",
            "--request-config",
            "request.json"
        ])
        .is_err());
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        assert_eq!(log_level(0), LevelFilter::Info);
        assert_eq!(log_level(1), LevelFilter::Debug);
        assert_eq!(log_level(4), LevelFilter::Trace);
    }
}

use std::{ops::Deref, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use getset::Getters;

use crate::config::{
    byte_limit::ByteLimit,
    milliseconds::Milliseconds,
    query_count::QueryCount,
    return_type::ReturnType,
    sandbox_limits::{
        DEFAULT_MAX_EXECUTION_TIME, DEFAULT_MAX_ON_CHAIN_RESPONSE_BYTES,
        DEFAULT_MAX_QUERY_DURATION, DEFAULT_MAX_QUERY_RESPONSE_BYTES,
        DEFAULT_MAX_QUERY_URL_LENGTH,
    },
    user_agent::UserAgent,
};

#[derive(Parser, Getters)]
#[clap(
    about,
    long_about = None,
    version,
    propagate_version = true,
    disable_help_subcommand = true,
    infer_subcommands = true
)]
pub(super) struct Cli {
    #[clap(
        help = "Increase verbosity",
        long_help = "Increase verbosity of logging. Can be repeated",
        short = 'v',
        long = "verbose",
        aliases = &["verbose", "verbosity"],
        global = true,
        parse(from_occurrences)
    )]
    #[getset(get = "pub(super)")]
    verbosity: u8,

    #[clap(subcommand)]
    pub(super) sub_command: SubCommand,
}

#[derive(Subcommand, Debug)]
pub(super) enum SubCommand {
    #[clap(
        about = "Look up a token's trait the way an oracle request would",
        long_about = None,
        after_help = "The 1st argument is the token URI (https://, ipfs:// or btfs://), the 2nd the trait type to look up.",
        display_order = 1
    )]
    Simulate(SimulateCli),
    #[clap(
        about = "Decode response bytes",
        long_about = "Decode the hex encoded response bytes of a request into a readable value",
        display_order = 2
    )]
    Decode(DecodeCli),
    #[clap(
        about = "Setup shell auto-complete",
        long_about = "Generate a tab auto-completion script for the given shell. Consult your shell's documentation on what to do with the generated script",
        display_order = 3,
        long_flag = "setup"
    )]
    Setup(SetupCli),
}

#[derive(Args, Getters, Debug)]
pub(super) struct SimulateCli {
    #[clap(
        help = "Request arguments",
        long_help = "Positional request arguments: <token URI> <trait type>",
        conflicts_with = "request-config"
    )]
    #[getset(get = "pub(super)")]
    args: Vec<String>,
    #[clap(
        help = "Read request arguments from a JSON file",
        long_help = "JSON file describing the request

[format: {\"args\": [\"<token URI>\", \"<trait type>\"], \"expectedReturnType\": \"string\"}]",
        short = 'c',
        long = "request-config",
        aliases = &["request-config", "request_config", "config"]
    )]
    #[getset(get = "pub(super)")]
    request_config: Option<PathBuf>,
    #[clap(
        help = "How to decode the response",
        long_help = "How to decode the response bytes. Overrides the request config's `expectedReturnType`

[options: string, bytes]",
        short = 'r',
        long = "return-type",
        aliases = &["return-type", "return_type"]
    )]
    #[getset(get = "pub(super)")]
    return_type: Option<ReturnType>,

    #[clap(flatten)]
    #[getset(get = "pub(super)")]
    limit_options: LimitOptions,
    #[clap(flatten)]
    #[getset(get = "pub(super)")]
    web_options: WebOptions,
}

#[derive(Args, Getters, Debug)]
pub(super) struct LimitOptions {
    #[clap(
        help = "Max size of the on-chain response",
        long_help = "Maximum size, in bytes, of the value returned to the chain",
        long = "max-response-bytes",
        aliases = &["max-response-bytes", "max_response_bytes", "max-on-chain-response-bytes"],
        default_value_t = DEFAULT_MAX_ON_CHAIN_RESPONSE_BYTES
    )]
    #[getset(get = "pub(super)")]
    max_on_chain_response_bytes: ByteLimit,
    #[clap(
        help = "Max execution time",
        long_help = "Maximum duration of the whole request, in milliseconds",
        long = "max-execution-time",
        aliases = &["max-execution-time", "max_execution_time"],
        default_value_t = DEFAULT_MAX_EXECUTION_TIME
    )]
    #[getset(get = "pub(super)")]
    max_execution_time: Milliseconds,
    #[clap(
        help = "Max amount of HTTP requests",
        short = 'q',
        long = "queries",
        aliases = &["queries", "allowed-queries", "allowed_queries"],
        default_value_t = QueryCount::default()
    )]
    #[getset(get = "pub(super)")]
    allowed_queries: QueryCount,
    #[clap(
        help = "HTTP request timeout",
        long_help = "Maximum duration of a single HTTP request, in milliseconds",
        short = 'T',
        long = "timeout",
        aliases = &["timeout", "max-query-duration", "max_query_duration"],
        default_value_t = DEFAULT_MAX_QUERY_DURATION
    )]
    #[getset(get = "pub(super)")]
    max_query_duration: Milliseconds,
    #[clap(
        help = "Max URL length of an HTTP request",
        long = "max-url-length",
        aliases = &["max-url-length", "max_url_length"],
        default_value_t = DEFAULT_MAX_QUERY_URL_LENGTH
    )]
    #[getset(get = "pub(super)")]
    max_query_url_length: ByteLimit,
    #[clap(
        help = "Max size of an HTTP response",
        long_help = "Maximum size, in bytes, of a single HTTP response body",
        long = "max-query-response-bytes",
        aliases = &["max-query-response-bytes", "max_query_response_bytes"],
        default_value_t = DEFAULT_MAX_QUERY_RESPONSE_BYTES
    )]
    #[getset(get = "pub(super)")]
    max_query_response_bytes: ByteLimit,
}

#[derive(Args, Getters, Debug)]
pub(super) struct WebOptions {
    #[clap(
        help = "User-agent to identify with",
        short = 'A',
        long = "user-agent",
        aliases = &["user-agent", "user_agent"],
        default_value_t = UserAgent::default()
    )]
    #[getset(get = "pub(super)")]
    user_agent: UserAgent,
    #[clap(
        help = "Don't follow HTTP redirects",
        long = "no-redirect",
        aliases = &["no-redirect", "no_redirect"]
    )]
    #[getset(get = "pub(super)")]
    no_redirect: bool,
    #[clap(
        help = "Disable TLS certificate validation",
        short = 'k',
        long = "insecure",
        aliases = &["no_cert_check", "insecure-tls", "no-cert-check", "no-tls-check"]
    )]
    #[getset(get = "pub(super)")]
    no_cert_validation: bool,
}

#[derive(Args, Getters, Debug)]
pub(super) struct DecodeCli {
    #[clap(help = "Hex encoded response bytes", long_help = "Hex encoded response bytes, `0x` prefix optional")]
    #[getset(get = "pub(super)")]
    response_bytes: String,
    #[clap(
        help = "How to decode the response",
        long_help = "How to decode the response bytes

[options: string, bytes]",
        short = 'r',
        long = "return-type",
        aliases = &["return-type", "return_type"],
        default_value_t = ReturnType::default()
    )]
    #[getset(get = "pub(super)")]
    return_type: ReturnType,
}

#[derive(Args, Getters, Debug)]
pub(super) struct SetupCli {
    #[getset(get = "pub(super)")]
    shell: Shell,
}

impl Deref for SimulateCli {
    type Target = LimitOptions;

    fn deref(&self) -> &Self::Target {
        &self.limit_options
    }
}

use getset::CopyGetters;

use super::{byte_limit::ByteLimit, milliseconds::Milliseconds, query_count::QueryCount};

pub(crate) const DEFAULT_MAX_ON_CHAIN_RESPONSE_BYTES: ByteLimit = ByteLimit::new(256);
pub(crate) const DEFAULT_MAX_EXECUTION_TIME: Milliseconds = Milliseconds::new(10_000);
pub(crate) const DEFAULT_MAX_QUERY_DURATION: Milliseconds = Milliseconds::new(9_000);
pub(crate) const DEFAULT_MAX_QUERY_URL_LENGTH: ByteLimit = ByteLimit::new(2_048);
pub(crate) const DEFAULT_MAX_QUERY_RESPONSE_BYTES: ByteLimit = ByteLimit::new(2_097_152);

#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub(crate) struct SandboxLimits {
    #[getset(get_copy = "pub(crate)")]
    max_on_chain_response_bytes: ByteLimit,
    #[getset(get_copy = "pub(crate)")]
    max_execution_time: Milliseconds,
    #[getset(get_copy = "pub(crate)")]
    allowed_queries: QueryCount,
    #[getset(get_copy = "pub(crate)")]
    max_query_duration: Milliseconds,
    #[getset(get_copy = "pub(crate)")]
    max_query_url_length: ByteLimit,
    #[getset(get_copy = "pub(crate)")]
    max_query_response_bytes: ByteLimit,
}

impl SandboxLimits {
    pub(crate) fn new(
        max_on_chain_response_bytes: ByteLimit,
        max_execution_time: Milliseconds,
        allowed_queries: QueryCount,
        max_query_duration: Milliseconds,
        max_query_url_length: ByteLimit,
        max_query_response_bytes: ByteLimit,
    ) -> Self {
        Self {
            max_on_chain_response_bytes,
            max_execution_time,
            allowed_queries,
            max_query_duration,
            max_query_url_length,
            max_query_response_bytes,
        }
    }
}

impl Default for SandboxLimits {
    fn default() -> Self {
        Self {
            max_on_chain_response_bytes: DEFAULT_MAX_ON_CHAIN_RESPONSE_BYTES,
            max_execution_time: DEFAULT_MAX_EXECUTION_TIME,
            allowed_queries: QueryCount::default(),
            max_query_duration: DEFAULT_MAX_QUERY_DURATION,
            max_query_url_length: DEFAULT_MAX_QUERY_URL_LENGTH,
            max_query_response_bytes: DEFAULT_MAX_QUERY_RESPONSE_BYTES,
        }
    }
}

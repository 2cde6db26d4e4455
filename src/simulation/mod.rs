pub(crate) mod response_bytes;

use std::time::{Duration, Instant};

use getset::{CopyGetters, Getters};
use humantime::format_duration;
use log::{debug, info};

use crate::{config::sandbox_limits::SandboxLimits, fetcher::fetch_trait, logging::LOG_TARGET, sandbox::Sandbox};

use self::response_bytes::to_hexstring;

#[derive(Debug, Getters, CopyGetters)]
pub(crate) struct SimulationResult {
    #[getset(get = "pub(crate)")]
    response_bytes_hexstring: Option<String>,
    #[getset(get = "pub(crate)")]
    error_string: Option<String>,
    #[getset(get_copy = "pub(crate)")]
    elapsed: Duration,
}

impl SimulationResult {
    // response bytes or an error string, never both
    fn success(response_bytes: &[u8], elapsed: Duration) -> Self {
        Self {
            response_bytes_hexstring: Some(to_hexstring(response_bytes)),
            error_string: None,
            elapsed,
        }
    }

    fn failure(error: impl ToString, elapsed: Duration) -> Self {
        Self {
            response_bytes_hexstring: None,
            error_string: Some(error.to_string()),
            elapsed,
        }
    }
}

/// Run the trait lookup as the oracle would, holding its result against the execution time and on-chain size limits.
pub(crate) fn simulate<S: Sandbox + ?Sized>(
    sandbox: &S,
    args: &[String],
    limits: &SandboxLimits,
) -> SimulationResult {
    let now = Instant::now();
    let outcome = fetch_trait(sandbox, args);
    let elapsed = now.elapsed();
    debug!(
        target: LOG_TARGET,
        "Request routine finished in {}",
        format_duration(elapsed)
    );

    // HTTP level limits are the sandbox's business, only the overall run is judged here
    if elapsed > *limits.max_execution_time() {
        return SimulationResult::failure(
            format!(
                "Execution time of {} exceeded the limit of {}",
                format_duration(elapsed),
                format_duration(*limits.max_execution_time())
            ),
            elapsed,
        );
    }

    match outcome {
        Ok(response_bytes) if response_bytes.len() > *limits.max_on_chain_response_bytes() => {
            SimulationResult::failure(
                format!(
                    "Response of {} bytes exceeds the on-chain limit of {} bytes",
                    response_bytes.len(),
                    limits.max_on_chain_response_bytes()
                ),
                elapsed,
            )
        }
        Ok(response_bytes) => {
            info!(
                target: LOG_TARGET,
                "Request fulfilled with {} bytes",
                response_bytes.len()
            );
            SimulationResult::success(&response_bytes, elapsed)
        }
        Err(e) => SimulationResult::failure(e, elapsed),
    }
}

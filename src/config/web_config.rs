use getset::{CopyGetters, Getters};

use super::user_agent::UserAgent;

#[derive(Debug, Clone, Getters, CopyGetters)]
pub(crate) struct WebConfig {
    #[getset(get = "pub(crate)")]
    user_agent: UserAgent,
    #[getset(get_copy = "pub(crate)")]
    redirect: bool,
    #[getset(get_copy = "pub(crate)")]
    insecure: bool,
}

impl WebConfig {
    pub(crate) fn new(user_agent: UserAgent, redirect: bool, insecure: bool) -> Self {
        Self {
            user_agent,
            redirect,
            insecure,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::new(UserAgent::default(), true, false)
    }
}

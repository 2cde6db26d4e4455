use std::{fmt::Display, ops::Deref, str::FromStr, time::Duration};

use anyhow::Result;

use super::parse_non_zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Milliseconds(Duration);

impl Milliseconds {
    pub(crate) const fn new(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

impl FromStr for Milliseconds {
    type Err = anyhow::Error;

    fn from_str(millis: &str) -> Result<Self> {
        parse_non_zero(millis).map(Self::new)
    }
}

impl Deref for Milliseconds {
    type Target = Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Milliseconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        let budget = Milliseconds::new(9_000);
        let parsed: Milliseconds = budget.to_string().parse().expect("valid budget");
        assert_eq!(*parsed, Duration::from_secs(9));
    }

    #[test]
    fn rejects_zero() {
        assert!("0".parse::<Milliseconds>().is_err());
    }
}

use thiserror::Error;

/// Errors which can be raised while building a [`Swarm`](crate::algorithms::particles::Swarm).
///
/// Once a swarm has been constructed, none of its operations can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwarmError {
    /// A configuration parameter was outside of its allowed range.
    #[error("invalid configuration: `{parameter}` {reason}")]
    InvalidConfiguration {
        /// The name of the offending parameter
        parameter: &'static str,
        /// A description of what is wrong with it
        reason: String,
    },
}

impl SwarmError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

// src/config.rs
// =============================================================================
// Run configuration, decided once at startup.
//
// The only global input is the optional GitHub token. Everything that
// depends on it (worker count, delay between checks) is computed here and
// then passed around explicitly as a read-only value.
//
//                     workers   delay per check
//   with token           20        50 ms     (5000 API requests/hour)
//   without token         5       500 ms     (60 API requests/hour)
// =============================================================================

use std::time::Duration;

pub const AUTHED_WORKERS: usize = 20;
pub const ANONYMOUS_WORKERS: usize = 5;
pub const AUTHED_DELAY: Duration = Duration::from_millis(50);
pub const ANONYMOUS_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub token: Option<String>,
    pub workers: usize,
    pub delay: Duration,
    pub timeout: Duration,
    pub api_base: String,
}

impl RunConfig {
    /// Builds the configuration; an empty token counts as no token
    pub fn new(token: Option<String>, timeout: Duration, api_base: impl Into<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());

        let (workers, delay) = if token.is_some() {
            (AUTHED_WORKERS, AUTHED_DELAY)
        } else {
            (ANONYMOUS_WORKERS, ANONYMOUS_DELAY)
        };

        RunConfig {
            token,
            workers,
            delay,
            timeout,
            api_base: api_base.into(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_raises_concurrency() {
        let config = RunConfig::new(Some("ghp_abc".to_string()), Duration::from_secs(10), "x");
        assert!(config.has_token());
        assert_eq!(config.workers, 20);
        assert_eq!(config.delay, Duration::from_millis(50));
    }

    #[test]
    fn test_no_token_is_conservative() {
        let config = RunConfig::new(None, Duration::from_secs(10), "x");
        assert!(!config.has_token());
        assert_eq!(config.workers, 5);
        assert_eq!(config.delay, Duration::from_millis(500));
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let config = RunConfig::new(Some(String::new()), Duration::from_secs(10), "x");
        assert!(!config.has_token());
        assert_eq!(config.workers, 5);
    }
}

//! Engine configuration
//!
//! Defaults match the classic environment: a 5000-step horizon, a next queue of
//! five pieces and the panel observation layout. Every field can be overridden
//! from the environment:
//!
//! - `TETRIS_HORIZON`: step limit, or `none` / `-1` for no limit
//! - `TETRIS_NEXT_QUEUE`: next queue capacity (at least 1)
//! - `TETRIS_OBSERVATION`: `panels` or `flat`
//! - `TETRIS_SEED`: seed for the uniform piece source
//!
//! Unparsable values are ignored and the default is kept.

use crate::observation::ObservationMode;
use crate::types::{DEFAULT_HORIZON, DEFAULT_NEXT_QUEUE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum counted steps per episode; `None` runs until top-out
    pub horizon: Option<u32>,
    pub next_queue_size: usize,
    pub observation: ObservationMode,
    /// Seed for the default piece source; `None` picks one at random
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon: Some(DEFAULT_HORIZON),
            next_queue_size: DEFAULT_NEXT_QUEUE_SIZE,
            observation: ObservationMode::Panels,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment-like)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(horizon) = lookup("TETRIS_HORIZON").and_then(|s| parse_horizon(&s)) {
            config.horizon = horizon;
        }

        if let Some(size) = lookup("TETRIS_NEXT_QUEUE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            config.next_queue_size = size;
        }

        if let Some(mode) = lookup("TETRIS_OBSERVATION").and_then(|s| ObservationMode::from_str(&s))
        {
            config.observation = mode;
        }

        if let Some(seed) = lookup("TETRIS_SEED").and_then(|s| s.trim().parse::<u64>().ok()) {
            config.seed = Some(seed);
        }

        config
    }

    pub fn with_horizon(mut self, horizon: Option<u32>) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_next_queue_size(mut self, size: usize) -> Self {
        self.next_queue_size = size;
        self
    }

    pub fn with_observation(mut self, mode: ObservationMode) -> Self {
        self.observation = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Parse a horizon value
///
/// Returns `Some(None)` for "no limit" spellings, `Some(Some(n))` for a step
/// count and `None` if the value is not understood.
pub fn parse_horizon(s: &str) -> Option<Option<u32>> {
    let s = s.trim();
    match s.to_lowercase().as_str() {
        "none" | "inf" | "infinite" | "unlimited" | "-1" => Some(None),
        _ => s.parse::<u32>().ok().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.horizon, Some(5000));
        assert_eq!(config.next_queue_size, 5);
        assert_eq!(config.observation, ObservationMode::Panels);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("TETRIS_HORIZON", "none"),
            ("TETRIS_NEXT_QUEUE", "3"),
            ("TETRIS_OBSERVATION", "flat"),
            ("TETRIS_SEED", "42"),
        ]));
        assert_eq!(config.horizon, None);
        assert_eq!(config.next_queue_size, 3);
        assert_eq!(config.observation, ObservationMode::Flat);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("TETRIS_HORIZON", "soon"),
            ("TETRIS_NEXT_QUEUE", "0"),
            ("TETRIS_OBSERVATION", "hologram"),
            ("TETRIS_SEED", "-5"),
        ]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_horizon() {
        assert_eq!(parse_horizon("100"), Some(Some(100)));
        assert_eq!(parse_horizon(" -1 "), Some(None));
        assert_eq!(parse_horizon("Unlimited"), Some(None));
        assert_eq!(parse_horizon("ten"), None);
    }
}

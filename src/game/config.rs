use tracing::warn;

pub const PLAYER_COUNT: usize = 4;
pub const DEFAULT_TURN_LIMIT: usize = 1000;
pub const DEFAULT_DOUBLE_RUN_OVER_QUAD: usize = 4;

/// Rule knobs. Only the precedence between four-of-a-kind and a straight
/// bomb is adjustable; everything else is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    /// Minimum number of pairs a straight bomb needs to beat a four of a
    /// kind. Shorter straight bombs lose to it.
    pub double_run_over_quad: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            double_run_over_quad: DEFAULT_DOUBLE_RUN_OVER_QUAD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Turns played (passes included) before the game is abandoned.
    pub turn_limit: usize,
    /// Shuffle seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub rules: RuleSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            seed: None,
            rules: RuleSet::default(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let turn_limit = parse_env("TIENLEN_TURN_LIMIT").unwrap_or(DEFAULT_TURN_LIMIT);
        let seed = parse_env("TIENLEN_SEED");
        let double_run_over_quad =
            parse_env("TIENLEN_DOUBLE_RUN_OVER_QUAD").unwrap_or(DEFAULT_DOUBLE_RUN_OVER_QUAD);

        Self {
            turn_limit,
            seed,
            rules: RuleSet {
                double_run_over_quad,
            },
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_turn_limit(mut self, turn_limit: usize) -> Self {
        self.turn_limit = turn_limit;
        self
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!(key, value = %raw, "Ignoring unparsable environment value");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.turn_limit, 1000);
        assert_eq!(config.seed, None);
        assert_eq!(config.rules.double_run_over_quad, 4);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default().with_seed(9).with_turn_limit(10);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.turn_limit, 10);
    }
}

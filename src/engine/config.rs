use log::LevelFilter;

use crate::board::Player;

/// Search depth used when none is configured.
pub const DEFAULT_AI_DEPTH: u32 = 2;

/// Game setup read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side played by the engine, if any.
    pub ai_player: Option<Player>,
    /// Search depth in plies, at least 1.
    pub ai_depth: u32,
    /// Log verbosity for the console front end.
    pub log_level: LevelFilter,
}

impl GameConfig {
    /// Load configuration from `CHESS_AI`, `CHESS_AI_DEPTH` and `CHESS_LOG`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        GameConfig::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`GameConfig::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();
        GameConfig {
            ai_player: lookup("CHESS_AI").map_or(defaults.ai_player, |v| parse_ai_player(&v)),
            ai_depth: lookup("CHESS_AI_DEPTH")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .map_or(defaults.ai_depth, |depth| depth.max(1)),
            log_level: lookup("CHESS_LOG")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Filter directive for the log subscriber, e.g. `"warn"` or `"off"`.
    #[must_use]
    pub fn log_directive(&self) -> String {
        self.log_level.to_string().to_ascii_lowercase()
    }
}

/// `none`, or anything that is not a player name, disables the engine.
fn parse_ai_player(value: &str) -> Option<Player> {
    value.trim().parse().ok()
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ai_player: None,
            ai_depth: DEFAULT_AI_DEPTH,
            log_level: LevelFilter::Warn,
        }
    }
}

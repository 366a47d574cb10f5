//! Player and match configuration.
//!
//! Raw settings deserialize into [`PlayerConfig`] and [`MatchConfig`]; nothing is
//! defaulted on the way to [`SearchConfig`], so a bad or missing setting fails fast.

use crate::heuristic::Heuristic;
use derive_more::{Display, Error};
use parity_othello::{Board, BoardError, Mark, DEFAULT_EDGE_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "unknown heuristic id {} (expected 0, 1 or 2)", id)]
    UnknownHeuristic { id: i64 },

    #[display(fmt = "search depth must be a non-negative 32-bit integer, got {}", depth)]
    InvalidDepth { depth: i64 },

    #[display(fmt = "unrecognized player kind {:?}", kind)]
    UnknownPlayerKind { kind: String },

    #[display(fmt = "{} player needs the `{}` setting", kind, setting)]
    MissingSetting {
        kind: PlayerKind,
        setting: &'static str,
    },

    #[display(fmt = "human player {} has no move source", mark)]
    MissingInput { mark: Mark },

    #[display(fmt = "player for {} was handed to the {} seat", found, expected)]
    MarkMismatch { expected: Mark, found: Mark },

    #[display(fmt = "invalid board: {}", source)]
    Board { source: BoardError },

    #[display(fmt = "cannot read {}: {}", path, source)]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[display(fmt = "cannot parse match config: {}", source)]
    Parse { source: toml::de::Error },
}

impl From<BoardError> for ConfigError {
    fn from(source: BoardError) -> Self {
        ConfigError::Board { source }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(source: toml::de::Error) -> Self {
        ConfigError::Parse { source }
    }
}

/// The two ways a seat can be filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    AlphaBeta,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::AlphaBeta => f.write_str("alphabeta"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "alphabeta" => Ok(PlayerKind::AlphaBeta),
            _ => Err(ConfigError::UnknownPlayerKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Validated settings for the search engine. Fixed once a player is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub pruning: bool,
    /// Plies to search below the root. Zero evaluates the root statically.
    pub max_depth: u32,
}

impl SearchConfig {
    /// Validate raw settings: the heuristic id must be 0, 1 or 2 and the depth non-negative.
    pub fn new(heuristic_id: i64, pruning: bool, max_depth: i64) -> Result<Self, ConfigError> {
        let heuristic = Heuristic::try_from(heuristic_id)?;
        let max_depth = u32::try_from(max_depth)
            .map_err(|_| ConfigError::InvalidDepth { depth: max_depth })?;

        Ok(Self {
            heuristic,
            pruning,
            max_depth,
        })
    }
}

/// One seat as written in a config file or on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    pub kind: String,
    pub heuristic: Option<i64>,
    pub pruning: Option<bool>,
    pub max_depth: Option<i64>,
}

impl PlayerConfig {
    pub fn human() -> Self {
        Self {
            kind: PlayerKind::Human.to_string(),
            ..Self::default()
        }
    }

    pub fn alpha_beta(heuristic: i64, pruning: bool, max_depth: i64) -> Self {
        Self {
            kind: PlayerKind::AlphaBeta.to_string(),
            heuristic: Some(heuristic),
            pruning: Some(pruning),
            max_depth: Some(max_depth),
        }
    }

    pub fn kind(&self) -> Result<PlayerKind, ConfigError> {
        self.kind.parse()
    }

    /// Build the engine settings. Every search setting is required.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let kind = self.kind()?;
        let missing = |setting| ConfigError::MissingSetting { kind, setting };

        SearchConfig::new(
            self.heuristic.ok_or_else(|| missing("heuristic"))?,
            self.pruning.ok_or_else(|| missing("pruning"))?,
            self.max_depth.ok_or_else(|| missing("max_depth"))?,
        )
    }

    /// Check the settings this kind of player actually uses.
    pub fn validate(&self) -> Result<PlayerKind, ConfigError> {
        let kind = self.kind()?;
        if kind == PlayerKind::AlphaBeta {
            self.search_config()?;
        }
        Ok(kind)
    }
}

fn default_edge_length() -> usize {
    DEFAULT_EDGE_LENGTH
}

/// A full match: board size and both seats.
///
/// ```toml
/// cols = 4
/// rows = 4
///
/// [x]
/// kind = "alphabeta"
/// heuristic = 2
/// pruning = true
/// max_depth = 6
///
/// [o]
/// kind = "human"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchConfig {
    #[serde(default = "default_edge_length")]
    pub cols: usize,
    #[serde(default = "default_edge_length")]
    pub rows: usize,
    pub x: PlayerConfig,
    pub o: PlayerConfig,
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn player(&self, mark: Mark) -> &PlayerConfig {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Fail on anything that would stop the match from starting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::new(self.cols, self.rows)?;
        self.x.validate()?;
        self.o.validate()?;
        Ok(())
    }

    /// Build the starting board.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.cols, self.rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_config_validation() {
        assert_eq!(
            SearchConfig::new(2, true, 6).unwrap(),
            SearchConfig {
                heuristic: Heuristic::Positional,
                pruning: true,
                max_depth: 6
            }
        );
        assert_eq!(SearchConfig::new(0, false, 0).unwrap().max_depth, 0);
        assert!(matches!(
            SearchConfig::new(7, true, 4),
            Err(ConfigError::UnknownHeuristic { id: 7 })
        ));
        assert!(matches!(
            SearchConfig::new(1, true, -2),
            Err(ConfigError::InvalidDepth { depth: -2 })
        ));
    }

    #[test]
    fn player_kinds() {
        assert_eq!("Human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!(
            "alphabeta".parse::<PlayerKind>().unwrap(),
            PlayerKind::AlphaBeta
        );
        assert!(matches!(
            "minimax".parse::<PlayerKind>(),
            Err(ConfigError::UnknownPlayerKind { .. })
        ));
    }

    #[test]
    fn alpha_beta_requires_every_setting() {
        let mut config = PlayerConfig::alpha_beta(1, true, 4);
        assert_eq!(config.validate().unwrap(), PlayerKind::AlphaBeta);

        config.pruning = None;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingSetting {
                kind: PlayerKind::AlphaBeta,
                setting: "pruning"
            })
        ));
    }

    #[test]
    fn human_ignores_search_settings() {
        let config = PlayerConfig {
            heuristic: Some(99),
            ..PlayerConfig::human()
        };
        assert_eq!(config.validate().unwrap(), PlayerKind::Human);
    }

    #[test]
    fn match_from_toml() {
        let config = MatchConfig::from_toml_str(
            r#"
            cols = 6

            [x]
            kind = "alphabeta"
            heuristic = 2
            pruning = true
            max_depth = 3

            [o]
            kind = "human"
            "#,
        )
        .unwrap();

        assert_eq!(config.cols, 6);
        assert_eq!(config.rows, 4);
        assert_eq!(config.player(Mark::X), &PlayerConfig::alpha_beta(2, true, 3));
        assert_eq!(config.player(Mark::O).kind().unwrap(), PlayerKind::Human);
        assert_eq!(config.board().unwrap(), Board::new(6, 4).unwrap());
    }

    #[test]
    fn match_toml_errors() {
        let bad_heuristic = r#"
            [x]
            kind = "alphabeta"
            heuristic = 5
            pruning = false
            max_depth = 2
            [o]
            kind = "human"
        "#;
        assert!(matches!(
            MatchConfig::from_toml_str(bad_heuristic),
            Err(ConfigError::UnknownHeuristic { id: 5 })
        ));

        let bad_board = r#"
            cols = 1
            [x]
            kind = "human"
            [o]
            kind = "human"
        "#;
        assert!(matches!(
            MatchConfig::from_toml_str(bad_board),
            Err(ConfigError::Board { .. })
        ));

        let unknown_field = r#"
            [x]
            kind = "human"
            colour = "black"
            [o]
            kind = "human"
        "#;
        assert!(matches!(
            MatchConfig::from_toml_str(unknown_field),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            MatchConfig::load("/nonexistent/parity/match.toml"),
            Err(ConfigError::Read { .. })
        ));
    }
}

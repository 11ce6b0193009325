//! Search configuration.

use nqueens_engine::SearchSeed;
use serde::{Deserialize, Serialize};

/// Parameters fixed for the whole run.
///
/// Missing fields fall back to [`SearchConfig::default`] when deserializing, so
/// a JSON file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of queens, which is also the genome length.
    pub queens: usize,
    /// Board width N; genes range over `[0, N²)`.
    pub board_size: usize,
    /// Number of individuals, constant across generations.
    pub population_size: usize,
    /// Generation budget.
    pub max_generations: usize,
    /// Seed for the search RNG. `None` lets the caller pick one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SearchSeed>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            queens: 20,
            board_size: 20,
            population_size: 2000,
            max_generations: 3000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("queen count must be at least 1")]
    ZeroQueens,
    #[display("board size must be at least 1")]
    ZeroBoardSize,
    #[display("population size must be at least 1")]
    ZeroPopulation,
    #[display("{queens} queens can never be placed without conflicts on a {board_size}x{board_size} board")]
    TooManyQueens { queens: usize, board_size: usize },
    #[display("population must hold {population_size} solutions of {queens} genes each")]
    PopulationShape {
        population_size: usize,
        queens: usize,
    },
}

impl SearchConfig {
    /// Convenience constructor for the usual `queens == board_size` setup.
    #[must_use]
    pub fn square(size: usize, population_size: usize, max_generations: usize) -> Self {
        Self {
            queens: size,
            board_size: size,
            population_size,
            max_generations,
            seed: None,
        }
    }

    /// Number of board cells, the exclusive upper bound of every gene.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queens == 0 {
            return Err(ConfigError::ZeroQueens);
        }
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.queens > self.board_size {
            return Err(ConfigError::TooManyQueens {
                queens: self.queens,
                board_size: self.board_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.cell_count(), 400);
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let base = SearchConfig::square(8, 100, 10);
        assert_eq!(base.validate(), Ok(()));

        let cases = [
            (
                SearchConfig {
                    queens: 0,
                    ..base.clone()
                },
                ConfigError::ZeroQueens,
            ),
            (
                SearchConfig {
                    board_size: 0,
                    ..base.clone()
                },
                ConfigError::ZeroBoardSize,
            ),
            (
                SearchConfig {
                    population_size: 0,
                    ..base.clone()
                },
                ConfigError::ZeroPopulation,
            ),
            (
                SearchConfig {
                    queens: 9,
                    ..base.clone()
                },
                ConfigError::TooManyQueens {
                    queens: 9,
                    board_size: 8,
                },
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_fewer_queens_than_width_is_allowed() {
        let config = SearchConfig {
            queens: 3,
            ..SearchConfig::square(6, 10, 10)
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"queens": 6, "board_size": 6, "seed": "000000000000002a"}"#)
                .unwrap();
        assert_eq!(config.queens, 6);
        assert_eq!(config.board_size, 6);
        assert_eq!(config.population_size, 2000);
        assert_eq!(config.max_generations, 3000);
        assert_eq!(config.seed, Some(SearchSeed::new(42)));
    }

    #[test]
    fn test_serialize_skips_missing_seed() {
        let json = serde_json::to_string(&SearchConfig::square(4, 10, 5)).unwrap();
        assert!(!json.contains("seed"));
    }
}

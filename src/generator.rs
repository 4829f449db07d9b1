//! Random maze generation.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::Coords;
use crate::error::{Error, Result};
use crate::maze::MazeSpec;

/// Bounds for randomly generated mazes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Smallest allowed row count
    #[serde(default = "default_min_dim")]
    pub min_rows: i32,
    /// Largest allowed row count
    #[serde(default = "default_max_dim")]
    pub max_rows: i32,
    /// Smallest allowed column count
    #[serde(default = "default_min_dim")]
    pub min_cols: i32,
    /// Largest allowed column count
    #[serde(default = "default_max_dim")]
    pub max_cols: i32,
    /// Share of cells turned into obstacles, 0 to 100
    #[serde(default = "default_obstacle_percent")]
    pub obstacle_percent: u32,
}

fn default_min_dim() -> i32 {
    50
}

fn default_max_dim() -> i32 {
    500
}

fn default_obstacle_percent() -> u32 {
    25
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_rows: default_min_dim(),
            max_rows: default_max_dim(),
            min_cols: default_min_dim(),
            max_cols: default_max_dim(),
            obstacle_percent: default_obstacle_percent(),
        }
    }
}

impl GeneratorConfig {
    /// Check ranges before generating
    pub fn validate(&self) -> Result<()> {
        if self.min_rows < 2 || self.min_cols < 2 {
            return Err(Error::InvalidGeneratorConfig(format!(
                "minimum dimensions {}x{} below the 2x2 floor",
                self.min_rows, self.min_cols
            )));
        }
        if self.min_rows > self.max_rows {
            return Err(Error::InvalidGeneratorConfig(format!(
                "min_rows {} exceeds max_rows {}",
                self.min_rows, self.max_rows
            )));
        }
        if self.min_cols > self.max_cols {
            return Err(Error::InvalidGeneratorConfig(format!(
                "min_cols {} exceeds max_cols {}",
                self.min_cols, self.max_cols
            )));
        }
        if self.obstacle_percent > 100 {
            return Err(Error::InvalidGeneratorConfig(format!(
                "obstacle_percent {} exceeds 100",
                self.obstacle_percent
            )));
        }
        Ok(())
    }
}

/// Random maze builder over a validated config
#[derive(Debug)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        if config.obstacle_percent > 50 {
            warn!(
                "[Generator] obstacle_percent {} frequently walls the target off",
                config.obstacle_percent
            );
        }
        Ok(Self { config })
    }

    /// Generate one maze with thread-local randomness
    pub fn generate(&self) -> MazeSpec {
        self.generate_with(&mut rand::rng())
    }

    /// Generate one maze from the given source of randomness.
    ///
    /// Dimensions are drawn from the configured ranges, the target is
    /// re-rolled until it differs from the source, and obstacle positions
    /// are re-rolled past duplicates and the two role cells.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> MazeSpec {
        let c = &self.config;
        let n_rows = rng.random_range(c.min_rows..=c.max_rows);
        let n_columns = rng.random_range(c.min_cols..=c.max_cols);

        let source = random_cell(rng, n_rows, n_columns);
        let mut target = random_cell(rng, n_rows, n_columns);
        while target == source {
            target = random_cell(rng, n_rows, n_columns);
        }

        let cell_count = n_rows as usize * n_columns as usize;
        // The two role cells always stay open, whatever the density.
        let wanted = (cell_count * c.obstacle_percent as usize / 100).min(cell_count - 2);

        let mut picked = HashSet::with_capacity(wanted);
        while picked.len() < wanted {
            let cell = random_cell(rng, n_rows, n_columns);
            if cell == source || cell == target {
                continue;
            }
            picked.insert(cell);
        }
        // Set order varies between runs even under a seeded rng; sorted
        // output keeps seeded generation reproducible.
        let mut obstacles: Vec<Coords> = picked.into_iter().collect();
        obstacles.sort();

        debug!(
            "[Generator] {}x{} maze, source {}, target {}, {} obstacles",
            n_rows,
            n_columns,
            source,
            target,
            obstacles.len()
        );

        MazeSpec {
            n_rows,
            n_columns,
            source,
            target,
            obstacles,
        }
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, n_rows: i32, n_columns: i32) -> Coords {
    Coords::new(rng.random_range(0..n_rows), rng.random_range(0..n_columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            min_rows: 4,
            max_rows: 8,
            min_cols: 4,
            max_cols: 8,
            obstacle_percent: 25,
        }
    }

    #[test]
    fn test_generated_mazes_validate() {
        let generator = MazeGenerator::new(small_config()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let spec = generator.generate_with(&mut rng);
            assert!((4..=8).contains(&spec.n_rows));
            assert!((4..=8).contains(&spec.n_columns));
            spec.validate().unwrap();
        }
    }

    #[test]
    fn test_roles_stay_distinct_and_open() {
        let generator = MazeGenerator::new(small_config()).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let spec = generator.generate_with(&mut rng);
            assert_ne!(spec.source, spec.target);
            assert!(!spec.obstacles.contains(&spec.source));
            assert!(!spec.obstacles.contains(&spec.target));
        }
    }

    #[test]
    fn test_obstacle_count_follows_density() {
        let generator = MazeGenerator::new(small_config()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let spec = generator.generate_with(&mut rng);
        let expected = spec.n_rows as usize * spec.n_columns as usize * 25 / 100;
        assert_eq!(spec.obstacles.len(), expected);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = MazeGenerator::new(small_config()).unwrap();
        let a = generator.generate_with(&mut StdRng::seed_from_u64(99));
        let b = generator.generate_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a.n_rows, b.n_rows);
        assert_eq!(a.n_columns, b.n_columns);
        assert_eq!(a.source, b.source);
        assert_eq!(a.target, b.target);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = GeneratorConfig {
            min_rows: 9,
            max_rows: 4,
            ..small_config()
        };
        assert!(matches!(
            MazeGenerator::new(config),
            Err(Error::InvalidGeneratorConfig(_))
        ));
    }

    #[test]
    fn test_full_density_leaves_role_cells_open() {
        let config = GeneratorConfig {
            min_rows: 2,
            max_rows: 2,
            min_cols: 2,
            max_cols: 2,
            obstacle_percent: 100,
        };
        let generator = MazeGenerator::new(config).unwrap();
        let spec = generator.generate_with(&mut StdRng::seed_from_u64(5));
        assert_eq!(spec.obstacles.len(), 2);
    }
}

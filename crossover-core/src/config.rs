//! Configuration for one assignment run

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::assign::{assign_teams, AssignError, Assignment};

/// Everything needed to produce one balanced assignment.
#[derive(Clone, Debug)]
pub struct DesignConfig {
    /// Total number of teams; must be a multiple of the condition count
    pub num_teams: usize,
    /// Ordered condition labels; their order fixes sequence positions
    pub conditions: Vec<String>,
    /// Random seed for reproducibility (None = fresh entropy)
    pub seed: Option<u64>,
}

impl DesignConfig {
    pub fn new(num_teams: usize, conditions: Vec<String>) -> Self {
        Self {
            num_teams,
            conditions,
            seed: None,
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// RNG for this run: seeded when a seed was configured, fresh entropy
    /// otherwise. Every call returns an independent instance, so concurrent
    /// runs never share random state.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Run the assignment with this configuration.
    pub fn run(&self) -> Result<Assignment, AssignError> {
        let mut rng = self.rng();
        assign_teams(self.num_teams, &self.conditions, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> DesignConfig {
        DesignConfig::new(
            6,
            vec!["Control".to_string(), "HPM".to_string(), "AIPM".to_string()],
        )
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let config = base_config().with_seed(0);
        assert_eq!(config.run().unwrap(), config.run().unwrap());
    }

    #[test]
    fn test_unseeded_run_is_still_balanced() {
        let assignment = base_config().run().unwrap();
        assert_eq!(assignment.len(), 6);
        for (_, seq) in assignment.iter() {
            assert_eq!(seq.len(), 3);
        }
    }

    #[test]
    fn test_run_surfaces_invalid_configuration() {
        let mut config = base_config();
        config.num_teams = 7;
        assert!(matches!(
            config.run(),
            Err(AssignError::InvalidConfiguration {
                num_teams: 7,
                num_conditions: 3
            })
        ));
    }
}

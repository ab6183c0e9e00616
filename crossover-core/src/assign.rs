//! Team assignment - maps teams onto Latin square rows
//!
//! Teams are partitioned into randomized blocks of size k (one block per
//! full pass over the square) and each team in a block takes one row of
//! the square as its ordered condition sequence. The shuffle only decides
//! which physical team occupies which row slot, never which conditions
//! appear in which position, so balance is independent of the RNG.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::square::LatinSquare;

/// Assignment failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AssignError {
    /// Balance is impossible: the team count does not divide evenly
    /// across the square rows.
    #[error("Number of teams ({num_teams}) must be a multiple of the number of conditions ({num_conditions})")]
    InvalidConfiguration {
        num_teams: usize,
        num_conditions: usize,
    },
}

/// A complete mapping from team display name ("Team N", 1-based) to its
/// ordered condition sequence.
///
/// Built fresh by [`assign_teams`] and never mutated afterward. Iteration
/// order carries no meaning; use [`sorted_entries`](Self::sorted_entries)
/// when rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    teams: FxHashMap<String, Vec<String>>,
}

impl Assignment {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// The condition sequence for a team, if it exists.
    pub fn get(&self, team: &str) -> Option<&[String]> {
        self.teams.get(team).map(Vec::as_slice)
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.teams.iter().map(|(name, seq)| (name.as_str(), seq.as_slice()))
    }

    /// All entries ordered by team number, for stable rendering.
    pub fn sorted_entries(&self) -> Vec<(&str, &[String])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(name, _)| team_number(name));
        entries
    }
}

/// Numeric suffix of a "Team N" display name; unparseable names sort last.
fn team_number(name: &str) -> usize {
    name.rsplit(' ')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(usize::MAX)
}

/// Assign teams to condition sequences using a Latin-square design.
///
/// Builds the cyclic square of order k = `conditions.len()`, shuffles the
/// team indices `[0, num_teams)` with the caller-supplied RNG, and maps
/// each block of k shuffled teams onto the k square rows. With
/// `num_teams = m·k`, every condition label lands in every sequence
/// position exactly m times across the result.
///
/// Display names derive from the original (pre-shuffle) index, so external
/// identifiers stay stable even though the row assignment is randomized.
/// Duplicate condition labels are treated as distinct slots by index.
///
/// # Arguments
/// * `num_teams` - Total number of teams; must be a multiple of the condition count
/// * `conditions` - Ordered condition labels; their order fixes the column indices
/// * `rng` - Random number generator (seed it for reproducible output)
///
/// # Returns
/// Mapping from "Team N" to its ordered condition sequence, or
/// [`AssignError::InvalidConfiguration`] when the team count does not
/// divide evenly. All-or-nothing; no partial assignment is ever returned.
pub fn assign_teams<R: Rng>(
    num_teams: usize,
    conditions: &[String],
    rng: &mut R,
) -> Result<Assignment, AssignError> {
    let k = conditions.len();
    if k == 0 || num_teams % k != 0 {
        return Err(AssignError::InvalidConfiguration {
            num_teams,
            num_conditions: k,
        });
    }

    let square = LatinSquare::cyclic(k);
    let teams_per_block = num_teams / k;

    let mut team_indices: Vec<usize> = (0..num_teams).collect();
    team_indices.shuffle(rng);

    let mut teams = FxHashMap::default();
    for block in 0..teams_per_block {
        for (row_idx, row) in square.rows().enumerate() {
            let team_no = team_indices[block * k + row_idx];
            let sequence: Vec<String> =
                row.iter().map(|&col| conditions[col].clone()).collect();
            teams.insert(format!("Team {}", team_no + 1), sequence);
        }
    }

    Ok(Assignment { teams })
}

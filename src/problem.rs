//! JSON problem files and their solutions.
//!
//! ```json
//! { "kind": "network_delay", "times": [[2,1,1],[2,3,1],[3,4,1]], "n": 4, "k": 2 }
//! { "kind": "closest_points", "points": [[1,3],[-2,2]], "k": 1 }
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::algorithm::network_delay::{DelayOutcome, NetworkDelay};
use crate::data_structures::HeapifyStrategy;
use crate::selection::{closest_k_points, Point};
use crate::{Error, Result};

/// Network delay problem: directed `[source, target, time]` edges, node count and source node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDelayProblem {
    pub times: Vec<[u32; 3]>,
    pub n: usize,
    pub k: u32,
    #[serde(default)]
    pub heapify: HeapifyStrategy,
}

/// K closest points problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosestPointsProblem {
    pub points: Vec<Point>,
    pub k: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    NetworkDelay(NetworkDelayProblem),
    ClosestPoints(ClosestPointsProblem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Solution {
    NetworkDelay {
        /// Delay, or -1 when not every node is reached
        answer: i64,
        outcome: DelayOutcome<u32>,
    },
    ClosestPoints {
        answer: Vec<Point>,
    },
}

impl NetworkDelayProblem {
    /// Checks the node count and source label against the 1..=n labelling
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::InvalidProblem("n must be at least 1".to_string()));
        }
        if self.k == 0 || self.k as usize > self.n {
            return Err(Error::InvalidProblem(format!(
                "source {} is outside 1..={}",
                self.k, self.n
            )));
        }
        Ok(())
    }
}

impl Problem {
    /// Parses a problem from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn solve(&self) -> Result<Solution> {
        match self {
            Problem::NetworkDelay(p) => {
                p.validate()?;
                info!(
                    "Network delay: {} edges, {} nodes, source {}",
                    p.times.len(),
                    p.n,
                    p.k
                );
                let outcome = NetworkDelay::new()
                    .with_heapify_strategy(p.heapify)
                    .solve(p.times.iter().map(|t| (t[0], t[1], t[2])), p.n, p.k)?;
                Ok(Solution::NetworkDelay {
                    answer: outcome.sentinel(),
                    outcome,
                })
            }
            Problem::ClosestPoints(p) => {
                info!("Closest points: {} points, k = {}", p.points.len(), p.k);
                Ok(Solution::ClosestPoints {
                    answer: closest_k_points(&p.points, p.k)?,
                })
            }
        }
    }
}

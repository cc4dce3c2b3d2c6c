//! Per-generation fitness history.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::agent::Agent;

/// Summary of one finished generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation number, starting at 0.
    pub generation: u32,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Mean fitness over the whole population.
    pub mean_fitness: f64,
    /// Agents still alive when turnover started.
    pub survivors: usize,
}

impl GenerationRecord {
    /// Summarizes `agents` as generation `generation`.
    pub fn from_agents(generation: u32, agents: &[Agent]) -> Self {
        let best_fitness = agents
            .iter()
            .map(|a| a.fitness)
            .fold(0.0_f64, f64::max);
        let mean_fitness = if agents.is_empty() {
            0.0
        } else {
            agents.iter().map(|a| a.fitness).sum::<f64>() / agents.len() as f64
        };
        Self {
            generation,
            best_fitness,
            mean_fitness,
            survivors: agents.iter().filter(|a| a.is_alive()).count(),
        }
    }
}

/// Rolling history of finished generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Recent generations, oldest first.
    pub records: VecDeque<GenerationRecord>,
    /// Maximum number of generations to keep
    pub max_history: usize,
}

impl Default for GenerationStats {
    fn default() -> Self {
        Self::new(500)
    }
}

impl GenerationStats {
    /// Creates an empty history holding at most `max_history` records.
    pub fn new(max_history: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Appends a record, dropping the oldest past capacity.
    pub fn record(&mut self, record: GenerationRecord) {
        self.records.push_back(record);
        while self.records.len() > self.max_history {
            self.records.pop_front();
        }
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.back()
    }

    /// Best fitness ever recorded.
    pub fn best_ever(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.best_fitness)
            .fold(0.0, f64::max)
    }
}

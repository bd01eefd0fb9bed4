use serde::{Deserialize, Serialize};

use crate::raising::WeightSpread;

/// Engine settings, overridable from the `StockConfig` table of the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockConfig {
    /// share of a herbage class one grazing sub-step may remove
    pub max_consumption: f64,
    pub epsilon: f64,
    /// shortest grazing sub-step, fraction of a day
    pub min_step: f64,
    pub max_rdp_iterations: usize,
    pub weight_cv: f64,
    pub weight_steps: usize,
    pub seed: u64,
    pub reference_genotype: String,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            max_consumption: 0.20,
            epsilon: 1.0e-6,
            min_step: 0.01,
            max_rdp_iterations: 2,
            weight_cv: 0.10,
            weight_steps: 20,
            seed: 42,
            reference_genotype: String::from("medium merino"),
        }
    }
}

impl StockConfig {
    pub fn weight_spread(&self) -> WeightSpread {
        WeightSpread {
            cv: self.weight_cv,
            steps: self.weight_steps,
        }
    }
}

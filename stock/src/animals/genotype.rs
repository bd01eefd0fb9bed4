use serde::{Deserialize, Serialize};

use crate::animals::{AnimalKind, ReproType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenotypeKey(pub usize);

/// Breed parameter set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genotype {
    pub id: GenotypeKey,
    pub name: String,
    pub animal: AnimalKind,
    /// kg, mature weight of a female in average condition
    pub srw: f64,
    pub birth_weight: f64,
    /// growth rate coefficient, growth rate exponent, minimum condition ratio
    pub growth: [f64; 3],
    pub male_srw_scalar: f64,
    pub castrate_srw_scalar: f64,
    /// kg DM per kg SRW per day
    pub intake_coef: f64,
    /// per t/ha of herbage
    pub grazing_coef: f64,
    /// MJ per kg^0.75 per day
    pub maintenance_coef: f64,
    /// MJ per kg of weight gain
    pub gain_energy: f64,
    /// kg RDP per MJ of metabolisable energy
    pub rdp_requirement: f64,
    /// kg clean fleece per head per day at maintenance
    pub wool_growth: f64,
    /// daily death rate of adults
    pub mortality: f64,
    pub young_mortality: f64,
    pub puberty_days: f64,
    pub gestation_days: u32,
    pub lactation_days: u32,
    pub conception_rate: f64,
    pub litter_size: f64,
}

/// Score 3 is average condition, each unit is 15% of normal weight.
pub fn condition_from_score(score: f64) -> f64 {
    1.0 + (score - 3.0) * 0.15
}

impl Genotype {
    pub fn srw_for(&self, repro: ReproType) -> f64 {
        match repro {
            ReproType::Male => self.srw * self.male_srw_scalar,
            ReproType::Castrated => self.srw * self.castrate_srw_scalar,
            _ => self.srw,
        }
    }

    /// Normal weight for age of a well fed animal.
    pub fn growth_curve(&self, age_days: f64, repro: ReproType) -> f64 {
        self.max_normal_weight(self.srw_for(repro), age_days)
    }

    pub fn max_normal_weight(&self, srw: f64, age_days: f64) -> f64 {
        let rate = self.growth[0] / srw.powf(self.growth[1]);
        srw - (srw - self.birth_weight) * (-rate * age_days).exp()
    }

    pub fn weight_range_for_condition(
        &self,
        repro: ReproType,
        age_days: f64,
        condition: f64,
    ) -> (f64, f64) {
        let high = condition * self.growth_curve(age_days, repro);
        let low = if condition >= 1.0 {
            high
        } else {
            high * self.growth[2] / (1.0 - condition * (1.0 - self.growth[2]))
        };
        (low, high)
    }

    pub fn has_wool(&self) -> bool {
        self.animal == AnimalKind::Sheep
    }
}
